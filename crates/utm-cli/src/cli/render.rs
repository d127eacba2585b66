//! Terminal output: colored link previews and notices.

use clap::builder::styling::{Color, RgbColor, Style};
use utm_core::notify::{Notice, Notifier};
use utm_core::preview::{segments, PreviewSegment};
use utm_core::TrackingField;

const BASE_COLOR: RgbColor = RgbColor(0x0a, 0x84, 0xff);

fn rgb(c: RgbColor) -> Style {
    Style::new().fg_color(Some(Color::Rgb(c))).bold()
}

fn field_style(field: Option<TrackingField>) -> Style {
    let color = match field {
        Some(TrackingField::Source) => RgbColor(0xff, 0x3b, 0x30),
        Some(TrackingField::Medium) => RgbColor(0xff, 0x95, 0x00),
        Some(TrackingField::Campaign) => RgbColor(0x34, 0xc7, 0x59),
        Some(TrackingField::Term) => RgbColor(0xaf, 0x52, 0xde),
        Some(TrackingField::Content) => RgbColor(0x5a, 0xc8, 0xfa),
        Some(TrackingField::Id) => RgbColor(0xff, 0xd6, 0x0a),
        Some(TrackingField::Pmkt) => RgbColor(0xff, 0x2d, 0x55),
        None => return Style::new().bold(),
    };
    rgb(color)
}

fn paint(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

/// Renders `link` for display; with `color` off the link is returned as is.
pub fn preview(link: &str, color: bool) -> String {
    if !color {
        return link.to_string();
    }
    segments(link)
        .iter()
        .map(|seg| match seg {
            PreviewSegment::Base(text) => paint(rgb(BASE_COLOR), text),
            PreviewSegment::Separator(c) => c.to_string(),
            PreviewSegment::Param { field, text } => paint(field_style(*field), text),
            PreviewSegment::Plain(text) => text.clone(),
        })
        .collect()
}

/// Message shown to the user for a notice.
pub fn notice_message(notice: &Notice) -> String {
    match notice {
        Notice::Generated { composed, total } if composed == total => {
            format!("Generated {composed} link(s).")
        }
        Notice::Generated { composed, total } => {
            format!("Generated {composed} of {total} link(s); see the marked entries.")
        }
        Notice::Rejected(err) => {
            format!("Error: {err}. Fill in at least 1 URL + source + medium.")
        }
        Notice::Exported { path, rows } => {
            format!("CSV saved: {} ({rows} row(s))", path.display())
        }
        Notice::NothingToExport => "Nothing to export.".to_string(),
        Notice::HistoryCleared => "History cleared.".to_string(),
    }
}

/// Prints notices to stderr so stdout carries only links.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        eprintln!("{}", notice_message(notice));
    }
}
