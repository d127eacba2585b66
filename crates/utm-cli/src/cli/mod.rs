//! CLI for the UTM link builder.

mod commands;
mod render;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use utm_core::config::{self, UtmConfig};
use utm_core::history::JsonFileHistory;
use utm_core::{TrackingField, TrackingFieldSet};

use commands::{run_clear, run_export, run_generate, run_history, run_normalize};

/// Top-level CLI for the UTM link builder.
#[derive(Debug, Parser)]
#[command(name = "utm")]
#[command(about = "UTM: build tracking links and keep a history of them", long_about = None)]
pub struct Cli {
    /// Print links without color.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Tracking values; each is normalized to a slug before use.
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    /// utm_source (required).
    #[arg(long, short = 's', default_value = "")]
    pub source: String,
    /// utm_medium (required).
    #[arg(long, short = 'm', default_value = "")]
    pub medium: String,
    /// utm_id.
    #[arg(long, default_value = "")]
    pub id: String,
    /// utm_campaign.
    #[arg(long, short = 'c', default_value = "")]
    pub campaign: String,
    /// utm_term.
    #[arg(long, short = 't', default_value = "")]
    pub term: String,
    /// utm_content.
    #[arg(long, default_value = "")]
    pub content: String,
    /// pmkt.
    #[arg(long, default_value = "")]
    pub pmkt: String,
}

impl FieldArgs {
    pub fn to_field_set(&self) -> TrackingFieldSet {
        TrackingFieldSet::new()
            .with(TrackingField::Id, self.id.as_str())
            .with(TrackingField::Source, self.source.as_str())
            .with(TrackingField::Medium, self.medium.as_str())
            .with(TrackingField::Campaign, self.campaign.as_str())
            .with(TrackingField::Term, self.term.as_str())
            .with(TrackingField::Content, self.content.as_str())
            .with(TrackingField::Pmkt, self.pmkt.as_str())
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build tracking links for up to six base URLs and save them to history.
    Generate {
        /// Base URL; repeat for several (a missing scheme becomes https://).
        #[arg(long = "url", short = 'u', value_name = "URL")]
        urls: Vec<String>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Print the slug form of a value.
    Normalize {
        /// Text to normalize.
        text: String,
    },

    /// List saved links, newest first.
    History,

    /// Delete every saved link.
    Clear {
        /// Do not ask for confirmation.
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export history to utm_<YYYYMMDD>.csv.
    Export {
        /// Output directory (default: config `export_dir` or current directory).
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

impl CliCommand {
    /// Returns `Ok(false)` when the command failed after already reporting why.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let color = cfg.color && !cli.no_color;

        match cli.command {
            CliCommand::Generate { urls, fields } => {
                return run_generate(&open_history(&cfg)?, urls, fields.to_field_set(), color);
            }
            CliCommand::Normalize { text } => run_normalize(&text),
            CliCommand::History => {
                run_history(&open_history(&cfg)?, color, &mut std::io::stdout().lock())?
            }
            CliCommand::Clear { yes } => run_clear(&open_history(&cfg)?, yes)?,
            CliCommand::Export { out_dir } => {
                let dir = match out_dir {
                    Some(d) => d,
                    None => cfg.resolved_export_dir()?,
                };
                run_export(&open_history(&cfg)?, &dir)?
            }
        }

        Ok(true)
    }
}

fn open_history(cfg: &UtmConfig) -> Result<JsonFileHistory> {
    let history = JsonFileHistory::new(cfg.resolved_history_path()?);
    tracing::debug!(path = %history.path().display(), "using history file");
    Ok(history)
}

#[cfg(test)]
mod tests;
