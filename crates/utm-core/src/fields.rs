//! Tracking fields and the per-request field set.

use std::collections::BTreeMap;
use std::fmt;

use crate::normalize::normalize;

/// One of the fixed tracking parameters.
///
/// Declaration order is the order parameters are appended to a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrackingField {
    Id,
    Source,
    Medium,
    Campaign,
    Term,
    Content,
    Pmkt,
}

impl TrackingField {
    pub const ALL: [TrackingField; 7] = [
        TrackingField::Id,
        TrackingField::Source,
        TrackingField::Medium,
        TrackingField::Campaign,
        TrackingField::Term,
        TrackingField::Content,
        TrackingField::Pmkt,
    ];

    /// Query-string key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            TrackingField::Id => "utm_id",
            TrackingField::Source => "utm_source",
            TrackingField::Medium => "utm_medium",
            TrackingField::Campaign => "utm_campaign",
            TrackingField::Term => "utm_term",
            TrackingField::Content => "utm_content",
            TrackingField::Pmkt => "pmkt",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

impl fmt::Display for TrackingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values for the tracking fields of one generation request.
///
/// Unset fields read as empty. Iteration always follows [`TrackingField::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingFieldSet {
    values: BTreeMap<TrackingField, String>,
}

impl TrackingFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: TrackingField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: TrackingField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: TrackingField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// All fields in fixed order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (TrackingField, &str)> + '_ {
        TrackingField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Non-empty fields in fixed order.
    pub fn non_empty(&self) -> impl Iterator<Item = (TrackingField, &str)> + '_ {
        self.iter().filter(|(_, v)| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.non_empty().next().is_none()
    }

    /// Copy of this set with every value run through [`normalize`].
    pub fn normalized(&self) -> Self {
        let mut out = Self::new();
        for (field, value) in self.iter() {
            out.set(field, normalize(value));
        }
        out
    }
}
