pub mod config;
pub mod logging;

pub mod compose;
pub mod error;
pub mod export;
pub mod fields;
pub mod generate;
pub mod history;
pub mod normalize;
pub mod notify;
pub mod preview;

pub use compose::compose;
pub use fields::{TrackingField, TrackingFieldSet};
pub use generate::{generate, GenerationRequest, LinkOutcome};
pub use normalize::normalize;
