//! Restock severity tiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse business-facing tier summarizing how urgently restocking is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No missing slots detected
    #[default]
    None,
    /// One or two missing slots
    Low,
    /// Three to five missing slots
    Medium,
    /// More than five missing slots
    High,
}

impl Severity {
    /// Derive the severity tier from a missing-slot count.
    ///
    /// Monotonic step function: `0` none, `1..=2` low, `3..=5` medium,
    /// `6..` high.
    pub fn from_missing_count(missing_count: u32) -> Self {
        if missing_count > 5 {
            Self::High
        } else if missing_count > 2 {
            Self::Medium
        } else if missing_count > 0 {
            Self::Low
        } else {
            Self::None
        }
    }

    /// Returns the severity as a string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}
