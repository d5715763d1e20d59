//! Detection records returned by the upstream detection API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Label substrings that mark a detection as an empty shelf slot.
///
/// Matching is case-insensitive substring containment, so labels such as
/// `"empty_shelf_tag"` or `"shelf_gap_marker"` classify as missing. The set
/// follows the label conventions of the upstream retail detection model.
pub const MISSING_KEYWORDS: [&str; 5] = ["missing", "empty", "gap", "hole", "vacant"];

fn default_class() -> String {
    "unknown".to_string()
}

/// One raw bounding-box prediction from the upstream detection API.
///
/// The upstream payload is not fully trusted: any absent field falls back to
/// a default (`"unknown"` for the label, `0` for numerics) instead of failing
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Detection {
    /// Free-text class label assigned by the model
    #[serde(default = "default_class")]
    pub class: String,

    /// Confidence score in [0, 1]
    #[serde(default)]
    pub confidence: f64,

    /// Bounding-box center X, in the upstream API's coordinate space
    #[serde(default)]
    pub x: f64,

    /// Bounding-box center Y
    #[serde(default)]
    pub y: f64,

    /// Bounding-box width
    #[serde(default)]
    pub width: f64,

    /// Bounding-box height
    #[serde(default)]
    pub height: f64,
}

impl Detection {
    /// Categorize this detection by its class label.
    pub fn category(&self) -> DetectionCategory {
        DetectionCategory::from_label(&self.class)
    }
}

/// Category assigned to a detection: a stocked product or an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DetectionCategory {
    /// A product present on the shelf
    Product,
    /// An empty slot that needs restocking
    Missing,
}

impl DetectionCategory {
    /// Classify a raw class label.
    ///
    /// A label is `Missing` iff its lower-cased form contains any of
    /// [`MISSING_KEYWORDS`] as a substring. Everything else, including the
    /// `"unknown"` default for absent labels, is `Product`.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if MISSING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            Self::Missing
        } else {
            Self::Product
        }
    }

    /// Returns the category as a string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Missing => "missing",
        }
    }

    /// Returns true for the missing-slot category.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// A detection after categorization.
///
/// Geometry and confidence are copied through from the raw record unchanged;
/// the free-text label is replaced by the coarse category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassifiedDetection {
    /// Coarse category (serialized as `class` for frontend compatibility)
    #[serde(rename = "class")]
    pub category: DetectionCategory,

    /// Bounding-box center X
    pub x: f64,

    /// Bounding-box center Y
    pub y: f64,

    /// Bounding-box width
    pub width: f64,

    /// Bounding-box height
    pub height: f64,

    /// Confidence score copied from the raw detection
    pub confidence: f64,
}

impl ClassifiedDetection {
    /// Classify a raw detection, consuming it.
    pub fn from_detection(detection: Detection) -> Self {
        let category = detection.category();
        Self {
            category,
            x: detection.x,
            y: detection.y,
            width: detection.width,
            height: detection.height,
            confidence: detection.confidence,
        }
    }
}

impl From<Detection> for ClassifiedDetection {
    fn from(detection: Detection) -> Self {
        Self::from_detection(detection)
    }
}
