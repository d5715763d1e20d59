//! Aggregate shelf analysis results and the analyze-image wire response.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::detection::ClassifiedDetection;
use crate::severity::Severity;

/// Aggregate result of classifying one batch of detections.
///
/// Counts are simple tallies over the classified sequence; `details`
/// preserves the input order of the upstream API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ShelfReport {
    /// Number of detections classified as products
    pub product_count: u32,

    /// Number of detections classified as missing slots
    pub missing_count: u32,

    /// Per-detection results, in upstream order
    pub details: Vec<ClassifiedDetection>,
}

impl ShelfReport {
    /// Severity tier derived from the missing-slot count.
    pub fn severity(&self) -> Severity {
        Severity::from_missing_count(self.missing_count)
    }

    /// Whether at least one missing slot was detected.
    pub fn restock_required(&self) -> bool {
        self.missing_count > 0
    }

    /// Total number of classified detections.
    pub fn total(&self) -> u32 {
        self.product_count + self.missing_count
    }
}

/// Detection count summary for the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisSummary {
    /// Detections classified as products
    pub total_products_detected: u32,
    /// Detections classified as missing slots
    pub total_missing_detected: u32,
}

/// Business-facing restock verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BusinessMapping {
    /// True iff at least one missing slot was detected
    pub restock_required: bool,
    /// Restock urgency tier
    pub severity: Severity,
}

/// Successful response body for the analyze-image endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeImageResponse {
    /// Always `"success"` for a 200 response
    pub status: String,

    /// Aggregate detection counts
    pub summary: AnalysisSummary,

    /// Per-detection results, in upstream order
    pub details: Vec<ClassifiedDetection>,

    /// Restock verdict derived from the counts
    pub business_mapping: BusinessMapping,
}

impl From<ShelfReport> for AnalyzeImageResponse {
    fn from(report: ShelfReport) -> Self {
        let business_mapping = BusinessMapping {
            restock_required: report.restock_required(),
            severity: report.severity(),
        };
        Self {
            status: "success".to_string(),
            summary: AnalysisSummary {
                total_products_detected: report.product_count,
                total_missing_detected: report.missing_count,
            },
            details: report.details,
            business_mapping,
        }
    }
}
