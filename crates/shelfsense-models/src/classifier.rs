//! Shelf detection classification.
//!
//! The single pass that turns raw upstream predictions into a
//! [`ShelfReport`]. Pure and infallible: malformed records were already
//! defaulted at deserialization time, so there is no failure path here.

use crate::detection::{ClassifiedDetection, Detection};
use crate::report::ShelfReport;

/// Classify a batch of raw detections into a shelf report.
///
/// Each detection is categorized by keyword matching on its class label
/// (see [`crate::detection::MISSING_KEYWORDS`]), tallied, and copied into
/// the detail list in input order. No deduplication and no confidence
/// thresholding happen here; the upstream API already applied its
/// confidence/overlap filter before returning results.
pub fn classify<I>(predictions: I) -> ShelfReport
where
    I: IntoIterator<Item = Detection>,
{
    let mut report = ShelfReport::default();

    for prediction in predictions {
        let classified = ClassifiedDetection::from_detection(prediction);
        if classified.category.is_missing() {
            report.missing_count += 1;
        } else {
            report.product_count += 1;
        }
        report.details.push(classified);
    }

    report
}
