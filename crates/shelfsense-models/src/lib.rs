//! Shared data models for the ShelfSense backend.
//!
//! This crate provides Serde-serializable types for:
//! - Raw detections returned by the upstream detection API
//! - Classified detections and restock severity tiers
//! - The analyze-image wire response
//!
//! It also hosts the shelf classification logic itself, which is pure and
//! performs no I/O.

pub mod classifier;
pub mod detection;
pub mod report;
pub mod severity;

// Re-export common types
pub use classifier::classify;
pub use detection::{ClassifiedDetection, Detection, DetectionCategory};
pub use report::{AnalysisSummary, AnalyzeImageResponse, BusinessMapping, ShelfReport};
pub use severity::Severity;
