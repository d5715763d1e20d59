//! Client for the Roboflow hosted object-detection API.
//!
//! This crate owns the single outbound network call of the backend: posting
//! a base64-encoded image to the hosted inference endpoint and decoding the
//! returned prediction list. No retry and no caching; a failed call is
//! surfaced as a [`RoboflowError`] for the HTTP layer to report.

pub mod client;
pub mod error;

pub use client::{RoboflowClient, RoboflowConfig};
pub use error::RoboflowError;
