//! Request handlers.

pub mod analyze;
pub mod frontend;
pub mod health;

pub use analyze::*;
pub use frontend::*;
pub use health::*;
