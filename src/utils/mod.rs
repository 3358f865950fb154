//! # Utility Modules
//!
//! Supporting utilities that sit outside the codec proper.
//!
//! ## Components
//! - **Logging**: Structured logging configuration

pub mod logging;

pub use logging::init_logging;
