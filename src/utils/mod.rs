//! Utility modules
//!
//! This module contains common utilities used throughout the application,
//! including error handling, logging setup, the clock and helper functions.

pub mod errors;
pub mod logging;
pub mod helpers;
pub mod clock;

pub use errors::{ParishError, Result};
pub use clock::{Clock, SystemClock, FixedClock};
