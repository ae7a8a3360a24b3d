//! Platform service abstractions.
//!
//! Commands that print dates, times, or uptimes read them through
//! [`TimeService`], so tests can pin the clock.

mod services;

pub use services::{DesktopClock, FixedClock, SystemTime, TimeService, Weekday};
