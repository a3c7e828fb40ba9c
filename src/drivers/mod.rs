//! Peripheral drivers: relay, warning lamp, push-button, watchdog.
//!
//! The pin drivers are generic over `embedded-hal` digital traits, so the
//! same code drives real GPIO on target and mock pins in host tests.

pub mod button;
pub mod relay;
pub mod warning_lamp;
pub mod watchdog;
