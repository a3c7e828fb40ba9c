//! Actuation protocols — pure logic, zero I/O.
//!
//! Everything in here drives hardware exclusively through the port traits
//! in [`crate::app::ports`], so the exact flip/blink sequences are testable
//! on the host against a recording mock.

pub mod actuation;
pub mod indicator;
