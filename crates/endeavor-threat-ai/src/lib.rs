//! Threat AI for ENDEAVOR.
//!
//! Tracks sighted enemies and plans encircling orbits around them.
//! Pure data in, data out: no host or locking dependency.

pub mod encircle;
pub mod random;
pub mod tracker;

pub use endeavor_core as core;
