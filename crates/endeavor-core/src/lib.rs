//! Core types and definitions for the ENDEAVOR combat agent.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, arena boundaries, commands, inbound events, configuration,
//! and constants. It has no dependency on any host runtime.

pub mod boundary;
pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod types;
