//! `index-walk` library crate.
//!
//! The binary is a thin wrapper around this library so the analysis can be
//! tested without spawning processes.

pub mod analysis;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
