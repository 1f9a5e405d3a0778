//! Core types and pure functions for the Olympics dashboard.
//!
//! Turns a loaded dataset (countries → participations → per-year stats) into
//! the flat shapes the charts bind to, and decides whether a country
//! identifier can be navigated to. This crate does no I/O; fetching and
//! holding snapshots live in `olympics-store`.

pub mod aggregate;
pub mod error;
pub mod guard;
pub mod model;
pub mod source;
pub mod view;

pub use error::{Error, Result};

#[cfg(test)]
mod properties;
