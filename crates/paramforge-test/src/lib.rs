//! Shared test fixtures for ParamForge crates.
//!
//! - [`generators`] - observable generators and literal shorthands
//! - [`records`] - execution record builders
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! paramforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use paramforge_test::{counter, strs, RecordingGenerator};
//! ```

pub mod generators;
pub mod records;

pub use generators::{counter, ints, strs, ClosingProbe, RecordingGenerator};
pub use records::{failed_record, record};
