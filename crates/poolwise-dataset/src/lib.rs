//! # poolwise-dataset
//!
//! `Dataset`, the in-memory `IExampleStore` used for both partitions of a
//! feature space, plus the textual point format:
//!
//! ```text
//! <id> <label> <index>:<value> <index>:<value> ...
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

pub mod dataset;
pub mod points;

pub use dataset::Dataset;
