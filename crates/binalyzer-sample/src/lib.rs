//! Sample blocks for binalyzer: random generation and the binary file format.
//!
//! A sample block is a fixed-length sequence of `i32` values drawn uniformly
//! from a [`DomainBound`](binalyzer_stats::domain::DomainBound). Blocks are
//! persisted as a native-endian `i32` length followed by that many
//! native-endian `i32` values, with no padding, checksum or version tag.
//!
//! # Examples
//!
//! ```
//! use binalyzer_sample::{generate, read_samples, write_samples};
//! use binalyzer_stats::domain::DomainBound;
//!
//! let samples = generate(&mut rand::rng(), 16, DomainBound::DEFAULT);
//!
//! let mut bytes = Vec::new();
//! write_samples(&mut bytes, &samples).unwrap();
//! assert_eq!(bytes.len(), 4 + 16 * 4);
//!
//! let reloaded = read_samples(bytes.as_slice()).unwrap();
//! assert_eq!(reloaded, samples);
//! ```

pub use self::{file::*, generate::*};

mod file;
mod generate;

/// Number of samples in a block when nothing else is configured.
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;
