//! Analysis core for binalyzer sample blocks.
//!
//! This crate holds everything that has algorithmic content:
//!
//! - **Sorting** ([`sort`]): in-place selection sort
//! - **Searching** ([`search`]): recursive binary search over sorted data
//! - **Analyzers** ([`analyzer`]): the closed set of analyses run over a sample block
//! - **Reports** ([`report`]): typed analysis results and their text rendering
//! - **Domain** ([`domain`]): the value range samples are drawn from
//!
//! # Examples
//!
//! ## Running a single analysis
//!
//! ```
//! use binalyzer_stats::analyzer::{Analyzer, AnalyzerKind};
//!
//! let values = [5, 5, 5, 7, 9, 9];
//! let analyzer = Analyzer::new(AnalyzerKind::Duplicate, &values);
//! assert_eq!(analyzer.analyze(), "There were 3 duplicated values");
//! ```
//!
//! ## Sorting and searching
//!
//! ```
//! use binalyzer_stats::{search::binary_search, sort::selection_sort};
//!
//! let mut values = [4, 2, 3, 1];
//! selection_sort(&mut values);
//! assert_eq!(values, [1, 2, 3, 4]);
//! assert!(binary_search(&values, &3));
//! assert!(!binary_search(&values, &5));
//! ```

pub mod analyzer;
pub mod domain;
pub mod report;
pub mod search;
pub mod sort;
