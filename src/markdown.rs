//! Markdown processing utilities
//!
//! This module provides the line-level transformations applied to chapter files:
//!
//! - Dropping lines that contain an ignore keyword
//! - Rewriting relative chapter links for the website
//! - Concatenating filtered chapters into one document

mod aggregate;
mod filter;
mod links;

pub use aggregate::aggregate_chapters;
pub use filter::{filter_lines, split_lines};
pub use links::rewrite_links;
