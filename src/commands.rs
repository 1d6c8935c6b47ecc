//! Command implementations
//!
//! This module contains the implementation of all CLI commands.
//!
//! # Available Commands
//!
//! - [`epub`] - Filter each chapter into an e-book source file
//! - [`pdf`] - Aggregate all chapters into one document per locale
//! - [`website`] - Build the per-chapter content tree of the website

pub mod epub;
pub mod pdf;
pub mod website;
