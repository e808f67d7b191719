//! # Printer Module
//!
//! This module provides the physical sheet geometry the compiler targets.
//!
//! ## Modules
//!
//! - [`config`]: Page and label sheet geometry

pub mod config;

pub use config::{LabelSheetConfig, PageConfig};
