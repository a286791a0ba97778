//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and operations
//! - Arena storage for the element tree
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod logging;
