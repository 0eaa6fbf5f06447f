//! Foundation types for vcmd.
//!
//! This crate holds the types shared by every vcmd crate: the error enum
//! with its `Result` alias, and the widget configuration consumed when a
//! terminal is constructed.

pub mod config;
pub mod error;
