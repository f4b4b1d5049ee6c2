//! Core domain types and utilities for the intern-desk application.
//!
//! This crate provides the foundational types, error handling, and shared
//! utilities used throughout the intern-desk internship tracking system.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{InternshipId, ParseIdError};
