//! Core domain types for the fisco tax-code tools.
//!
//! This crate holds the caller-facing data model: the reference identity a
//! code is derived from and the verdict a verification produces. It is
//! deliberately free of codec and CLI dependencies.

pub mod error;
pub mod identity;
pub mod verdict;

pub use error::{Error, Result};
