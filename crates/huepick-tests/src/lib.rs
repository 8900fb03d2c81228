//! Integration test crate for HuePick.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the library crates to verify they work together.

#[cfg(test)]
mod conversion;

#[cfg(test)]
mod canvas;
