//! Core transaction-generation logic for Spendcast.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The simulation here is a synchronous, CPU-bound loop: each run owns its
//! random streams and bookkeeping, so concurrent runs never interfere.
//!
//! # Modules
//!
//! - `generator` - Day-by-day synthetic personal-spending simulation

pub mod generator;
