//! Core Kernel - Foundational types and utilities for the rating system
//!
//! This crate provides the fundamental building blocks used across the
//! rating modules:
//! - Money types with precise decimal arithmetic
//! - Multiplicative rating factors and their additive loadings
//! - Strongly-typed identifiers for quotes and calculations

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, Factor, MoneyError};
pub use identifiers::{QuoteId, CalculationId};
