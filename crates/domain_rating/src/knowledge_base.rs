//! The rate table knowledge base
//!
//! A flat map from dotted string keys to decimal values. Keys are
//! namespaced by segment: `baseRate.<category>`, `ageFactor.<bracket>`,
//! `accidentSurcharge.<count>`. The engine populates its table once at
//! construction and only reads it afterward.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::RatingError;

/// Facts the rating rules consult
///
/// Lookups of absent keys are typed failures, never silent defaults: a
/// rate table gap must surface as an error, not a zero premium.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    entries: HashMap<String, Decimal>,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates the standard motor rate table
    ///
    /// Base rates per vehicle category, age factors per bracket, and
    /// accident surcharges per count, all as exact decimals.
    pub fn standard() -> Self {
        let mut kb = Self::new();

        // Base rates by vehicle category
        kb.insert("baseRate.sedan", dec!(1000.0));
        kb.insert("baseRate.suv", dec!(1200.0));
        kb.insert("baseRate.luxury", dec!(1500.0));
        kb.insert("baseRate.sports", dec!(1800.0));

        // Age risk factors
        kb.insert("ageFactor.16-19", dec!(2.0));
        kb.insert("ageFactor.20-24", dec!(1.5));
        kb.insert("ageFactor.25-65", dec!(1.0));
        kb.insert("ageFactor.66+", dec!(1.3));

        // Accident surcharges
        kb.insert("accidentSurcharge.0", dec!(0.0));
        kb.insert("accidentSurcharge.1", dec!(300.0));
        kb.insert("accidentSurcharge.2", dec!(600.0));

        kb
    }

    /// Inserts an entry, replacing any previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: Decimal) {
        self.entries.insert(key.into(), value);
    }

    /// Looks up a key
    ///
    /// # Errors
    ///
    /// Returns `RatingError::UnknownKey` naming the key if it was never
    /// populated.
    pub fn get(&self, key: &str) -> Result<Decimal, RatingError> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| RatingError::unknown_key(key))
    }

    /// Returns true if the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}
