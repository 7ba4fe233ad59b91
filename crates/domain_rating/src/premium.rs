//! Premium accumulation
//!
//! The premium is the engine's output: a base rate plus an ordered list
//! of labeled, explained adjustments, built up incrementally by rule
//! actions and discarded or returned whole.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

/// A single named change to the premium
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Short label identifying the rule family, e.g. "Age Factor"
    pub label: String,
    /// Signed amount; negative for discounts
    pub amount: Money,
    /// Human-readable reason shown on the quote breakdown
    pub explanation: String,
}

/// The accumulating output of a premium calculation
///
/// Created empty, populated by rule actions in evaluation order, and
/// handed back to the caller once every rule has been tried. The base
/// rate is set by exactly one rule before any adjustment lands; that
/// ordering is enforced by rule registration order, not by this
/// structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Premium {
    base_rate: Money,
    adjustments: Vec<Adjustment>,
}

impl Premium {
    /// Creates an empty premium in the given currency
    pub fn new(currency: Currency) -> Self {
        Self {
            base_rate: Money::zero(currency),
            adjustments: Vec::new(),
        }
    }

    /// Sets the base rate, overwriting any prior value
    pub fn set_base_rate(&mut self, base_rate: Money) {
        self.base_rate = base_rate;
    }

    /// Returns the base rate
    pub fn base_rate(&self) -> Money {
        self.base_rate
    }

    /// Returns the premium currency
    pub fn currency(&self) -> Currency {
        self.base_rate.currency()
    }

    /// Appends an adjustment to the breakdown
    pub fn add_adjustment(
        &mut self,
        label: impl Into<String>,
        amount: Money,
        explanation: impl Into<String>,
    ) {
        self.adjustments.push(Adjustment {
            label: label.into(),
            amount,
            explanation: explanation.into(),
        });
    }

    /// Returns the adjustments in the order they were applied
    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    /// Finds an adjustment by its label
    pub fn adjustment(&self, label: &str) -> Option<&Adjustment> {
        self.adjustments.iter().find(|a| a.label == label)
    }

    /// Total premium: base rate plus the sum of all adjustment amounts
    pub fn total(&self) -> Money {
        self.adjustments
            .iter()
            .fold(self.base_rate, |total, adjustment| total + adjustment.amount)
    }
}
