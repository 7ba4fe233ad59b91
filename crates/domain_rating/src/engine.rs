//! The rating engine
//!
//! Owns the rate table and the ordered rule list, and runs the linear
//! evaluation pass that turns a driver profile into a premium.
//!
//! # Evaluation model
//!
//! Each `calculate_premium` call is an independent pass: build an empty
//! premium, try every rule once in registration order, return the result.
//! The engine holds no per-call state, so a constructed engine can be
//! shared read-only across threads.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{DriverProfile, RatingEngine};
//!
//! let engine = RatingEngine::new();
//! let profile = DriverProfile::new(30, "toyota", "camry", 0)?;
//! let premium = engine.calculate_premium(&profile)?;
//! println!("total: {}", premium.total());
//! ```

use tracing::{debug, instrument, warn};

use core_kernel::{Currency, Factor, Money};

use crate::error::RatingError;
use crate::knowledge_base::KnowledgeBase;
use crate::premium::Premium;
use crate::profile::DriverProfile;
use crate::rule::Rule;
use crate::vehicle::classify;

/// The premium rating engine
///
/// Construction installs the rate table and the fixed rule set; both are
/// read-only afterward. Stateless between calls.
pub struct RatingEngine {
    knowledge_base: KnowledgeBase,
    rules: Vec<Rule>,
    currency: Currency,
}

impl RatingEngine {
    /// Creates an engine with the standard rate table and rule set,
    /// quoting in USD
    pub fn new() -> Self {
        Self::with_knowledge_base(KnowledgeBase::standard())
    }

    /// Creates an engine with the standard rule set over a caller-supplied
    /// rate table
    ///
    /// Intended for tests and for books with bespoke tables. The standard
    /// rules still run, so a lookup against a key the table lacks surfaces
    /// as [`RatingError::UnknownKey`].
    pub fn with_knowledge_base(knowledge_base: KnowledgeBase) -> Self {
        Self {
            knowledge_base,
            rules: Self::standard_rules(),
            currency: Currency::USD,
        }
    }

    /// Sets the quoting currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Registers an additional rule after the standard set
    ///
    /// Registration order is evaluation order; rules added here run after
    /// the base rate is set.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Returns the registered rule names in evaluation order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Returns the engine's rate table
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Returns the quoting currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Calculates the premium for a profile
    ///
    /// Builds an empty premium and tries every registered rule once, in
    /// registration order: rules whose condition rejects the profile are
    /// skipped silently; matching rules run their action against the
    /// accumulating premium.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::UnknownKey`] if any rule action dereferences
    /// a rate table key that does not exist. The failure aborts the whole
    /// pass; no partial premium is returned.
    #[instrument(
        skip(self, profile),
        fields(
            age = profile.age(),
            make = profile.vehicle_make(),
            model = profile.vehicle_model(),
            accidents = profile.accident_count(),
        )
    )]
    pub fn calculate_premium(&self, profile: &DriverProfile) -> Result<Premium, RatingError> {
        let mut premium = Premium::new(self.currency);

        for rule in &self.rules {
            if !rule.matches(profile) {
                continue;
            }

            if let Err(error) = rule.apply(profile, &mut premium, &self.knowledge_base) {
                warn!(rule = rule.name(), %error, "rule action failed, aborting calculation");
                return Err(error);
            }

            debug!(rule = rule.name(), total = %premium.total(), "rule applied");
        }

        Ok(premium)
    }

    /// The fixed motor book rule set, in evaluation order
    ///
    /// Order is a hard invariant: the base-rate rule must run before any
    /// adjustment rule, because adjustments are computed against the
    /// already-set base rate.
    fn standard_rules() -> Vec<Rule> {
        vec![
            Self::base_rate_rule(),
            Self::age_factor_rule(),
            Self::accident_history_rule(),
        ]
    }

    /// Sets the starting premium from the vehicle's rating category
    fn base_rate_rule() -> Rule {
        Rule::new(
            "base rate",
            |_profile| true,
            |profile, premium, kb| {
                let category = classify(profile.vehicle_make(), profile.vehicle_model());
                let rate = kb.get(&format!("baseRate.{}", category.rate_key_segment()))?;
                premium.set_base_rate(Money::new(rate, premium.currency()));
                Ok(())
            },
        )
    }

    /// Adds the age loading computed against the base rate
    ///
    /// Bracket selection is first-match-wins; every insurable age lands in
    /// exactly one bracket. The factor is multiplicative in the table but
    /// recorded additively, as `base * (factor - 1)`, so the standard
    /// bracket contributes a zero-amount adjustment rather than none.
    fn age_factor_rule() -> Rule {
        Rule::new(
            "age factor",
            |_profile| true,
            |profile, premium, kb| {
                let age = profile.age();
                let (bracket, explanation) = if age < 20 {
                    ("16-19", "Drivers under 20 have higher statistical risk")
                } else if age < 25 {
                    ("20-24", "Drivers 20-24 have moderately higher risk")
                } else if age < 66 {
                    ("25-65", "Standard rate for drivers 25-65")
                } else {
                    ("66+", "Slight increase for senior drivers")
                };

                let factor = Factor::new(kb.get(&format!("ageFactor.{bracket}"))?);
                let loading = factor.loading_on(&premium.base_rate());
                premium.add_adjustment("Age Factor", loading, explanation);
                Ok(())
            },
        )
    }

    /// Adds the surcharge for recent accidents
    ///
    /// Fires only when the profile has at least one accident; two or more
    /// accidents rate at the top surcharge band.
    fn accident_history_rule() -> Rule {
        Rule::new(
            "accident history",
            |profile| profile.accident_count() > 0,
            |profile, premium, kb| {
                let key = if profile.accident_count() == 1 {
                    "accidentSurcharge.1"
                } else {
                    "accidentSurcharge.2"
                };

                let surcharge = kb.get(key)?;
                premium.add_adjustment(
                    "Accident History",
                    Money::new(surcharge, premium.currency()),
                    "Surcharge applied for accidents within the past five years",
                );
                Ok(())
            },
        )
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_profile() -> impl Strategy<Value = DriverProfile> {
        (
            DriverProfile::MIN_AGE..=DriverProfile::MAX_AGE,
            "[a-z]{2,10}",
            "[a-z]{2,10}",
            0u32..=DriverProfile::MAX_ACCIDENTS,
        )
            .prop_map(|(age, make, model, accidents)| {
                DriverProfile::new(age, make, model, accidents).unwrap()
            })
    }

    proptest! {
        #[test]
        fn total_equals_base_plus_adjustments(profile in arb_profile()) {
            let engine = RatingEngine::new();
            let premium = engine.calculate_premium(&profile).unwrap();

            let rebuilt = premium
                .adjustments()
                .iter()
                .fold(premium.base_rate(), |sum, a| sum + a.amount);
            prop_assert_eq!(premium.total(), rebuilt);
        }

        #[test]
        fn calculation_is_idempotent(profile in arb_profile()) {
            let engine = RatingEngine::new();
            let first = engine.calculate_premium(&profile).unwrap();
            let second = engine.calculate_premium(&profile).unwrap();

            prop_assert_eq!(first, second);
        }

        #[test]
        fn accident_adjustment_present_iff_accidents(profile in arb_profile()) {
            let engine = RatingEngine::new();
            let premium = engine.calculate_premium(&profile).unwrap();

            let has_surcharge = premium.adjustment("Accident History").is_some();
            prop_assert_eq!(has_surcharge, profile.accident_count() > 0);
        }

        #[test]
        fn base_rate_is_always_set(profile in arb_profile()) {
            let engine = RatingEngine::new();
            let premium = engine.calculate_premium(&profile).unwrap();

            prop_assert!(premium.base_rate().is_positive());
        }
    }
}
