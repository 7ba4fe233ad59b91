//! The rule abstraction
//!
//! A rule is a named (condition, action) pair over a driver profile and
//! an in-progress premium. Rules are plain data assembled from closures,
//! evaluated by the engine in registration order; there is no rule
//! hierarchy and no dynamic dispatch beyond the closure calls themselves.

use std::fmt;

use crate::error::RatingError;
use crate::knowledge_base::KnowledgeBase;
use crate::premium::Premium;
use crate::profile::DriverProfile;

/// Predicate deciding whether a rule applies to a profile
///
/// Conditions are pure: side-effect-free and deterministic.
pub type RuleCondition = Box<dyn Fn(&DriverProfile) -> bool + Send + Sync>;

/// Procedure a matching rule runs against the in-progress premium
///
/// Actions may read the rate table and mutate the premium; a failed
/// lookup aborts the whole calculation.
pub type RuleAction = Box<
    dyn Fn(&DriverProfile, &mut Premium, &KnowledgeBase) -> Result<(), RatingError>
        + Send
        + Sync,
>;

/// A named business rule
///
/// Immutable once constructed. The name exists for diagnostics and audit
/// logging; it carries no evaluation semantics.
pub struct Rule {
    name: String,
    condition: RuleCondition,
    action: RuleAction,
}

impl Rule {
    /// Creates a rule from a condition and an action
    pub fn new<C, A>(name: impl Into<String>, condition: C, action: A) -> Self
    where
        C: Fn(&DriverProfile) -> bool + Send + Sync + 'static,
        A: Fn(&DriverProfile, &mut Premium, &KnowledgeBase) -> Result<(), RatingError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            condition: Box::new(condition),
            action: Box::new(action),
        }
    }

    /// Returns the rule name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tests the rule's condition against a profile
    pub fn matches(&self, profile: &DriverProfile) -> bool {
        (self.condition)(profile)
    }

    /// Runs the rule's action against the in-progress premium
    ///
    /// # Errors
    ///
    /// Propagates any rate table lookup failure from the action.
    pub fn apply(
        &self,
        profile: &DriverProfile,
        premium: &mut Premium,
        knowledge_base: &KnowledgeBase,
    ) -> Result<(), RatingError> {
        (self.action)(profile, premium, knowledge_base)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Currency, Money};
    use rust_decimal_macros::dec;

    fn flat_fee_rule() -> Rule {
        Rule::new(
            "flat fee",
            |profile| profile.accident_count() == 0,
            |_profile, premium, _kb| {
                premium.add_adjustment(
                    "Flat Fee",
                    Money::new(dec!(25.0), premium.currency()),
                    "Administrative fee",
                );
                Ok(())
            },
        )
    }

    #[test]
    fn test_condition_gates_the_rule() {
        let rule = flat_fee_rule();
        let clean = DriverProfile::new(30, "toyota", "camry", 0).unwrap();
        let history = DriverProfile::new(30, "toyota", "camry", 2).unwrap();

        assert!(rule.matches(&clean));
        assert!(!rule.matches(&history));
    }

    #[test]
    fn test_action_mutates_the_premium() {
        let rule = flat_fee_rule();
        let profile = DriverProfile::new(30, "toyota", "camry", 0).unwrap();
        let mut premium = Premium::new(Currency::USD);
        let kb = KnowledgeBase::standard();

        rule.apply(&profile, &mut premium, &kb).unwrap();

        assert_eq!(premium.adjustments().len(), 1);
        assert_eq!(
            premium.adjustment("Flat Fee").unwrap().amount,
            Money::new(dec!(25.0), Currency::USD)
        );
    }

    #[test]
    fn test_action_propagates_lookup_failures() {
        let rule = Rule::new(
            "doomed",
            |_profile| true,
            |_profile, _premium, kb| {
                kb.get("no.such.key")?;
                Ok(())
            },
        );
        let profile = DriverProfile::new(30, "toyota", "camry", 0).unwrap();
        let mut premium = Premium::new(Currency::USD);
        let kb = KnowledgeBase::standard();

        let result = rule.apply(&profile, &mut premium, &kb);
        assert_eq!(result, Err(RatingError::unknown_key("no.such.key")));
    }

    #[test]
    fn test_debug_shows_the_name_only() {
        let rule = flat_fee_rule();
        let debug = format!("{:?}", rule);
        assert!(debug.contains("flat fee"));
    }
}
