//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use domain_rating::DriverProfile;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::CAD),
        Just(Currency::EUR),
        Just(Currency::GBP),
    ]
}

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating valid amount ranges
pub fn amount_minor_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy for generating valid Money values with positive amounts
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating valid Money values (can be negative)
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating valid USD Money values
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(|amount| Money::from_minor(amount, Currency::USD))
}

/// Strategy for generating any insurable age
pub fn insurable_age_strategy() -> impl Strategy<Value = u32> {
    DriverProfile::MIN_AGE..=DriverProfile::MAX_AGE
}

/// Strategy for generating ages in the 16-19 bracket
pub fn teen_age_strategy() -> impl Strategy<Value = u32> {
    16u32..20u32
}

/// Strategy for generating ages in the 20-24 bracket
pub fn young_adult_age_strategy() -> impl Strategy<Value = u32> {
    20u32..25u32
}

/// Strategy for generating ages in the 25-65 bracket
pub fn standard_age_strategy() -> impl Strategy<Value = u32> {
    25u32..66u32
}

/// Strategy for generating ages in the 66+ bracket
pub fn senior_age_strategy() -> impl Strategy<Value = u32> {
    66u32..=DriverProfile::MAX_AGE
}

/// Strategy for generating valid accident counts
pub fn accident_count_strategy() -> impl Strategy<Value = u32> {
    0u32..=DriverProfile::MAX_ACCIDENTS
}

/// Strategy for generating makes that appear on a classification list
pub fn known_make_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("bmw".to_string()),
        Just("mercedes".to_string()),
        Just("lexus".to_string()),
        Just("audi".to_string()),
        Just("ferrari".to_string()),
        Just("porsche".to_string()),
        Just("toyota".to_string()),
        Just("honda".to_string()),
    ]
}

/// Strategy for generating models that appear on a classification list
pub fn known_model_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("mustang".to_string()),
        Just("corvette".to_string()),
        Just("suv".to_string()),
        Just("explorer".to_string()),
        Just("tahoe".to_string()),
        Just("highlander".to_string()),
        Just("camry".to_string()),
        Just("civic".to_string()),
    ]
}

/// Strategy for generating tokens absent from every classification list
///
/// Every list entry is at most ten characters, so any twelve-plus
/// character token is guaranteed to miss.
pub fn unknown_token_strategy() -> impl Strategy<Value = String> {
    "[a-z]{12,20}"
}

/// Strategy for generating valid driver profiles
pub fn driver_profile_strategy() -> impl Strategy<Value = DriverProfile> {
    (
        insurable_age_strategy(),
        "[a-z]{2,10}",
        "[a-z]{2,10}",
        accident_count_strategy(),
    )
        .prop_map(|(age, make, model, accidents)| {
            DriverProfile::new(age, make, model, accidents).expect("Generated invalid profile")
        })
}

/// Strategy for generating valid multiplicative rating factors
pub fn factor_strategy() -> impl Strategy<Value = Decimal> {
    (50u32..300u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for generating flat surcharge amounts
pub fn surcharge_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(|n| Decimal::new(n, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_rating::{classify, VehicleCategory};

    proptest! {
        #[test]
        fn positive_money_is_always_positive(money in positive_money_strategy()) {
            prop_assert!(money.amount() > Decimal::ZERO);
        }

        #[test]
        fn insurable_age_stays_in_bounds(age in insurable_age_strategy()) {
            prop_assert!(age >= DriverProfile::MIN_AGE);
            prop_assert!(age <= DriverProfile::MAX_AGE);
        }

        #[test]
        fn accident_count_stays_under_limit(count in accident_count_strategy()) {
            prop_assert!(count <= DriverProfile::MAX_ACCIDENTS);
        }

        #[test]
        fn generated_profiles_pass_validation(profile in driver_profile_strategy()) {
            prop_assert!(!profile.vehicle_make().is_empty());
            prop_assert!(!profile.vehicle_model().is_empty());
        }

        #[test]
        fn unknown_tokens_classify_as_sedan(
            make in unknown_token_strategy(),
            model in unknown_token_strategy(),
        ) {
            prop_assert_eq!(classify(&make, &model), VehicleCategory::Sedan);
        }
    }
}
