//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_rating::Premium;
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Arguments
///
/// * `actual` - The actual Money value
/// * `expected` - The expected Money value
/// * `tolerance` - The allowed difference in the amount
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is negative
pub fn assert_money_negative(money: &Money) {
    assert!(
        money.is_negative(),
        "Expected negative money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that money values sum to a total
///
/// # Arguments
///
/// * `parts` - The money values that should sum to total
/// * `total` - The expected total
///
/// # Panics
///
/// Panics if the sum doesn't equal the total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = parts.iter().fold(Money::zero(total.currency()), |acc, m| {
        acc.checked_add(m).expect("Currency mismatch in sum")
    });

    assert_eq!(
        sum.amount(),
        total.amount(),
        "Sum of parts ({}) doesn't equal total ({})",
        sum.amount(),
        total.amount()
    );
}

/// Asserts that a premium carries an adjustment with the given label and amount
pub fn assert_adjustment(premium: &Premium, label: &str, expected: &Money) {
    let adjustment = premium
        .adjustment(label)
        .unwrap_or_else(|| panic!("Premium has no adjustment labelled '{}'", label));

    assert_eq!(
        adjustment.amount, *expected,
        "Adjustment '{}' is {}, expected {}",
        label, adjustment.amount, expected
    );
}

/// Asserts that a premium has no adjustment with the given label
pub fn assert_no_adjustment(premium: &Premium, label: &str) {
    assert!(
        premium.adjustment(label).is_none(),
        "Premium unexpectedly carries an adjustment labelled '{}'",
        label
    );
}

/// Asserts that a premium's total equals its base rate plus its adjustments
///
/// Also verifies that every adjustment shares the premium currency, since
/// the sum is rebuilt with checked addition.
pub fn assert_total_consistent(premium: &Premium) {
    let adjustment_sum = premium
        .adjustments()
        .iter()
        .fold(Money::zero(premium.currency()), |acc, adjustment| {
            acc.checked_add(&adjustment.amount)
                .expect("Currency mismatch in premium breakdown")
        });

    let expected = premium
        .base_rate()
        .checked_add(&adjustment_sum)
        .expect("Currency mismatch in premium breakdown");

    assert_eq!(
        premium.total().amount(),
        expected.amount(),
        "Premium total ({}) doesn't equal base rate plus adjustments ({})",
        premium.total().amount(),
        expected.amount()
    );
}

/// Asserts that a premium's adjustment labels appear in the given order
pub fn assert_adjustment_order(premium: &Premium, labels: &[&str]) {
    let actual: Vec<&str> = premium
        .adjustments()
        .iter()
        .map(|a| a.label.as_str())
        .collect();

    assert_eq!(
        actual, labels,
        "Adjustment order {:?} doesn't match expected {:?}",
        actual, labels
    );
}

/// Asserts that a decimal value is within a range
pub fn assert_decimal_in_range(value: Decimal, min: Decimal, max: Decimal) {
    assert!(
        value >= min && value <= max,
        "Decimal {} is not in range [{}, {}]",
        value,
        min,
        max
    );
}

/// Asserts that a decimal value is approximately equal to another
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
