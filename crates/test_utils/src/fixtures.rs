//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common rating inputs across the
//! rating system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use core_kernel::{CalculationId, Currency, Money, QuoteId};
use domain_rating::{DriverProfile, KnowledgeBase};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a standard USD amount for testing
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// Creates the standard sedan base rate
    pub fn usd_sedan_base() -> Money {
        Money::new(dec!(1000.00), Currency::USD)
    }

    /// Creates a single-accident surcharge amount
    pub fn usd_single_accident() -> Money {
        Money::new(dec!(300.00), Currency::USD)
    }

    /// Creates a repeat-accident surcharge amount
    pub fn usd_repeat_accident() -> Money {
        Money::new(dec!(600.00), Currency::USD)
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    /// Creates a negative amount for discount scenarios
    pub fn usd_discount() -> Money {
        Money::new(dec!(-50.00), Currency::USD)
    }
}

/// Fixture for driver profile test data
///
/// Each profile pins one canonical rating outcome against the standard
/// rate table, so tests can assert exact totals without rebuilding the
/// arithmetic by hand.
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// A 30 year old in a Toyota Camry with a clean record (rates at 1000 USD)
    pub fn adult_sedan() -> DriverProfile {
        DriverProfile::new(30, "toyota", "camry", 0).unwrap()
    }

    /// An 18 year old in a BMW X5 with a clean record (rates at 3000 USD)
    pub fn teen_luxury() -> DriverProfile {
        DriverProfile::new(18, "bmw", "x5", 0).unwrap()
    }

    /// A 40 year old in a Ford Mustang with one accident (rates at 2100 USD)
    pub fn sports_single_accident() -> DriverProfile {
        DriverProfile::new(40, "ford", "mustang", 1).unwrap()
    }

    /// A 70 year old in a Honda Civic with two accidents (rates at 1900 USD)
    pub fn senior_repeat_accidents() -> DriverProfile {
        DriverProfile::new(70, "honda", "civic", 2).unwrap()
    }

    /// A 22 year old in a Chevrolet Tahoe with a clean record
    pub fn young_adult_suv() -> DriverProfile {
        DriverProfile::new(22, "chevrolet", "tahoe", 0).unwrap()
    }
}

/// Fixture for rate table test data
pub struct TableFixtures;

impl TableFixtures {
    /// A table holding only the sedan base rate
    ///
    /// Rating anything with an accident history or a non-standard age
    /// bracket against this table aborts with an unknown key, which
    /// makes it the fixture of choice for failure-path tests.
    pub fn base_rates_only() -> KnowledgeBase {
        let mut table = KnowledgeBase::new();
        table.insert("baseRate.sedan", dec!(1000.0));
        table.insert("ageFactor.25-65", dec!(1.0));
        table
    }

    /// A table with uniform factors so totals equal the base rate
    pub fn flat_table() -> KnowledgeBase {
        let mut table = KnowledgeBase::new();
        table.insert("baseRate.sedan", dec!(500.0));
        table.insert("baseRate.suv", dec!(500.0));
        table.insert("baseRate.luxury", dec!(500.0));
        table.insert("baseRate.sports", dec!(500.0));
        table.insert("ageFactor.16-19", dec!(1.0));
        table.insert("ageFactor.20-24", dec!(1.0));
        table.insert("ageFactor.25-65", dec!(1.0));
        table.insert("ageFactor.66+", dec!(1.0));
        table.insert("accidentSurcharge.0", dec!(0.0));
        table.insert("accidentSurcharge.1", dec!(0.0));
        table.insert("accidentSurcharge.2", dec!(0.0));
        table
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic quote ID for testing
    pub fn quote_id() -> QuoteId {
        QuoteId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic calculation ID for testing
    pub fn calculation_id() -> CalculationId {
        CalculationId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }
}

/// Fixture for decimal test data
pub struct DecimalFixtures;

impl DecimalFixtures {
    /// Standard teen age factor
    pub fn teen_factor() -> Decimal {
        dec!(2.0)
    }

    /// Standard young adult age factor
    pub fn young_adult_factor() -> Decimal {
        dec!(1.5)
    }

    /// Neutral age factor for the 25-65 bracket
    pub fn neutral_factor() -> Decimal {
        dec!(1.0)
    }

    /// Standard senior age factor
    pub fn senior_factor() -> Decimal {
        dec!(1.3)
    }

    /// Zero for comparison tests
    pub fn zero() -> Decimal {
        Decimal::ZERO
    }

    /// Small epsilon for approximate comparisons
    pub fn epsilon() -> Decimal {
        dec!(0.000001)
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// A make that classifies as sedan
    pub fn sedan_make() -> &'static str {
        "toyota"
    }

    /// A model that classifies as sedan
    pub fn sedan_model() -> &'static str {
        "camry"
    }

    /// A make on the luxury list
    pub fn luxury_make() -> &'static str {
        "bmw"
    }

    /// A make on the sports list
    pub fn sports_make() -> &'static str {
        "ferrari"
    }

    /// A model on the sports list
    pub fn sports_model() -> &'static str {
        "mustang"
    }

    /// A model on the SUV list
    pub fn suv_model() -> &'static str {
        "tahoe"
    }

    /// A make absent from every classification list
    pub fn unknown_make() -> &'static str {
        "oldsmobile"
    }

    /// A model absent from every classification list
    pub fn unknown_model() -> &'static str {
        "falcon"
    }
}
