//! Motor Premium Rating Domain
//!
//! This crate implements the rule evaluation core of the rating system:
//! an ordered set of business rules applied against a static rate table
//! to price a driver/vehicle profile.
//!
//! # Architecture
//!
//! - **Knowledge Base**: init-once, read-many map from dotted string keys
//!   to decimal rates and factors
//! - **Vehicle Classifier**: pure make/model to category function feeding
//!   the base-rate lookup
//! - **Rule**: a named (condition, action) closure pair
//! - **Rating Engine**: the ordered rule list plus the linear evaluation
//!   pass
//! - **Premium**: the accumulating output, base rate plus labeled and
//!   explained adjustments
//!
//! # Evaluation Pass
//!
//! ```text
//! [empty Premium] -> base rate -> age factor -> accident history -> [completed Premium]
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{DriverProfile, RatingEngine};
//!
//! let engine = RatingEngine::new();
//! let profile = DriverProfile::new(40, "ford", "mustang", 1)?;
//!
//! let premium = engine.calculate_premium(&profile)?;
//! for adjustment in premium.adjustments() {
//!     println!("{}: {} ({})", adjustment.label, adjustment.amount, adjustment.explanation);
//! }
//! println!("total: {}", premium.total());
//! ```

pub mod knowledge_base;
pub mod vehicle;
pub mod profile;
pub mod premium;
pub mod rule;
pub mod engine;
pub mod error;

pub use knowledge_base::KnowledgeBase;
pub use vehicle::{classify, VehicleCategory};
pub use profile::DriverProfile;
pub use premium::{Premium, Adjustment};
pub use rule::{Rule, RuleAction, RuleCondition};
pub use engine::RatingEngine;
pub use error::{ProfileError, RatingError};
