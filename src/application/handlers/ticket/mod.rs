//! Ticket handlers.
//!
//! ## Queries
//! - Check whether a user's ticket grants hotel access

mod check_eligibility;

pub use check_eligibility::{CheckEligibilityHandler, CheckEligibilityQuery, CheckEligibilityResult};
