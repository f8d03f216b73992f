//! Subnet calculation logic.
//!
//! The stages run strictly in order:
//! - [`normalize`] - address parsing and host-octet zeroing
//! - [`planner`] - borrowed bits and stride for a subnet count
//! - [`enumerate`] - one record per subnet
//! - [`calculation`] - all of the above from raw strings

mod calculation;
mod enumerate;
mod normalize;
mod planner;

// Re-export public functions
pub use calculation::{calculate, Calculation};
pub use enumerate::{check_mask, enumerate, enumerate_with, CalcOptions, SplitPlan};
pub use normalize::normalize;
pub use planner::{bits_needed, parse_subnet_count, stride};
