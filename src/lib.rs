//! Bank accounts that support deposit, withdraw and transfer, and course records that can be
//! cloned into new sections.
//!
//! The two types are unrelated and share nothing beyond this crate.

mod account;
mod course;

pub use crate::account::Account;
pub use crate::course::Course;

pub mod types;
