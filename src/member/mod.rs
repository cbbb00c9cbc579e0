//! Member data: age classification, wage inputs and account balances

mod age;
mod data;
pub mod loader;

pub use age::{age_on, validate_birth_date, AgeBand};
pub use data::{AccountBalances, Member, WageInput};
pub use loader::{load_members, load_members_from_reader};
