//! Account domain models

pub mod user;

// Re-export for convenience
pub use user::{Address, AddressInput, NewUser, Role, User, UserInput};
