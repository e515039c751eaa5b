//! Account domain: the User record, its validator, and auth token issuance
//!
//! The document store independently enforces uniqueness and required-field
//! constraints at write time; this crate only covers payload validation and
//! the token a verified record can mint.

pub mod jwt;
pub mod models;
pub mod validation;

pub use jwt::{AuthClaims, JwtConfig, JwtService};
pub use models::{Address, AddressInput, NewUser, Role, User, UserInput};
pub use validation::validate_user;
