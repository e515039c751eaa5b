//! User model and related functionality

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Access role of a user
///
/// The persistence layer restricts the field to these three values and
/// defaults to developer. The payload validator deliberately does not:
/// it accepts role as free text, matching the schema drift in production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Developer,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "developer" => Ok(Role::Developer),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Postal address embedded in a user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub country: String,
    pub state: String,
    pub city: String,
    pub street_address: String,
    pub postal_code: String,
}

/// User entity as persisted by the document store
///
/// email, phone, countryCode and cnic are each globally unique across user
/// records; the store enforces that at write time, not this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// bcrypt hash of the raw password, always 60 characters as stored
    pub password: String,
    pub phone: String,
    pub country_code: String,
    pub cnic: String,
    pub address: Address,
    #[serde(default)]
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Assemble the record the store would persist from a validated payload:
    /// fresh id, stamped timestamps, role restricted to the enum with a
    /// developer default. Hashing happens upstream; `password_hash` is the
    /// already-hashed value.
    pub fn new(payload: NewUser, password_hash: String) -> Result<Self> {
        let role = match payload.role.as_deref() {
            Some(r) => r.parse().map_err(|e: String| anyhow::anyhow!(e))?,
            None => Role::default(),
        };

        let now = Utc::now();

        Ok(User {
            id: Uuid::new_v4(),
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password: password_hash,
            phone: payload.phone,
            country_code: payload.country_code,
            cnic: payload.cnic,
            address: payload.address,
            role,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Candidate user payload, prior to validation
///
/// Every field is optional so the validator can report missing required
/// fields by name instead of failing at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub country_code: Option<String>,
    pub cnic: Option<String>,
    pub address: Option<AddressInput>,
    pub role: Option<String>,
}

/// Candidate address payload, prior to validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressInput {
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
}

/// Validated user creation payload
///
/// `password` here is still the raw password; it passed the complexity
/// rules but has not been hashed. `role` stays free text because the
/// validator does not enforce the enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub country_code: String,
    pub cnic: String,
    pub address: Address,
    pub role: Option<String>,
}
