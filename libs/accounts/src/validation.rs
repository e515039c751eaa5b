//! User payload validation
//!
//! Pure checks over a candidate payload. Every violation is collected into
//! one [`ValidationError`] rather than stopping at the first, so a weak
//! password reports each broken rule with its own message.

use common::validation::{dialing_prefix, digits_only, email_shape, exact_length, max_length, require};
use common::{ValidationError, ValidationResult};
use tracing::debug;

use crate::models::{Address, AddressInput, NewUser, UserInput};

const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_MAX_LENGTH: usize = 30;
/// Characters accepted as the special-character class
const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// Validate a candidate user payload
///
/// Returns the normalized creation payload, or every field-level violation.
/// `role` is passed through unchecked; only the persisted record restricts
/// it to the enum.
pub fn validate_user(input: &UserInput) -> ValidationResult<NewUser> {
    let mut errors = ValidationError::new();

    let first_name = check_text(
        input.first_name.as_deref(),
        "firstName",
        "First name",
        20,
        &mut errors,
    );
    let last_name = check_text(
        input.last_name.as_deref(),
        "lastName",
        "Last name",
        20,
        &mut errors,
    );
    let email = check_email(input.email.as_deref(), &mut errors);
    let password = check_password(input.password.as_deref(), &mut errors);
    let phone = check_fixed_digits(input.phone.as_deref(), "phone", "Phone", 10, &mut errors);
    let country_code = check_country_code(input.country_code.as_deref(), &mut errors);
    let cnic = check_fixed_digits(input.cnic.as_deref(), "cnic", "CNIC", 13, &mut errors);
    let address = match &input.address {
        Some(address) => check_address(address, &mut errors),
        None => {
            errors.push("address", "Address is required");
            None
        }
    };

    match (
        first_name,
        last_name,
        email,
        password,
        phone,
        country_code,
        cnic,
        address,
    ) {
        (
            Some(first_name),
            Some(last_name),
            Some(email),
            Some(password),
            Some(phone),
            Some(country_code),
            Some(cnic),
            Some(address),
        ) if errors.is_empty() => Ok(NewUser {
            first_name,
            last_name,
            email,
            password,
            phone,
            country_code,
            cnic,
            address,
            role: input.role.clone(),
        }),
        _ => {
            debug!(violations = errors.errors.len(), "Rejected user payload");
            Err(errors)
        }
    }
}

/// Required free-text field with a maximum length
fn check_text(
    value: Option<&str>,
    field: &str,
    label: &str,
    max: usize,
    errors: &mut ValidationError,
) -> Option<String> {
    match require(value, label) {
        Ok(v) => {
            if let Err(msg) = max_length(v, max, label) {
                errors.push(field, msg);
            }
            Some(v.to_string())
        }
        Err(msg) => {
            errors.push(field, msg);
            None
        }
    }
}

fn check_email(value: Option<&str>, errors: &mut ValidationError) -> Option<String> {
    match require(value, "Email") {
        Ok(v) => {
            if let Err(msg) = email_shape(v) {
                errors.push("email", msg);
            }
            Some(v.to_string())
        }
        Err(msg) => {
            errors.push("email", msg);
            None
        }
    }
}

/// Password complexity rules, each with its own message
fn check_password(value: Option<&str>, errors: &mut ValidationError) -> Option<String> {
    let password = match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            errors.push("password", "Password is required");
            return None;
        }
    };

    let length = password.chars().count();

    if length < PASSWORD_MIN_LENGTH {
        errors.push("password", "Password must be at least 8 characters long");
    }

    if length > PASSWORD_MAX_LENGTH {
        errors.push("password", "Password cannot be longer than 30 characters");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(
            "password",
            "Password must contain at least one uppercase letter",
        );
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("password", "Password must contain at least one number");
    }

    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        errors.push(
            "password",
            "Password must contain at least one special character",
        );
    }

    Some(password.to_string())
}

/// Required field of an exact length, digits only
fn check_fixed_digits(
    value: Option<&str>,
    field: &str,
    label: &str,
    length: usize,
    errors: &mut ValidationError,
) -> Option<String> {
    match require(value, label) {
        Ok(v) => {
            if let Err(msg) = exact_length(v, length, label) {
                errors.push(field, msg);
            }
            if let Err(msg) = digits_only(v, label) {
                errors.push(field, msg);
            }
            Some(v.to_string())
        }
        Err(msg) => {
            errors.push(field, msg);
            None
        }
    }
}

fn check_country_code(value: Option<&str>, errors: &mut ValidationError) -> Option<String> {
    match require(value, "Country code") {
        Ok(v) => {
            if let Err(msg) = exact_length(v, 5, "Country code") {
                errors.push("countryCode", msg);
            }
            if let Err(msg) = dialing_prefix(v, "Country code") {
                errors.push("countryCode", msg);
            }
            Some(v.to_string())
        }
        Err(msg) => {
            errors.push("countryCode", msg);
            None
        }
    }
}

fn check_address(input: &AddressInput, errors: &mut ValidationError) -> Option<Address> {
    let country = check_text(
        input.country.as_deref(),
        "address.country",
        "Country",
        50,
        errors,
    );
    let state = check_text(input.state.as_deref(), "address.state", "State", 50, errors);
    let city = check_text(input.city.as_deref(), "address.city", "City", 50, errors);
    let street_address = check_text(
        input.street_address.as_deref(),
        "address.streetAddress",
        "Street address",
        100,
        errors,
    );
    let postal_code = match require(input.postal_code.as_deref(), "Postal code") {
        Ok(v) => {
            if let Err(msg) = digits_only(v, "Postal code") {
                errors.push("address.postalCode", msg);
            }
            if let Err(msg) = max_length(v, 10, "Postal code") {
                errors.push("address.postalCode", msg);
            }
            Some(v.to_string())
        }
        Err(msg) => {
            errors.push("address.postalCode", msg);
            None
        }
    };

    match (country, state, city, street_address, postal_code) {
        (Some(country), Some(state), Some(city), Some(street_address), Some(postal_code)) => {
            Some(Address {
                country,
                state,
                city,
                street_address,
                postal_code,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressInput;

    fn valid_input() -> UserInput {
        UserInput {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            password: Some("Abcdefg1!".to_string()),
            phone: Some("1234567890".to_string()),
            country_code: Some("+9212".to_string()),
            cnic: Some("1234567890123".to_string()),
            address: Some(AddressInput {
                country: Some("Pakistan".to_string()),
                state: Some("Sindh".to_string()),
                city: Some("Karachi".to_string()),
                street_address: Some("12 Shahrah-e-Faisal".to_string()),
                postal_code: Some("74000".to_string()),
            }),
            role: None,
        }
    }

    fn fields_of(err: &ValidationError) -> Vec<&str> {
        err.errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_user_round_trips_unchanged() {
        let input = valid_input();
        let new_user = validate_user(&input).expect("Valid payload rejected");
        assert_eq!(new_user.first_name, "Ada");
        assert_eq!(new_user.email, "ada@example.com");
        assert_eq!(new_user.password, "Abcdefg1!");
        assert_eq!(new_user.address.postal_code, "74000");
        assert_eq!(new_user.role, None);
    }

    #[test]
    fn test_each_missing_required_field_is_named() {
        let cases: [(fn(&mut UserInput), &str); 8] = [
            (|i| i.first_name = None, "firstName"),
            (|i| i.last_name = None, "lastName"),
            (|i| i.email = None, "email"),
            (|i| i.password = None, "password"),
            (|i| i.phone = None, "phone"),
            (|i| i.country_code = None, "countryCode"),
            (|i| i.cnic = None, "cnic"),
            (|i| i.address = None, "address"),
        ];
        for (clear, field) in cases {
            let mut input = valid_input();
            clear(&mut input);
            let err = validate_user(&input).unwrap_err();
            assert!(
                fields_of(&err).contains(&field),
                "missing {} not reported",
                field
            );
        }
    }

    #[test]
    fn test_name_length_limits() {
        let mut input = valid_input();
        input.first_name = Some("a".repeat(21));
        let err = validate_user(&input).unwrap_err();
        assert_eq!(
            err.messages_for("firstName"),
            vec!["First name must be at most 20 characters long"]
        );

        let mut input = valid_input();
        input.first_name = Some("a".repeat(20));
        assert!(validate_user(&input).is_ok());
    }

    #[test]
    fn test_password_minimum_length_message() {
        let mut input = valid_input();
        input.password = Some("Ab1!".to_string());
        let err = validate_user(&input).unwrap_err();
        assert_eq!(
            err.messages_for("password"),
            vec!["Password must be at least 8 characters long"]
        );
    }

    #[test]
    fn test_password_maximum_length_message() {
        let mut input = valid_input();
        input.password = Some(format!("Ab1!{}", "a".repeat(30)));
        let err = validate_user(&input).unwrap_err();
        assert_eq!(
            err.messages_for("password"),
            vec!["Password cannot be longer than 30 characters"]
        );
    }

    #[test]
    fn test_password_missing_uppercase() {
        let mut input = valid_input();
        input.password = Some("abcdefg1!".to_string());
        let err = validate_user(&input).unwrap_err();
        assert_eq!(
            err.messages_for("password"),
            vec!["Password must contain at least one uppercase letter"]
        );
    }

    #[test]
    fn test_password_missing_number() {
        let mut input = valid_input();
        input.password = Some("Abcdefgh!".to_string());
        let err = validate_user(&input).unwrap_err();
        assert_eq!(
            err.messages_for("password"),
            vec!["Password must contain at least one number"]
        );
    }

    #[test]
    fn test_password_missing_special_character() {
        let mut input = valid_input();
        input.password = Some("Abcdefg12".to_string());
        let err = validate_user(&input).unwrap_err();
        assert_eq!(
            err.messages_for("password"),
            vec!["Password must contain at least one special character"]
        );
    }

    #[test]
    fn test_weak_password_reports_every_broken_rule() {
        let mut input = valid_input();
        input.password = Some("abc".to_string());
        let err = validate_user(&input).unwrap_err();
        let messages = err.messages_for("password");
        assert_eq!(messages.len(), 4);
        assert!(messages.contains(&"Password must be at least 8 characters long"));
        assert!(messages.contains(&"Password must contain at least one uppercase letter"));
        assert!(messages.contains(&"Password must contain at least one number"));
        assert!(messages.contains(&"Password must contain at least one special character"));
    }

    #[test]
    fn test_password_required_message() {
        let mut input = valid_input();
        input.password = Some(String::new());
        let err = validate_user(&input).unwrap_err();
        assert_eq!(err.messages_for("password"), vec!["Password is required"]);
    }

    #[test]
    fn test_phone_shape() {
        let mut input = valid_input();
        input.phone = Some("1234567890".to_string());
        assert!(validate_user(&input).is_ok());

        input.phone = Some("12345".to_string());
        let err = validate_user(&input).unwrap_err();
        assert_eq!(
            err.messages_for("phone"),
            vec!["Phone must be exactly 10 characters long"]
        );

        input.phone = Some("12345abcde".to_string());
        let err = validate_user(&input).unwrap_err();
        assert_eq!(
            err.messages_for("phone"),
            vec!["Phone can only contain digits"]
        );
    }

    #[test]
    fn test_country_code_shape() {
        let mut input = valid_input();
        input.country_code = Some("+9212".to_string());
        assert!(validate_user(&input).is_ok());

        input.country_code = Some("9212".to_string());
        let err = validate_user(&input).unwrap_err();
        let messages = err.messages_for("countryCode");
        assert!(messages.contains(&"Country code must be exactly 5 characters long"));
        assert!(messages.contains(&"Country code must be a + followed by digits"));
    }

    #[test]
    fn test_cnic_shape() {
        let mut input = valid_input();
        input.cnic = Some("1234567890123".to_string());
        assert!(validate_user(&input).is_ok());

        input.cnic = Some("12345".to_string());
        let err = validate_user(&input).unwrap_err();
        assert_eq!(
            err.messages_for("cnic"),
            vec!["CNIC must be exactly 13 characters long"]
        );
    }

    #[test]
    fn test_address_subfields_use_dotted_paths() {
        let mut input = valid_input();
        input.address = Some(AddressInput {
            country: None,
            state: Some("Sindh".to_string()),
            city: Some("Karachi".to_string()),
            street_address: Some("s".repeat(101)),
            postal_code: Some("74ooo".to_string()),
        });
        let err = validate_user(&input).unwrap_err();
        assert_eq!(
            err.messages_for("address.country"),
            vec!["Country is required"]
        );
        assert_eq!(
            err.messages_for("address.streetAddress"),
            vec!["Street address must be at most 100 characters long"]
        );
        assert_eq!(
            err.messages_for("address.postalCode"),
            vec!["Postal code can only contain digits"]
        );
    }

    #[test]
    fn test_role_is_not_restricted_by_the_validator() {
        let mut input = valid_input();
        input.role = Some("anything goes".to_string());
        let new_user = validate_user(&input).expect("Free-text role rejected");
        assert_eq!(new_user.role.as_deref(), Some("anything goes"));
    }

    #[test]
    fn test_violations_are_collected_across_fields() {
        let mut input = valid_input();
        input.email = Some("not-an-email".to_string());
        input.phone = Some("12345".to_string());
        let err = validate_user(&input).unwrap_err();
        assert_eq!(err.messages_for("email"), vec!["Invalid email format"]);
        assert_eq!(
            err.messages_for("phone"),
            vec!["Phone must be exactly 10 characters long"]
        );
    }
}
