use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::RngExt;
use serde::{Deserialize, Serialize};
use crate::common::common::current_time;
use crate::common::structs::custom_error::CustomError;

pub const MIN_API_KEY_LENGTH: usize = 32;
pub const DEFAULT_API_KEY_ENTROPY_BYTES: usize = 32;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 20;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 72;
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Session token payload, signed with the configured `jwt_secret`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
}

pub fn generate_secure_api_key() -> String {
    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..DEFAULT_API_KEY_ENTROPY_BYTES).map(|_| rng.random()).collect();
    use base64::prelude::*;
    BASE64_URL_SAFE_NO_PAD.encode(&bytes)
}

pub fn validate_api_key_strength(api_key: &str) -> bool {
    if api_key.len() < MIN_API_KEY_LENGTH {
        return false;
    }
    let has_lower = api_key.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = api_key.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = api_key.chars().any(|c| c.is_ascii_digit());
    let has_special = api_key.chars().any(|c| !c.is_alphanumeric());
    let variety_count = [has_lower, has_upper, has_digit, has_special]
        .iter()
        .filter(|&&x| x)
        .count();
    variety_count >= 2
}

pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    let mut result = 0u8;
    for (x, y) in a_bytes.iter().zip(b_bytes.iter()) {
        result |= x ^ y;
    }
    result == 0
}

pub fn validate_file_path(path: &str) -> Result<(), CustomError> {
    if path.contains("..") || path.contains("./") || path.contains(".\\") {
        return Err(CustomError::new("Path traversal detected in file path"));
    }
    if path.starts_with('/') || (path.len() > 2 && path[1..].starts_with(":\\")) {
        return Err(CustomError::new("Absolute paths not allowed in storage configuration"));
    }
    if path.contains('\0') {
        return Err(CustomError::new("Null byte detected in file path"));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), CustomError> {
    if username.len() < MIN_USERNAME_LENGTH || username.len() > MAX_USERNAME_LENGTH {
        return Err(CustomError::new("Username must be between 3 and 20 characters"));
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CustomError::new("Username may only contain letters, digits and underscores"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), CustomError> {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return Err(CustomError::new("Email address has an invalid length"));
    }
    if email.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(CustomError::new("Email address contains invalid characters"));
    }
    match email.split_once('@') {
        None => Err(CustomError::new("Email address is missing the @ separator")),
        Some((local, domain)) => {
            if local.is_empty() || domain.is_empty() || domain.contains('@') {
                return Err(CustomError::new("Email address is malformed"));
            }
            if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
                return Err(CustomError::new("Email domain is malformed"));
            }
            Ok(())
        }
    }
}

pub fn validate_password(password: &str) -> Result<(), CustomError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CustomError::new("Password must be at least 8 characters long"));
    }
    // bcrypt silently truncates input beyond 72 bytes
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(CustomError::new("Password exceeds maximum length"));
    }
    Ok(())
}

pub fn hash_password(password: &str, cost: u32) -> Result<String, CustomError> {
    bcrypt::hash(password, cost).map_err(|_| CustomError::new("Unable to hash password"))
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

pub fn issue_token(user_id: &str, secret: &str, validity_secs: u64) -> Result<String, CustomError> {
    let now = current_time();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + validity_secs,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|_| CustomError::new("Unable to sign session token"))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, CustomError> {
    match decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default()) {
        Ok(data) => Ok(data.claims),
        Err(_) => Err(CustomError::new("Invalid or expired session token"))
    }
}
