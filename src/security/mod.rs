//! Security primitives for authentication and input validation.
//!
//! This module provides the building blocks used by the API layer to
//! authenticate administrators and users and to validate untrusted input:
//!
//! - Admin API key generation and constant-time comparison
//! - Password hashing and verification (bcrypt)
//! - Session token issuance and verification (JWT, HS256)
//! - Username, email, password and file path validation
//!
//! # Example
//!
//! ```rust,ignore
//! use harbor_actix::security::security::{hash_password, verify_password};
//!
//! let hash = hash_password("hunter2hunter2", 12)?;
//! assert!(verify_password("hunter2hunter2", &hash));
//! ```

/// Key, token, password and input validation helpers.
pub mod security;

/// Unit tests for security functionality.
pub mod tests;
