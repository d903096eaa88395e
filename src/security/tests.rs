#![allow(clippy::module_inception)]

#[cfg(test)]
mod security_tests {
    use crate::common::common::current_time;
    use crate::security::security::*;

    #[test]
    fn test_generate_api_key_length() {
        let key = generate_secure_api_key();
        assert!(key.len() >= 32);
    }

    #[test]
    fn test_api_key_strength_valid() {
        assert!(validate_api_key_strength("ThisIsAVeryStrongKey123!@#abcXYZ456"));
        assert!(validate_api_key_strength("abc123DEF456ghi789JKLmnopqrsTUV1234!"));
    }

    #[test]
    fn test_api_key_weak() {
        assert!(!validate_api_key_strength("weak"));
        assert!(!validate_api_key_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"));
    }

    #[test]
    fn test_constant_time_eq_equal() {
        assert!(constant_time_eq("test_key", "test_key"));
    }

    #[test]
    fn test_constant_time_eq_not_equal() {
        assert!(!constant_time_eq("test_key", "different_key"));
    }

    #[test]
    fn test_constant_time_eq_different_length() {
        assert!(!constant_time_eq("test", "test_key"));
    }

    #[test]
    fn test_validate_file_path_reject_traversal() {
        assert!(validate_file_path("../../../etc/passwd").is_err());
        assert!(validate_file_path("./uploads").is_err());
        assert!(validate_file_path(".\\uploads").is_err());
    }

    #[test]
    fn test_validate_file_path_reject_absolute() {
        assert!(validate_file_path("/etc/passwd").is_err());
        assert!(validate_file_path("C:\\uploads\\file.bin").is_err());
    }

    #[test]
    fn test_validate_file_path_accept_valid() {
        assert!(validate_file_path("torrents/file.torrent").is_ok());
        assert!(validate_file_path("avatar.png").is_ok());
    }

    #[test]
    fn test_validate_username_accepts_valid() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Bob_42").is_ok());
        assert!(validate_username("abc").is_ok());
    }

    #[test]
    fn test_validate_username_rejects_invalid() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("a".repeat(21).as_str()).is_err());
        assert!(validate_username("no spaces").is_err());
        assert!(validate_username("bad!chars").is_err());
    }

    #[test]
    fn test_validate_email_accepts_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.domain.org").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_invalid() {
        assert!(validate_email("").is_err());
        assert!(validate_email("nodomain").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user name@example.com").is_err());
    }

    #[test]
    fn test_validate_password_bounds() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("a".repeat(73).as_str()).is_err());
    }

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = hash_password("correct horse battery", 4).unwrap();
        assert!(verify_password("correct horse battery", &hash));
        assert!(!verify_password("wrong password", &hash));
    }

    #[test]
    fn test_password_hashes_are_salted() {
        let first = hash_password("same password", 4).unwrap();
        let second = hash_password("same password", 4).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_password_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not a bcrypt hash"));
    }

    #[test]
    fn test_token_roundtrip() {
        let secret = "0123456789abcdef0123456789abcdef";
        let token = issue_token("some-user-id", secret, 3600).unwrap();
        let claims = verify_token(&token, secret).unwrap();
        assert_eq!(claims.sub, "some-user-id");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let token = issue_token("some-user-id", "0123456789abcdef0123456789abcdef", 3600).unwrap();
        assert!(verify_token(&token, "ffffffffffffffffffffffffffffffff").is_err());
    }

    #[test]
    fn test_token_rejects_expired() {
        use jsonwebtoken::{encode, EncodingKey, Header};
        let secret = "0123456789abcdef0123456789abcdef";
        let now = current_time();
        let claims = Claims {
            sub: String::from("some-user-id"),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap();
        assert!(verify_token(&token, secret).is_err());
    }

    #[test]
    fn test_token_rejects_garbage() {
        assert!(verify_token("definitely.not.ajwt", "0123456789abcdef0123456789abcdef").is_err());
    }
}
