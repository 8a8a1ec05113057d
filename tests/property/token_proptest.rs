//! Property-based tests for token issuing
//!
//! Uses proptest to generate arbitrary identities and check that the two
//! token kinds never cross over.

use std::time::Duration;

use chrono::Utc;
use proptest::prelude::*;
use uuid::Uuid;

use videohub::backend::auth::password::PasswordHash;
use videohub::backend::auth::{TokenIssuer, User};
use videohub::shared::AuthConfig;

fn issuer() -> TokenIssuer {
    TokenIssuer::new(&AuthConfig {
        access_secret: "prop-access".to_string(),
        access_expiry: Duration::from_secs(600),
        refresh_secret: "prop-refresh".to_string(),
        refresh_expiry: Duration::from_secs(86_400),
    })
}

fn user(username: String, email: String, full_name: String) -> User {
    User {
        id: Uuid::new_v4(),
        username,
        email,
        full_name,
        avatar: "https://cdn/a.png".to_string(),
        cover_image: None,
        watch_history: Vec::new(),
        password_hash: PasswordHash::from_stored("$2b$10$unused".to_string()),
        refresh_token: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_access_claims_carry_identity(
        username in "[a-z0-9_]{1,30}",
        email in "[a-z]{1,10}@[a-z]{1,10}\\.com",
        full_name in "\\PC{1,40}",
    ) {
        let issuer = issuer();
        let user = user(username, email, full_name);
        let pair = issuer.issue_pair(&user).unwrap();

        let claims = issuer.verify_access(&pair.access_token).unwrap();
        prop_assert_eq!(claims.id, user.id);
        prop_assert_eq!(&claims.username, &user.username);
        prop_assert_eq!(&claims.email, &user.email);
        prop_assert_eq!(&claims.full_name, &user.full_name);

        let refresh = issuer.verify_refresh(&pair.refresh_token).unwrap();
        prop_assert_eq!(refresh.id, user.id);
    }

    #[test]
    fn test_token_kinds_do_not_cross(username in "[a-z]{1,12}") {
        let issuer = issuer();
        let pair = issuer.issue_pair(&user(username, "x@y.com".to_string(), "X".to_string())).unwrap();

        prop_assert!(issuer.verify_refresh(&pair.access_token).is_err());
        prop_assert!(issuer.verify_access(&pair.refresh_token).is_err());
    }

    #[test]
    fn test_consecutive_refresh_tokens_differ(username in "[a-z]{1,12}") {
        let issuer = issuer();
        let user = user(username, "x@y.com".to_string(), "X".to_string());

        let first = issuer.issue_pair(&user).unwrap();
        let second = issuer.issue_pair(&user).unwrap();
        prop_assert_ne!(first.refresh_token, second.refresh_token);
    }
}
