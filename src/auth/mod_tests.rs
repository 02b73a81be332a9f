//! Tests for authentication header encoding.

use super::{AUTHORIZATION, AuthConfig, encode};

fn authorization(config: &AuthConfig) -> Option<String> {
    encode(config).get(AUTHORIZATION).cloned()
}

mod none {
    use super::*;

    #[test]
    fn emits_no_headers() {
        assert!(encode(&AuthConfig::None).is_empty());
    }
}

mod basic {
    use super::*;

    #[test]
    fn encodes_username_and_password() {
        assert_eq!(
            authorization(&AuthConfig::basic("user", "pass")).as_deref(),
            Some("Basic dXNlcjpwYXNz")
        );
    }

    #[test]
    fn username_only_uses_empty_password() {
        let config = AuthConfig::Basic {
            username: Some("token".to_string()),
            password: None,
        };

        // base64("token:")
        assert_eq!(authorization(&config).as_deref(), Some("Basic dG9rZW46"));
    }

    #[test]
    fn password_only_uses_empty_username() {
        let config = AuthConfig::Basic {
            username: Some(String::new()),
            password: Some("secret".to_string()),
        };

        // base64(":secret")
        assert_eq!(authorization(&config).as_deref(), Some("Basic OnNlY3JldA=="));
    }

    #[test]
    fn both_empty_emits_nothing() {
        let unset = AuthConfig::Basic {
            username: None,
            password: None,
        };
        assert!(encode(&unset).is_empty());
        assert!(encode(&AuthConfig::basic("", "")).is_empty());
    }
}

mod header {
    use super::*;

    #[test]
    fn emits_custom_header_when_complete() {
        let headers = encode(&AuthConfig::header("X-Api-Key", "secret"));

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-Api-Key").map(String::as_str), Some("secret"));
    }

    #[test]
    fn emits_nothing_when_half_specified() {
        let cases = [
            (Some("X-Api-Key"), None),
            (None, Some("secret")),
            (Some("X-Api-Key"), Some("")),
            (Some(""), Some("secret")),
            (None, None),
        ];

        for (name, value) in cases {
            let config = AuthConfig::Header {
                header_name: name.map(ToString::to_string),
                header_value: value.map(ToString::to_string),
            };
            assert!(
                encode(&config).is_empty(),
                "Expected no header for name={name:?}, value={value:?}"
            );
        }
    }

    #[test]
    fn malformed_values_pass_through_verbatim() {
        let headers = encode(&AuthConfig::header("Bad Name", "line\nbreak"));

        assert_eq!(headers.get("Bad Name").map(String::as_str), Some("line\nbreak"));
    }
}

mod jwt {
    use super::*;

    #[test]
    fn emits_bearer_token() {
        assert_eq!(
            authorization(&AuthConfig::jwt("eyJhbGciOi")).as_deref(),
            Some("Bearer eyJhbGciOi")
        );
    }

    #[test]
    fn empty_or_missing_token_emits_nothing() {
        assert!(encode(&AuthConfig::jwt("")).is_empty());
        assert!(encode(&AuthConfig::Jwt { token: None }).is_empty());
    }
}

mod config {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(AuthConfig::default(), AuthConfig::None);
    }

    #[test]
    fn scheme_names() {
        assert_eq!(AuthConfig::None.scheme(), "none");
        assert_eq!(AuthConfig::basic("a", "b").scheme(), "basic");
        assert_eq!(AuthConfig::header("a", "b").scheme(), "header");
        assert_eq!(AuthConfig::jwt("t").scheme(), "jwt");
    }

    #[test]
    fn debug_redacts_secrets() {
        let debug = format!(
            "{:?} {:?} {:?}",
            AuthConfig::basic("alice", "hunter2"),
            AuthConfig::header("X-Key", "s3cr3t"),
            AuthConfig::jwt("tok3n")
        );

        assert!(debug.contains("alice"));
        assert!(debug.contains("X-Key"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("s3cr3t"));
        assert!(!debug.contains("tok3n"));
    }

    #[test]
    fn deserializes_tagged_variants() {
        let config: AuthConfig =
            serde_json::from_str(r#"{"type":"basic","username":"u"}"#).unwrap();
        assert_eq!(
            config,
            AuthConfig::Basic {
                username: Some("u".to_string()),
                password: None,
            }
        );

        let config: AuthConfig = serde_json::from_str(r#"{"type":"none"}"#).unwrap();
        assert_eq!(config, AuthConfig::None);
    }

    #[test]
    fn accepts_camel_case_header_fields() {
        let config: AuthConfig = serde_json::from_str(
            r#"{"type":"header","headerName":"X-Key","headerValue":"v"}"#,
        )
        .unwrap();

        assert_eq!(config, AuthConfig::header("X-Key", "v"));
    }
}
