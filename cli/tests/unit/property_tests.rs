//! Property-based tests for critical parsing and rendering logic.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use nodeboot_cli::application::services::authorized_keys::extract_keys;
use nodeboot_cli::domain::config::{validate_config_key, validate_config_value};
use nodeboot_cli::domain::manifest::render_manifest;
use nodeboot_cli::domain::server_url::server_url_from_env_data;

use crate::mocks::{CannedFetcher, ED25519_BARE, ED25519_OPS};

// ============================================================================
// extract_keys() property tests
// ============================================================================

proptest! {
    /// Result length equals the number of well-formed lines, in source order.
    #[test]
    fn prop_key_count_matches_valid_lines(picks in prop::collection::vec(any::<bool>(), 1..12)) {
        let lines: Vec<&str> = picks
            .iter()
            .map(|&ops| if ops { ED25519_OPS } else { ED25519_BARE })
            .collect();
        let fetcher = CannedFetcher::body(&lines.join("\n"));
        let keys = extract_keys(&fetcher, "http://keys.test/").expect("all lines valid");
        prop_assert_eq!(keys.len(), picks.len());
        for (key, &ops) in keys.iter().zip(&picks) {
            prop_assert_eq!(key.comment() == "ops@node-a", ops);
        }
    }

    /// Text without any key-shaped line never yields a key.
    #[test]
    fn prop_keyless_text_is_no_key_found(body in "[a-zA-Z0-9 =#\n]{0,200}") {
        let fetcher = CannedFetcher::body(&body);
        let err = extract_keys(&fetcher, "http://keys.test/").expect_err("no valid keys");
        prop_assert_eq!(err.to_string(), "ssh: no key found");
    }
}

// ============================================================================
// server_url_from_env_data() property tests
// ============================================================================

proptest! {
    /// Unrelated assignments around K3S_URL never change the result.
    #[test]
    fn prop_unrelated_env_lines_are_ignored(
        before in prop::collection::vec("[A-J]{1,8}=[a-z0-9]{0,8}", 0..5),
        after in prop::collection::vec("[L-Z]{1,8}=[a-z0-9]{0,8}", 0..5),
    ) {
        let mut lines = before.clone();
        lines.push("K3S_URL=https://172.0.0.1:6443".to_string());
        lines.extend(after);
        let url = server_url_from_env_data(lines.join("\n").as_bytes())
            .expect("K3S_URL present");
        prop_assert_eq!(url, "https://172.0.0.1:8443");
    }

    /// Any IPv4 K3S_URL keeps its host and lands on port 8443.
    #[test]
    fn prop_ipv4_host_preserved(a in 1u8..=254, b in any::<u8>(), c in any::<u8>(), d in 1u8..=254) {
        let host = format!("{a}.{b}.{c}.{d}");
        let data = format!("K3S_URL=https://{host}:6443\n");
        let url = server_url_from_env_data(data.as_bytes()).expect("valid url");
        prop_assert_eq!(url, format!("https://{host}:8443"));
    }
}

// ============================================================================
// render_manifest() property tests
// ============================================================================

proptest! {
    /// One line per pair, each ending in a newline, in insertion order.
    #[test]
    fn prop_manifest_one_line_per_pair(
        pairs in prop::collection::vec(("[a-z_]{1,10}", "[a-zA-Z0-9 .:/-]{0,20}"), 0..10)
    ) {
        let text = render_manifest(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), pairs.len());
        prop_assert!(pairs.is_empty() || text.ends_with('\n'));
        for (line, (k, v)) in lines.iter().zip(&pairs) {
            prop_assert_eq!(*line, format!("{k}: \"{v}\""));
        }
    }
}

// ============================================================================
// validate_config_key() and validate_config_value() property tests
// ============================================================================

proptest! {
    /// Arbitrary keys (not in whitelist) are rejected.
    #[test]
    fn prop_arbitrary_keys_rejected(key in "[a-z]{1,20}\\.[a-z_]{1,20}") {
        if key != "fetch.timeout_secs" && key != "status.phase_file" {
            prop_assert!(validate_config_key(&key).is_err(), "accepted invalid key: {key}");
        }
    }

    /// Timeouts inside 1..=300 are accepted, everything above is rejected.
    #[test]
    fn prop_timeout_range(secs in 0u64..1000) {
        let ok = validate_config_value("fetch.timeout_secs", &secs.to_string()).is_ok();
        prop_assert_eq!(ok, (1..=300).contains(&secs));
    }

    /// Relative phase file paths are rejected.
    #[test]
    fn prop_relative_phase_file_rejected(path in "[a-z]{1,10}(/[a-z]{1,10}){0,3}") {
        prop_assert!(validate_config_value("status.phase_file", &path).is_err());
    }
}
