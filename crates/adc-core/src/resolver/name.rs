//! Name and unique-prefix resolution

use crate::credential::CredentialRecord;
use crate::error::{AdcError, AdcResult};
use tracing::debug;

/// Resolves a user-typed name against a credential listing
pub struct NameResolver;

impl NameResolver {
    /// Find the one record whose canonical name starts with `query`
    ///
    /// Matching is a case-sensitive byte prefix; an empty query matches
    /// everything. A record whose canonical name equals `query` exactly is
    /// returned even if `query` is also a prefix of other names.
    ///
    /// - one match: `Ok(Some(record))`
    /// - no match: `Ok(None)`
    /// - several matches: `AmbiguousName` listing them in input order
    pub fn resolve_by_prefix<'a>(
        records: &'a [CredentialRecord],
        query: &str,
    ) -> AdcResult<Option<&'a CredentialRecord>> {
        let candidates: Vec<(&CredentialRecord, String)> = records
            .iter()
            .map(|r| (r, r.canonical_name()))
            .filter(|(_, name)| name.starts_with(query))
            .collect();

        match candidates.as_slice() {
            [] => {
                debug!("No credential matches `{}`", query);
                Ok(None)
            }
            [(record, _)] => Ok(Some(*record)),
            _ => {
                let mut exact = candidates.iter().filter(|(_, name)| name == query);
                if let (Some((record, _)), None) = (exact.next(), exact.next()) {
                    return Ok(Some(*record));
                }
                Err(AdcError::ambiguous(
                    query,
                    candidates.into_iter().map(|(_, name)| name).collect(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::CredentialParser;

    fn service_account(key_id: &str) -> CredentialRecord {
        let json = format!(
            r#"{{"type": "service_account", "private_key_id": "{}", "client_email": "sa@p.iam.gserviceaccount.com"}}"#,
            key_id
        );
        CredentialParser::parse(json.as_bytes(), format!("/store/{}.json", key_id)).unwrap()
    }

    fn user_account() -> CredentialRecord {
        CredentialParser::parse(br#"{"type": "authorized_user"}"#, "/adc.json").unwrap()
    }

    #[test]
    fn test_full_names_resolve_to_themselves() {
        let records = vec![service_account("abc123"), service_account("xyz789"), user_account()];

        for record in &records {
            let found = NameResolver::resolve_by_prefix(&records, &record.canonical_name())
                .unwrap()
                .unwrap();
            assert_eq!(found, record);
        }
    }

    #[test]
    fn test_unique_prefix() {
        let records = vec![service_account("abc123"), service_account("xyz789")];
        let found = NameResolver::resolve_by_prefix(&records, "x").unwrap().unwrap();
        assert_eq!(found.canonical_name(), "xyz789");
    }

    #[test]
    fn test_ambiguous_prefix() {
        let records = vec![service_account("abc123"), service_account("abc456")];

        let err = NameResolver::resolve_by_prefix(&records, "abc").unwrap_err();
        match err {
            AdcError::AmbiguousName { query, candidates } => {
                assert_eq!(query, "abc");
                assert_eq!(candidates, vec!["abc123", "abc456"]);
            }
            other => panic!("expected AmbiguousName, got {other:?}"),
        }

        let found = NameResolver::resolve_by_prefix(&records, "abc123").unwrap().unwrap();
        assert_eq!(found.canonical_name(), "abc123");
    }

    #[test]
    fn test_exact_match_beats_longer_names() {
        let records = vec![service_account("abc"), service_account("abcd")];

        let found = NameResolver::resolve_by_prefix(&records, "abc").unwrap().unwrap();
        assert_eq!(found.canonical_name(), "abc");

        let found = NameResolver::resolve_by_prefix(&records, "abcd").unwrap().unwrap();
        assert_eq!(found.canonical_name(), "abcd");
    }

    #[test]
    fn test_duplicate_exact_names_stay_ambiguous() {
        let records = vec![service_account("abc"), service_account("abc")];
        let err = NameResolver::resolve_by_prefix(&records, "abc").unwrap_err();
        assert!(matches!(err, AdcError::AmbiguousName { .. }));
    }

    #[test]
    fn test_no_match_is_none() {
        let records = vec![service_account("abc123"), user_account()];
        assert!(NameResolver::resolve_by_prefix(&records, "zzz").unwrap().is_none());
        assert!(NameResolver::resolve_by_prefix(&[], "abc").unwrap().is_none());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let records = vec![service_account("abc123")];
        assert!(NameResolver::resolve_by_prefix(&records, "ABC").unwrap().is_none());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let single = vec![service_account("abc123")];
        let found = NameResolver::resolve_by_prefix(&single, "").unwrap().unwrap();
        assert_eq!(found.canonical_name(), "abc123");

        let several = vec![service_account("abc123"), user_account()];
        let err = NameResolver::resolve_by_prefix(&several, "").unwrap_err();
        assert!(matches!(err, AdcError::AmbiguousName { .. }));
    }
}
