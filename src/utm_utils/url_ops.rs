use thiserror::Error;
use url::Url;

use crate::common::types::UtmParams;

#[derive(Debug, Error)]
pub enum UtmUrlError {
    #[error("base URL '{0}' is not a valid absolute URL")]
    MalformedBase(String),
}

/// Append every non-empty UTM parameter to `base_url` as a percent-encoded
/// query parameter, in the canonical entry order of the set. Query
/// parameters already present on the base URL are preserved.
///
/// Fails only when the base URL does not parse as an absolute URL; that is
/// never silently swallowed into an output string.
pub fn build_utm_url(base_url: &str, params: &UtmParams) -> Result<String, UtmUrlError> {
    let mut url =
        Url::parse(base_url).map_err(|_| UtmUrlError::MalformedBase(base_url.to_string()))?;

    let entries: Vec<(&str, &str)> = params
        .entries()
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();

    // query_pairs_mut leaves a dangling '?' behind when nothing is appended
    if !entries.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in entries {
            pairs.append_pair(key, value);
        }
    }

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> UtmParams {
        UtmParams {
            channel: "search".to_string(),
            source: "google".to_string(),
            medium: "cpc".to_string(),
            campaign: "verano_2025".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_utm_url_full_set() {
        let url = build_utm_url("https://example.com", &base_params()).unwrap();
        assert_eq!(
            url,
            "https://example.com/?utm_channel=search&utm_source=google&utm_medium=cpc&utm_campaign=verano_2025"
        );
    }

    #[test]
    fn test_build_utm_url_omits_empty_values() {
        let params = UtmParams {
            source: "google".to_string(),
            ..Default::default()
        };
        let url = build_utm_url("https://example.com", &params).unwrap();
        assert!(url.contains("utm_source=google"));
        assert!(!url.contains("utm_medium"));
        assert!(!url.contains("utm_channel"));
        assert!(!url.contains("utm_campaign"));
    }

    #[test]
    fn test_build_utm_url_preserves_existing_query() {
        let url = build_utm_url(
            "https://example.com/?ref=abc",
            &UtmParams {
                source: "x".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(url.contains("ref=abc"));
        assert!(url.contains("utm_source=x"));
    }

    #[test]
    fn test_build_utm_url_percent_encodes_values() {
        let params = UtmParams {
            source: "google ads".to_string(),
            term: Some("running shoes".to_string()),
            ..Default::default()
        };
        let url = build_utm_url("https://example.com", &params).unwrap();
        assert!(url.contains("utm_source=google+ads") || url.contains("utm_source=google%20ads"));
        assert!(!url.contains("utm_term=running shoes"));
    }

    #[test]
    fn test_build_utm_url_appends_extras_last() {
        let mut params = base_params();
        params.push_extra("promo_code", "SUMMER25");
        let url = build_utm_url("https://example.com", &params).unwrap();
        assert!(url.ends_with("promo_code=SUMMER25"));
    }

    #[test]
    fn test_build_utm_url_rejects_malformed_base() {
        let err = build_utm_url("not a url", &base_params()).unwrap_err();
        assert!(matches!(err, UtmUrlError::MalformedBase(_)));

        // relative paths are not absolute URLs either
        let err = build_utm_url("/landing/page", &base_params()).unwrap_err();
        assert!(matches!(err, UtmUrlError::MalformedBase(_)));
    }

    #[test]
    fn test_build_utm_url_round_trip() {
        let mut params = base_params();
        params.term = Some("running shoes".to_string());
        params.push_extra("promo_code", "SUMMER25");

        let url = build_utm_url("https://example.com/landing", &params).unwrap();
        let parsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let expected: Vec<(String, String)> = params
            .entries()
            .into_iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(pairs, expected);
    }
}
