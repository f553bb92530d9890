use serde::{Deserialize, Serialize};

/// The UTM parameters of a single tracked link. The four leading fields are
/// mandatory for a set to validate; the rest are optional. Unknown extra
/// parameters are accepted permissively and carried through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UtmParams {
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub campaign: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "trackingid")]
    pub tracking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl UtmParams {
    /// All parameter entries in canonical order: the standard keys first,
    /// then extras in insertion order. Empty values are included here;
    /// consumers that must omit them (the URL assembler) filter themselves.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = vec![
            ("utm_channel", self.channel.as_str()),
            ("utm_source", self.source.as_str()),
            ("utm_medium", self.medium.as_str()),
            ("utm_campaign", self.campaign.as_str()),
        ];
        if let Some(v) = self.content.as_deref() {
            out.push(("utm_content", v));
        }
        if let Some(v) = self.term.as_deref() {
            out.push(("utm_term", v));
        }
        if let Some(v) = self.tracking_id.as_deref() {
            out.push(("trackingid", v));
        }
        if let Some(v) = self.newsletter_slug.as_deref() {
            out.push(("newsletter_slug", v));
        }
        for (k, v) in &self.extra {
            out.push((k.as_str(), v.as_str()));
        }
        out
    }

    /// Look up a parameter by its wire name, standard or extra.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn push_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra.push((key.into(), value.into()));
    }
}

/// Descriptive annotations attached to a parameter set. None of these affect
/// URL construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UtmMetadata {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// A base URL plus UTM parameters plus metadata. Built transiently from user
/// input, validated once, then handed to the URL assembler and optionally to
/// the persistence layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UtmParameterSet {
    pub base_url: String,
    pub params: UtmParams,
    pub metadata: UtmMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> UtmParams {
        UtmParams {
            channel: "search".to_string(),
            source: "google".to_string(),
            medium: "cpc".to_string(),
            campaign: "verano_2025".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_entries_standard_order() {
        let params = sample_params();
        let keys: Vec<&str> = params.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["utm_channel", "utm_source", "utm_medium", "utm_campaign"]
        );
    }

    #[test]
    fn test_entries_extras_after_standard_keys() {
        let mut params = sample_params();
        params.term = Some("shoes".to_string());
        params.push_extra("promo_code", "SUMMER25");
        params.push_extra("variant", "b");

        let keys: Vec<&str> = params.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "utm_channel",
                "utm_source",
                "utm_medium",
                "utm_campaign",
                "utm_term",
                "promo_code",
                "variant"
            ]
        );
    }

    #[test]
    fn test_get_standard_and_extra() {
        let mut params = sample_params();
        params.push_extra("promo_code", "SUMMER25");

        assert_eq!(params.get("utm_source"), Some("google"));
        assert_eq!(params.get("promo_code"), Some("SUMMER25"));
        assert_eq!(params.get("utm_content"), None);
        assert_eq!(params.get("nonexistent"), None);
    }

    #[test]
    fn test_serde_round_trip_preserves_extras() {
        let mut set = UtmParameterSet {
            base_url: "https://example.com".to_string(),
            params: sample_params(),
            metadata: UtmMetadata {
                category: "promo".to_string(),
                team: "growth".to_string(),
                tags: vec!["summer".to_string(), "sale".to_string()],
                created_at: "2025-07-01 10:00:00".to_string(),
                ..Default::default()
            },
        };
        set.params.push_extra("promo_code", "SUMMER25");

        let json = serde_json::to_string(&set).unwrap();
        let back: UtmParameterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_tracking_id_serializes_as_wire_name() {
        let mut params = sample_params();
        params.tracking_id = Some("abc123".to_string());
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"trackingid\":\"abc123\""));
    }
}
