use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::time_utils::current_timestamp;
use crate::remote::records::RemoteHistory;
use crate::remote::{get_http_client, RemoteError};

const USAGE_TABLE: &str = "utm_history";

/// One row of per-record usage tracking: how often and when a stored UTM
/// link was reused.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub utm_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub used_at: String,
    pub used_count: i64,
}

impl RemoteHistory {
    /// Count one use of a stored record: increments the existing usage row
    /// or creates it on first use.
    pub fn record_usage(&self, utm_id: &str) -> Result<UsageRecord, RemoteError> {
        let session = self.session()?;

        let existing: Vec<UsageRecord> = {
            let response = get_http_client()
                .get(self.table_url(USAGE_TABLE))
                .header("apikey", self.api_key())
                .header("Authorization", format!("Bearer {}", session.access_token))
                .query(&[
                    ("select", "*".to_string()),
                    ("utm_id", format!("eq.{}", utm_id)),
                    ("user_id", format!("eq.{}", session.user.id)),
                ])
                .send()?;
            if !response.status().is_success() {
                return Err(RemoteError::Storage(response.status().to_string()));
            }
            response
                .json()
                .map_err(|e| RemoteError::Storage(e.to_string()))?
        };

        let now = current_timestamp();
        let response = if let Some(row) = existing.first() {
            debug!(
                "Incrementing usage of {} to {}",
                utm_id,
                row.used_count + 1
            );
            get_http_client()
                .patch(self.table_url(USAGE_TABLE))
                .header("apikey", self.api_key())
                .header("Authorization", format!("Bearer {}", session.access_token))
                .header("Prefer", "return=representation")
                .query(&[("id", format!("eq.{}", row.id.as_deref().unwrap_or_default()))])
                .json(&serde_json::json!({
                    "used_count": row.used_count + 1,
                    "used_at": now,
                }))
                .send()?
        } else {
            debug!("Recording first usage of {}", utm_id);
            let row = UsageRecord {
                id: None,
                utm_id: utm_id.to_string(),
                user_id: Some(session.user.id.clone()),
                used_at: now,
                used_count: 1,
            };
            get_http_client()
                .post(self.table_url(USAGE_TABLE))
                .header("apikey", self.api_key())
                .header("Authorization", format!("Bearer {}", session.access_token))
                .header("Prefer", "return=representation")
                .json(&vec![row])
                .send()?
        };

        if !response.status().is_success() {
            return Err(RemoteError::Storage(response.status().to_string()));
        }
        let mut rows: Vec<UsageRecord> = response
            .json()
            .map_err(|e| RemoteError::Storage(e.to_string()))?;
        rows.pop()
            .ok_or_else(|| RemoteError::Storage("empty usage response".to_string()))
    }

    /// The user's usage rows, most recently used first.
    pub fn usage_history(&self) -> Result<Vec<UsageRecord>, RemoteError> {
        let session = self.session()?;

        let response = get_http_client()
            .get(self.table_url(USAGE_TABLE))
            .header("apikey", self.api_key())
            .header("Authorization", format!("Bearer {}", session.access_token))
            .query(&[
                ("select", "*".to_string()),
                ("user_id", format!("eq.{}", session.user.id)),
                ("order", "used_at.desc".to_string()),
            ])
            .send()?;
        if !response.status().is_success() {
            return Err(RemoteError::Storage(response.status().to_string()));
        }
        response
            .json()
            .map_err(|e| RemoteError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthSession, AuthUser};

    fn remote(url: &str) -> RemoteHistory {
        RemoteHistory::new(
            url,
            "key",
            Some(AuthSession {
                access_token: "token123".to_string(),
                user: AuthUser {
                    id: "user-1".to_string(),
                    email: None,
                },
            }),
        )
    }

    #[test]
    fn test_record_usage_first_use_inserts() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rest/v1/utm_history")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create();
        let insert = server
            .mock("POST", "/rest/v1/utm_history")
            .with_status(201)
            .with_body(r#"[{"id": "use-1", "utm_id": "rec-1", "used_at": "2025-07-01 10:00:00", "used_count": 1}]"#)
            .create();

        let usage = remote(&server.url()).record_usage("rec-1").unwrap();
        assert_eq!(usage.used_count, 1);
        insert.assert();
    }

    #[test]
    fn test_record_usage_repeat_use_increments() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rest/v1/utm_history")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"id": "use-1", "utm_id": "rec-1", "used_at": "2025-07-01 10:00:00", "used_count": 3}]"#)
            .create();
        let update = server
            .mock("PATCH", "/rest/v1/utm_history")
            .match_query(mockito::Matcher::UrlEncoded("id".into(), "eq.use-1".into()))
            .with_status(200)
            .with_body(r#"[{"id": "use-1", "utm_id": "rec-1", "used_at": "2025-07-02 09:00:00", "used_count": 4}]"#)
            .create();

        let usage = remote(&server.url()).record_usage("rec-1").unwrap();
        assert_eq!(usage.used_count, 4);
        update.assert();
    }

    #[test]
    fn test_usage_history_requires_session() {
        let remote = RemoteHistory::new("https://project.supabase.co", "key", None);
        assert!(matches!(
            remote.usage_history(),
            Err(RemoteError::NotAuthenticated)
        ));
    }
}
