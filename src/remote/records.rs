use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::auth::AuthSession;
use crate::common::time_utils::current_timestamp;
use crate::common::types::UtmParameterSet;
use crate::remote::{get_http_client, RemoteError};

const RECORDS_TABLE: &str = "utm_records";

/// A stored UTM record as the backend table holds it: flattened standard
/// parameters plus the assembled URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UtmRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub campaign: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub full_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl UtmRecord {
    /// View a stored row as a parameter set for display and export.
    pub fn into_set(self) -> UtmParameterSet {
        use crate::common::types::{UtmMetadata, UtmParams};

        UtmParameterSet {
            base_url: self.base_url,
            params: UtmParams {
                channel: self.channel,
                source: self.source,
                medium: self.medium,
                campaign: self.campaign,
                content: self.content,
                term: self.term,
                ..Default::default()
            },
            metadata: UtmMetadata {
                notes: self.description,
                created_at: self.created_at.unwrap_or_default(),
                ..Default::default()
            },
        }
    }

    pub fn from_set(set: &UtmParameterSet, full_url: &str) -> Self {
        UtmRecord {
            base_url: set.base_url.clone(),
            channel: set.params.channel.clone(),
            source: set.params.source.clone(),
            medium: set.params.medium.clone(),
            campaign: set.params.campaign.clone(),
            term: set.params.term.clone(),
            content: set.params.content.clone(),
            full_url: full_url.to_string(),
            description: set.metadata.notes.clone(),
            ..Default::default()
        }
    }
}

/// Partial update of a stored record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    pub updated_at: String,
}

/// REST client for the hosted record store. Every operation requires an
/// authenticated session and scopes queries to that user.
pub struct RemoteHistory {
    api_base_url: String,
    api_key: String,
    session: Option<AuthSession>,
}

impl RemoteHistory {
    pub fn new(api_base_url: &str, api_key: &str, session: Option<AuthSession>) -> Self {
        RemoteHistory {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            session,
        }
    }

    pub(crate) fn session(&self) -> Result<&AuthSession, RemoteError> {
        self.session.as_ref().ok_or(RemoteError::NotAuthenticated)
    }

    pub(crate) fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.api_base_url, table)
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    fn check_status(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, RemoteError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(RemoteError::Storage(format!("{}: {}", status, body)));
        }
        Ok(response)
    }

    /// Store a record for the signed-in user. Returns the stored row,
    /// including the id the backend assigned.
    pub fn save_record(&self, record: &UtmRecord) -> Result<UtmRecord, RemoteError> {
        let session = self.session()?;

        let now = current_timestamp();
        let mut row = record.clone();
        row.user_id = Some(session.user.id.clone());
        row.created_at = Some(now.clone());
        row.updated_at = Some(now);

        debug!("Saving UTM record for campaign '{}'", row.campaign);
        let response = get_http_client()
            .post(self.table_url(RECORDS_TABLE))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", session.access_token))
            .header("Prefer", "return=representation")
            .json(&vec![row])
            .send()?;
        let response = Self::check_status(response)?;

        let mut rows: Vec<UtmRecord> = response
            .json()
            .map_err(|e| RemoteError::Storage(e.to_string()))?;
        let stored = rows
            .pop()
            .ok_or_else(|| RemoteError::Storage("empty insert response".to_string()))?;

        info!("Stored UTM record {}", stored.id.as_deref().unwrap_or("?"));
        Ok(stored)
    }

    /// All records of the signed-in user, newest first.
    pub fn list_records(&self) -> Result<Vec<UtmRecord>, RemoteError> {
        self.fetch_records(false)
    }

    /// Records the user marked as favorites, newest first.
    pub fn list_favorites(&self) -> Result<Vec<UtmRecord>, RemoteError> {
        self.fetch_records(true)
    }

    fn fetch_records(&self, favorites_only: bool) -> Result<Vec<UtmRecord>, RemoteError> {
        let session = self.session()?;

        let mut query = vec![
            ("select".to_string(), "*".to_string()),
            ("user_id".to_string(), format!("eq.{}", session.user.id)),
            ("order".to_string(), "created_at.desc".to_string()),
        ];
        if favorites_only {
            query.push(("is_favorite".to_string(), "eq.true".to_string()));
        }

        let response = get_http_client()
            .get(self.table_url(RECORDS_TABLE))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", session.access_token))
            .query(&query)
            .send()?;
        let response = Self::check_status(response)?;

        response
            .json()
            .map_err(|e| RemoteError::Storage(e.to_string()))
    }

    /// Apply a partial update to one of the user's records.
    pub fn update_record(&self, id: &str, update: &RecordUpdate) -> Result<UtmRecord, RemoteError> {
        let session = self.session()?;

        let response = get_http_client()
            .patch(self.table_url(RECORDS_TABLE))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", session.access_token))
            .header("Prefer", "return=representation")
            .query(&[
                ("id", format!("eq.{}", id)),
                ("user_id", format!("eq.{}", session.user.id)),
            ])
            .json(update)
            .send()?;
        let response = Self::check_status(response)?;

        let mut rows: Vec<UtmRecord> = response
            .json()
            .map_err(|e| RemoteError::Storage(e.to_string()))?;
        rows.pop()
            .ok_or_else(|| RemoteError::Storage(format!("record {} not found", id)))
    }

    /// Delete one of the user's records.
    pub fn delete_record(&self, id: &str) -> Result<(), RemoteError> {
        let session = self.session()?;

        let response = get_http_client()
            .delete(self.table_url(RECORDS_TABLE))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", session.access_token))
            .query(&[
                ("id", format!("eq.{}", id)),
                ("user_id", format!("eq.{}", session.user.id)),
            ])
            .send()?;
        Self::check_status(response)?;

        info!("Deleted UTM record {}", id);
        Ok(())
    }
}
