use anyhow::{Context, Result};
use log::{error, info};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

/// An authenticated backend session. Required by the remote history service;
/// everything else in the tool works without one.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

/// Exchange email/password credentials for an access token at the hosted
/// auth endpoint.
pub fn sign_in(
    api_base_url: &str,
    api_key: &str,
    email: &str,
    password: &str,
) -> Result<AuthSession> {
    let client = reqwest::blocking::Client::new();

    let response = client
        .post(format!(
            "{}/auth/v1/token?grant_type=password",
            api_base_url.trim_end_matches('/')
        ))
        .header("apikey", api_key)
        .json(&serde_json::json!({ "email": email, "password": password }))
        .timeout(std::time::Duration::from_secs(10))
        .send()
        .context("Failed to send authentication request")?;

    if !response.status().is_success() {
        error!("Failed to authenticate: {}", response.status());
        return Err(anyhow::anyhow!(
            "Authentication failed with status: {}",
            response.status()
        ));
    }

    let token_response: TokenResponse = response
        .json()
        .context("Failed to parse authentication response")?;

    if token_response.access_token.is_empty() {
        error!("Failed to retrieve access token. Response was empty");
        return Err(anyhow::anyhow!("Empty access token received"));
    }

    info!("Successfully authenticated as {}.", email);
    Ok(AuthSession {
        access_token: token_response.access_token,
        user: token_response.user,
    })
}

/// Register a new account. The backend sends its own confirmation email;
/// this only reports whether the request was accepted.
pub fn sign_up(api_base_url: &str, api_key: &str, email: &str, password: &str) -> Result<AuthUser> {
    let client = reqwest::blocking::Client::new();

    let response = client
        .post(format!(
            "{}/auth/v1/signup",
            api_base_url.trim_end_matches('/')
        ))
        .header("apikey", api_key)
        .json(&serde_json::json!({ "email": email, "password": password }))
        .timeout(std::time::Duration::from_secs(10))
        .send()
        .context("Failed to send signup request")?;

    if !response.status().is_success() {
        error!("Failed to sign up: {}", response.status());
        return Err(anyhow::anyhow!(
            "Signup failed with status: {}",
            response.status()
        ));
    }

    let user: AuthUser = response.json().context("Failed to parse signup response")?;
    info!("Account created for {}.", email);
    Ok(user)
}

/// Fetch the user behind an access token.
pub fn current_user(api_base_url: &str, api_key: &str, access_token: &str) -> Result<AuthUser> {
    let client = reqwest::blocking::Client::new();

    let response = client
        .get(format!(
            "{}/auth/v1/user",
            api_base_url.trim_end_matches('/')
        ))
        .header("apikey", api_key)
        .header("Authorization", format!("Bearer {}", access_token))
        .timeout(std::time::Duration::from_secs(10))
        .send()
        .context("Failed to fetch current user")?;

    if !response.status().is_success() {
        return Err(anyhow::anyhow!(
            "Fetching current user failed with status: {}",
            response.status()
        ));
    }

    response.json().context("Failed to parse user response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/auth/v1/token")
            .match_query(mockito::Matcher::UrlEncoded(
                "grant_type".into(),
                "password".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "access_token": "token123",
                    "token_type": "bearer",
                    "expires_in": 3600,
                    "user": { "id": "user-1", "email": "test@example.com" }
                }"#,
            )
            .create();

        let session = sign_in(&server.url(), "anon_key", "test@example.com", "pw").unwrap();
        assert_eq!(session.access_token, "token123");
        assert_eq!(session.user.id, "user-1");
        assert_eq!(session.user.email.as_deref(), Some("test@example.com"));
        mock.assert();
    }

    #[test]
    fn test_sign_in_rejected() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/auth/v1/token")
            .match_query(mockito::Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error":"invalid_grant"}"#)
            .create();

        let result = sign_in(&server.url(), "anon_key", "test@example.com", "wrong");
        assert!(result.is_err());
    }

    #[test]
    fn test_sign_in_empty_token() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/auth/v1/token")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"access_token": "", "user": {"id": "user-1"}}"#)
            .create();

        let result = sign_in(&server.url(), "anon_key", "test@example.com", "pw");
        assert!(result.is_err());
    }

    #[test]
    fn test_current_user() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/auth/v1/user")
            .with_status(200)
            .with_body(r#"{"id": "user-9", "email": "someone@example.com"}"#)
            .create();

        let user = current_user(&server.url(), "anon_key", "token").unwrap();
        assert_eq!(user.id, "user-9");
    }
}
