use color_eyre::eyre::Result;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::overview::DashboardOverview;

/// HTTP client for the platform's summary endpoint.
///
/// The distinction between transport errors, auth errors and malformed
/// payloads is deliberately not surfaced: callers treat every failure as
/// one load failure.
#[derive(Debug, Clone)]
pub struct OverviewClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<SecretString>,
}

impl OverviewClient {
    pub fn new(base_url: impl Into<String>, token: Option<SecretString>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Fetch the dashboard overview. The record comes back wholesale; there
    /// is no partial patching.
    pub async fn get_overview(&self) -> Result<DashboardOverview> {
        let mut request = self
            .http
            .get(format!("{}/dashboard/overview", self.base_url));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json::<DashboardOverview>().await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client =
            OverviewClient::new("https://api.example.com/v1/", None).expect("client builds");
        assert_eq!(client.base_url, "https://api.example.com/v1");
    }

    #[test]
    fn test_client_debug_redacts_token() {
        let client = OverviewClient::new(
            "https://api.example.com/v1",
            Some(SecretString::from("tok-123")),
        )
        .expect("client builds");
        let debug = format!("{client:?}");
        assert!(!debug.contains("tok-123"));
    }
}
