use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use super::wire::{self, ErrorField};
use super::{AdminApi, DELETE_FAILED, FETCH_FAILED, LOGIN_FAILED, MARK_READ_FAILED};
use crate::config::AppConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{Credentials, Message};

/// reqwest-backed [`AdminApi`].
#[derive(Clone, Debug)]
pub struct HttpAdminApi {
    client: Client,
    base: Url,
}

impl HttpAdminApi {
    pub fn new(base_url: &str) -> PortfolioResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| PortfolioError::Config(format!("Invalid API URL {:?}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(PortfolioError::Config(format!(
                "API URL cannot be used as a base: {}",
                base_url
            )));
        }

        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn from_config(config: &AppConfig) -> PortfolioResult<Self> {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Pass 2xx responses through; turn anything else into an API error.
    async fn check(
        response: Response,
        prefer: ErrorField,
        fallback: &str,
    ) -> PortfolioResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = wire::error_message(&body, prefer, fallback);
        tracing::warn!(status = status.as_u16(), "Admin API request failed: {}", message);

        Err(PortfolioError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn network(e: reqwest::Error) -> PortfolioError {
    tracing::warn!("Admin API unreachable: {}", e);
    PortfolioError::Network(e.to_string())
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn login(&self, credentials: &Credentials) -> PortfolioResult<String> {
        let response = self
            .client
            .post(self.endpoint(&["api", "admin", "login"]))
            .json(credentials)
            .send()
            .await
            .map_err(network)?;

        let response = Self::check(response, ErrorField::Error, LOGIN_FAILED).await?;
        let body = response.text().await.map_err(network)?;
        wire::login_token(&body)
    }

    async fn list_messages(&self, token: &str) -> PortfolioResult<Vec<Message>> {
        let response = self
            .client
            .get(self.endpoint(&["api", "admin", "messages"]))
            .bearer_auth(token)
            .send()
            .await
            .map_err(network)?;

        let response = Self::check(response, ErrorField::Message, FETCH_FAILED).await?;
        let body = response.text().await.map_err(network)?;
        wire::message_list(&body)
    }

    async fn mark_read(&self, token: &str, id: &str) -> PortfolioResult<()> {
        let response = self
            .client
            .put(self.endpoint(&["api", "admin", "messages", id, "read"]))
            .bearer_auth(token)
            .send()
            .await
            .map_err(network)?;

        Self::check(response, ErrorField::Message, MARK_READ_FAILED).await?;
        Ok(())
    }

    async fn delete_message(&self, token: &str, id: &str) -> PortfolioResult<()> {
        let response = self
            .client
            .delete(self.endpoint(&["api", "admin", "messages", id]))
            .bearer_auth(token)
            .send()
            .await
            .map_err(network)?;

        Self::check(response, ErrorField::Message, DELETE_FAILED).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_segments() {
        let api = HttpAdminApi::new("http://localhost:5000").unwrap();
        assert_eq!(
            api.endpoint(&["api", "admin", "messages", "m1", "read"]).as_str(),
            "http://localhost:5000/api/admin/messages/m1/read"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_and_encodes_ids() {
        let api = HttpAdminApi::new("http://localhost:5000/backend").unwrap();
        assert_eq!(
            api.endpoint(&["api", "admin", "messages", "a/b c"]).as_str(),
            "http://localhost:5000/backend/api/admin/messages/a%2Fb%20c"
        );
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(HttpAdminApi::new("not a url").is_err());
        assert!(HttpAdminApi::new("mailto:me@example.com").is_err());
    }
}
