use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

use super::article::SearchResponse;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    #[error("Failed to fetch news (HTTP {0})")]
    HttpStatus(u16),
    #[error("Unexpected response from news service: {0}")]
    Decode(String),
}

/// Anything that can answer a news search. One call, one request, no retries.
#[async_trait(?Send)]
pub trait NewsSource {
    async fn search(&self, query: &str) -> Result<SearchResponse, FetchError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsApiClient {
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::NEWS_API_BASE, config::news_api_key())
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/v2/everything?q={}&language=en&sortBy=publishedAt&apiKey={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(query),
            urlencoding::encode(&self.api_key),
        )
    }
}

#[async_trait(?Send)]
impl NewsSource for NewsApiClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, FetchError> {
        let response = Request::get(&self.search_url(query))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_everything_url_with_escaped_query() {
        let client = NewsApiClient::new("https://newsapi.org/", "k3y");
        assert_eq!(
            client.search_url("climate change AND (science OR health OR Carbon OR Green Energy)"),
            "https://newsapi.org/v2/everything?\
             q=climate%20change%20AND%20%28science%20OR%20health%20OR%20Carbon%20OR%20Green%20Energy%29\
             &language=en&sortBy=publishedAt&apiKey=k3y"
        );
    }

    #[test]
    fn escapes_credential() {
        let client = NewsApiClient::new("http://localhost:8080", "a&b");
        assert!(client.search_url("x").ends_with("&apiKey=a%26b"));
    }

    #[test]
    fn failures_render_their_cause() {
        assert_eq!(
            FetchError::Transport("NetworkError when attempting to fetch resource.".into()).to_string(),
            "NetworkError when attempting to fetch resource."
        );
        assert_eq!(FetchError::HttpStatus(429).to_string(), "Failed to fetch news (HTTP 429)");
        assert!(FetchError::Decode("expected value".into())
            .to_string()
            .ends_with("expected value"));
    }
}
