use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use serde::Deserialize;

/// Body of `GET /v2/everything`. Every field is optional on the wire; fields
/// the cards never show (author, content, source id) are skipped.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub status: Option<String>,
    pub total_results: Option<u64>,
    pub articles: Option<Vec<RawArticle>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RawSource {
    pub name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub source: Option<RawSource>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
}

/// An article that passed the admission filter and is fit for a card.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub published_at: Option<String>,
    pub source_name: Option<String>,
    pub url: Option<String>,
}

impl Article {
    /// Short date in the browser's timezone, e.g. "Mar 5, 2024".
    pub fn published_label(&self) -> Option<String> {
        self.published_at
            .as_deref()
            .map(|raw| format_published(raw, &Local))
    }
}

pub fn format_published<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(tz).format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn decodes_news_api_payload_with_nulls() {
        let body = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": { "id": null, "name": "BBC News" },
                    "author": null,
                    "title": "Wind farms expand",
                    "description": "Offshore capacity doubles",
                    "url": "https://example.com/wind",
                    "urlToImage": "https://example.com/wind.jpg",
                    "publishedAt": "2024-03-05T12:00:00Z",
                    "content": null
                },
                { "title": "[Removed]", "source": { "id": null, "name": "[Removed]" } }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status.as_deref(), Some("ok"));
        assert_eq!(response.total_results, Some(2));

        let articles = response.articles.unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].url_to_image.as_deref(), Some("https://example.com/wind.jpg"));
        assert_eq!(
            articles[0].source.as_ref().and_then(|s| s.name.as_deref()),
            Some("BBC News")
        );
        assert_eq!(articles[1].description, None);
    }

    #[test]
    fn missing_articles_field_is_none() {
        let response: SearchResponse =
            serde_json::from_str(r#"{ "status": "ok", "totalResults": 0 }"#).unwrap();
        assert_eq!(response.articles, None);
    }

    #[test]
    fn formats_publish_date_as_short_us_date() {
        assert_eq!(format_published("2024-03-05T12:00:00Z", &Utc), "Mar 5, 2024");
        assert_eq!(format_published("2023-11-30T08:15:00+00:00", &Utc), "Nov 30, 2023");
    }

    #[test]
    fn publish_date_follows_target_timezone() {
        let helsinki = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_published("2024-12-31T23:30:00Z", &helsinki), "Jan 1, 2025");
    }

    #[test]
    fn unparseable_date_is_shown_verbatim() {
        assert_eq!(format_published("yesterday", &Utc), "yesterday");
    }
}
