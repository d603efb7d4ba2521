use super::article::{Article, RawArticle};

pub const MAX_ARTICLES: usize = 6;

// Marker the news API puts on retracted content
const REMOVED_MARKER: &str = "[removed]";

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

fn is_removed(text: &str) -> bool {
    text.to_lowercase().contains(REMOVED_MARKER)
}

pub fn admit(raw: RawArticle) -> Option<Article> {
    let title = non_empty(raw.title)?;
    let description = non_empty(raw.description)?;
    let image_url = non_empty(raw.url_to_image)?;

    if is_removed(&title) || is_removed(&description) {
        return None;
    }

    Some(Article {
        title,
        description,
        image_url,
        published_at: raw.published_at,
        source_name: raw.source.and_then(|source| source.name),
        url: raw.url,
    })
}

/// First `MAX_ARTICLES` admitted entries, in the order the API returned them.
pub fn filter_articles(raw: Vec<RawArticle>) -> Vec<Article> {
    raw.into_iter()
        .filter_map(admit)
        .take(MAX_ARTICLES)
        .collect()
}
