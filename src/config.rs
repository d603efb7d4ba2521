use log::Level;

pub const NEWS_API_BASE: &str = "https://newsapi.org";

/// Baked in at build time, e.g. `NEWS_API_KEY=... trunk build`.
pub fn news_api_key() -> &'static str {
    option_env!("NEWS_API_KEY").unwrap_or("")
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
