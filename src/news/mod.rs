//! Latest-news pipeline: pick a topic, search the news API, keep the first
//! few presentable articles, and publish the outcome to a single store.

pub mod article;
pub mod client;
pub mod feed;
pub mod filter;
pub mod query;
pub mod state;

pub use article::Article;
pub use client::NewsApiClient;
pub use feed::NewsFeed;
pub use state::{NewsStore, ViewState};
