use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use super::article::{Article, SearchResponse};
use super::client::FetchError;
use super::filter::filter_articles;

pub type RunId = u64;

pub const EMPTY_RESULT_MESSAGE: &str = "No articles found for the current search.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Error { message: String },
    Ready { items: Vec<Article> },
}

impl ViewState {
    /// Terminal state for one finished fetch.
    ///
    /// Only an empty or missing raw list counts as "no articles"; a non-empty
    /// list that filters down to nothing is still `Ready`.
    pub fn from_outcome(outcome: Result<SearchResponse, FetchError>) -> Self {
        match outcome {
            Err(err) => ViewState::Error {
                message: format!("Failed to load news: {}", err),
            },
            Ok(SearchResponse {
                articles: Some(articles),
                ..
            }) if !articles.is_empty() => ViewState::Ready {
                items: filter_articles(articles),
            },
            Ok(_) => ViewState::Error {
                message: EMPTY_RESULT_MESSAGE.to_string(),
            },
        }
    }
}

pub enum NewsAction {
    Begin(RunId),
    Settle(RunId, ViewState),
}

/// The news section's store. Only the most recently started run may settle it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsStore {
    latest: RunId,
    view: ViewState,
}

impl NewsStore {
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn latest_run(&self) -> RunId {
        self.latest
    }
}

impl Reducible for NewsStore {
    type Action = NewsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NewsAction::Begin(run) if run > self.latest => Rc::new(Self {
                latest: run,
                view: ViewState::Loading,
            }),
            NewsAction::Begin(run) => {
                debug!("ignoring start of run {}, run {} already started", run, self.latest);
                self
            }
            NewsAction::Settle(run, view) if run == self.latest => Rc::new(Self {
                latest: run,
                view,
            }),
            NewsAction::Settle(run, _) => {
                debug!("dropping stale result of run {}, latest is {}", run, self.latest);
                self
            }
        }
    }
}
