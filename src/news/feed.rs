use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use log::{debug, info, warn};
use rand::RngCore;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use super::client::NewsSource;
use super::query::{pick_query, TOPICS};
use super::state::{NewsAction, RunId, ViewState, EMPTY_RESULT_MESSAGE};

/// Drives runs of the news pipeline and reports them to a `NewsStore`.
///
/// Each run gets a fresh, increasing id and announces itself with
/// `NewsAction::Begin` before anything is awaited, so the store always knows
/// which run is the newest. Superseded requests are left to finish; the store
/// drops what they report.
pub struct NewsFeed {
    source: Rc<dyn NewsSource>,
    rng: RefCell<Box<dyn RngCore>>,
    runs: Cell<RunId>,
    dispatch: Callback<NewsAction>,
}

impl NewsFeed {
    pub fn new(
        source: Rc<dyn NewsSource>,
        rng: Box<dyn RngCore>,
        dispatch: Callback<NewsAction>,
    ) -> Self {
        Self {
            source,
            rng: RefCell::new(rng),
            runs: Cell::new(0),
            dispatch,
        }
    }

    /// Starts a run on the browser's event loop. Also what "Try again" calls.
    pub fn start(&self) {
        spawn_local(self.run());
    }

    pub fn run(&self) -> impl Future<Output = ()> + 'static {
        let run = self.runs.get() + 1;
        self.runs.set(run);
        self.dispatch.emit(NewsAction::Begin(run));

        let query = pick_query(&TOPICS, &mut **self.rng.borrow_mut());
        let source = Rc::clone(&self.source);
        let dispatch = self.dispatch.clone();

        async move {
            let view = match query {
                Some(query) => {
                    info!("news run {}: searching {:?}", run, query);
                    let outcome = source.search(&query).await;
                    if let Ok(response) = &outcome {
                        debug!(
                            "news run {}: status {:?}, {} total results",
                            run,
                            response.status,
                            response.total_results.unwrap_or(0)
                        );
                    }
                    ViewState::from_outcome(outcome)
                }
                None => ViewState::Error {
                    message: EMPTY_RESULT_MESSAGE.to_string(),
                },
            };

            match &view {
                ViewState::Error { message } => warn!("news run {}: {}", run, message),
                ViewState::Ready { items } => info!("news run {}: {} articles", run, items.len()),
                ViewState::Loading => {}
            }

            dispatch.emit(NewsAction::Settle(run, view));
        }
    }
}
