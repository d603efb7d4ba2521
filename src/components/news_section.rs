use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::news_card::NewsCard;
use crate::news::{NewsApiClient, NewsFeed, NewsStore, ViewState};

#[derive(Properties, PartialEq)]
pub struct NewsPanelProps {
    pub view: ViewState,
    pub on_retry: Callback<()>,
}

/// Renders one `ViewState`: spinner, error banner with retry, or card grid.
#[function_component(NewsPanel)]
pub fn news_panel(props: &NewsPanelProps) -> Html {
    match &props.view {
        ViewState::Loading => html! {
            <div class="news-loading">
                <div class="spinner"></div>
                <p>{"Loading news..."}</p>
            </div>
        },
        ViewState::Error { message } => {
            let retry = {
                let on_retry = props.on_retry.clone();
                Callback::from(move |_: MouseEvent| on_retry.emit(()))
            };
            html! {
                <div class="news-error" role="alert">
                    <span>{message}</span>
                    <button class="news-retry" onclick={retry}>{"Try again"}</button>
                </div>
            }
        }
        ViewState::Ready { items } if items.is_empty() => html! {},
        ViewState::Ready { items } => html! {
            <div class="news-grid">
                { for items.iter().map(|article| html! { <NewsCard article={article.clone()} /> }) }
            </div>
        },
    }
}

#[function_component(NewsSection)]
pub fn news_section() -> Html {
    let store = use_reducer(NewsStore::default);

    let feed = {
        let dispatcher = store.dispatcher();
        use_memo(
            move |_| {
                NewsFeed::new(
                    Rc::new(NewsApiClient::from_config()),
                    Box::new(StdRng::from_entropy()),
                    Callback::from(move |action| dispatcher.dispatch(action)),
                )
            },
            (),
        )
    };

    {
        let feed = feed.clone();
        use_mount(move || {
            gloo_console::log!("Fetching news...");
            feed.start();
        });
    }

    let on_retry = {
        let feed = feed.clone();
        Callback::from(move |_: ()| feed.start())
    };

    html! {
        <section class="news-section">
            <h2 class="section-heading">{"Latest Environmental News"}</h2>
            <NewsPanel view={store.view().clone()} on_retry={on_retry} />
            <style>
                {r#"
                .news-loading {
                    text-align: center;
                    padding: 2rem 0;
                    color: #4b5563;
                }
                .spinner {
                    display: inline-block;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border-bottom: 2px solid #2563eb;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .news-error {
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                    padding: 1rem;
                    border: 1px solid #fecaca;
                    background: #fef2f2;
                    color: #b91c1c;
                    border-radius: 0.5rem;
                }
                .news-retry {
                    margin-left: 0.5rem;
                    background: none;
                    border: none;
                    color: #2563eb;
                    text-decoration: underline;
                    cursor: pointer;
                }
                .news-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .news-card {
                    background: #ffffff;
                    color: #111827;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    transition: box-shadow 0.3s ease;
                }
                .news-card:hover {
                    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.15);
                }
                .news-card-image {
                    height: 10rem;
                    overflow: hidden;
                }
                .news-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .news-card-image img:hover {
                    transform: scale(1.05);
                }
                .news-card-header, .news-card-body {
                    padding: 1rem;
                }
                .news-card-body {
                    padding-top: 0;
                }
                .news-card-title {
                    font-size: 0.875rem;
                    font-weight: 600;
                    margin: 0;
                }
                .news-card-byline {
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .news-card-description {
                    font-size: 0.75rem;
                    color: #4b5563;
                }
                .news-card-link {
                    font-size: 0.75rem;
                    font-weight: 500;
                    color: #2563eb;
                    text-decoration: none;
                }
                "#}
            </style>
        </section>
    }
}
