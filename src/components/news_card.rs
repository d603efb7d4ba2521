use yew::prelude::*;

use crate::news::Article;

#[derive(Properties, PartialEq)]
pub struct NewsCardProps {
    pub article: Article,
}

fn byline(date: Option<String>, source: Option<&str>) -> String {
    match (date, source.filter(|s| !s.is_empty())) {
        (Some(date), Some(source)) => format!("{} • {}", date, source),
        (Some(date), None) => date,
        (None, Some(source)) => source.to_string(),
        (None, None) => String::new(),
    }
}

#[function_component(NewsCard)]
pub fn news_card(props: &NewsCardProps) -> Html {
    let article = &props.article;

    let byline = byline(article.published_label(), article.source_name.as_deref());

    html! {
        <div class="news-card">
            <div class="news-card-image">
                <img src={article.image_url.clone()} alt={article.title.clone()} loading="lazy" />
            </div>
            <div class="news-card-header">
                <h3 class="news-card-title">{&article.title}</h3>
                <p class="news-card-byline">{byline}</p>
            </div>
            <div class="news-card-body">
                <p class="news-card-description">{&article.description}</p>
                {
                    if let Some(url) = &article.url {
                        html! {
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="news-card-link">
                                {"Read more →"}
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
