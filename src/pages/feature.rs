use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FeaturePageProps {
    pub title: AttrValue,
}

/// Stand-in for sections of the app that live outside the landing page.
#[function_component(FeaturePage)]
pub fn feature_page(props: &FeaturePageProps) -> Html {
    html! {
        <div class="feature-page">
            <h1>{&props.title}</h1>
            <p>{"This part of Carbon Track is on its way."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="feature-page">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
