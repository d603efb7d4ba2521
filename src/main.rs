use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod news;
mod components {
    pub mod info_panel;
    pub mod news_card;
    pub mod news_section;
}
mod pages {
    pub mod feature;
    pub mod landing;
}

use pages::{
    feature::{FeaturePage, NotFound},
    landing::Landing,
};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/eco-center")]
    EcoCenter,
    #[at("/calculator")]
    Calculator,
    #[at("/map")]
    Map,
    #[at("/carpool")]
    Carpool,
    #[at("/community")]
    Community,
    #[at("/shopping")]
    Shopping,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub const NAV_ITEMS: [(&str, Route); 7] = [
    ("Home", Route::Home),
    ("EcoCenter", Route::EcoCenter),
    ("Calculator", Route::Calculator),
    ("Map", Route::Map),
    ("Carpool", Route::Carpool),
    ("Community", Route::Community),
    ("Shopping", Route::Shopping),
];


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::EcoCenter => html! { <FeaturePage title="Eco Center" /> },
        Route::Calculator => html! { <FeaturePage title="Calculator" /> },
        Route::Map => html! { <FeaturePage title="Map" /> },
        Route::Carpool => html! { <FeaturePage title="Carpool" /> },
        Route::Community => html! { <FeaturePage title="Community" /> },
        Route::Shopping => html! { <FeaturePage title="Shopping" /> },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/assets/logo.png" alt="Carbon Track AI" />
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for NAV_ITEMS.iter().map(|(name, route)| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes="nav-link">
                                    {*name}
                                </Link<Route>>
                            </div>
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #dbeafe;
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    height: 4rem;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo img {
                    height: 2.5rem;
                }
                .nav-right {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #2563eb;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 20px;
                    height: 2px;
                    background: #374151;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        position: absolute;
                        top: 4rem;
                        right: 1rem;
                        padding: 1rem;
                        background: #ffffff;
                        border: 1px solid #dbeafe;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
