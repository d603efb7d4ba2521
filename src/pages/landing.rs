use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::info_panel::{InfoPanel, OpenSections, SectionId};
use crate::components::news_section::NewsSection;
use crate::Route;

struct ActionCard {
    title: &'static str,
    text: &'static str,
    icon: &'static str,
    route: Route,
    accent: &'static str,
}

const ACTION_CARDS: [ActionCard; 6] = [
    ActionCard {
        title: "ECO CENTER",
        text: "Dive into our Eco Center to discover a wealth of knowledge about eco-friendly practices, sustainable living, and environmental initiatives.",
        icon: "🍃",
        route: Route::EcoCenter,
        accent: "green",
    },
    ActionCard {
        title: "CALCULATOR",
        text: "Use our Calculator to estimate your carbon footprint and get personalized tips to reduce emissions.",
        icon: "🧮",
        route: Route::Calculator,
        accent: "blue",
    },
    ActionCard {
        title: "MAP",
        text: "Explore our interactive Map to locate eco-friendly destinations, recycling centers, and green spaces near you.",
        icon: "🗺️",
        route: Route::Map,
        accent: "purple",
    },
    ActionCard {
        title: "CARPOOL",
        text: "Join our Carpool initiative to connect with others and reduce carbon emissions through shared transportation.",
        icon: "🚗",
        route: Route::Carpool,
        accent: "orange",
    },
    ActionCard {
        title: "COMMUNITY",
        text: "Become part of a growing Community of eco-conscious individuals sharing experiences and collaborating on projects.",
        icon: "👥",
        route: Route::Community,
        accent: "pink",
    },
    ActionCard {
        title: "SHOPPING",
        text: "Discover sustainable shopping options and track the environmental impact of your purchases.",
        icon: "🛍️",
        route: Route::Shopping,
        accent: "teal",
    },
];

// Panels with plain text bodies; the offsetting panel is built inline below.
const TEXT_SECTIONS: [(SectionId, &str, &str); 4] = [
    (
        SectionId::Co2,
        "What is CO2?",
        "Carbon dioxide (CO2) is a greenhouse gas that occurs naturally in the atmosphere. Human activities, particularly burning fossil fuels, have significantly increased CO2 levels, contributing to climate change.",
    ),
    (
        SectionId::Co2Eq,
        "CO2 Equivalent (CO2eq)",
        "CO2 equivalent is a metric used to compare the warming potential of different greenhouse gases. It expresses the impact of various gases in terms of the amount of CO2 that would have the same warming effect.",
    ),
    (
        SectionId::Renewable,
        "Renewable Energy Sources",
        "Renewable energy comes from natural sources that replenish themselves, such as solar, wind, hydroelectric, and geothermal power. These sources produce little to no greenhouse gas emissions.",
    ),
    (
        SectionId::Credits,
        "Carbon Credits",
        "Carbon credits are certificates that represent the reduction of one metric ton of CO2 from the atmosphere. They can be bought and sold as part of carbon trading schemes to offset emissions.",
    ),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Image analysis widget, mounted under "Analyze Your Carbon Footprint".
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let open_sections = use_reducer(OpenSections::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let toggle = |id: SectionId| {
        let open_sections = open_sections.clone();
        Callback::from(move |_: ()| open_sections.dispatch(id))
    };

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <div class="hero-text">
                        <h1>{"Track Today,"}<br />{"Sustain Tomorrow."}</h1>
                        <h3 class="hero-subtitle">{"Shrink Your Footprint to Grow Your Impact"}</h3>
                        <Link<Route> to={Route::Calculator} classes="forward-link">
                            <button class="hero-cta">{"Get Started"}</button>
                        </Link<Route>>
                    </div>
                    <div class="hero-image">
                        <img src="/assets/landing.png" alt="Environmental sustainability" />
                    </div>
                </div>
            </header>

            <section class="features">
                <h2 class="section-heading">{"Explore Our Features"}</h2>
                <div class="features-grid">
                    {
                        for ACTION_CARDS.iter().map(|card| html! {
                            <Link<Route> to={card.route.clone()} classes="feature-link">
                                <div class="feature-card">
                                    <div class={classes!("feature-icon", card.accent)}>{card.icon}</div>
                                    <h3>{card.title}</h3>
                                    <p>{card.text}</p>
                                </div>
                            </Link<Route>>
                        })
                    }
                </div>
            </section>

            <section class="learn">
                <h2 class="section-heading">{"Learn About Sustainability"}</h2>
                <div class="info-grid">
                    {
                        for TEXT_SECTIONS.iter().map(|(id, title, text)| html! {
                            <InfoPanel
                                title={*title}
                                open={open_sections.is_open(*id)}
                                on_toggle={toggle(*id)}
                            >
                                <p>{*text}</p>
                            </InfoPanel>
                        })
                    }
                    <InfoPanel
                        title="Carbon Offsetting Programs"
                        full_width={true}
                        open={open_sections.is_open(SectionId::Offsetting)}
                        on_toggle={toggle(SectionId::Offsetting)}
                    >
                        <div class="offsetting-charts">
                            <iframe
                                src="https://ourworldindata.org/grapher/co-emissions-per-capita"
                                title="CO2 emissions per capita"
                                class="owid-chart"
                            />
                            <iframe
                                src="https://ourworldindata.org/grapher/carbon-dioxide-co2-emissions-by-sector-or-source"
                                title="CO2 emissions by sector or source"
                                class="owid-chart"
                            />
                            <img
                                src="https://ourworldindata.org/uploads/2018/04/Greenhouse-gas-emission-scenarios-01.png"
                                alt="Greenhouse gas scenarios"
                                class="owid-image"
                            />
                        </div>
                    </InfoPanel>
                </div>
            </section>

            <NewsSection />

            {
                if props.children.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="analyze">
                            <h2 class="section-heading">{"Analyze Your Carbon Footprint"}</h2>
                            <div class="analyze-widget">
                                { for props.children.iter() }
                            </div>
                        </section>
                    }
                }
            }

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #eff6ff, #ffffff, #f0fdf4);
                    color: #1f2937;
                }
                .landing-page > section, .hero-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }
                .hero-content {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .hero-text, .hero-image {
                    flex: 1 1 360px;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #2563eb, #16a34a);
                    -webkit-background-clip: text;
                    color: transparent;
                    animation: fadeDown 0.8s ease-out;
                }
                @keyframes fadeDown {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    color: #4b5563;
                }
                .hero-cta {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #2563eb, #16a34a);
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .hero-cta:hover {
                    transform: translateY(-4px) scale(1.05);
                }
                .hero-image img {
                    max-width: 100%;
                    border-radius: 1rem;
                }
                .section-heading {
                    text-align: center;
                    font-size: 1.875rem;
                    margin-bottom: 3rem;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .feature-link {
                    text-decoration: none;
                    color: inherit;
                }
                .feature-card {
                    height: 100%;
                    background: #ffffff;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .feature-card:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.15);
                }
                .feature-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .feature-icon.green { background: linear-gradient(90deg, #4ade80, #16a34a); }
                .feature-icon.blue { background: linear-gradient(90deg, #60a5fa, #2563eb); }
                .feature-icon.purple { background: linear-gradient(90deg, #c084fc, #9333ea); }
                .feature-icon.orange { background: linear-gradient(90deg, #fb923c, #ea580c); }
                .feature-icon.pink { background: linear-gradient(90deg, #f472b6, #db2777); }
                .feature-icon.teal { background: linear-gradient(90deg, #2dd4bf, #0d9488); }
                .info-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(420px, 1fr));
                    gap: 2rem;
                }
                .info-panel {
                    background: #ffffff;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .info-panel.full-width {
                    grid-column: 1 / -1;
                }
                .info-panel-toggle {
                    width: 100%;
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 1.25rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .chevron {
                    color: #2563eb;
                }
                .info-panel-body {
                    margin-top: 1rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                .owid-chart {
                    width: 100%;
                    height: 600px;
                    border: 0;
                    border-radius: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .owid-image {
                    width: 100%;
                    border-radius: 0.5rem;
                }
                .analyze-widget {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                "#}
            </style>
        </div>
    }
}
