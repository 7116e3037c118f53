use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod lead_capture {
    pub mod attempt;
    pub mod controller;
    pub mod error;
    pub mod fields;
    pub mod sender;
    pub mod validate;
}
mod components {
    pub mod app_demo;
    pub mod call_demo;
    pub mod contact_form;
    pub mod early_access_form;
    pub mod feature_card;
    pub mod footer;
    pub mod lead_form;
    pub mod nav;
    pub mod team_member;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod not_found;
}

use components::{footer::Footer, nav::Nav};
use lead_capture::sender::{LeadSenderContext, SimulatedSender};
use pages::{about::About, home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    // Swap in a real backend client here once one exists.
    let sender = use_memo(
        |_| LeadSenderContext::new(SimulatedSender::new(config::SIMULATED_SEND_DELAY_MS)),
        (),
    );

    html! {
        <ContextProvider<LeadSenderContext> context={(*sender).clone()}>
            <BrowserRouter>
                <Nav />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1f2937;
                    background: #ffffff;
                }
                html {
                    scroll-behavior: smooth;
                }
                .page {
                    padding-top: 5rem;
                    min-height: 70vh;
                }
                .section-heading {
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    text-align: center;
                }
                .section-heading h2 {
                    font-size: 2.25rem;
                    color: #0f3d57;
                    margin-bottom: 1rem;
                }
                .section-heading p {
                    font-size: 1.1rem;
                    color: #374151;
                }
                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    background: #00A99D;
                    color: white;
                    text-decoration: none;
                    border-radius: 9999px;
                    font-size: 1.1rem;
                    transition: all 0.3s ease;
                }
                .cta-button:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 20px rgba(0, 169, 157, 0.3);
                }
                .cta-button .arrow {
                    font-style: normal;
                    transition: transform 0.3s ease;
                }
                .cta-button:hover .arrow {
                    transform: translateX(5px);
                }
                "#}
            </style>
        </ContextProvider<LeadSenderContext>>
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
