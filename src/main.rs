use log::{info, warn, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod lead {
    pub mod form;
    pub mod service;
    pub mod state;
    pub mod workflow;
}
mod components {
    pub mod contact_form;
    pub mod nav;
    pub mod reveal;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
    pub mod privacy;
}

use pages::{landing::Landing, privacy::PrivacyPolicy};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        // Old campaign links land on the funnel rather than a dead end
        Route::NotFound => {
            info!("Unknown route, rendering Landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    if !config::access_key_configured() {
        warn!("WEB3FORMS_ACCESS_KEY was not set at build time; lead submissions will be rejected");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
