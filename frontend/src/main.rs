use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod donation {
    pub mod clipboard;
    pub mod disclosure;
    pub mod feedback;
    pub mod outside;
    pub mod timers;
    pub mod viewport;
}
mod components {
    pub mod about_modal;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod impact_grid;
    pub mod services;
}
mod pages {
    pub mod home;
}

use donation::viewport::{use_viewport_class, ViewportClass};
use pages::home::Home;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
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
        // Single page site: unknown paths land on the home page too.
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let viewport = use_viewport_class();

    html! {
        <ContextProvider<ViewportClass> context={viewport}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ViewportClass>>
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
