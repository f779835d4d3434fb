use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod error;
mod models;
mod pages;
mod state;
mod utils;

use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));
    log::info!("starting Pompeii Pizza Studio");
    yew::Renderer::<App>::new().render();
}
