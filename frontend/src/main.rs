use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod contact;
mod disclosure;
mod dom;
mod navigation;
mod notification;
mod pages;
mod theme;
mod utils;

use notification::provider::NotificationProvider;
use pages::home::Home;
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
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <NotificationProvider>
                <Switch<Route> render={switch} />
            </NotificationProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting {} site", config::get_company_name());
    yew::Renderer::<App>::new().render();
}
