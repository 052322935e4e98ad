use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section id="not-found" class="not-found">
            <div class="container">
                <h1 class="section-title">{"Page not found"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Back to home"}
                </Link<Route>>
            </div>
        </section>
    }
}
