use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem; color: #3b2f2f;">
            <h1>{"This page has melted"}</h1>
            <p>{"We couldn't find what you were looking for."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">
                {"Back to the van"}
            </Link<Route>>
        </div>
    }
}
