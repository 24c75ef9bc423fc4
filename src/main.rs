use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod dom;
mod booking {
    pub mod fields;
    pub mod validate;
    pub mod intake;
    pub mod wizard;
    pub mod form;
}
mod nav {
    pub mod sections;
    pub mod spy;
    pub mod navbar;
}
mod components {
    pub mod meta;
}
mod pages {
    pub mod home;
    pub mod faq;
    pub mod book;
    pub mod not_found;
}

use nav::navbar::Navbar;
use pages::{
    book::Book,
    faq::Faq,
    home::Home,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
    #[at("/book")]
    Book,
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
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Book => {
            info!("Rendering Book page");
            html! { <Book /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer" style="text-align: center; padding: 2rem; background: #3b2f2f; color: #fffaf4;">
            <p>{format!("{} · Ice cream van hire across the South West", config::SITE_NAME)}</p>
            <p>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)} style="color: #ffb3c7;">
                    {config::CONTACT_EMAIL}
                </a>
                {" · "}
                {config::CONTACT_PHONE}
            </p>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::warn!("logger already initialised");
    }

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_paths_resolve_to_routes() {
        for section in nav::sections::NAV_SECTIONS {
            assert!(
                !matches!(Route::recognize(section.path), None | Some(Route::NotFound)),
                "{}",
                section.path
            );
        }
        assert_eq!(Route::recognize("/book"), Some(Route::Book));
    }
}
