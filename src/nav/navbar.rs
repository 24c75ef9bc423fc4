use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use super::sections::{all_anchors, NavLink, NAV_SECTIONS};
use super::spy::{resolve_link, LinkAction, NavAction, NavSpyState, HEADER_OFFSET};
use crate::dom::{self, ScrollLock, WindowListener};
use crate::Route;

fn measure(spy: &UseReducerHandle<NavSpyState>) {
    let anchors = all_anchors().map(|id| (id, dom::anchor_bounds(id))).collect();
    spy.dispatch(NavAction::Scrolled {
        scroll_y: dom::scroll_y(),
        anchors,
    });
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let current_path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    let spy = {
        let path = current_path.clone();
        use_reducer_eq(move || NavSpyState::new(path))
    };

    // Route changes re-point the header and re-measure the new page.
    {
        let spy = spy.clone();
        use_effect_with_deps(
            move |path: &String| {
                spy.dispatch(NavAction::RouteChanged(path.clone()));
                measure(&spy);
                || ()
            },
            current_path.clone(),
        );
    }

    {
        let spy = spy.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::attach(&["scroll", "resize"], move || measure(&spy));
                move || drop(listener)
            },
            (),
        );
    }

    use_effect_with_deps(
        |open: &bool| {
            let lock = if *open { ScrollLock::acquire() } else { None };
            move || drop(lock)
        },
        spy.drawer_open,
    );

    let on_link = {
        let spy = spy.clone();
        let current_path = current_path.clone();
        Callback::from(move |(e, href): (MouseEvent, &'static str)| {
            match resolve_link(href, &current_path) {
                LinkAction::InPage { fragment } => {
                    e.prevent_default();
                    if dom::scroll_to_element(&fragment, HEADER_OFFSET) {
                        dom::push_fragment(&fragment);
                    }
                }
                LinkAction::Route { path, fragment } => {
                    if let (Some(navigator), Some(route)) = (navigator.as_ref(), Route::recognize(&path)) {
                        e.prevent_default();
                        info!("Navigating to {}", path);
                        navigator.push(&route);
                        if let Some(fragment) = fragment {
                            spawn_local(async move {
                                if dom::scroll_to_anchor_when_ready(fragment.clone(), HEADER_OFFSET).await {
                                    dom::push_fragment(&fragment);
                                }
                            });
                        }
                    }
                }
            }
            spy.dispatch(NavAction::CloseMenus);
        })
    };

    let toggle_drawer = {
        let spy = spy.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            spy.dispatch(NavAction::ToggleDrawer);
        })
    };

    let close_menus = {
        let spy = spy.clone();
        Callback::from(move |_: MouseEvent| spy.dispatch(NavAction::CloseMenus))
    };

    let link_item = |link: &'static NavLink| {
        let on_link = on_link.clone();
        let active = link.fragment().map_or(false, |f| spy.is_section_active(f));
        html! {
            <li>
                <a
                    href={link.href}
                    class={classes!("nav-link", active.then(|| "active"))}
                    onclick={move |e: MouseEvent| on_link.emit((e, link.href))}
                >
                    {link.label}
                </a>
            </li>
        }
    };

    let desktop_sections = NAV_SECTIONS.iter().map(|section| {
        let open = spy.open_dropdown == Some(section.id);
        let on_route = spy.active_path == section.path;
        let toggle = {
            let spy = spy.clone();
            let id = section.id;
            Callback::from(move |_: MouseEvent| spy.dispatch(NavAction::ToggleDropdown(id)))
        };
        html! {
            <div class={classes!("nav-dropdown", open.then(|| "open"))}>
                <button
                    class={classes!("nav-dropdown-toggle", on_route.then(|| "current"))}
                    onclick={toggle}
                    aria-expanded={open.to_string()}
                >
                    {section.label}
                    <span class="chevron">{"▾"}</span>
                </button>
                <ul class="nav-dropdown-menu">
                    { for section.links.iter().map(link_item) }
                </ul>
            </div>
        }
    });

    let drawer_sections = NAV_SECTIONS.iter().map(|section| {
        html! {
            <div class="drawer-section">
                <h4>{section.label}</h4>
                <ul>
                    { for section.links.iter().map(link_item) }
                </ul>
            </div>
        }
    });

    html! {
        <header class={classes!("site-header", spy.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {crate::config::SITE_NAME}
                </Link<Route>>

                <nav class="nav-desktop">
                    { for desktop_sections }
                    <div onclick={close_menus.clone()}>
                        <Link<Route> to={Route::Book} classes="nav-cta">
                            {"Book the Van"}
                        </Link<Route>>
                    </div>
                </nav>

                <button
                    class={classes!("burger-menu", spy.drawer_open.then(|| "open"))}
                    onclick={toggle_drawer.clone()}
                    aria-label="Menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div
                class={classes!("drawer-backdrop", spy.drawer_open.then(|| "visible"))}
                onclick={close_menus.clone()}
            ></div>
            <aside class={classes!("mobile-drawer", spy.drawer_open.then(|| "open"))}>
                { for drawer_sections }
                <div onclick={close_menus}>
                    <Link<Route> to={Route::Book} classes="nav-cta">
                        {"Book the Van"}
                    </Link<Route>>
                </div>
            </aside>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .site-header.scrolled {
                    background: rgba(255, 250, 244, 0.96);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-family: 'Pacifico', cursive;
                    font-size: 1.6rem;
                    color: #e8557a;
                    text-decoration: none;
                }
                .nav-desktop {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }
                .nav-dropdown {
                    position: relative;
                }
                .nav-dropdown-toggle {
                    background: none;
                    border: none;
                    font-size: 1rem;
                    color: #3b2f2f;
                    cursor: pointer;
                }
                .nav-dropdown-toggle.current {
                    color: #e8557a;
                }
                .nav-dropdown-menu {
                    display: none;
                    position: absolute;
                    top: 100%;
                    left: 0;
                    min-width: 180px;
                    list-style: none;
                    margin: 0;
                    padding: 0.5rem 0;
                    background: #fffaf4;
                    border-radius: 12px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
                }
                .nav-dropdown.open .nav-dropdown-menu,
                .nav-dropdown:hover .nav-dropdown-menu {
                    display: block;
                }
                .nav-link {
                    display: block;
                    padding: 0.5rem 1rem;
                    color: #3b2f2f;
                    text-decoration: none;
                }
                .nav-link.active {
                    color: #e8557a;
                    font-weight: 600;
                }
                .nav-cta {
                    background: #e8557a;
                    color: #fff;
                    padding: 0.6rem 1.2rem;
                    border-radius: 999px;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #3b2f2f;
                }
                .drawer-backdrop {
                    display: none;
                }
                .mobile-drawer {
                    position: fixed;
                    top: 0;
                    right: 0;
                    height: 100vh;
                    width: min(320px, 85vw);
                    padding: 5rem 1.5rem 2rem;
                    background: #fffaf4;
                    transform: translateX(100%);
                    transition: transform 0.3s ease;
                    overflow-y: auto;
                }
                .mobile-drawer.open {
                    transform: translateX(0);
                }
                .drawer-section ul {
                    list-style: none;
                    padding: 0;
                }
                @media (max-width: 900px) {
                    .nav-desktop {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                        z-index: 60;
                    }
                    .drawer-backdrop.visible {
                        display: block;
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.35);
                    }
                }
                "#}
            </style>
        </header>
    }
}
