use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::booking::form::BookingForm;
use crate::components::meta::{use_page_meta, PageMeta};
use crate::config;
use crate::dom;

#[function_component(Book)]
pub fn book() -> Html {
    use_page_meta(PageMeta {
        title: "Book the Van",
        description: "Check availability and get a quote for ice cream van hire at your event.",
        path: "/book",
    });

    let plan = use_search_param("plan".to_string());

    use_effect_with_deps(
        move |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="book-page">
            <section class="book-hero">
                <h1>{"Book the Van"}</h1>
                <p>{"Three quick steps and we'll come back to you within one working day."}</p>
            </section>
            <BookingForm {plan} />
            <p class="book-contact">
                {"Rather talk it through? Call "}
                <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))}>{config::CONTACT_PHONE}</a>
                {" or email "}
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
            </p>
            <style>
                {r#"
                .book-page {
                    padding: 100px 1.5rem 4rem;
                    background: #fffaf4;
                    min-height: 100vh;
                    color: #3b2f2f;
                }
                .book-hero {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .book-contact {
                    text-align: center;
                    margin-top: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
