use yew::prelude::*;
use yew::{Children, Properties};
use yew_router::prelude::*;

use crate::components::meta::{use_page_meta, PageMeta};
use crate::dom;
use crate::Route;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    /// Anchor for the question, so `/faq#travel` lands on it already open.
    id: &'static str,
    question: &'static str,
    children: Children,
}

/// Whether a location hash such as `"#travel"` targets the item `id`.
fn hash_targets(hash: &str, id: &str) -> bool {
    hash.strip_prefix('#') == Some(id)
}

fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = {
        let id = props.id;
        use_state(move || hash_targets(&location_hash(), id))
    };

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    let question_id = format!("{}-question", props.id);
    let answer_id = format!("{}-answer", props.id);

    html! {
        <div id={props.id} class={classes!("faq-item", is_open.then(|| "open"))}>
            <button
                id={question_id.clone()}
                class="faq-question"
                onclick={toggle}
                aria-expanded={is_open.to_string()}
                aria-controls={answer_id.clone()}
            >
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div
                id={answer_id}
                class="faq-answer"
                role="region"
                aria-labelledby={question_id}
                hidden={!*is_open}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    use_page_meta(PageMeta {
        title: "Frequently Asked Questions",
        description: "Answers about booking our ice cream van, pricing, travel, allergens and the menu.",
        path: "/faq",
    });

    use_effect_with_deps(
        move |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Everything you need to know before the chimes arrive"}</p>
            </section>

            <section id="booking-faq" class="faq-section">
                <h2>{"Booking"}</h2>

                <FaqItem id="notice" question="How far in advance should I book?">
                    <p>{"Summer Saturdays go months ahead, so for weddings we'd suggest six to twelve months. Weekday and off-season dates can often be done with a couple of weeks' notice."}</p>
                </FaqItem>

                <FaqItem id="travel" question="How far will you travel?">
                    <p>{"Anywhere within 40 miles of Bristol is included. Further afield is possible with a small mileage charge, which we'll quote when we confirm."}</p>
                </FaqItem>

                <FaqItem id="on-the-day" question="What do you need on the day?">
                    <p>{"A flat, firm spot roughly the size of two parked cars, and access for the van. We're fully self-powered so no hook-up is needed."}</p>
                </FaqItem>

                <FaqItem id="after-enquiry" question="What happens after I send an enquiry?">
                    <p>{"We check the diary and reply within one working day with availability and a quote. Nothing is booked until you've confirmed and paid the deposit."}</p>
                </FaqItem>
            </section>

            <section id="menu-faq" class="faq-section">
                <h2>{"The Menu"}</h2>

                <FaqItem id="allergies" question="Do you cater for allergies and vegans?">
                    <p>{"Yes. We carry a vegan soft serve and dairy-free lollies, and keep a separate scoop for them. Let us know about any allergies in the dietary notes when you book."}</p>
                </FaqItem>

                <FaqItem id="menu" question="What's on the menu?">
                    <ul>
                        <li>{"Classic 99s with a flake"}</li>
                        <li>{"Sundaes with sauces and sprinkles"}</li>
                        <li>{"Ice lollies and slush for the little ones"}</li>
                    </ul>
                </FaqItem>
            </section>

            <section class="faq-footer">
                <p>{"Still wondering about something?"}</p>
                <Link<Route> to={Route::Book} classes="hero-cta">
                    {"Send us an enquiry"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .faq-page {
                    padding-top: 80px;
                    min-height: 100vh;
                    color: #3b2f2f;
                }
                .faq-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                    background: linear-gradient(180deg, #ffe3ec 0%, #fffaf4 100%);
                }
                .faq-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .faq-item {
                    border-bottom: 1px solid #f0e4e4;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.2rem 0;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    color: inherit;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding-bottom: 1rem;
                }
                .faq-footer {
                    text-align: center;
                    padding: 3rem 2rem 5rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_matching_hash_opens_an_item() {
        assert!(hash_targets("#travel", "travel"));
        assert!(!hash_targets("travel", "travel"));
        assert!(!hash_targets("#travel-costs", "travel"));
        assert!(!hash_targets("", "travel"));
    }
}
