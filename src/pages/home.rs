use log::warn;
use serde::Serialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::booking::fields::PRICING_PLANS;
use crate::components::meta::{use_page_meta, PageMeta};
use crate::dom;
use crate::Route;

#[derive(Serialize, Clone, PartialEq)]
pub struct PlanQuery {
    pub plan: String,
}

struct PlanCard {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    perks: &'static [&'static str],
}

const PLAN_CARDS: [PlanCard; 3] = [
    PlanCard {
        name: PRICING_PLANS[0],
        price: "From £150 call-out",
        blurb: "Guests buy their own treats. Perfect for fetes and open events.",
        perks: &["No minimum spend", "Card and cash accepted", "We bring the queue music"],
    },
    PlanCard {
        name: PRICING_PLANS[1],
        price: "From £3.50 per guest",
        blurb: "You cover a set number of cones up front. Great for parties.",
        perks: &["Pre-printed tokens", "Choice of six flavours", "Sprinkles on the house"],
    },
    PlanCard {
        name: PRICING_PLANS[2],
        price: "From £650",
        blurb: "Unlimited whippy for a fixed time. Weddings love this one.",
        perks: &["Unlimited 99s and sundaes", "Vegan soft serve option", "Dressed van for photos"],
    },
];

const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "The van was the hit of the wedding. Our guests are still talking about the flake-off.",
        "Priya & Tom, Clifton",
    ),
    (
        "Two hundred kids, one van, zero meltdowns. Booking took five minutes.",
        "Harbourside Primary PTA",
    ),
    (
        "Turned up early, stayed late, and the vegan option was genuinely great.",
        "Northgate Studios summer party",
    ),
];

fn plan_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[function_component(Home)]
pub fn home() -> Html {
    use_page_meta(PageMeta {
        title: "Ice Cream Van Hire",
        description: "Vintage ice cream van hire for weddings, parties, schools and corporate events.",
        path: "/",
    });

    use_effect_with_deps(
        move |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );

    let navigator = use_navigator();

    let plan_cards = PLAN_CARDS.iter().map(|card| {
        let onclick = {
            let navigator = navigator.clone();
            let plan = plan_slug(card.name);
            Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = navigator.as_ref() {
                    if let Err(e) = navigator.push_with_query(&Route::Book, &PlanQuery { plan: plan.clone() }) {
                        warn!("Could not open booking for plan {}: {}", plan, e);
                    }
                }
            })
        };
        html! {
            <div class="plan-card">
                <h3>{card.name}</h3>
                <p class="plan-price">{card.price}</p>
                <p>{card.blurb}</p>
                <ul>
                    { for card.perks.iter().map(|perk| html! { <li>{*perk}</li> }) }
                </ul>
                <button class="plan-cta" {onclick}>{"Book this plan"}</button>
            </div>
        }
    });

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"Scoop & Roll"}</h1>
                <p class="hero-subtitle">
                    {"A lovingly restored 1970s ice cream van, serving soft whippy and proper flakes at your event."}
                </p>
                <Link<Route> to={Route::Book} classes="hero-cta">
                    {"Check Availability"}
                </Link<Route>>
            </section>

            <section id="about" class="home-section">
                <h2>{"About Us"}</h2>
                <p>
                    {"We're a family team based in Bristol. Since 2014 our van has pulled up at over a thousand weddings, school fetes and office summer parties across the South West."}
                </p>
            </section>

            <section id="how-it-works" class="home-section">
                <h2>{"How It Works"}</h2>
                <div class="steps-grid">
                    <div class="step">
                        <h3>{"1. Tell us about your event"}</h3>
                        <p>{"Date, place and how long you'd like us there."}</p>
                    </div>
                    <div class="step">
                        <h3>{"2. Pick a plan"}</h3>
                        <p>{"Pay per scoop, pre-pay for guests or go unlimited."}</p>
                    </div>
                    <div class="step">
                        <h3>{"3. We turn up with the chimes"}</h3>
                        <p>{"We confirm within a day and handle the rest."}</p>
                    </div>
                </div>
            </section>

            <section id="plans" class="home-section">
                <h2>{"Plans"}</h2>
                <div class="plans-grid">
                    { for plan_cards }
                </div>
            </section>

            <section id="testimonials" class="home-section">
                <h2>{"Kind Words"}</h2>
                <div class="testimonials">
                    { for TESTIMONIALS.iter().map(|(quote, who)| html! {
                        <blockquote>
                            <p>{*quote}</p>
                            <cite>{*who}</cite>
                        </blockquote>
                    }) }
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    padding-top: 80px;
                    color: #3b2f2f;
                }
                .hero {
                    text-align: center;
                    padding: 8rem 2rem 6rem;
                    background: linear-gradient(180deg, #ffe3ec 0%, #fffaf4 100%);
                }
                .hero h1 {
                    font-family: 'Pacifico', cursive;
                    font-size: 4rem;
                    color: #e8557a;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    max-width: 600px;
                    margin: 0 auto 2rem;
                }
                .hero-cta,
                .plan-cta {
                    display: inline-block;
                    background: #e8557a;
                    color: #fff;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    border: none;
                    text-decoration: none;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .home-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }
                .home-section h2 {
                    font-size: 2.2rem;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .steps-grid,
                .plans-grid,
                .testimonials {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .plan-card,
                .step,
                .testimonials blockquote {
                    background: #fff;
                    border-radius: 20px;
                    padding: 2rem;
                    margin: 0;
                    box-shadow: 0 8px 28px rgba(59, 47, 47, 0.08);
                }
                .plan-price {
                    color: #e8557a;
                    font-weight: 700;
                }
                .testimonials cite {
                    display: block;
                    margin-top: 1rem;
                    color: #8a7b7b;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.8rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fields::plan_from_query;

    #[test]
    fn plan_slugs_round_trip_through_the_booking_query() {
        for card in PLAN_CARDS.iter() {
            assert_eq!(plan_from_query(&plan_slug(card.name)), Some(card.name));
        }
    }
}
