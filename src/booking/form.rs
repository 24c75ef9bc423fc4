use chrono::{Local, NaiveDate};
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::fields::{plan_from_query, Field, FieldKind, Step};
use super::intake::{HttpIntake, IntakeClient};
use super::wizard::{BookingWizard, SubmissionStatus};
use crate::dom;

const FORM_CARD_ID: &str = "booking-card";
const FORM_SCROLL_OFFSET: f64 = 100.0;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn scroll_to_form() {
    dom::scroll_to_element(FORM_CARD_ID, FORM_SCROLL_OFFSET);
}

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    /// Plan picked on the home page, from `?plan=`.
    #[prop_or_default]
    pub plan: Option<String>,
}

fn render_field(field: Field, wizard: &UseStateHandle<BookingWizard>) -> Html {
    let value = wizard.values().get(field).to_string();
    let disabled = wizard.is_locked();
    let invalid = wizard.error().map_or(false, |e| e.field() == field);
    let id = format!("field-{}", field.wire_name().to_lowercase());

    let update = {
        let wizard = wizard.clone();
        move |value: String| {
            let mut next = (*wizard).clone();
            next.set_field(field, value);
            wizard.set(next);
        }
    };

    let control = match field.kind() {
        FieldKind::Select(options) => {
            let onchange = move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                update(select.value());
            };
            html! {
                <select id={id.clone()} name={field.wire_name()} required={field.required()} {disabled} {onchange}>
                    <option value="" selected={value.is_empty()}>{"Please choose..."}</option>
                    { for options.iter().map(|option| html! {
                        <option value={*option} selected={value == *option}>{*option}</option>
                    }) }
                </select>
            }
        }
        FieldKind::TextArea => {
            let oninput = move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                update(area.value());
            };
            html! {
                <textarea
                    id={id.clone()}
                    name={field.wire_name()}
                    rows="3"
                    placeholder={field.placeholder()}
                    {value}
                    {disabled}
                    {oninput}
                />
            }
        }
        kind => {
            let oninput = move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                update(input.value());
            };
            let min = (kind == FieldKind::Date).then(|| today().format("%Y-%m-%d").to_string());
            html! {
                <input
                    id={id.clone()}
                    type={kind.input_type()}
                    name={field.wire_name()}
                    placeholder={field.placeholder()}
                    required={field.required()}
                    {min}
                    {value}
                    {disabled}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class={classes!("form-field", invalid.then(|| "invalid"))}>
            <label for={id}>
                {field.label()}
                if !field.required() {
                    <span class="optional">{" (optional)"}</span>
                }
            </label>
            {control}
        </div>
    }
}

fn render_confirmation(wizard: &BookingWizard) -> Html {
    let values = wizard.values();
    html! {
        <div class="booking-confirmed">
            <div class="confirmed-icon">{"🍦"}</div>
            <h2>{"Thanks, we've got your enquiry!"}</h2>
            <p>
                {format!(
                    "We'll be in touch at {} within one working day to confirm the van for {}.",
                    values.get(Field::Email),
                    values.get(Field::Date),
                )}
            </p>
            <p class="confirmed-plan">{format!("Plan: {}", values.get(Field::PricingPlan))}</p>
        </div>
    }
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let wizard = {
        let plan = props.plan.clone();
        use_state(move || {
            let mut wizard = BookingWizard::new();
            if let Some(plan) = plan.as_deref().and_then(plan_from_query) {
                wizard.set_field(Field::PricingPlan, plan);
            }
            wizard
        })
    };

    let go_back = {
        let wizard = wizard.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            if next.previous_step() {
                scroll_to_form();
            }
            wizard.set(next);
        })
    };

    let onsubmit = {
        let wizard = wizard.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();

            if next.step() != Step::Contact {
                if next.next_step(today()) {
                    scroll_to_form();
                }
                wizard.set(next);
                return;
            }

            match next.begin_submit(today()) {
                Ok(payload) => {
                    info!("Sending booking enquiry");
                    wizard.set(next.clone());
                    let wizard = wizard.clone();
                    spawn_local(async move {
                        let result = HttpIntake::from_config().send(&payload).await;
                        let mut done = next;
                        done.finish_submit(result);
                        let confirmed = *done.status() == SubmissionStatus::Confirmed;
                        wizard.set(done);
                        if confirmed {
                            scroll_to_form();
                        }
                    });
                }
                Err(blocked) => {
                    warn!("Booking not sent: {}", blocked);
                    wizard.set(next);
                }
            }
        })
    };

    if *wizard.status() == SubmissionStatus::Confirmed {
        return html! {
            <div id={FORM_CARD_ID} class="booking-card">
                { render_confirmation(&wizard) }
                { style() }
            </div>
        };
    }

    let step = wizard.step();
    let submitting = *wizard.status() == SubmissionStatus::Submitting;

    html! {
        <div id={FORM_CARD_ID} class="booking-card">
            <ol class="step-indicator">
                { for Step::ALL.iter().map(|s| html! {
                    <li class={classes!(
                        (*s == step).then(|| "current"),
                        (*s < step).then(|| "done"),
                    )}>
                        <span class="step-number">{s.number()}</span>
                        <span class="step-title">{s.title()}</span>
                    </li>
                }) }
            </ol>

            <form {onsubmit} novalidate={true}>
                <h2>{step.title()}</h2>
                { for step.fields().map(|field| render_field(field, &wizard)) }

                if let Some(error) = wizard.error() {
                    <div class="form-error" role="alert">{error.to_string()}</div>
                }
                if step == Step::Contact {
                    if let SubmissionStatus::Failed(reason) = wizard.status() {
                        <div class="submit-failed" role="alert">{reason.to_string()}</div>
                    }
                }

                <div class="form-actions">
                    if step != Step::Details {
                        <button type="button" class="btn-secondary" onclick={go_back} disabled={submitting}>
                            {"Back"}
                        </button>
                    }
                    if step == Step::Contact {
                        <button type="submit" class="btn-primary" disabled={!wizard.can_submit()}>
                            { if submitting { "Sending..." } else { "Send Enquiry" } }
                        </button>
                    } else {
                        <button type="submit" class="btn-primary">{"Next"}</button>
                    }
                </div>
            </form>
            { style() }
        </div>
    }
}

fn style() -> Html {
    html! {
        <style>
            {r#"
            .booking-card {
                max-width: 640px;
                margin: 0 auto;
                padding: 2.5rem;
                background: #fff;
                border-radius: 24px;
                box-shadow: 0 12px 40px rgba(59, 47, 47, 0.12);
            }
            .step-indicator {
                display: flex;
                justify-content: space-between;
                list-style: none;
                padding: 0;
                margin: 0 0 2rem;
            }
            .step-indicator li {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                color: #b9a9a9;
            }
            .step-indicator li.current,
            .step-indicator li.done {
                color: #e8557a;
            }
            .step-number {
                width: 2rem;
                height: 2rem;
                border-radius: 50%;
                border: 2px solid currentColor;
                display: inline-flex;
                align-items: center;
                justify-content: center;
            }
            .form-field {
                display: flex;
                flex-direction: column;
                margin-bottom: 1.2rem;
            }
            .form-field label {
                font-weight: 600;
                margin-bottom: 0.4rem;
            }
            .form-field .optional {
                font-weight: 400;
                color: #8a7b7b;
            }
            .form-field input,
            .form-field select,
            .form-field textarea {
                padding: 0.75rem 1rem;
                border: 1px solid #e3d7d7;
                border-radius: 12px;
                font-size: 1rem;
            }
            .form-field.invalid input,
            .form-field.invalid select,
            .form-field.invalid textarea {
                border-color: #d93b3b;
            }
            .form-error,
            .submit-failed {
                padding: 0.8rem 1rem;
                border-radius: 12px;
                margin-bottom: 1rem;
                background: #fdecec;
                color: #a12727;
            }
            .form-actions {
                display: flex;
                justify-content: flex-end;
                gap: 1rem;
            }
            .btn-primary,
            .btn-secondary {
                padding: 0.8rem 1.6rem;
                border-radius: 999px;
                font-size: 1rem;
                cursor: pointer;
                border: none;
            }
            .btn-primary {
                background: #e8557a;
                color: #fff;
            }
            .btn-primary:disabled {
                opacity: 0.6;
                cursor: wait;
            }
            .btn-secondary {
                background: #f3ebe6;
                color: #3b2f2f;
            }
            .booking-confirmed {
                text-align: center;
            }
            .confirmed-icon {
                font-size: 3rem;
            }
            @media (max-width: 600px) {
                .booking-card {
                    padding: 1.5rem;
                }
                .step-title {
                    display: none;
                }
            }
            "#}
        </style>
    }
}
