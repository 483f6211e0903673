use serde_json::json;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::analytics;
use crate::components::notification::PageNotifier;
use crate::forms::{self, ContactField, ContactForm as ContactFormModel, ContactOutcome};
use crate::state::{AppContext, SectionId};

fn current_section(app: &Option<AppContext>) -> SectionId {
    app.as_ref().map_or(SectionId::Home, |state| state.current_section)
}

fn input_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let notifier = use_context::<PageNotifier>();
    let app = use_context::<AppContext>();

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(input_value(&e)))
    };

    let onsubmit = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(notifier) = &notifier else {
                return;
            };
            let signup = forms::newsletter_submit(&email);
            notifier.show(forms::newsletter_notification(signup.as_ref()));
            if let Some(signup) = signup {
                email.set(String::new());
                analytics::track(
                    "newsletter_subscription",
                    json!({ "email": signup.email }),
                    current_section(&app),
                );
            }
        })
    };

    html! {
        <form class="newsletter__form" onsubmit={onsubmit} novalidate=true>
            <input
                type="email"
                class="form-control"
                placeholder="Enter your email"
                aria-label="Email address"
                value={(*email).clone()}
                oninput={oninput}
            />
            <button type="submit" class="btn btn--primary">{"Subscribe"}</button>
        </form>
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_state(ContactFormModel::default);
    let notifier = use_context::<PageNotifier>();
    let app = use_context::<AppContext>();

    let oninput = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.input(field, input_value(&e));
            form.set(next);
        })
    };

    let onblur = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.blur(field);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let outcome = next.submit();
            form.set(next);
            let Some(notifier) = &notifier else {
                return;
            };
            notifier.show(outcome.notification());
            match outcome {
                ContactOutcome::Sent(submission) => {
                    let data = serde_json::to_value(&submission).unwrap_or_default();
                    analytics::track("contact_submission", data, current_section(&app));
                }
                ContactOutcome::Rejected { errors } => {
                    log::debug!("Contact form rejected with {} field errors", errors);
                }
            }
        })
    };

    let render_field = |field: ContactField, label: &'static str, kind: &'static str| {
        let error = form.error(field);
        let class = classes!("form-control", error.map(|_| "form-control--error"));
        let control = if field == ContactField::Message {
            html! {
                <textarea
                    id={field.name()}
                    name={field.name()}
                    class={class}
                    rows="5"
                    required=true
                    value={form.value(field).to_string()}
                    oninput={oninput(field)}
                    onblur={onblur(field)}
                />
            }
        } else {
            html! {
                <input
                    id={field.name()}
                    name={field.name()}
                    type={kind}
                    class={class}
                    required=true
                    value={form.value(field).to_string()}
                    oninput={oninput(field)}
                    onblur={onblur(field)}
                />
            }
        };
        html! {
            <div class="form-group">
                <label class="form-label" for={field.name()}>{label}</label>
                { control }
                {
                    if let Some(error) = error {
                        html! { <div class="field-error">{error.message()}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
            { render_field(ContactField::Name, "Full Name", "text") }
            { render_field(ContactField::Email, "Email Address", "email") }
            { render_field(ContactField::Subject, "Subject", "text") }
            { render_field(ContactField::Message, "Message", "text") }
            <button type="submit" class="btn btn--primary btn--full-width">{"Send Message"}</button>
        </form>
    }
}
