use web_sys::MouseEvent;
use yew::prelude::*;

use crate::actions::ActionKind;
use crate::analytics;
use crate::components::notification::PageNotifier;
use crate::state::{AppContext, SectionId};

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    pub action: ActionKind,
    /// Visible text; also the accessible name unless `aria_label` is set.
    pub label: AttrValue,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_else(|| classes!("btn", "btn--primary"))]
    pub class: Classes,
}

/// Explicit label first, otherwise the trimmed button text; none when both are blank.
pub fn accessible_name(aria_label: Option<&str>, text: &str) -> Option<String> {
    aria_label
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .or_else(|| Some(text.trim()).filter(|text| !text.is_empty()))
        .map(str::to_string)
}

/// Button that acknowledges a simulated action with a notification and an
/// analytics record.
#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let notifier = use_context::<PageNotifier>();
    let app = use_context::<AppContext>();

    let onclick = {
        let action = props.action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(notifier) = &notifier else {
                return;
            };
            notifier.show(action.acknowledgement());
            if let Some((delay, follow_up)) = action.follow_up() {
                notifier.show_later(delay, follow_up);
            }
            let section = app.as_ref().map_or(SectionId::Home, |state| state.current_section);
            analytics::track(action.event_name(), action.event_data(), section);
        })
    };

    html! {
        <button
            type="button"
            class={props.class.clone()}
            aria-label={accessible_name(props.aria_label.as_deref(), &props.label).map(AttrValue::from)}
            onclick={onclick}
        >
            { props.label.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessible_name_falls_back_to_the_button_text() {
        assert_eq!(accessible_name(None, "  Apply Now "), Some("Apply Now".to_string()));
        assert_eq!(
            accessible_name(Some("Apply to Robotics Lab"), "Apply Now"),
            Some("Apply to Robotics Lab".to_string())
        );
        assert_eq!(accessible_name(Some("  "), "Donate"), Some("Donate".to_string()));
        assert_eq!(accessible_name(None, "   "), None);
    }
}
