use web_sys::MouseEvent;
use yew::prelude::*;

use crate::notification::{Notification, Notifier};
use crate::scheduler::TimeoutScheduler;

/// Notifier shared with every component through context.
pub type PageNotifier = Notifier<TimeoutScheduler>;

pub const NOTIFICATION_STYLES: &str = r#"
    .notification {
        position: fixed;
        top: 100px;
        right: 20px;
        max-width: 400px;
        background: var(--color-surface);
        border: 1px solid var(--color-border);
        border-radius: var(--radius-lg);
        box-shadow: var(--shadow-lg);
        z-index: 1001;
        transition: transform 0.3s ease;
    }
    .notification--success { border-left: 4px solid var(--color-success); }
    .notification--error { border-left: 4px solid var(--color-error); }
    .notification--info { border-left: 4px solid var(--color-info); }
    .notification--warning { border-left: 4px solid var(--color-warning); }
    .notification__content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: var(--space-16);
        gap: var(--space-12);
    }
    .notification__message {
        color: var(--color-text);
        font-size: var(--font-size-sm);
        line-height: var(--line-height-normal);
    }
    .notification__close {
        background: none;
        border: none;
        font-size: var(--font-size-lg);
        cursor: pointer;
        color: var(--color-text-secondary);
        padding: 0;
        width: 20px;
        height: 20px;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: var(--radius-sm);
        transition: background-color 0.15s ease;
    }
    .notification__close:hover {
        background: var(--color-secondary);
    }
"#;

#[derive(Properties, PartialEq)]
pub struct NotificationPanelProps {
    pub notification: Notification,
    pub on_close: Callback<u64>,
}

#[function_component(NotificationPanel)]
pub fn notification_panel(props: &NotificationPanelProps) -> Html {
    let notification = &props.notification;

    let onclick = {
        let id = notification.id;
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(id);
        })
    };

    // Off-screen while entering and leaving, so the transform transition slides it.
    let offset = if notification.on_screen() { "0" } else { "100%" };

    html! {
        <div
            class={classes!("notification", format!("notification--{}", notification.kind.as_str()))}
            style={format!("transform: translateX({});", offset)}
            role="status"
        >
            <div class="notification__content">
                <span class="notification__message">{ notification.message.clone() }</span>
                <button class="notification__close" aria-label="Close notification" onclick={onclick}>
                    {"×"}
                </button>
            </div>
        </div>
    }
}
