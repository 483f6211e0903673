use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use serde_json::json;
use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

mod actions;
mod analytics;
mod config;
mod counter;
mod events;
mod forms;
mod notification;
mod reveal;
mod scheduler;
mod state;
mod theme;

mod components {
    pub mod action_button;
    pub mod counter;
    pub mod forms;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
    pub mod section;
}

mod pages {
    pub mod about;
    pub mod contact;
    pub mod get_involved;
    pub mod home;
    pub mod impact;
    pub mod programs;
}

use components::nav::Nav;
use components::notification::{NotificationPanel, PageNotifier, NOTIFICATION_STYLES};
use components::section::Section;
use notification::Notifier;
use pages::{
    about::AboutSection,
    contact::ContactSection,
    get_involved::GetInvolvedSection,
    home::HomeSection,
    impact::ImpactSection,
    programs::ProgramsSection,
};
use scheduler::{Scheduler, TaskHandle, TimeoutScheduler};
use state::{Action, AppContext, AppState, SectionId};
use theme::LocalPreferences;

/// How long the screen reader announcement stays in the live region.
const ANNOUNCEMENT_MS: u32 = 1000;

const PAGE_STYLES: &str = r#"
    .section { display: none; }
    .section--active { display: block; }
    .form-control--error { border-color: var(--color-error); }
    .field-error {
        color: var(--color-error);
        font-size: var(--font-size-sm);
        margin-top: var(--space-4);
    }
    .skip-link {
        position: absolute;
        left: 0;
        top: -40px;
        z-index: 1001;
    }
    .skip-link:focus { top: 0; }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
        white-space: nowrap;
    }
"#;

fn section_body(section: SectionId) -> Html {
    match section {
        SectionId::Home => html! { <HomeSection /> },
        SectionId::About => html! { <AboutSection /> },
        SectionId::Programs => html! { <ProgramsSection /> },
        SectionId::Impact => html! { <ImpactSection /> },
        SectionId::GetInvolved => html! { <GetInvolvedSection /> },
        SectionId::Contact => html! { <ContactSection /> },
    }
}

fn track_page_load(section: SectionId) {
    let Some(window) = window() else {
        return;
    };
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
    };
    analytics::track(
        "page_load",
        json!({
            "userAgent": user_agent,
            "viewport": {
                "width": dimension(window.inner_width()),
                "height": dimension(window.inner_height()),
            },
        }),
        section,
    );
}

#[function_component]
fn App() -> Html {
    let state = use_reducer(|| AppState::new(theme::load(&LocalPreferences)));

    // Re-render whenever the notifier changes what is on screen.
    let notification_version = use_state(|| 0u32);
    let notifier = {
        let version = notification_version.setter();
        let counter = use_mut_ref(|| 0u32);
        use_memo(
            move |_| {
                Notifier::new(TimeoutScheduler, move || {
                    let mut count = counter.borrow_mut();
                    *count = count.wrapping_add(1);
                    version.set(*count);
                })
            },
            (),
        )
    };
    let notifier: PageNotifier = (*notifier).clone();

    // Listeners registered once read the state through this mirror.
    let latest = use_mut_ref(|| (*state).clone());
    *latest.borrow_mut() = (*state).clone();

    {
        let state = state.clone();
        let latest = latest.clone();
        use_effect_with_deps(
            move |_| {
                let dispatcher = Rc::new(events::page_dispatcher());
                let listeners = events::listen(move |event| {
                    let actions = dispatcher.dispatch(&event, &latest.borrow());
                    for action in actions {
                        state.dispatch(action);
                    }
                });
                move || drop(listeners)
            },
            (),
        );
    }

    {
        let section = state.current_section;
        use_effect_with_deps(
            move |_| {
                track_page_load(section);
                || ()
            },
            (),
        );
    }

    use_effect_with_deps(
        move |(section, _)| {
            if let Some(window) = window() {
                if let Some(document) = window.document() {
                    document.set_title(section.title());
                }
                let mut options = ScrollToOptions::new();
                options.top(0.0).behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
            debug!("Showing section {}", section);
            || ()
        },
        (state.current_section, state.section_entry),
    );

    use_effect_with_deps(
        move |theme| {
            theme::apply(*theme);
            || ()
        },
        state.theme,
    );

    use_effect_with_deps(
        move |online| {
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.class_list().toggle_with_force("offline", !*online);
            }
            || ()
        },
        state.online,
    );

    {
        let announcement = state.announcement.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |announcement| {
                let pending = announcement.as_ref().map(|_| {
                    TimeoutScheduler.schedule(
                        ANNOUNCEMENT_MS,
                        Box::new(move || state.dispatch(Action::ClearAnnouncement)),
                    )
                });
                move || drop(pending)
            },
            announcement,
        );
    }

    let on_navigate = {
        let state = state.clone();
        Callback::from(move |section: SectionId| {
            state.dispatch(Action::Navigate(section));
            state.dispatch(Action::CloseMenu);
        })
    };

    let on_toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::ToggleMenu))
    };

    let theme_transition: Rc<RefCell<Option<TaskHandle>>> = use_mut_ref(|| None);
    let on_toggle_theme = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let next = theme::toggle(&LocalPreferences, state.theme);
            info!("Switching to {} theme", next);
            state.dispatch(Action::SetTheme(next));
            // A pending cleanup from an earlier toggle is cancelled by the replacement.
            *theme_transition.borrow_mut() = theme::flash_transition(&TimeoutScheduler);
        })
    };

    let on_close_notification = {
        let notifier = notifier.clone();
        Callback::from(move |id: u64| notifier.dismiss(id))
    };

    let app: AppContext = state.clone();

    html! {
        <ContextProvider<AppContext> context={app}>
            <ContextProvider<PageNotifier> context={notifier.clone()}>
                <style>
                    {PAGE_STYLES}
                    {reveal::KEYFRAMES}
                    {NOTIFICATION_STYLES}
                </style>
                <Nav
                    current={state.current_section}
                    menu_open={state.menu_open}
                    theme={state.theme}
                    on_navigate={on_navigate}
                    on_toggle_menu={on_toggle_menu}
                    on_toggle_theme={on_toggle_theme}
                />
                <main id={config::MAIN_CONTENT_ID} tabindex="-1">
                    { for SectionId::ALL.into_iter().map(|section| html! {
                        <Section
                            key={section.as_str()}
                            id={section}
                            active={state.is_active(section)}
                            entry={state.section_entry}
                        >
                            { section_body(section) }
                        </Section>
                    }) }
                </main>
                <div class="sr-only" aria-live="polite" aria-atomic="true">
                    { state.announcement.clone().unwrap_or_default() }
                </div>
                {
                    if let Some(current) = notifier.current() {
                        let id = current.id;
                        html! {
                            <NotificationPanel
                                key={id}
                                notification={current}
                                on_close={on_close_notification}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </ContextProvider<PageNotifier>>
        </ContextProvider<AppContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
