//! Page-level browser events (keyboard, resize, clicks outside the menu,
//! visibility, connectivity) routed to state actions.
//!
//! Browser listeners only translate the raw event into a [`PageEvent`]; what
//! happens next is decided by the [`Dispatcher`], which runs the handlers of
//! each kind in the order they were registered.

use std::collections::HashMap;

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent, Node};

use crate::config::MOBILE_BREAKPOINT_PX;
use crate::state::{Action, AppState, Direction};

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    KeyDown { key: String, alt: bool },
    Resize { width: f64 },
    /// Document click; `inside_menu` covers the nav and its toggle button.
    Click { inside_menu: bool },
    VisibilityChange { hidden: bool },
    Connectivity { online: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    Resize,
    Click,
    VisibilityChange,
    Connectivity,
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::KeyDown { .. } => EventKind::KeyDown,
            PageEvent::Resize { .. } => EventKind::Resize,
            PageEvent::Click { .. } => EventKind::Click,
            PageEvent::VisibilityChange { .. } => EventKind::VisibilityChange,
            PageEvent::Connectivity { .. } => EventKind::Connectivity,
        }
    }

    /// Alt+Arrow direction, if this is the section shortcut.
    pub fn section_shortcut(&self) -> Option<Direction> {
        match self {
            PageEvent::KeyDown { key, alt: true } => match key.as_str() {
                "ArrowRight" => Some(Direction::Next),
                "ArrowLeft" => Some(Direction::Prev),
                _ => None,
            },
            _ => None,
        }
    }
}

pub type Handler = Box<dyn Fn(&PageEvent, &AppState) -> Option<Action>>;

#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl Dispatcher {
    pub fn on(
        &mut self,
        kind: EventKind,
        handler: impl Fn(&PageEvent, &AppState) -> Option<Action> + 'static,
    ) -> &mut Self {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
        self
    }

    /// Actions produced by this event's handlers, in registration order.
    pub fn dispatch(&self, event: &PageEvent, state: &AppState) -> Vec<Action> {
        self.handlers
            .get(&event.kind())
            .map(|handlers| handlers.iter().filter_map(|h| h(event, state)).collect())
            .unwrap_or_default()
    }
}

/// Handlers the page installs at startup.
pub fn page_dispatcher() -> Dispatcher {
    let mut dispatcher = Dispatcher::default();
    dispatcher
        .on(EventKind::KeyDown, |event, state| match event {
            PageEvent::KeyDown { key, .. } if key == "Escape" && state.menu_open => {
                Some(Action::CloseMenu)
            }
            _ => None,
        })
        .on(EventKind::KeyDown, |event, _| {
            event.section_shortcut().map(Action::NavigateRelative)
        })
        .on(EventKind::Resize, |event, state| match event {
            PageEvent::Resize { width } if *width > MOBILE_BREAKPOINT_PX && state.menu_open => {
                Some(Action::CloseMenu)
            }
            _ => None,
        })
        .on(EventKind::Click, |event, state| match event {
            PageEvent::Click { inside_menu: false } if state.menu_open => Some(Action::CloseMenu),
            _ => None,
        })
        .on(EventKind::VisibilityChange, |event, _| {
            if let PageEvent::VisibilityChange { hidden } = event {
                if *hidden {
                    info!("Page hidden, optimizing performance");
                } else {
                    info!("Page visible, resuming normal operations");
                }
            }
            None
        })
        .on(EventKind::Connectivity, |event, _| match event {
            PageEvent::Connectivity { online } => {
                info!("{}", if *online { "Connection restored" } else { "Connection lost" });
                Some(Action::SetOnline(*online))
            }
            _ => None,
        });
    dispatcher
}

/// A registered DOM listener, removed again on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(target: &EventTarget, event: &'static str, f: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Translates browser events into [`PageEvent`]s and hands them to `emit`.
/// Keeping the returned listeners alive keeps them registered.
pub fn listen(emit: impl Fn(PageEvent) + Clone + 'static) -> Vec<Listener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(document) = window.document() else {
        return Vec::new();
    };
    let mut listeners = Vec::new();

    let on_key = emit.clone();
    listeners.push(Listener::new(&document, "keydown", move |e: Event| {
        let Some(key_event) = e.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let event = PageEvent::KeyDown {
            key: key_event.key(),
            alt: key_event.alt_key(),
        };
        if event.section_shortcut().is_some() {
            e.prevent_default();
        }
        on_key(event);
    }));

    let on_resize = emit.clone();
    let resized = window.clone();
    listeners.push(Listener::new(&window, "resize", move |_| {
        if let Some(width) = resized.inner_width().ok().and_then(|w| w.as_f64()) {
            on_resize(PageEvent::Resize { width });
        }
    }));

    let on_click = emit.clone();
    let clicked = document.clone();
    listeners.push(Listener::new(&document, "click", move |e: Event| {
        let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
        let contains = |id: &str| {
            clicked
                .get_element_by_id(id)
                .map_or(false, |el| el.contains(target.as_ref()))
        };
        let inside_menu = contains("nav") || contains("mobile-menu-toggle");
        on_click(PageEvent::Click { inside_menu });
    }));

    let on_visibility = emit.clone();
    let visible = document.clone();
    listeners.push(Listener::new(&document, "visibilitychange", move |_| {
        on_visibility(PageEvent::VisibilityChange {
            hidden: visible.hidden(),
        });
    }));

    let on_online = emit.clone();
    listeners.push(Listener::new(&window, "online", move |_| {
        on_online(PageEvent::Connectivity { online: true });
    }));
    listeners.push(Listener::new(&window, "offline", move |_| {
        emit(PageEvent::Connectivity { online: false });
    }));

    listeners
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::Reducible;

    use super::*;
    use crate::state::SectionId;
    use crate::theme::Theme;

    fn key(key: &str, alt: bool) -> PageEvent {
        PageEvent::KeyDown {
            key: key.to_string(),
            alt,
        }
    }

    fn open_menu() -> AppState {
        let mut state = AppState::new(Theme::Light);
        state.menu_open = true;
        state
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let mut dispatcher = Dispatcher::default();
        dispatcher
            .on(EventKind::Resize, |_, _| Some(Action::Navigate(SectionId::About)))
            .on(EventKind::KeyDown, |_, _| Some(Action::ToggleMenu))
            .on(EventKind::Resize, |_, _| None)
            .on(EventKind::Resize, |_, _| Some(Action::Navigate(SectionId::Impact)));

        let state = AppState::new(Theme::Light);
        let actions = dispatcher.dispatch(&PageEvent::Resize { width: 320.0 }, &state);
        assert_eq!(
            actions,
            vec![
                Action::Navigate(SectionId::About),
                Action::Navigate(SectionId::Impact)
            ]
        );
        assert!(dispatcher
            .dispatch(&PageEvent::Connectivity { online: true }, &state)
            .is_empty());
    }

    #[test]
    fn alt_arrow_right_from_contact_wraps_home() {
        let dispatcher = page_dispatcher();
        let mut state = Rc::new(AppState::new(Theme::Light)).reduce(Action::Navigate(SectionId::Contact));

        for action in dispatcher.dispatch(&key("ArrowRight", true), &state) {
            state = state.reduce(action);
        }
        assert_eq!(state.current_section, SectionId::Home);
    }

    #[test]
    fn arrows_without_alt_do_nothing() {
        let dispatcher = page_dispatcher();
        let state = AppState::new(Theme::Light);
        assert!(dispatcher.dispatch(&key("ArrowRight", false), &state).is_empty());
        assert_eq!(key("ArrowLeft", true).section_shortcut(), Some(Direction::Prev));
    }

    #[test]
    fn escape_wide_resize_and_outside_click_close_an_open_menu() {
        let dispatcher = page_dispatcher();
        let open = open_menu();
        let closed = AppState::new(Theme::Light);

        for event in [
            key("Escape", false),
            PageEvent::Resize { width: 1024.0 },
            PageEvent::Click { inside_menu: false },
        ] {
            assert_eq!(dispatcher.dispatch(&event, &open), vec![Action::CloseMenu]);
            assert!(dispatcher.dispatch(&event, &closed).is_empty());
        }
        assert!(dispatcher
            .dispatch(&PageEvent::Resize { width: 768.0 }, &open)
            .is_empty());
        assert!(dispatcher
            .dispatch(&PageEvent::Click { inside_menu: true }, &open)
            .is_empty());
    }

    #[test]
    fn connectivity_updates_online_flag() {
        let dispatcher = page_dispatcher();
        let state = AppState::new(Theme::Light);
        assert_eq!(
            dispatcher.dispatch(&PageEvent::Connectivity { online: false }, &state),
            vec![Action::SetOnline(false)]
        );
        assert!(dispatcher
            .dispatch(&PageEvent::VisibilityChange { hidden: true }, &state)
            .is_empty());
    }
}
