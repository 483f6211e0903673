use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::components::section::SectionContext;
use crate::reveal::{self, RevealEvent, RevealRole, RevealState, ROOT_MARGIN, THRESHOLD};
use crate::scheduler::{Scheduler, TimeoutScheduler};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches `element` until it first enters the viewport, then stops.
fn observe_once(
    element: &Element,
    mut on_visible: impl FnMut() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                on_visible();
                observer.unobserve(&entry.target());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(THRESHOLD));
    options.root_margin(ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub role: RevealRole,
    /// Position among siblings; drives both stagger delays.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that starts hidden and fades in on scroll or section entry.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reducer(RevealState::default);
    let section = use_context::<SectionContext>();
    let role = props.role;

    {
        let node = node.clone();
        let state = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let watch = node.cast::<Element>().and_then(|element| {
                    observe_once(&element, move || state.dispatch(RevealEvent::Intersected(role)))
                });
                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    {
        let state = state.dispatcher();
        let delay = reveal::section_entry_delay(props.index);
        let entered = section.map(|s| (s.active, s.entry)).unwrap_or((false, 0));
        use_effect_with_deps(
            move |(active, _)| {
                let pending = active.then(|| {
                    TimeoutScheduler.schedule(
                        delay,
                        Box::new(move || state.dispatch(RevealEvent::SectionEntered)),
                    )
                });
                move || drop(pending)
            },
            entered,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(role.class(), props.class.clone())}
            role={role.aria_role()}
            style={state.style(props.index)}
        >
            { for props.children.iter() }
        </div>
    }
}
