use std::rc::Rc;

use yew::prelude::*;

use crate::counter::{self, CounterAnimation, CounterRun, MAX_JITTER_MS};
use crate::scheduler::TimeoutScheduler;
use crate::state::AppContext;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    /// Raw `data-target` value; non-numeric targets are shown as-is.
    pub target: AttrValue,
    #[prop_or_else(|| classes!("metric__number"))]
    pub class: Classes,
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
}

/// Number that counts up from zero whenever the app asks counters to replay.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let app = use_context::<AppContext>();
    let epoch = app.as_ref().map_or(0, |state| state.counter_epoch);
    let shown = use_state(|| counter::initial_display(&props.target));
    let run = use_mut_ref(|| None::<CounterRun>);

    {
        let shown = shown.setter();
        let target = props.target.clone();
        use_effect_with_deps(
            move |_| {
                match CounterAnimation::parse(&target) {
                    Some(animation) => {
                        let jitter = (js_sys::Math::random() * f64::from(MAX_JITTER_MS)) as u32;
                        let display: Rc<dyn Fn(i64)> = Rc::new(move |value| shown.set(value.to_string()));
                        // Replacing the previous run cancels its remaining frames.
                        *run.borrow_mut() =
                            Some(counter::run(&TimeoutScheduler, animation, jitter, display));
                    }
                    None => log::debug!("Skipping counter with target {:?}", target.as_str()),
                }
                || ()
            },
            epoch,
        );
    }

    html! {
        <span class={props.class.clone()} data-target={props.target.clone()}>
            { (*shown).clone() }
            { props.suffix.as_deref().unwrap_or("") }
        </span>
    }
}
