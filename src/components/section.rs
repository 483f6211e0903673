use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::{Action, AppContext, SectionId};

/// What reveal elements need to know about the section they sit in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionContext {
    pub active: bool,
    /// Changes on every entry, so re-entering replays the reveal.
    pub entry: u32,
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: SectionId,
    pub active: bool,
    pub entry: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let context = SectionContext {
        active: props.active,
        entry: props.entry,
    };

    html! {
        <section
            id={props.id.as_str()}
            class={classes!("section", props.active.then(|| "section--active"))}
        >
            <ContextProvider<SectionContext> context={context}>
                { for props.children.iter() }
            </ContextProvider<SectionContext>>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    /// Fragment such as `#programs`.
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page anchor that switches sections instead of jumping.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let app = use_context::<AppContext>();

    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(app) = &app {
                let id = href.trim_start_matches('#').to_string();
                app.dispatch(Action::NavigateTo(id));
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
