use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config::{MAIN_CONTENT_ID, SITE_NAME};
use crate::state::SectionId;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: SectionId,
    pub menu_open: bool,
    pub theme: Theme,
    pub on_navigate: Callback<SectionId>,
    pub on_toggle_menu: Callback<()>,
    pub on_toggle_theme: Callback<()>,
}

fn skip_link_href() -> String {
    format!("#{}", MAIN_CONTENT_ID)
}

/// Moves keyboard focus to the main landmark and scrolls it into view.
fn skip_to_main(e: MouseEvent) {
    e.prevent_default();
    let Some(main) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MAIN_CONTENT_ID))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let _ = main.focus();
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    main.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        current,
        menu_open,
        theme,
        on_navigate,
        on_toggle_menu,
        on_toggle_theme,
    } = props;

    let link_to = |section: SectionId| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    html! {
        <>
        <a href={skip_link_href()} class="skip-link" onclick={Callback::from(skip_to_main)}>
            {"Skip to main content"}
        </a>
        <header class="header">
            <div class="container header__container">
                <a href="#home" class="logo" onclick={link_to(SectionId::Home)}>
                    {SITE_NAME}
                </a>
                <nav
                    id="nav"
                    class={classes!("nav", menu_open.then(|| "nav--open"))}
                    role="navigation"
                    aria-label="Main navigation"
                >
                    <ul class="nav__list">
                        { for SectionId::ALL.into_iter().map(|section| html! {
                            <li class="nav__item">
                                <a
                                    href={format!("#{}", section)}
                                    class={classes!("nav__link", (section == *current).then(|| "nav__link--active"))}
                                    onclick={link_to(section)}
                                >
                                    {section.label()}
                                </a>
                            </li>
                        }) }
                    </ul>
                </nav>
                <div class="header__actions">
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        aria-label="Toggle color theme"
                        onclick={toggle_theme}
                    >
                        <span class="theme-toggle__icon">{theme.icon()}</span>
                    </button>
                    <button
                        id="mobile-menu-toggle"
                        class={classes!("mobile-menu-toggle", menu_open.then(|| "mobile-menu-toggle--open"))}
                        aria-label="Toggle navigation menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </header>
        </>
    }
}
