use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::components::context::use_page;
use crate::components::scroll_link::ScrollLink;
use crate::state::page::PageAction;

const LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#features", "Features"),
    ("#courses", "Courses"),
    ("#internships", "Internships"),
    ("#contact", "Contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let page = use_page();
    let hamburger = use_node_ref();
    let menu = use_node_ref();

    // Any click outside both the icon and the panel closes the menu.
    {
        let dispatcher = page.state.dispatcher();
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = |node_ref: &NodeRef| {
                        node_ref
                            .get()
                            .map_or(false, |node| node.contains(target.as_ref()))
                    };
                    if !inside(&hamburger) && !inside(&menu) {
                        dispatcher.dispatch(PageAction::CloseMenu);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            click_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.dispatch(PageAction::ToggleMenu))
    };

    let close_menu = {
        let page = page.clone();
        Callback::from(move |_: ()| page.dispatch(PageAction::CloseMenu))
    };

    let nav = page.state.nav;
    html! {
        <nav class={classes!("navbar", page.state.header.is_scrolled().then_some("scrolled"))}
            style={page.state.header.header_style()}>
            <div class="nav-container">
                <ScrollLink href="#home" class="nav-logo">{"Hackveda Intern Tracker"}</ScrollLink>
                <ul id="nav-menu" class={classes!("nav-menu", nav.class())} ref={menu}>
                    { for LINKS.iter().map(|(href, label)| html! {
                        <li class="nav-item">
                            <ScrollLink href={*href} class="nav-link" onnavigate={close_menu.clone()}>
                                {*label}
                            </ScrollLink>
                        </li>
                    }) }
                </ul>
                <div id="hamburger" class={classes!("hamburger", nav.class())} ref={hamburger}
                    onclick={toggle_menu}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
