use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::state::anchor::{anchor_id, scroll_target};

#[derive(Properties, PartialEq)]
pub struct ScrollLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onnavigate: Option<Callback<()>>,
    pub children: Children,
}

fn target_offset(id: &str) -> Option<f64> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|el| el.offset_top() as f64)
}

/// In-page link that glides to its target instead of jumping.
#[function_component(ScrollLink)]
pub fn scroll_link(props: &ScrollLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let onnavigate = props.onnavigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(onnavigate) = &onnavigate {
                onnavigate.emit(());
            }
            let Some(top) = scroll_target(anchor_id(&href).and_then(target_offset)) else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
