use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::context::use_page;
use crate::config::MODAL_FOCUS_DELAY_MS;
use crate::state::modal::{is_backdrop_click, ModalId};
use crate::state::tasks::TaskKey;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: ModalId,
    pub title: AttrValue,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let page = use_page();
    let container = use_node_ref();
    let content = use_node_ref();
    let is_open = page.state.modal.is_open(props.id);

    {
        let page = page.clone();
        let content = content.clone();
        use_effect_with_deps(
            move |is_open| {
                if *is_open && page.features.autofocus {
                    page.schedule(TaskKey::ModalFocus, MODAL_FOCUS_DELAY_MS, move || {
                        let first = content
                            .cast::<Element>()
                            .and_then(|el| el.query_selector("input, select").ok().flatten())
                            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                        if let Some(first) = first {
                            let _ = first.focus();
                        }
                    });
                }
                || ()
            },
            is_open,
        );
    }

    // Listeners are delegated to the app root, so the container is compared
    // through its node ref rather than the event's current target.
    let on_backdrop = {
        let page = page.clone();
        let container = container.clone();
        let id = props.id;
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            if is_backdrop_click(target.as_ref(), container.cast::<Element>().as_ref()) {
                page.close_modal(id);
            }
        })
    };

    let on_close = {
        let page = page.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| page.close_modal(id))
    };

    html! {
        <div
            id={props.id.dom_id()}
            class="modal"
            ref={container}
            style={if is_open { "display: block;" } else { "display: none;" }}
            onclick={on_backdrop}
        >
            <div class="modal-content" ref={content}>
                <span class="close" onclick={on_close}>{"×"}</span>
                <h2>{props.title.clone()}</h2>
                { for props.children.iter() }
            </div>
        </div>
    }
}
