use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::components::context::use_page;
use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::state::scroll::{reveal_delay, RevealLatch};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Position among grid siblings; staggers the reveal animation.
    #[prop_or_default]
    pub grid_index: Option<usize>,
    pub children: Children,
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Fades its content in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let page = use_page();
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let enabled = page.features.reveal;
        use_effect_with_deps(
            move |_| {
                let mut watching: Option<(IntersectionObserver, ObserverCallback)> = None;
                if let Some(element) = node.cast::<Element>().filter(|_| enabled) {
                    let mut latch = RevealLatch::default();
                    let callback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if latch.observe(entry.is_intersecting()) {
                                    revealed.set(true);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                    options.set_root_margin(REVEAL_ROOT_MARGIN);
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            watching = Some((observer, callback));
                        }
                        Err(err) => warn!("reveal disabled, observer unavailable: {:?}", err),
                    }
                }

                move || {
                    if let Some((observer, _callback)) = watching {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let style = match (*revealed, props.grid_index) {
        (true, Some(index)) => reveal_delay(index),
        _ => String::new(),
    };

    html! {
        <div ref={node} class={classes!(props.class.clone(), (*revealed).then_some("fade-in"))} {style}>
            { for props.children.iter() }
        </div>
    }
}
