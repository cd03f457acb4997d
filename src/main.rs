use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

mod config;
mod content;
mod error;
mod state;
mod components {
    pub mod contact;
    pub mod context;
    pub mod forms;
    pub mod internships;
    pub mod modal;
    pub mod navbar;
    pub mod notification;
    pub mod reveal;
    pub mod scroll_link;
}
mod pages {
    pub mod landing;
}

use components::context::PageHandle;
use components::notification::NotificationBanner;
use config::Features;
use pages::landing::Landing;
use state::modal::body_overflow;
use state::page::{PageAction, PageState};
use state::tasks::TaskRegistry;

#[function_component]
fn App() -> Html {
    let features = Features::current();
    let state = use_reducer(move || PageState::new(&features, content::internship_tags()));
    let tasks = use_mut_ref(TaskRegistry::default);

    // Body scroll lock follows "a dialog is open".
    {
        let locked = state.scroll_locked();
        use_effect_with_deps(
            move |locked| {
                let body = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body());
                if let Some(body) = body {
                    let _ = body.style().set_property("overflow", body_overflow(*locked));
                }
                || ()
            },
            locked,
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |escape_closes| {
                let document = web_sys::window().and_then(|w| w.document()).filter(|_| *escape_closes);
                let key_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        dispatcher.dispatch(PageAction::CloseCurrentModal);
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            features.escape_closes_modal,
        );
    }

    // Pending deferred work dies with the page instead of firing into it.
    {
        let tasks = tasks.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let cancelled = tasks.borrow_mut().cancel_all();
                    debug!("cancelled {} pending tasks on unmount", cancelled);
                }
            },
            (),
        );
    }

    let handle = PageHandle {
        state,
        features,
        tasks,
    };

    html! {
        <ContextProvider<PageHandle> context={handle}>
            <Landing />
            <NotificationBanner />
        </ContextProvider<PageHandle>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application with {:?}", Features::current());
    yew::Renderer::<App>::new().render();
}
