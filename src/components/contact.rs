use log::warn;
use yew::prelude::*;

use crate::config::{CONTACT_MESSAGE, CONTACT_PHONE};
use crate::state::contact::whatsapp_url;

#[function_component(ContactButton)]
pub fn contact_button() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        let url = whatsapp_url(CONTACT_PHONE, CONTACT_MESSAGE);
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(&url, "_blank").is_err() {
                warn!("could not open {}", url);
            }
        }
    });

    html! {
        <button class="btn btn-whatsapp" {onclick}>{"💬 Chat on WhatsApp"}</button>
    }
}
