use chrono::Utc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::context::{use_page, PageHandle};
use crate::content::{Choice, COURSE_CHOICES, INTEREST_CHOICES, TIME_CHOICES};
use crate::state::forms::{CallbackDraft, Draft, RegistrationDraft};
use crate::state::records::RecordStore;
use crate::state::submit::{check, finish, Finished};

fn on_text<D: Clone + 'static>(draft: &UseStateHandle<D>, apply: fn(&mut D, String)) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

fn on_choice<D: Clone + 'static>(draft: &UseStateHandle<D>, apply: fn(&mut D, String)) -> Callback<Event> {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, select.value());
        draft.set(next);
    })
}

fn options(placeholder: &'static str, choices: &'static [Choice], selected: &str) -> Html {
    html! {
        <>
            <option value="" selected={selected.is_empty()}>{placeholder}</option>
            { for choices.iter().map(|(value, label)| html! {
                <option value={*value} selected={selected == *value}>{*label}</option>
            }) }
        </>
    }
}

/// Validate, then complete now or after the simulated delay. The draft is
/// reset only when the record was stored.
fn submit<D: Draft>(page: &PageHandle, draft: &UseStateHandle<D>, submitting: &UseStateHandle<bool>) {
    let values = (**draft).clone();
    if let Err(rejection) = check(&values, page.features.validation) {
        page.apply(vec![rejection]);
        return;
    }

    submitting.set(true);
    let complete = {
        let page = page.clone();
        let draft = draft.clone();
        let submitting = submitting.clone();
        move || {
            let finished = match RecordStore::browser(page.features.persistence) {
                Ok(store) => finish(values, &store, Utc::now()),
                Err(err) => Finished::failed(D::MODAL, &err),
            };
            if finished.saved {
                draft.set(D::default());
            }
            page.apply(finished.actions);
            submitting.set(false);
        }
    };

    match page.features.submit_delay_ms {
        0 => complete(),
        delay => page.schedule(D::TASK, delay, complete),
    }
}

fn on_submit<D: Draft>(
    page: &PageHandle,
    draft: &UseStateHandle<D>,
    submitting: &UseStateHandle<bool>,
) -> Callback<SubmitEvent> {
    let page = page.clone();
    let draft = draft.clone();
    let submitting = submitting.clone();
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        submit(&page, &draft, &submitting);
    })
}

#[function_component(RegistrationForm)]
pub fn registration_form() -> Html {
    let page = use_page();
    let draft = use_state(RegistrationDraft::default);
    let submitting = use_state(|| false);

    let onsubmit = on_submit(&page, &draft, &submitting);

    html! {
        <form id="studentForm" onsubmit={onsubmit}>
            <div class="form-group">
                <label for="reg-name">{"Full Name"}</label>
                <input id="reg-name" name="name" type="text" value={draft.name.clone()}
                    oninput={on_text(&draft, |d, v| d.name = v)} />
            </div>
            <div class="form-group">
                <label for="reg-email">{"Email"}</label>
                <input id="reg-email" name="email" type="email" value={draft.email.clone()}
                    oninput={on_text(&draft, |d, v| d.email = v)} />
            </div>
            <div class="form-group">
                <label for="reg-phone">{"Phone"}</label>
                <input id="reg-phone" name="phone" type="tel" value={draft.phone.clone()}
                    oninput={on_text(&draft, |d, v| d.phone = v)} />
            </div>
            <div class="form-group">
                <label for="reg-college">{"College"}</label>
                <input id="reg-college" name="college" type="text" value={draft.college.clone()}
                    oninput={on_text(&draft, |d, v| d.college = v)} />
            </div>
            <div class="form-group">
                <label for="reg-course">{"Course"}</label>
                <select id="reg-course" name="course" onchange={on_choice(&draft, |d, v| d.course = v)}>
                    { options("Select your course", COURSE_CHOICES, &draft.course) }
                </select>
            </div>
            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                { if *submitting { "Registering..." } else { "Register Now" } }
            </button>
        </form>
    }
}

#[function_component(CallbackForm)]
pub fn callback_form() -> Html {
    let page = use_page();
    let draft = use_state(CallbackDraft::default);
    let submitting = use_state(|| false);

    let onsubmit = on_submit(&page, &draft, &submitting);

    html! {
        <form id="callbackForm" onsubmit={onsubmit}>
            <div class="form-group">
                <label for="cb-name">{"Name"}</label>
                <input id="cb-name" name="name" type="text" value={draft.name.clone()}
                    oninput={on_text(&draft, |d, v| d.name = v)} />
            </div>
            <div class="form-group">
                <label for="cb-phone">{"Phone"}</label>
                <input id="cb-phone" name="phone" type="tel" value={draft.phone.clone()}
                    oninput={on_text(&draft, |d, v| d.phone = v)} />
            </div>
            <div class="form-group">
                <label for="cb-interest">{"Area of Interest"}</label>
                <select id="cb-interest" name="interest" onchange={on_choice(&draft, |d, v| d.interest = v)}>
                    { options("Select an area", INTEREST_CHOICES, &draft.interest) }
                </select>
            </div>
            <div class="form-group">
                <label for="cb-time">{"Preferred Time"}</label>
                <select id="cb-time" name="time" onchange={on_choice(&draft, |d, v| d.time = v)}>
                    { options("Select a time", TIME_CHOICES, &draft.time) }
                </select>
            </div>
            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                { if *submitting { "Requesting..." } else { "Request Callback" } }
            </button>
        </form>
    }
}
