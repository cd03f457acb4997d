use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::context::use_page;
use crate::components::contact::ContactButton;
use crate::components::forms::{CallbackForm, RegistrationForm};
use crate::components::internships::InternshipBoard;
use crate::components::modal::Modal;
use crate::components::navbar::Navbar;
use crate::components::reveal::Reveal;
use crate::components::scroll_link::ScrollLink;
use crate::config::{CARD_FOLLOW_UP_MS, CONTACT_PHONE_DISPLAY, EMPLOYER_FOLLOW_UP_MS};
use crate::content::{COURSES, HERO_CARDS, HIGHLIGHTS};
use crate::state::modal::ModalId;
use crate::state::notification::Severity;
use crate::state::page::PageAction;
use crate::state::scroll::parallax_transform;
use crate::state::tasks::TaskKey;

#[function_component(Landing)]
pub fn landing() -> Html {
    let page = use_page();

    {
        let dispatcher = page.state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let reader = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(offset) = reader.as_ref().and_then(|w| w.scroll_y().ok()) {
                        dispatcher.dispatch(PageAction::Scrolled(offset));
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let open = |id: ModalId| {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.open_modal(id))
    };

    let on_post_job = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            page.notify("Redirecting to employer portal...", Severity::Info);
            let follow_up = page.clone();
            page.schedule(TaskKey::FollowUp, EMPLOYER_FOLLOW_UP_MS, move || {
                follow_up.notify(
                    format!("Feature coming soon! Contact us at {}", CONTACT_PHONE_DISPLAY),
                    Severity::Success,
                );
            });
        })
    };

    let on_enroll = |title: &'static str| {
        let page = page.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            page.notify(format!("Enroll in {}? Contact us for more details!", title), Severity::Info);
            let follow_up = page.clone();
            page.schedule(TaskKey::FollowUp, CARD_FOLLOW_UP_MS, move || {
                follow_up.open_modal(ModalId::Callback);
            });
        })
    };

    let parallax = page.features.parallax;
    let scroll_offset = page.state.scroll_offset;

    html! {
        <>
            <Navbar />

            <section id="home" class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Track, Learn and Land Your Internship"}</h1>
                    <p class="hero-subtitle">
                        {"Courses, mentors and verified internships for students, with every application tracked in one place."}
                    </p>
                    <div class="hero-buttons">
                        <button id="getStarted" class="btn btn-primary" onclick={open(ModalId::Registration)}>
                            {"Get Started"}
                        </button>
                        <ScrollLink href="#internships" class="btn btn-outline">{"Browse Internships"}</ScrollLink>
                    </div>
                </div>
                <div class="hero-visual">
                    { for HERO_CARDS.iter().enumerate().map(|(index, label)| html! {
                        <div class="floating-card"
                            style={parallax.then(|| parallax_transform(scroll_offset, index))}>
                            {*label}
                        </div>
                    }) }
                </div>
            </section>

            <section id="features" class="features">
                <div class="container">
                    <Reveal class="section-title"><h2>{"Why Students Choose Us"}</h2></Reveal>
                    <div class="features-grid">
                        { for HIGHLIGHTS.iter().enumerate().map(|(index, highlight)| html! {
                            <Reveal class="feature-card" grid_index={index}>
                                <div class="feature-icon">{highlight.icon}</div>
                                <h3>{highlight.title}</h3>
                                <p>{highlight.text}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="courses" class="courses">
                <div class="container">
                    <Reveal class="section-title"><h2>{"Courses"}</h2></Reveal>
                    <div class="courses-grid">
                        { for COURSES.iter().enumerate().map(|(index, course)| html! {
                            <Reveal class="course-card" grid_index={index}>
                                <h3>{course.title}</h3>
                                <span class="course-duration">{course.duration}</span>
                                <p>{course.summary}</p>
                                <a href="#" class="btn btn-outline" onclick={on_enroll(course.title)}>{"Enroll"}</a>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <InternshipBoard />

            <section id="employers" class="employers">
                <div class="container">
                    <Reveal class="section-title"><h2>{"Hiring Interns?"}</h2></Reveal>
                    <p>{"Post a role and reach students who have already built real projects."}</p>
                    <button id="postJob" class="btn btn-primary" onclick={on_post_job}>{"Post a Job"}</button>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    <Reveal class="section-title"><h2>{"Talk to Us"}</h2></Reveal>
                    <div class="contact-actions">
                        <button id="studentRegister" class="btn btn-primary" onclick={open(ModalId::Registration)}>
                            {"Register as Student"}
                        </button>
                        <button id="getCallback" class="btn btn-outline" onclick={open(ModalId::Callback)}>
                            {"Get a Callback"}
                        </button>
                        <ContactButton />
                    </div>
                </div>
            </section>

            <footer class="footer">
                <p>{"© Hackveda Intern Tracker"}</p>
            </footer>

            <Modal id={ModalId::Registration} title="Student Registration">
                <RegistrationForm />
            </Modal>
            <Modal id={ModalId::Callback} title="Request a Callback">
                <CallbackForm />
            </Modal>
        </>
    }
}
