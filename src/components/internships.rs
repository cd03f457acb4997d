use yew::prelude::*;

use crate::components::context::use_page;
use crate::components::reveal::Reveal;
use crate::config::{CARD_FOLLOW_UP_MS, FILTER_ENTER_MS, FILTER_HIDE_MS};
use crate::content::{FILTERS, INTERNSHIPS};
use crate::state::filter::{card_style, CardPhase, Category};
use crate::state::modal::ModalId;
use crate::state::notification::Severity;
use crate::state::page::PageAction;
use crate::state::tasks::TaskKey;

#[function_component(InternshipBoard)]
pub fn internship_board() -> Html {
    let page = use_page();
    let filters_on = page.features.filters;

    // Returning cards start fading in after one paint at their start pose.
    // Faded-out cards leave the layout once the fade has run.
    {
        let page = page.clone();
        let generation = page.state.filter.generation();
        use_effect_with_deps(
            move |_| {
                if page.state.filter.has_entering() {
                    let dispatcher = page.state.dispatcher();
                    page.schedule(TaskKey::FilterEnter, FILTER_ENTER_MS, move || {
                        dispatcher.dispatch(PageAction::EnterFilter);
                    });
                }
                if page.state.filter.has_leaving() {
                    let dispatcher = page.state.dispatcher();
                    page.schedule(TaskKey::FilterSettle, FILTER_HIDE_MS, move || {
                        dispatcher.dispatch(PageAction::SettleFilter);
                    });
                }
                || ()
            },
            generation,
        );
    }

    let active = page.state.filter.active().clone();
    let buttons = FILTERS.iter().map(|(value, label)| {
        let category = Category::parse(value);
        let is_active = category == active;
        let onclick = {
            let page = page.clone();
            Callback::from(move |_: MouseEvent| {
                page.dispatch(PageAction::SelectFilter(category.clone()));
            })
        };
        html! {
            <button class={classes!("filter-btn", is_active.then_some("active"))}
                data-filter={*value} {onclick}>
                {*label}
            </button>
        }
    });

    let cards = INTERNSHIPS.iter().enumerate().map(|(index, internship)| {
        let phase = if filters_on {
            page.state.filter.phase(index)
        } else {
            CardPhase::Shown
        };
        let on_apply = {
            let page = page.clone();
            let title = internship.title;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                page.notify(format!("Apply for {}? Please register first!", title), Severity::Info);
                let follow_up = page.clone();
                page.schedule(TaskKey::FollowUp, CARD_FOLLOW_UP_MS, move || {
                    follow_up.open_modal(ModalId::Registration);
                });
            })
        };
        html! {
            <div class="internship-card" data-category={internship.category}
                style={card_style(phase, index)}>
                <Reveal grid_index={index}>
                    <h3>{internship.title}</h3>
                    <p class="company">{internship.company}</p>
                    <div class="internship-meta">
                        <span>{"📍 "}{internship.location}</span>
                        <span>{"💰 "}{internship.stipend}</span>
                    </div>
                    <a href="#" class="btn btn-primary" onclick={on_apply}>{"Apply Now"}</a>
                </Reveal>
            </div>
        }
    });

    html! {
        <section id="internships" class="internships">
            <div class="container">
                <Reveal class="section-title"><h2>{"Open Internships"}</h2></Reveal>
                if filters_on {
                    <div class="filter-buttons">{ for buttons }</div>
                }
                <div class="internship-grid">{ for cards }</div>
            </div>
        </section>
    }
}
