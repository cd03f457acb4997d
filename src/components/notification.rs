use yew::prelude::*;

use crate::components::context::use_page;
use crate::config::{NOTIFICATION_EXIT_MS, NOTIFICATION_LIFETIME_MS};
use crate::state::page::PageAction;
use crate::state::tasks::TaskKey;

#[function_component(NotificationBanner)]
pub fn notification_banner() -> Html {
    let page = use_page();
    let current = page.state.notification.current().cloned();

    // Timers follow the visible toast: a new id restarts them, the exit
    // transition schedules the removal.
    {
        let page = page.clone();
        let stage = current.as_ref().map(|n| (n.id, n.leaving));
        use_effect_with_deps(
            move |stage| {
                match *stage {
                    Some((id, false)) => {
                        page.cancel(TaskKey::NotificationRemove);
                        let dispatcher = page.state.dispatcher();
                        page.schedule(TaskKey::NotificationExit, NOTIFICATION_LIFETIME_MS, move || {
                            dispatcher.dispatch(PageAction::BeginNotificationExit(id));
                        });
                    }
                    Some((id, true)) => {
                        let dispatcher = page.state.dispatcher();
                        page.schedule(TaskKey::NotificationRemove, NOTIFICATION_EXIT_MS, move || {
                            dispatcher.dispatch(PageAction::DismissNotification(id));
                        });
                    }
                    None => {
                        page.cancel(TaskKey::NotificationExit);
                        page.cancel(TaskKey::NotificationRemove);
                    }
                }
                || ()
            },
            stage,
        );
    }

    let Some(notification) = current else {
        return html! {};
    };

    let on_close = {
        let page = page.clone();
        let id = notification.id;
        Callback::from(move |_: MouseEvent| {
            page.cancel(TaskKey::NotificationExit);
            page.cancel(TaskKey::NotificationRemove);
            page.dispatch(PageAction::DismissNotification(id));
        })
    };

    let animation = if notification.leaving {
        "slideOutRight 0.3s ease forwards"
    } else {
        "slideInRight 0.3s ease"
    };

    html! {
        <div
            key={notification.id.to_string()}
            class={classes!("notification", notification.severity.class())}
            style={format!("background: {}; animation: {};", notification.severity.color(), animation)}
        >
            <style>
                {r#"
                    @keyframes slideInRight {
                        from { opacity: 0; transform: translateX(100%); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes slideOutRight {
                        from { opacity: 1; transform: translateX(0); }
                        to { opacity: 0; transform: translateX(100%); }
                    }
                    .notification {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        color: white;
                        padding: 1rem 1.5rem;
                        border-radius: 8px;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        z-index: 3000;
                        max-width: 400px;
                    }
                    .notification-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 1.2rem;
                        cursor: pointer;
                        padding: 0;
                        line-height: 1;
                    }
                    .notification-message {
                        white-space: pre-line;
                    }
                "#}
            </style>
            <div class="notification-content">
                <span class="notification-message">{&notification.message}</span>
                <button class="notification-close" onclick={on_close}>{"×"}</button>
            </div>
        </div>
    }
}
