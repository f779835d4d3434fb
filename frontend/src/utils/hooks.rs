use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::state::page::{PageAction, PageState};
use crate::state::visibility::SectionId;
use crate::utils::browser;

/// Advances the hero carousel on a fixed interval for as long as the page is mounted.
#[hook]
pub fn use_carousel_timer(dispatcher: UseReducerDispatcher<PageState>) {
    use_effect_with_deps(
        move |_| {
            let interval = Interval::new(config::CAROUSEL_INTERVAL_MS, move || {
                dispatcher.dispatch(PageAction::CarouselTick);
            });
            move || drop(interval)
        },
        (),
    );
}

/// Mirrors the window scroll offset into page state.
#[hook]
pub fn use_scroll_offset(dispatcher: UseReducerDispatcher<PageState>) {
    use_effect_with_deps(
        move |_| {
            let on_scroll = Callback::from(move |y: f64| dispatcher.dispatch(PageAction::Scrolled(y)));
            let listener = match browser::listen_scroll(on_scroll) {
                Ok(listener) => Some(listener),
                Err(e) => {
                    log::error!("parallax disabled: {}", e);
                    None
                }
            };
            move || drop(listener)
        },
        (),
    );
}

/// Reveals each section the first time it enters the viewport.
/// Falls back to revealing everything when sections cannot be observed.
#[hook]
pub fn use_section_reveal(dispatcher: UseReducerDispatcher<PageState>) {
    use_effect_with_deps(
        move |_| {
            let on_seen = {
                let dispatcher = dispatcher.clone();
                Callback::from(move |section: SectionId| {
                    dispatcher.dispatch(PageAction::SectionSeen(section))
                })
            };
            let observer = match browser::observe_sections(&SectionId::ALL, on_seen) {
                Ok(observer) => Some(observer),
                Err(e) => {
                    log::error!("section reveal unavailable, showing all sections: {}", e);
                    dispatcher.dispatch(PageAction::RevealAll);
                    None
                }
            };
            move || drop(observer)
        },
        (),
    );
}

/// Scrolls to the top once when the page first mounts.
#[hook]
pub fn use_scroll_to_top_on_mount() {
    use_effect_with_deps(
        move |_| {
            if let Err(e) = browser::scroll_to_top() {
                log::warn!("could not reset scroll position: {}", e);
            }
            || ()
        },
        (),
    );
}
