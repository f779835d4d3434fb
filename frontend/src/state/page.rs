use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::catalog::Ingredient;
use crate::state::builder::PizzaSelection;
use crate::state::carousel::Carousel;
use crate::state::parallax::ParallaxOffsets;
use crate::state::visibility::{SectionId, VisibleSections};

/// Everything the landing page renders from. Lives only for the session.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub carousel: Carousel,
    pub selection: PizzaSelection,
    pub menu_open: bool,
    pub scroll_y: f64,
    pub visible: VisibleSections,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    CarouselTick,
    SelectMedia(usize),
    ToggleIngredient(Ingredient),
    ToggleMenu,
    CloseMenu,
    Scrolled(f64),
    SectionSeen(SectionId),
    /// Reveal everything at once, used when the browser cannot observe sections.
    RevealAll,
}

impl PageState {
    pub fn new(media_count: usize) -> Self {
        Self {
            carousel: Carousel::new(media_count),
            selection: PizzaSelection::default(),
            menu_open: false,
            scroll_y: 0.0,
            visible: VisibleSections::default(),
        }
    }

    pub fn parallax(&self) -> ParallaxOffsets {
        ParallaxOffsets::from_scroll(self.scroll_y)
    }

    pub fn apply(mut self, action: PageAction) -> Self {
        match action {
            PageAction::CarouselTick => self.carousel = self.carousel.tick(),
            PageAction::SelectMedia(index) => self.carousel = self.carousel.select(index),
            PageAction::ToggleIngredient(ingredient) => {
                self.selection = self.selection.toggle(ingredient);
            }
            PageAction::ToggleMenu => self.menu_open = !self.menu_open,
            PageAction::CloseMenu => self.menu_open = false,
            PageAction::Scrolled(y) => self.scroll_y = y,
            PageAction::SectionSeen(section) => {
                if self.visible.mark_seen(section) {
                    log::debug!("section #{} revealed", section.as_str());
                }
            }
            PageAction::RevealAll => self.visible = VisibleSections::all(),
        }
        self
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::ingredient_by_name;

    fn run(state: PageState, actions: Vec<PageAction>) -> PageState {
        actions.into_iter().fold(state, PageState::apply)
    }

    #[test]
    fn truffle_oil_round_trip_returns_to_base_price() {
        let truffle = ingredient_by_name("Truffle Oil").unwrap();
        let start = PageState::new(4);
        assert_eq!(start.carousel.active(), 0);
        assert!(start.selection.is_empty());
        assert!(start.visible.is_empty());

        let picked = start.clone().apply(PageAction::ToggleIngredient(truffle));
        assert_eq!(picked.selection.total(), Ok(26));

        let dropped = picked.apply(PageAction::ToggleIngredient(truffle));
        assert_eq!(dropped.selection.total(), Ok(18));
        assert_eq!(dropped, start);
    }

    #[test]
    fn unrelated_events_do_not_hide_revealed_sections() {
        let state = run(
            PageState::new(4),
            vec![
                PageAction::SectionSeen(SectionId::Menu),
                PageAction::Scrolled(1200.0),
                PageAction::CarouselTick,
                PageAction::ToggleMenu,
                PageAction::Scrolled(0.0),
                PageAction::SectionSeen(SectionId::Contact),
            ],
        );
        assert!(state.visible.contains(SectionId::Menu));
        assert!(state.visible.contains(SectionId::Contact));
        assert!(!state.visible.contains(SectionId::Story));
    }

    #[test]
    fn manual_selection_then_ticks() {
        let state = run(
            PageState::new(4),
            vec![
                PageAction::CarouselTick,
                PageAction::SelectMedia(3),
                PageAction::CarouselTick,
                PageAction::CarouselTick,
            ],
        );
        assert_eq!(state.carousel.active(), 1);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let open = PageState::new(4).apply(PageAction::ToggleMenu);
        assert!(open.menu_open);
        assert!(!open.clone().apply(PageAction::ToggleMenu).menu_open);
        assert!(!open.apply(PageAction::CloseMenu).menu_open);
    }

    #[test]
    fn scroll_feeds_parallax() {
        let state = PageState::new(4).apply(PageAction::Scrolled(300.0));
        assert_eq!(state.parallax().media, 150.0);
    }

    #[test]
    fn reveal_all_marks_every_section() {
        let state = PageState::new(4).apply(PageAction::RevealAll);
        assert_eq!(state.visible, VisibleSections::all());
    }

    #[test]
    fn reducer_matches_apply() {
        let state = Rc::new(PageState::new(4));
        let reduced = state.clone().reduce(PageAction::CarouselTick);
        assert_eq!(*reduced, (*state).clone().apply(PageAction::CarouselTick));
    }
}
