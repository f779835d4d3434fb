use crate::config::BASE_PRICE;
use crate::error::PageError;
use crate::models::catalog::Ingredient;

/// Toppings chosen in the "build your creation" widget, in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PizzaSelection {
    items: Vec<Ingredient>,
}

impl PizzaSelection {
    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, ingredient: &Ingredient) -> bool {
        self.items.iter().any(|i| i.name == ingredient.name)
    }

    /// Adds the ingredient if it is missing, removes it otherwise.
    pub fn toggle(mut self, ingredient: Ingredient) -> Self {
        if let Some(pos) = self.items.iter().position(|i| i.name == ingredient.name) {
            self.items.remove(pos);
        } else {
            self.items.push(ingredient);
        }
        self
    }

    pub fn total(&self) -> Result<u32, PageError> {
        self.items
            .iter()
            .try_fold(BASE_PRICE, |sum, ingredient| -> Result<u32, PageError> {
                Ok(sum + ingredient.price_value()?)
            })
    }
}

/// Where a topping sits on the pizza, in percent of the pizza's box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToppingPlacement {
    pub top_pct: usize,
    pub left_pct: usize,
    pub delay_ms: usize,
}

pub fn topping_placement(index: usize) -> ToppingPlacement {
    ToppingPlacement {
        top_pct: 20 + (index * 15) % 60,
        left_pct: 20 + (index * 20) % 60,
        delay_ms: index * 100,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::models::catalog::{ingredient_by_name, INGREDIENTS};

    fn pick(name: &str) -> Ingredient {
        ingredient_by_name(name).unwrap()
    }

    #[test]
    fn empty_selection_costs_the_base_price() {
        assert_eq!(PizzaSelection::default().total(), Ok(18));
    }

    #[test]
    fn total_adds_each_selected_price() {
        let selection = PizzaSelection::default()
            .toggle(pick("Buffalo Mozzarella"))
            .toggle(pick("Fresh Basil"));
        assert_eq!(selection.total(), Ok(24));

        let everything = INGREDIENTS
            .iter()
            .fold(PizzaSelection::default(), |s, i| s.toggle(*i));
        assert_eq!(everything.total(), Ok(18 + 3 + 4 + 6 + 2 + 8 + 2));
    }

    #[test]
    fn toggling_twice_restores_the_selection() {
        let names = |s: &PizzaSelection| s.items().iter().map(|i| i.name).collect::<BTreeSet<_>>();
        let start = PizzaSelection::default()
            .toggle(pick("Arugula"))
            .toggle(pick("Prosciutto di Parma"));
        for ingredient in INGREDIENTS {
            let round_trip = start.clone().toggle(ingredient).toggle(ingredient);
            assert_eq!(names(&round_trip), names(&start), "{}", ingredient.name);
            assert_eq!(round_trip.items().len(), start.items().len());
        }
    }

    #[test]
    fn round_trip_of_absent_ingredient_keeps_order() {
        let start = PizzaSelection::default()
            .toggle(pick("Arugula"))
            .toggle(pick("Prosciutto di Parma"));
        let basil = pick("Fresh Basil");
        assert_eq!(start.clone().toggle(basil).toggle(basil), start);
    }

    #[test]
    fn round_trip_of_present_ingredient_moves_it_last() {
        let start = PizzaSelection::default()
            .toggle(pick("Arugula"))
            .toggle(pick("Prosciutto di Parma"));
        let arugula = pick("Arugula");
        let round_trip = start.toggle(arugula).toggle(arugula);
        let order: Vec<&str> = round_trip.items().iter().map(|i| i.name).collect();
        assert_eq!(order, vec!["Prosciutto di Parma", "Arugula"]);
    }

    #[test]
    fn removal_keeps_insertion_order() {
        let selection = PizzaSelection::default()
            .toggle(pick("Arugula"))
            .toggle(pick("Truffle Oil"))
            .toggle(pick("Fresh Basil"))
            .toggle(pick("Truffle Oil"));
        let names: Vec<&str> = selection.items().iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Arugula", "Fresh Basil"]);
    }

    #[test]
    fn malformed_price_surfaces_as_error() {
        let bogus = Ingredient { name: "Gold Leaf", price: "priceless", icon: "✨" };
        let selection = PizzaSelection::default().toggle(bogus);
        assert_eq!(selection.total(), Err(PageError::InvalidPrice("priceless".to_string())));
    }

    #[test]
    fn placements_follow_selection_index() {
        assert_eq!(topping_placement(0), ToppingPlacement { top_pct: 20, left_pct: 20, delay_ms: 0 });
        assert_eq!(topping_placement(3), ToppingPlacement { top_pct: 65, left_pct: 20, delay_ms: 300 });
        assert_eq!(topping_placement(5), ToppingPlacement { top_pct: 35, left_pct: 60, delay_ms: 500 });
    }
}
