use yew::prelude::*;

use crate::models::catalog::{Ingredient, INGREDIENTS};
use crate::state::builder::{topping_placement, PizzaSelection};

#[derive(Properties, PartialEq)]
pub struct PizzaBuilderProps {
    pub selection: PizzaSelection,
    pub on_toggle: Callback<Ingredient>,
}

#[function_component(PizzaBuilder)]
pub fn pizza_builder(props: &PizzaBuilderProps) -> Html {
    let selection = &props.selection;

    let toppings = selection
        .items()
        .iter()
        .enumerate()
        .map(|(index, ingredient)| {
            let place = topping_placement(index);
            let style = format!(
                "top: {}%; left: {}%; animation-delay: {}ms;",
                place.top_pct, place.left_pct, place.delay_ms
            );
            html! {
                <div key={ingredient.name} class="topping" {style}>{ingredient.icon}</div>
            }
        })
        .collect::<Html>();

    let buttons = INGREDIENTS
        .iter()
        .map(|ingredient| {
            let ingredient = *ingredient;
            let selected = selection.contains(&ingredient);
            html! {
                <button
                    key={ingredient.name}
                    class={classes!("ingredient-button", selected.then_some("selected"))}
                    aria-pressed={selected.to_string()}
                    onclick={props.on_toggle.reform(move |_: MouseEvent| ingredient)}
                >
                    <div class="ingredient-icon">{ingredient.icon}</div>
                    <div class="ingredient-name">{ingredient.name}</div>
                    <div class="ingredient-price">{ingredient.price}</div>
                </button>
            }
        })
        .collect::<Html>();

    let total = match selection.total() {
        Ok(total) => format!("Total: ${}", total),
        Err(e) => {
            log::error!("cannot price selection: {}", e);
            "Total: —".to_string()
        }
    };
    let pizza_style = if selection.is_empty() {
        "transform: scale(1);"
    } else {
        "transform: scale(1.05);"
    };

    html! {
        <div class="builder-card">
            <h3>{"Build Your Creation"}</h3>
            <div class="pizza-stage">
                <div class="pizza-base" style={pizza_style}>
                    <div class="pizza-sauce"></div>
                    { toppings }
                </div>
            </div>
            <div class="ingredient-grid">{ buttons }</div>
            <div class="builder-total">{ total }</div>
        </div>
    }
}
