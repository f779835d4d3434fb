use yew::prelude::*;

use crate::components::pizza_builder::PizzaBuilder;
use crate::models::catalog::{Ingredient, SIGNATURE_PIZZAS};
use crate::state::builder::PizzaSelection;

#[derive(Properties, PartialEq)]
pub struct MenuSectionProps {
    pub reveal: &'static str,
    pub selection: PizzaSelection,
    pub on_toggle: Callback<Ingredient>,
}

#[function_component(MenuSection)]
pub fn menu_section(props: &MenuSectionProps) -> Html {
    html! {
        <section id="menu" class="page-section">
            <div class="section-inner">
                <div class={classes!("section-heading", props.reveal)}>
                    <h2>{"Artisanal Menu"}</h2>
                    <p>{"Each creation is a masterpiece, crafted with ingredients sourced from the volcanic soils of Campania"}</p>
                </div>
                <div class="menu-grid">
                    <div class="menu-list">
                        { for SIGNATURE_PIZZAS.iter().enumerate().map(|(index, pizza)| html! {
                            <div
                                key={pizza.name}
                                class="menu-card"
                                style={format!("animation-delay: {}ms;", index * 200)}
                            >
                                <h3>{pizza.name}</h3>
                                <p>{pizza.description}</p>
                                <span class="menu-price">{format!("${}", pizza.price)}</span>
                            </div>
                        }) }
                    </div>
                    <PizzaBuilder
                        selection={props.selection.clone()}
                        on_toggle={props.on_toggle.clone()}
                    />
                </div>
            </div>
        </section>
    }
}
