use yew::prelude::*;

use crate::state::visibility::SectionId;

const NAV_TARGETS: [(&str, SectionId); 4] = [
    ("Menu", SectionId::Menu),
    ("Experience", SectionId::Experience),
    ("Story", SectionId::Story),
    ("Contact", SectionId::Contact),
];

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<SectionId>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let links = |class: &'static str| {
        NAV_TARGETS
            .iter()
            .map(|(label, section)| {
                let section = *section;
                let onclick = props.on_navigate.reform(move |_: MouseEvent| section);
                html! {
                    <button key={*label} class={class} {onclick}>{*label}</button>
                }
            })
            .collect::<Html>()
    };
    let burger_style = if props.menu_open {
        "transform: rotate(90deg);"
    } else {
        "transform: rotate(0deg);"
    };

    html! {
        <nav class="floating-nav">
            <div class="floating-nav-inner">
                <div class="nav-brand">{"Pompeii"}</div>
                <div class="nav-links">{ links("nav-link") }</div>
                <button
                    class="nav-burger"
                    aria-label="Toggle navigation"
                    aria-expanded={props.menu_open.to_string()}
                    style={burger_style}
                    onclick={props.on_toggle_menu.reform(|_: MouseEvent| ())}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if props.menu_open {
                <div class="nav-dropdown">{ links("nav-dropdown-link") }</div>
            }
        </nav>
    }
}
