use std::rc::Rc;

use yew::prelude::*;

use crate::models::catalog::{MediaItem, MediaKind};
use crate::state::carousel::Carousel;
use crate::state::parallax::{translate_y, ParallaxOffsets};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub media: Rc<Vec<MediaItem>>,
    pub carousel: Carousel,
    pub parallax: ParallaxOffsets,
    pub on_select: Callback<usize>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let slides = props
        .media
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let active = props.carousel.is_active(index);
            let style = format!(
                "opacity: {}; pointer-events: {}; transform: translateY({}px) scale({});",
                if active { 1 } else { 0 },
                if active { "auto" } else { "none" },
                props.parallax.media,
                if active { "1" } else { "1.1" },
            );
            let body = match item.kind {
                MediaKind::Video => html! {
                    <video
                        class="hero-media"
                        src={item.source.clone()}
                        autoplay=true
                        muted=true
                        loop=true
                        playsinline=true
                    />
                },
                MediaKind::Image => html! {
                    <img class="hero-media" src={item.source.clone()} alt={item.alt_text} />
                },
            };
            html! {
                <div key={index} class="hero-slide" {style}>{ body }</div>
            }
        })
        .collect::<Html>();

    let dots = (0..props.carousel.len())
        .map(|index| {
            let active = props.carousel.is_active(index);
            html! {
                <button
                    key={index}
                    class={classes!("hero-dot", active.then_some("active"))}
                    aria-label={format!("Show slide {}", index + 1)}
                    onclick={props.on_select.reform(move |_: MouseEvent| index)}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section class="hero">
            <div class="hero-shade"></div>
            { slides }
            <div class="hero-content">
                <div class="hero-text">
                    <h1 class="hero-title" style={translate_y(props.parallax.title)}>{"Pompeii"}</h1>
                    <h2 class="hero-subtitle" style={translate_y(props.parallax.subtitle)}>{"Pizza Studio"}</h2>
                    <p class="hero-tagline" style={translate_y(props.parallax.tagline)}>
                        {"An artisanal journey through ancient flavors and acoustic ambiance, where every pizza tells the story of Vesuvius and time itself."}
                    </p>
                </div>
            </div>
            <div class="hero-dots">{ dots }</div>
        </section>
    }
}
