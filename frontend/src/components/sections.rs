//! Static content sections of the landing page.

use yew::prelude::*;

use crate::models::catalog::{Icon, EXPERIENCE, SOCIAL_LINKS, STORY, TESTIMONIALS};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub reveal: &'static str,
}

#[function_component(ExperienceSection)]
pub fn experience_section(props: &RevealProps) -> Html {
    html! {
        <section id="experience" class="page-section shaded">
            <div class="section-inner">
                <div class={classes!("section-heading", props.reveal)}>
                    <h2>{"The Studio Experience"}</h2>
                    <p>{"Immerse yourself in an acoustic dining environment where every sense is awakened"}</p>
                </div>
                <div class="experience-grid">
                    { for EXPERIENCE.iter().enumerate().map(|(index, feature)| html! {
                        <div
                            key={feature.title}
                            class="experience-card"
                            style={format!("animation-delay: {}ms;", index * 200)}
                        >
                            <div class="experience-icon"><i class={feature.icon.class()}></i></div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(StorySection)]
pub fn story_section(props: &RevealProps) -> Html {
    html! {
        <section id="story" class="page-section">
            <div class={classes!("section-inner", "narrow", "centered", props.reveal)}>
                <h2 class="section-title">{"Our Story"}</h2>
                <div class="story-text">
                    { for STORY.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &RevealProps) -> Html {
    html! {
        <section id="testimonials" class="page-section shaded">
            <div class={classes!("section-inner", props.reveal)}>
                <h2 class="section-title">{"Guest Experiences"}</h2>
                <div class="testimonial-strip">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <div
                            key={testimonial.name}
                            class="testimonial-card"
                            style={format!("animation-delay: {}ms;", index * 150)}
                        >
                            <div class="stars" aria-label={format!("{} out of 5 stars", testimonial.rating)}>
                                { for (0..testimonial.rating).map(|i| html! {
                                    <i
                                        key={i}
                                        class={classes!(Icon::Star.class(), "star")}
                                        style={format!("animation-delay: {}ms;", u32::from(i) * 100)}
                                    ></i>
                                }) }
                            </div>
                            <p class="testimonial-text">{format!("\u{201c}{}\u{201d}", testimonial.text)}</p>
                            <div class="testimonial-name">{testimonial.name}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="lava-bar"></div>
            <div class="footer-inner">
                <div class="footer-brand">{"Pompeii Pizza Studio"}</div>
                <p class="footer-tagline">{"Where ancient traditions meet modern artistry"}</p>
                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().map(|social| html! {
                        <a key={*social} href="#">{*social}</a>
                    }) }
                </div>
                <div class="footer-copyright">{"© 2025 Pompeii Pizza Studio. All rights reserved."}</div>
            </div>
        </footer>
    }
}
