use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::hero::Hero;
use crate::components::menu::MenuSection;
use crate::components::nav::NavBar;
use crate::components::sections::{ExperienceSection, Footer, StorySection, TestimonialsSection};
use crate::models::catalog::{media_items, Ingredient};
use crate::state::page::{PageAction, PageState};
use crate::state::visibility::SectionId;
use crate::utils::browser;
use crate::utils::hooks::{
    use_carousel_timer, use_scroll_offset, use_scroll_to_top_on_mount, use_section_reveal,
};

fn jump_to(section: SectionId) {
    if let Err(e) = browser::scroll_to_section(section.as_str()) {
        log::warn!("navigation to #{} failed: {}", section.as_str(), e);
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let media = use_memo(|_| media_items(), ());
    let state = {
        let media = media.clone();
        use_reducer(move || PageState::new(media.len()))
    };

    use_scroll_to_top_on_mount();
    use_scroll_offset(state.dispatcher());
    use_carousel_timer(state.dispatcher());
    use_section_reveal(state.dispatcher());

    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |section: SectionId| {
            jump_to(section);
            dispatcher.dispatch(PageAction::CloseMenu);
        })
    };
    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::ToggleMenu))
    };
    let on_select_media = {
        let dispatcher = state.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(PageAction::SelectMedia(index)))
    };
    let on_toggle_ingredient = {
        let dispatcher = state.dispatcher();
        Callback::from(move |ingredient: Ingredient| {
            dispatcher.dispatch(PageAction::ToggleIngredient(ingredient))
        })
    };
    let on_book = Callback::from(|_: MouseEvent| jump_to(SectionId::Contact));

    let visible = &state.visible;

    html! {
        <div class="pompeii-page">
            <NavBar
                menu_open={state.menu_open}
                {on_toggle_menu}
                {on_navigate}
            />
            <Hero
                media={media.clone()}
                carousel={state.carousel}
                parallax={state.parallax()}
                on_select={on_select_media}
            />
            <MenuSection
                reveal={visible.reveal_class(SectionId::Menu)}
                selection={state.selection.clone()}
                on_toggle={on_toggle_ingredient}
            />
            <ExperienceSection reveal={visible.reveal_class(SectionId::Experience)} />
            <StorySection reveal={visible.reveal_class(SectionId::Story)} />
            <TestimonialsSection reveal={visible.reveal_class(SectionId::Testimonials)} />
            <ContactSection reveal={visible.reveal_class(SectionId::Contact)} />
            <Footer />
            <div class="book-cta">
                <button onclick={on_book}>{"Book a Table"}</button>
            </div>
            <style>
                {r#"
    .pompeii-page {
        background: #1c1917;
        color: #f5f5f4;
        overflow-x: hidden;
        font-family: system-ui, -apple-system, sans-serif;
    }
    .pompeii-page h1, .pompeii-page h2, .pompeii-page h3,
    .nav-brand, .footer-brand {
        font-family: 'Cormorant Garamond', Georgia, serif;
        font-weight: 400;
    }
    .floating-nav {
        position: fixed;
        top: 1.5rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 50;
    }
    .floating-nav-inner {
        display: flex;
        align-items: center;
        gap: 2rem;
        padding: 1rem 2rem;
        border-radius: 9999px;
        backdrop-filter: blur(12px);
        background: rgba(28, 25, 23, 0.3);
        border: 1px solid rgba(68, 64, 60, 0.5);
    }
    .nav-brand {
        font-size: 1.25rem;
        color: #fde68a;
    }
    .nav-links {
        display: flex;
        gap: 1.5rem;
    }
    .nav-link, .nav-dropdown-link {
        background: none;
        border: none;
        color: #d6d3d1;
        font-size: 1rem;
        cursor: pointer;
        transition: color 0.3s ease, transform 0.3s ease;
    }
    .nav-link:hover, .nav-dropdown-link:hover {
        color: #fde68a;
        transform: scale(1.05);
    }
    .nav-burger {
        display: none;
        flex-direction: column;
        gap: 0.25rem;
        background: none;
        border: none;
        cursor: pointer;
        transition: transform 0.3s ease;
    }
    .nav-burger span {
        display: block;
        width: 1.5rem;
        height: 2px;
        background: #d6d3d1;
    }
    .nav-dropdown {
        margin-top: 0.75rem;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        padding: 1rem 2rem;
        border-radius: 1rem;
        backdrop-filter: blur(12px);
        background: rgba(28, 25, 23, 0.85);
        border: 1px solid rgba(68, 64, 60, 0.5);
    }
    .hero {
        position: relative;
        height: 100vh;
        overflow: hidden;
    }
    .hero-shade {
        position: absolute;
        inset: 0;
        z-index: 10;
        background: linear-gradient(to bottom, rgba(28, 25, 23, 0.2), transparent, rgba(28, 25, 23, 0.6));
    }
    .hero-slide {
        position: absolute;
        inset: 0;
        transition: all 1s ease;
    }
    .hero-media {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.5;
    }
    .hero-content {
        position: absolute;
        inset: 0;
        z-index: 20;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .hero-title {
        font-size: 6rem;
        margin: 0 0 1.5rem;
        color: #fef3c7;
        text-shadow: 0 0 20px rgba(0, 0, 0, 0.5);
    }
    .hero-subtitle {
        font-size: 1.875rem;
        font-weight: 300;
        margin: 0 0 2rem;
        color: #d6d3d1;
    }
    .hero-tagline {
        font-size: 1.125rem;
        color: #a8a29e;
        max-width: 42rem;
        margin: 0 auto;
        padding: 0 1rem;
        line-height: 1.7;
    }
    .hero-title, .hero-subtitle, .hero-tagline {
        transition: all 1s ease;
    }
    .hero-dots {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        gap: 0.75rem;
        z-index: 20;
    }
    .hero-dot {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 50%;
        border: none;
        background: #78716c;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .hero-dot.active {
        background: #fbbf24;
        transform: scale(1.25);
    }
    .page-section {
        padding: 6rem 1rem;
        position: relative;
    }
    .page-section.shaded {
        background: rgba(41, 37, 36, 0.3);
    }
    .section-inner {
        max-width: 72rem;
        margin: 0 auto;
    }
    .section-inner.narrow {
        max-width: 56rem;
    }
    .section-inner.centered {
        text-align: center;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2, .section-title {
        font-size: 3rem;
        margin: 0 0 1.5rem;
        color: #fde68a;
        text-align: center;
    }
    .section-heading p {
        font-size: 1.25rem;
        color: #a8a29e;
        max-width: 48rem;
        margin: 0 auto;
    }
    .reveal {
        transition: opacity 1s ease, transform 1s ease;
    }
    .reveal-hidden {
        opacity: 0;
        transform: translateY(3rem);
    }
    .reveal-shown {
        opacity: 1;
        transform: translateY(0);
    }
    .menu-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .menu-list {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .menu-card, .builder-card, .reservation-card {
        padding: 2rem;
        border-radius: 0.5rem;
        backdrop-filter: blur(4px);
        border: 1px solid rgba(68, 64, 60, 0.3);
    }
    .menu-card {
        background: rgba(41, 37, 36, 0.5);
        transition: all 0.5s ease;
    }
    .menu-card:hover {
        background: rgba(41, 37, 36, 0.7);
        border-color: rgba(253, 230, 138, 0.3);
        transform: scale(1.05);
    }
    .menu-card h3, .builder-card h3, .reservation-card h3, .experience-card h3 {
        font-size: 1.5rem;
        color: #fde68a;
        margin: 0 0 1rem;
    }
    .menu-card p {
        color: #d6d3d1;
        margin: 0 0 1rem;
    }
    .menu-price {
        font-size: 1.25rem;
        font-weight: 700;
        color: #fde68a;
    }
    .builder-card {
        background: rgba(41, 37, 36, 0.3);
    }
    .builder-card h3 {
        text-align: center;
    }
    .pizza-stage {
        position: relative;
        margin-bottom: 2rem;
    }
    .pizza-base {
        position: relative;
        width: 16rem;
        height: 16rem;
        margin: 0 auto;
        border-radius: 50%;
        overflow: hidden;
        border: 8px solid #92400e;
        background: linear-gradient(to bottom right, #fef3c7, #fef08a);
        transition: all 0.5s ease;
    }
    .pizza-sauce {
        position: absolute;
        inset: 1rem;
        border-radius: 50%;
        opacity: 0.8;
        background: linear-gradient(to bottom right, #dc2626, #b91c1c);
    }
    .topping {
        position: absolute;
        font-size: 1.5rem;
        transform: translate(-50%, -50%) scale(1);
        animation: topping-in 0.5s ease-out both;
    }
    @keyframes topping-in {
        from {
            opacity: 0;
            transform: translate(-50%, -50%) scale(0);
        }
        to {
            opacity: 1;
            transform: translate(-50%, -50%) scale(1);
        }
    }
    .ingredient-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.75rem;
    }
    .ingredient-button {
        padding: 0.75rem;
        border-radius: 0.5rem;
        border: 1px solid #57534e;
        background: rgba(68, 64, 60, 0.5);
        color: #f5f5f4;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .ingredient-button:hover {
        background: rgba(87, 83, 78, 0.5);
        transform: scale(1.05);
    }
    .ingredient-button.selected {
        background: #fde68a;
        color: #1c1917;
        border-color: #fde68a;
        transform: scale(1.05);
    }
    .ingredient-icon {
        font-size: 1.125rem;
        margin-bottom: 0.25rem;
    }
    .ingredient-name {
        font-size: 0.875rem;
        font-weight: 500;
    }
    .ingredient-price {
        font-size: 0.75rem;
        color: #a8a29e;
    }
    .builder-total {
        margin-top: 1.5rem;
        text-align: center;
        font-size: 1.125rem;
        font-weight: 700;
        color: #fde68a;
    }
    .experience-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .experience-card {
        text-align: center;
        transition: transform 0.5s ease;
    }
    .experience-card:hover {
        transform: scale(1.05);
    }
    .experience-icon {
        width: 5rem;
        height: 5rem;
        margin: 0 auto 1.5rem;
        border-radius: 50%;
        background: #fde68a;
        color: #1c1917;
        font-size: 2rem;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: transform 0.3s ease;
    }
    .experience-card:hover .experience-icon {
        transform: scale(1.1);
    }
    .experience-card p, .contact-detail-text {
        color: #a8a29e;
    }
    .story-text p {
        font-size: 1.125rem;
        color: #d6d3d1;
        line-height: 1.7;
        margin: 0 0 1.5rem;
    }
    .testimonial-strip {
        display: flex;
        gap: 1.5rem;
        overflow-x: auto;
        padding-bottom: 1.5rem;
        scroll-behavior: smooth;
    }
    .testimonial-card {
        min-width: 20rem;
        padding: 2rem;
        border-radius: 0.5rem;
        background: rgba(68, 64, 60, 0.3);
        border: 1px solid rgba(87, 83, 78, 0.3);
        transition: all 0.5s ease;
    }
    .testimonial-card:hover {
        background: rgba(68, 64, 60, 0.5);
        transform: scale(1.05);
    }
    .stars {
        display: flex;
        gap: 0.25rem;
        margin-bottom: 1rem;
        color: #fde68a;
    }
    .testimonial-text {
        color: #d6d3d1;
        font-style: italic;
        margin: 0 0 1.5rem;
    }
    .testimonial-name, .contact-detail-title {
        color: #fde68a;
        font-weight: 500;
    }
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
    }
    .contact-details {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .contact-detail {
        display: flex;
        align-items: center;
        gap: 1rem;
        transition: transform 0.5s ease;
    }
    .contact-detail:hover {
        transform: translateX(0.5rem);
    }
    .contact-detail i {
        font-size: 1.5rem;
        color: #fde68a;
        width: 1.5rem;
    }
    .contact-detail-title {
        color: #e7e5e4;
    }
    .reservation-card {
        background: rgba(41, 37, 36, 0.5);
    }
    .reservation-fields {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .reservation-fields input, .reservation-fields select {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem;
        border-radius: 0.5rem;
        border: 1px solid #57534e;
        background: rgba(68, 64, 60, 0.5);
        color: #f5f5f4;
        transition: border-color 0.3s ease;
    }
    .reservation-fields input:hover, .reservation-fields select:hover {
        border-color: #78716c;
    }
    .reservation-fields input:focus, .reservation-fields select:focus {
        border-color: #fde68a;
        outline: none;
    }
    .reserve-button, .book-cta button {
        background: #fde68a;
        color: #1c1917;
        border: none;
        font-weight: 500;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .reserve-button {
        padding: 0.75rem;
        border-radius: 0.5rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
    }
    .reserve-button:hover, .book-cta button:hover {
        background: #fcd34d;
        transform: scale(1.05);
    }
    .form-error {
        color: #fca5a5;
        margin: 0;
    }
    .form-notice {
        color: #fde68a;
        margin: 0;
    }
    .site-footer {
        position: relative;
        overflow: hidden;
        background: #1c1917;
        padding: 4rem 1rem 2rem;
        text-align: center;
    }
    .lava-bar {
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 0.5rem;
        background: linear-gradient(-45deg, #dc2626, #ea580c, #dc2626, #92400e);
        background-size: 400% 400%;
        animation: lava-flow 4s ease-in-out infinite;
    }
    @keyframes lava-flow {
        0% { background-position: 0% 50%; }
        50% { background-position: 100% 50%; }
        100% { background-position: 0% 50%; }
    }
    .footer-brand {
        font-size: 1.875rem;
        color: #fde68a;
        margin-bottom: 1rem;
    }
    .footer-tagline {
        color: #a8a29e;
        margin: 0 0 2rem;
    }
    .footer-social {
        display: flex;
        justify-content: center;
        gap: 2rem;
        margin-bottom: 2rem;
    }
    .footer-social a {
        color: #a8a29e;
        text-decoration: none;
        transition: all 0.3s ease;
    }
    .footer-social a:hover {
        color: #fde68a;
        transform: scale(1.1);
    }
    .footer-copyright {
        color: #78716c;
        font-size: 0.875rem;
    }
    .book-cta {
        position: fixed;
        bottom: 1.5rem;
        right: 1.5rem;
        z-index: 50;
    }
    .book-cta button {
        padding: 1rem 2rem;
        border-radius: 9999px;
        animation: pulse-glow 2s ease-in-out infinite;
    }
    @keyframes pulse-glow {
        0%, 100% { box-shadow: 0 0 20px rgba(251, 191, 36, 0.3); }
        50% { box-shadow: 0 0 30px rgba(251, 191, 36, 0.6); }
    }
    @media (max-width: 768px) {
        .nav-links {
            display: none;
        }
        .nav-burger {
            display: flex;
        }
        .hero-title {
            font-size: 3.75rem;
        }
        .hero-subtitle {
            font-size: 1.5rem;
        }
        .menu-grid, .contact-grid, .experience-grid {
            grid-template-columns: 1fr;
        }
    }
    @media (min-width: 769px) {
        .nav-dropdown {
            display: none;
        }
    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    const INDEX_HTML: &str = include_str!("../../index.html");

    #[test]
    fn index_page_loads_icon_and_serif_fonts() {
        assert!(INDEX_HTML.contains("font-awesome/6.5.2/css/all.min.css"));
        assert!(INDEX_HTML.contains("family=Cormorant+Garamond"));
    }

    #[test]
    fn index_page_builds_the_frontend_binary() {
        assert!(INDEX_HTML.contains(r#"data-bin="pompeii-frontend""#));
    }
}
