use serde::Serialize;

use crate::config;
use crate::error::PageError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub source: String,
    pub alt_text: &'static str,
    pub kind: MediaKind,
}

/// Hero carousel media, in display order. Never empty.
pub fn media_items() -> Vec<MediaItem> {
    vec![
        MediaItem {
            source: config::asset_url("pizza1.mp4"),
            alt_text: "Artisan pizza dough being stretched",
            kind: MediaKind::Video,
        },
        MediaItem {
            source: config::asset_url("mozzarella.mp4"),
            alt_text: "Mozzarella melting in wood-fired oven",
            kind: MediaKind::Video,
        },
        MediaItem {
            source: config::asset_url("oven.mp4"),
            alt_text: "Flames dancing in wood-fired oven",
            kind: MediaKind::Video,
        },
        MediaItem {
            source: "image.png".to_string(),
            alt_text: "Cozy studio atmosphere",
            kind: MediaKind::Image,
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: &'static str,
    /// Display price such as `"$4"`.
    pub price: &'static str,
    pub icon: &'static str,
}

impl Ingredient {
    pub fn price_value(&self) -> Result<u32, PageError> {
        parse_price(self.price)
    }
}

/// Parses a display price by stripping the leading currency symbol.
pub fn parse_price(display: &str) -> Result<u32, PageError> {
    display
        .trim()
        .strip_prefix('$')
        .and_then(|digits| digits.parse::<u32>().ok())
        .ok_or_else(|| PageError::InvalidPrice(display.to_string()))
}

pub const INGREDIENTS: [Ingredient; 6] = [
    Ingredient { name: "San Marzano Tomatoes", price: "$3", icon: "🍅" },
    Ingredient { name: "Buffalo Mozzarella", price: "$4", icon: "🧀" },
    Ingredient { name: "Prosciutto di Parma", price: "$6", icon: "🥓" },
    Ingredient { name: "Fresh Basil", price: "$2", icon: "🌿" },
    Ingredient { name: "Truffle Oil", price: "$8", icon: "🫒" },
    Ingredient { name: "Arugula", price: "$2", icon: "🥬" },
];

pub fn ingredient_by_name(name: &str) -> Option<Ingredient> {
    INGREDIENTS.iter().copied().find(|i| i.name == name)
}

pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
}

pub const SIGNATURE_PIZZAS: [MenuItem; 3] = [
    MenuItem {
        name: "La Vesuviana",
        description: "San Marzano tomatoes, buffalo mozzarella, fresh basil, volcanic sea salt",
        price: 24,
    },
    MenuItem {
        name: "L'Aristocratica",
        description: "Truffle cream, porcini mushrooms, prosciutto di Parma, aged parmesan",
        price: 32,
    },
    MenuItem {
        name: "La Marinara Antica",
        description: "Heritage tomatoes, wild oregano, garlic confit, extra virgin olive oil",
        price: 22,
    },
];

/// Font Awesome glyphs used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Flame,
    Users,
    Clock,
    MapPin,
    Phone,
    Mail,
    Star,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Flame => "fa-solid fa-fire",
            Icon::Users => "fa-solid fa-users",
            Icon::Clock => "fa-solid fa-clock",
            Icon::MapPin => "fa-solid fa-location-dot",
            Icon::Phone => "fa-solid fa-phone",
            Icon::Mail => "fa-solid fa-envelope",
            Icon::Star => "fa-solid fa-star",
        }
    }
}

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCE: [Feature; 3] = [
    Feature {
        icon: Icon::Flame,
        title: "Wood-Fired Mastery",
        description: "Our 900°C Neapolitan oven creates the perfect leopard-spotted crust, infusing each pizza with subtle smokiness",
    },
    Feature {
        icon: Icon::Users,
        title: "Acoustic Ambiance",
        description: "Carefully curated soundscapes complement the crackling fire, creating an immersive sensory journey",
    },
    Feature {
        icon: Icon::Clock,
        title: "Slow Fermentation",
        description: "Our dough ferments for 72 hours, developing complex flavors reminiscent of ancient Roman bread-making traditions",
    },
];

pub const STORY: [&str; 3] = [
    "Born from the ashes of ancient Pompeii, our studio pays homage to the timeless art of pizza-making that survived the volcanic eruption of 79 AD. We discovered fragments of ancient recipes in archaeological sites, inspiring us to recreate these lost flavors.",
    "Every ingredient is sourced from the fertile volcanic soils of Campania, where the mineral-rich earth produces tomatoes and herbs with unparalleled depth. Our acoustic environment is designed to slow time, allowing guests to savor each moment and bite.",
    "This is not just dining, it's a journey through history, where ancient traditions meet modern culinary artistry in perfect harmony.",
];

pub struct Testimonial {
    pub name: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sofia Rossi",
        rating: 5,
        text: "An extraordinary culinary journey. The acoustic ambiance perfectly complements the artisanal flavors.",
    },
    Testimonial {
        name: "Marco Chen",
        rating: 5,
        text: "Pompeii Pizza Studio redefined my pizza experience. Every bite tells a story of ancient traditions.",
    },
    Testimonial {
        name: "Elena Volkov",
        rating: 5,
        text: "The sensory experience is unparalleled. From the crackling wood fire to the aromatic herbs.",
    },
    Testimonial {
        name: "James Mitchell",
        rating: 5,
        text: "A perfect blend of ancient craftsmanship and modern culinary artistry. Absolutely phenomenal.",
    },
];

pub struct ContactDetail {
    pub icon: Icon,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const RESERVATION_PHONE: &str = "+39 081 555 0179";

pub const CONTACT_DETAILS: [ContactDetail; 4] = [
    ContactDetail { icon: Icon::MapPin, title: "Location", detail: "Via Vesuvio 79, Napoli, Italy" },
    ContactDetail { icon: Icon::Phone, title: "Reservations", detail: RESERVATION_PHONE },
    ContactDetail { icon: Icon::Mail, title: "Email", detail: "hello@pompeiipizza.studio" },
    ContactDetail { icon: Icon::Clock, title: "Hours", detail: "Tue-Sun: 6:00 PM - 12:00 AM" },
];

pub const SOCIAL_LINKS: [&str; 3] = ["Instagram", "Facebook", "TripAdvisor"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_prices_all_parse() {
        let prices: Vec<u32> = INGREDIENTS
            .iter()
            .map(|i| i.price_value().unwrap())
            .collect();
        assert_eq!(prices, vec![3, 4, 6, 2, 8, 2]);
    }

    #[test]
    fn price_without_currency_symbol_is_rejected() {
        assert_eq!(parse_price("4"), Err(PageError::InvalidPrice("4".to_string())));
        assert!(parse_price("$").is_err());
        assert!(parse_price("$four").is_err());
    }

    #[test]
    fn media_list_is_non_empty_and_ends_with_the_studio_image() {
        let items = media_items();
        assert_eq!(items.len(), 4);
        assert!(items[..3].iter().all(|m| m.kind == MediaKind::Video));
        assert_eq!(items[3].kind, MediaKind::Image);
        assert!(items[0].source.ends_with("/pizza1.mp4"));
    }

    #[test]
    fn ingredients_are_found_by_name() {
        assert_eq!(ingredient_by_name("Truffle Oil").map(|i| i.price), Some("$8"));
        assert!(ingredient_by_name("Pineapple").is_none());
    }
}
