const HERO_MEDIA_FACTOR: f64 = 0.5;
const TITLE_FACTOR: f64 = -0.3;
const SUBTITLE_FACTOR: f64 = -0.2;
const TAGLINE_FACTOR: f64 = -0.1;

/// Vertical offsets (px) applied to hero layers for a given scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxOffsets {
    pub media: f64,
    pub title: f64,
    pub subtitle: f64,
    pub tagline: f64,
}

impl ParallaxOffsets {
    pub fn from_scroll(scroll_y: f64) -> Self {
        Self {
            media: scroll_y * HERO_MEDIA_FACTOR,
            title: scroll_y * TITLE_FACTOR,
            subtitle: scroll_y * SUBTITLE_FACTOR,
            tagline: scroll_y * TAGLINE_FACTOR,
        }
    }
}

pub fn translate_y(offset: f64) -> String {
    format!("transform: translateY({}px);", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_scale_with_scroll() {
        let offsets = ParallaxOffsets::from_scroll(200.0);
        assert_eq!(offsets.media, 100.0);
        assert!((offsets.title + 60.0).abs() < 1e-9);
        assert!((offsets.subtitle + 40.0).abs() < 1e-9);
        assert!((offsets.tagline + 20.0).abs() < 1e-9);
    }

    #[test]
    fn top_of_page_has_no_offset() {
        let offsets = ParallaxOffsets::from_scroll(0.0);
        assert_eq!(offsets.media, 0.0);
        assert_eq!(translate_y(offsets.media), "transform: translateY(0px);");
    }

    #[test]
    fn offsets_are_not_clamped() {
        let offsets = ParallaxOffsets::from_scroll(50_000.0);
        assert_eq!(offsets.media, 25_000.0);
    }
}
