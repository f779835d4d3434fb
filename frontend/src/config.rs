/// Milliseconds between automatic hero carousel advances.
pub const CAROUSEL_INTERVAL_MS: u32 = 4_000;

/// Fraction of a section that must be in the viewport before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Price of the plain pizza base in the builder, in dollars.
pub const BASE_PRICE: u32 = 18;

pub fn get_asset_base_url() -> String {
    option_env!("POMPEII_ASSET_BASE_URL")
        .unwrap_or("")
        .trim_end_matches('/')
        .to_string()
}

/// Resolves a public asset path against the configured base URL.
pub fn asset_url(path: &str) -> String {
    join_asset_url(&get_asset_base_url(), path)
}

fn join_asset_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn get_log_level() -> log::Level {
    parse_log_level(option_env!("POMPEII_LOG_LEVEL").unwrap_or("info"))
}

fn parse_log_level(raw: &str) -> log::Level {
    raw.trim().parse().unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_without_double_slashes() {
        assert_eq!(join_asset_url("", "pizza1.mp4"), "/pizza1.mp4");
        assert_eq!(join_asset_url("https://cdn.example.com/", "/oven.mp4"), "https://cdn.example.com/oven.mp4");
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        assert_eq!(parse_log_level("debug"), log::Level::Debug);
        assert_eq!(parse_log_level("WARN"), log::Level::Warn);
        assert_eq!(parse_log_level("chatty"), log::Level::Info);
    }
}
