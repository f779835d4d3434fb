use thiserror::Error;

/// Failures coming from the browser environment rather than from user input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PageError {
    #[error("no global window available")]
    NoWindow,
    #[error("no document attached to the window")]
    NoDocument,
    #[error("section element #{0} not found")]
    MissingSection(String),
    #[error("failed to register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
    #[error("invalid price {0:?}")]
    InvalidPrice(String),
}

impl PageError {
    /// Renders a `JsValue` thrown by the browser into something loggable.
    pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }
}
