pub mod browser;
pub mod hooks;
