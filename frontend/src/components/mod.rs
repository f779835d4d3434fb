pub mod contact;
pub mod hero;
pub mod menu;
pub mod nav;
pub mod pizza_builder;
pub mod sections;
