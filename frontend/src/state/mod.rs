pub mod builder;
pub mod carousel;
pub mod page;
pub mod parallax;
pub mod reservation;
pub mod visibility;
