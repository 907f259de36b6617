pub mod locale;
pub mod preset;
pub mod roi;
