pub mod error;
pub mod html;
pub mod language;
pub mod models;
pub mod wiki;
