pub mod article;
pub mod search;
pub mod ui;
pub mod wiki;
