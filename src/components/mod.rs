pub mod article;
pub mod footer;
pub mod header;
pub mod modals;
pub mod references;
pub mod search_bar;
pub mod suggestions;
pub mod welcome;
