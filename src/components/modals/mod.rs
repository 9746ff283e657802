pub mod help;
pub mod helpers;
pub mod language_selection;

pub use help::HelpModal;
pub use language_selection::LanguageSelectionModal;
