use crate::domain::language::Language;

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSelectionState {
    pub selected_index: usize,
    pub languages: Vec<Language>,
}

impl LanguageSelectionState {
    /// Opens the picker with the active language highlighted.
    #[must_use]
    pub fn new(current: Language) -> Self {
        Self {
            selected_index: current.index(),
            languages: Language::all().to_vec(),
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<Language> {
        self.languages.get(self.selected_index).copied()
    }
}

impl Default for LanguageSelectionState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
