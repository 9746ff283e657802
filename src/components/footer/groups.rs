use crate::app::state::{AppMode, AppState};

/// One key hint; `highlighted` marks a hint whose state is currently active.
pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
    pub highlighted: bool,
}

/// Hints shown together under a short label.
pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem {
        key,
        desc,
        highlighted: false,
    }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode {
        AppMode::Search => {
            let mut groups = Vec::new();
            let mut search = vec![item("Enter", "search")];
            if !state.suggestions.is_empty() {
                search.push(FooterItem {
                    key: "Up/Dn",
                    desc: "suggest",
                    highlighted: state.suggestions.selected.is_some(),
                });
            }
            if state.result.is_some() {
                search.push(item("Tab", "article"));
            }
            groups.push(FooterGroup {
                name: "SEARCH",
                items: search,
            });
            if state.error.is_some() || !state.suggestions.is_empty() {
                groups.push(FooterGroup {
                    name: "CLOSE",
                    items: vec![item("Esc", "dismiss")],
                });
            }
            groups.push(FooterGroup {
                name: "PREFS",
                items: vec![item("^T", "theme"), item("^L", "lang")],
            });
            groups.push(FooterGroup {
                name: "APP",
                items: vec![item("F1", "help"), item("^Q", "quit")],
            });
            groups
        }
        AppMode::Article => vec![
            FooterGroup {
                name: "READ",
                items: vec![item("j/k", "scroll"), item("PgUp/Dn", "page")],
            },
            FooterGroup {
                name: "LINKS",
                items: vec![
                    item("n/p", "select"),
                    item("Enter", "open"),
                    FooterItem {
                        key: "i",
                        desc: "image",
                        highlighted: state.result.as_ref().is_some_and(|r| r.image.is_some()),
                    },
                ],
            },
            FooterGroup {
                name: "APP",
                items: vec![
                    item("/", "search"),
                    item("t/l", "theme/lang"),
                    item("?", "help"),
                    item("q", "quit"),
                ],
            },
        ],
        AppMode::LanguageSelection => vec![FooterGroup {
            name: "LANGUAGE",
            items: vec![
                item("j/k", "move"),
                item("Enter", "choose"),
                item("Esc", "cancel"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![item("Esc", "close")],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SearchResult;

    fn keys(groups: &[FooterGroup]) -> Vec<&'static str> {
        groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.key))
            .collect()
    }

    #[test]
    fn test_tab_hint_needs_a_result() {
        let mut state = AppState::default();
        assert!(!keys(&get_groups(&state)).contains(&"Tab"));

        state.result = Some(SearchResult {
            title: "Rust".to_string(),
            extract: String::new(),
            image: None,
            references: Vec::new(),
        });
        assert!(keys(&get_groups(&state)).contains(&"Tab"));
    }
}
