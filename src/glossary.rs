use crate::models::{Category, GlossaryState, GlossaryTerm};
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::{HashMap, HashSet};

/// Single grouping pass over the flat term list, keyed by owning category.
/// Terms keep their fetch order within a category.
pub fn group_terms_by_category(
    terms: Vec<GlossaryTerm>,
) -> HashMap<String, Vec<GlossaryTerm>> {
    let mut by_category: HashMap<String, Vec<GlossaryTerm>> = HashMap::new();
    for term in terms {
        by_category
            .entry(term.category_id.clone())
            .or_default()
            .push(term);
    }
    by_category
}

impl GlossaryState {
    /// `categories` is expected in ascending `order_index` order (the API
    /// sorts server-side). The first category starts expanded.
    pub fn new(categories: Vec<Category>, terms: Vec<GlossaryTerm>) -> Self {
        let terms_by_category = group_terms_by_category(terms);
        let mut expanded = HashSet::new();
        if let Some(first) = categories.first() {
            expanded.insert(first.id.clone());
        }
        Self {
            categories,
            terms_by_category,
            expanded,
            selected_index: 0,
            scroll_y: 0,
        }
    }

    /// Flip one category's expansion; other categories are untouched.
    pub fn toggle_category(&mut self, category_id: &str) {
        if !self.expanded.remove(category_id) {
            self.expanded.insert(category_id.to_string());
        }
    }

    pub fn is_expanded(&self, category_id: &str) -> bool {
        self.expanded.contains(category_id)
    }

    pub fn selected_category_id(&self) -> Option<&str> {
        self.categories
            .get(self.selected_index)
            .map(|c| c.id.as_str())
    }

    pub fn terms_for(&self, category_id: &str) -> &[GlossaryTerm] {
        self.terms_by_category
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub fn handle_glossary_input(state: &mut GlossaryState, key: KeyEvent) {
    match key.code {
        KeyCode::Down => {
            if state.selected_index < state.categories.len().saturating_sub(1) {
                state.selected_index += 1;
            }
        }
        KeyCode::Up => {
            if state.selected_index > 0 {
                state.selected_index -= 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = state.selected_category_id().map(str::to_string) {
                state.toggle_category(&id);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, order_index: i64) -> Category {
        Category {
            id: id.to_string(),
            name_en: format!("{id} en"),
            name_es: format!("{id} es"),
            slug: id.to_string(),
            order_index,
        }
    }

    fn term(id: &str, category_id: &str) -> GlossaryTerm {
        GlossaryTerm {
            id: id.to_string(),
            category_id: category_id.to_string(),
            term_en: format!("{id} term"),
            term_es: format!("{id} término"),
            definition_en: "def".to_string(),
            definition_es: "def es".to_string(),
            example_en: "ex".to_string(),
            example_es: "ej".to_string(),
        }
    }

    #[test]
    fn test_grouping_each_term_exactly_once() {
        let terms = vec![
            term("t1", "c1"),
            term("t2", "c2"),
            term("t3", "c1"),
            term("t4", "c1"),
        ];
        let grouped = group_terms_by_category(terms);
        assert_eq!(grouped["c1"].len(), 3);
        assert_eq!(grouped["c2"].len(), 1);
        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_grouping_preserves_fetch_order_within_category() {
        let terms = vec![term("t1", "c1"), term("t2", "c1"), term("t3", "c1")];
        let grouped = group_terms_by_category(terms);
        let ids: Vec<&str> = grouped["c1"].iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t1", "t2", "t3"]);
    }

    #[test]
    fn test_initial_state_expands_first_category_only() {
        let state = GlossaryState::new(
            vec![category("c1", 1), category("c2", 2)],
            vec![term("t1", "c1")],
        );
        assert!(state.is_expanded("c1"));
        assert!(!state.is_expanded("c2"));
        assert_eq!(state.terms_for("c1").len(), 1);
        assert!(state.terms_for("c2").is_empty());
    }

    #[test]
    fn test_initial_state_with_no_categories() {
        let state = GlossaryState::new(Vec::new(), Vec::new());
        assert!(state.expanded.is_empty());
        assert_eq!(state.selected_category_id(), None);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut state = GlossaryState::new(vec![category("c1", 1), category("c2", 2)], Vec::new());
        let before = state.is_expanded("c2");
        state.toggle_category("c2");
        assert_ne!(state.is_expanded("c2"), before);
        state.toggle_category("c2");
        assert_eq!(state.is_expanded("c2"), before);
    }

    #[test]
    fn test_toggle_does_not_affect_other_categories() {
        let mut state = GlossaryState::new(vec![category("c1", 1), category("c2", 2)], Vec::new());
        assert!(state.is_expanded("c1"));
        state.toggle_category("c2");
        assert!(state.is_expanded("c1"));
        assert!(state.is_expanded("c2"));
        state.toggle_category("c1");
        assert!(!state.is_expanded("c1"));
        assert!(state.is_expanded("c2"));
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut state = GlossaryState::new(vec![category("c1", 1), category("c2", 2)], Vec::new());
        handle_glossary_input(&mut state, KeyEvent::from(KeyCode::Up));
        assert_eq!(state.selected_index, 0);
        handle_glossary_input(&mut state, KeyEvent::from(KeyCode::Down));
        assert_eq!(state.selected_index, 1);
        handle_glossary_input(&mut state, KeyEvent::from(KeyCode::Down));
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_enter_toggles_selected_category() {
        let mut state = GlossaryState::new(vec![category("c1", 1), category("c2", 2)], Vec::new());
        handle_glossary_input(&mut state, KeyEvent::from(KeyCode::Down));
        handle_glossary_input(&mut state, KeyEvent::from(KeyCode::Enter));
        assert!(state.is_expanded("c2"));
        handle_glossary_input(&mut state, KeyEvent::from(KeyCode::Enter));
        assert!(!state.is_expanded("c2"));
    }

    #[test]
    fn test_enter_with_no_categories_is_a_noop() {
        let mut state = GlossaryState::new(Vec::new(), Vec::new());
        handle_glossary_input(&mut state, KeyEvent::from(KeyCode::Enter));
        assert!(state.expanded.is_empty());
    }
}
