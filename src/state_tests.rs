#[cfg(test)]
mod view_state_tests {
    use crate::models::{Category, GlossaryTerm, Language, QuizQuestion};
    use crate::{GlossaryState, QuizState, handle_quiz_input};
    use crossterm::event::{KeyCode, KeyEvent};

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

    fn question(id: &str, correct_answer: usize) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            category_id: "c1".to_string(),
            question_en: format!("{id}?"),
            question_es: format!("¿{id}?"),
            options_en: (0..4).map(|i| format!("option {i}")).collect(),
            options_es: (0..4).map(|i| format!("opción {i}")).collect(),
            correct_answer,
            explanation_en: "because".to_string(),
            explanation_es: "porque".to_string(),
        }
    }

    /// Scenario from the glossary view: two ordered categories, one term in
    /// the first. Initial render expands c1 only, with t1 under it.
    #[test]
    fn test_glossary_initial_scenario() {
        let state = GlossaryState::new(
            vec![category("c1", 1), category("c2", 2)],
            vec![term("t1", "c1")],
        );

        assert!(state.is_expanded("c1"));
        assert!(!state.is_expanded("c2"));
        assert_eq!(state.terms_for("c1").len(), 1);
        assert_eq!(state.terms_for("c1")[0].id, "t1");
        assert!(state.terms_for("c2").is_empty());
    }

    /// Scenario from the quiz view: four options, correct index 2, user
    /// selects index 1. The question locks, the verdict is incorrect, and
    /// the explanation panel becomes visible.
    #[test]
    fn test_quiz_wrong_answer_scenario() {
        let mut state = QuizState::new(vec![category("c1", 1)], vec![question("q1", 2)]);
        let q = state.current_questions[0].clone();

        state.select_answer(&q.id, 1);

        assert!(state.is_answered(&q.id));
        assert_eq!(state.selected_answer(&q.id), Some(1));
        assert_eq!(state.is_correct(&q), Some(false));
        // Index 2 stays the correct highlight regardless of the selection.
        assert_eq!(q.correct_answer, 2);
    }

    #[test]
    fn test_language_toggle_leaves_glossary_state_untouched() {
        let mut state = GlossaryState::new(
            vec![category("c1", 1), category("c2", 2)],
            vec![term("t1", "c1")],
        );
        state.toggle_category("c2");
        state.selected_index = 1;

        let mut language = Language::En;
        language.toggle();

        // Language is a pure display selector; nothing in the view state
        // refers to it.
        assert!(state.is_expanded("c1"));
        assert!(state.is_expanded("c2"));
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_language_toggle_leaves_quiz_state_untouched() {
        let mut state = QuizState::new(
            vec![category("c1", 1)],
            vec![question("q1", 0), question("q2", 1)],
        );
        let order_before: Vec<String> = state
            .current_questions
            .iter()
            .map(|q| q.id.clone())
            .collect();
        let first = state.current_questions[0].id.clone();
        state.select_answer(&first, 0);

        let mut language = Language::En;
        language.toggle();
        language.toggle();

        let order_after: Vec<String> = state
            .current_questions
            .iter()
            .map(|q| q.id.clone())
            .collect();
        assert_eq!(order_before, order_after);
        assert!(state.is_answered(&first));
    }

    #[test]
    fn test_new_questions_gives_fresh_attempt_at_all_questions() {
        let questions: Vec<_> = (0..8).map(|i| question(&format!("q{i}"), 0)).collect();
        let mut state = QuizState::new(vec![category("c1", 1)], questions);

        // Answer everything on screen.
        let ids: Vec<String> = state.current_questions.iter().map(|q| q.id.clone()).collect();
        for id in &ids {
            state.select_answer(id, 0);
        }
        assert_eq!(state.answered_count(), 8);

        let order_before: Vec<String> = ids;
        handle_quiz_input(&mut state, KeyEvent::from(KeyCode::Char('n')));

        assert_eq!(state.answered_count(), 0);
        assert_eq!(state.current_questions.len(), 8);
        assert_eq!(state.current_index, 0);

        // A reshuffle must visibly reorder eventually; one pass may collide.
        let mut reordered = state
            .current_questions
            .iter()
            .map(|q| q.id.clone())
            .collect::<Vec<_>>()
            != order_before;
        for _ in 0..30 {
            if reordered {
                break;
            }
            state.reshuffle();
            reordered = state
                .current_questions
                .iter()
                .map(|q| q.id.clone())
                .collect::<Vec<_>>()
                != order_before;
        }
        assert!(reordered);
    }

    #[test]
    fn test_failed_fetch_renders_empty_not_fatal() {
        // The worker swallows errors into empty lists; both views must accept
        // them without panicking.
        let glossary = GlossaryState::new(Vec::new(), Vec::new());
        assert!(glossary.categories.is_empty());
        assert!(glossary.selected_category_id().is_none());

        let mut quiz = QuizState::new(Vec::new(), Vec::new());
        handle_quiz_input(&mut quiz, KeyEvent::from(KeyCode::Char('a')));
        handle_quiz_input(&mut quiz, KeyEvent::from(KeyCode::Char('n')));
        handle_quiz_input(&mut quiz, KeyEvent::from(KeyCode::Down));
        assert!(quiz.current_question().is_none());
    }

    #[test]
    fn test_terms_with_unknown_category_stay_out_of_sight() {
        // A term whose category is missing from the fetched list simply never
        // renders; grouping keeps it keyed under the unknown id.
        let state = GlossaryState::new(vec![category("c1", 1)], vec![term("t1", "ghost")]);
        assert!(state.terms_for("c1").is_empty());
        assert_eq!(state.terms_for("ghost").len(), 1);
    }
}
