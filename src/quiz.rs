use crate::models::{Category, Language, QuizQuestion, QuizState};
use crossterm::event::{KeyCode, KeyEvent};
use rand::seq::SliceRandom;
use std::collections::{HashMap, HashSet};

/// Uniform-random permutation of a copy; the input set stays untouched so
/// repeated resets always draw from the full pool.
pub fn shuffled_questions(questions: &[QuizQuestion]) -> Vec<QuizQuestion> {
    let mut shuffled = questions.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());
    shuffled
}

impl QuizState {
    pub fn new(categories: Vec<Category>, questions: Vec<QuizQuestion>) -> Self {
        let current_questions = shuffled_questions(&questions);
        Self {
            categories,
            all_questions: questions,
            current_questions,
            selected_answers: HashMap::new(),
            answered: HashSet::new(),
            current_index: 0,
        }
    }

    /// "New Questions": fresh shuffle of the originally fetched set, all
    /// answer state cleared.
    pub fn reshuffle(&mut self) {
        self.current_questions = shuffled_questions(&self.all_questions);
        self.selected_answers.clear();
        self.answered.clear();
        self.current_index = 0;
    }

    /// First answer is final: selections on an already-answered question are
    /// ignored, regardless of index.
    pub fn select_answer(&mut self, question_id: &str, option_index: usize) {
        if self.answered.contains(question_id) {
            return;
        }
        self.selected_answers
            .insert(question_id.to_string(), option_index);
        self.answered.insert(question_id.to_string());
    }

    /// Apply an option selection to the question currently on screen.
    /// Out-of-range indices are ignored.
    pub fn select_current(&mut self, option_index: usize) {
        let Some(question) = self.current_questions.get(self.current_index) else {
            return;
        };
        if option_index >= question.options_en.len() {
            return;
        }
        let question_id = question.id.clone();
        self.select_answer(&question_id, option_index);
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current_questions.get(self.current_index)
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answered.contains(question_id)
    }

    pub fn selected_answer(&self, question_id: &str) -> Option<usize> {
        self.selected_answers.get(question_id).copied()
    }

    /// None until the question has been answered.
    pub fn is_correct(&self, question: &QuizQuestion) -> Option<bool> {
        self.selected_answer(&question.id)
            .map(|selected| selected == question.correct_answer)
    }

    /// Category label for a question; a lookup miss renders as empty text.
    pub fn category_name(&self, category_id: &str, language: Language) -> &str {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name(language))
            .unwrap_or("")
    }

    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    pub fn correct_count(&self) -> usize {
        self.current_questions
            .iter()
            .filter(|q| self.is_correct(q) == Some(true))
            .count()
    }
}

pub fn handle_quiz_input(state: &mut QuizState, key: KeyEvent) {
    match key.code {
        KeyCode::Down => {
            if state.current_index < state.current_questions.len().saturating_sub(1) {
                state.current_index += 1;
            }
        }
        KeyCode::Up => {
            if state.current_index > 0 {
                state.current_index -= 1;
            }
        }
        KeyCode::Char('n') => {
            state.reshuffle();
        }
        KeyCode::Char(c @ 'a'..='h') => {
            state.select_current(c as usize - 'a' as usize);
        }
        KeyCode::Char(c @ '1'..='9') => {
            state.select_current(c as usize - '1' as usize);
        }
        _ => {}
    }
}
