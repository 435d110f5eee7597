use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// Display language. Both locales are present on every fetched record, so
/// switching never triggers a refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
}

impl Language {
    pub fn toggle(&mut self) {
        *self = match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        };
    }

    /// Select the field matching the active locale.
    pub fn pick<'a>(&self, en: &'a str, es: &'a str) -> &'a str {
        match self {
            Language::En => en,
            Language::Es => es,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }
}

/// Top-level view the shell is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Glossary,
    Quiz,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: String,
    pub name_en: String,
    pub name_es: String,
    pub slug: String,
    pub order_index: i64,
}

impl Category {
    pub fn name(&self, language: Language) -> &str {
        language.pick(&self.name_en, &self.name_es)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryTerm {
    pub id: String,
    pub category_id: String,
    pub term_en: String,
    pub term_es: String,
    pub definition_en: String,
    pub definition_es: String,
    pub example_en: String,
    pub example_es: String,
}

impl GlossaryTerm {
    pub fn term(&self, language: Language) -> &str {
        language.pick(&self.term_en, &self.term_es)
    }

    pub fn definition(&self, language: Language) -> &str {
        language.pick(&self.definition_en, &self.definition_es)
    }

    pub fn example(&self, language: Language) -> &str {
        language.pick(&self.example_en, &self.example_es)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub category_id: String,
    pub question_en: String,
    pub question_es: String,
    pub options_en: Vec<String>,
    pub options_es: Vec<String>,
    pub correct_answer: usize,
    pub explanation_en: String,
    pub explanation_es: String,
}

impl QuizQuestion {
    pub fn question(&self, language: Language) -> &str {
        language.pick(&self.question_en, &self.question_es)
    }

    pub fn options(&self, language: Language) -> &[String] {
        match language {
            Language::En => &self.options_en,
            Language::Es => &self.options_es,
        }
    }

    pub fn explanation(&self, language: Language) -> &str {
        language.pick(&self.explanation_en, &self.explanation_es)
    }
}

/// Local state of the glossary view. Owned snapshot of one fetch plus the
/// expand/collapse set; rebuilt from scratch on every activation.
#[derive(Debug)]
pub struct GlossaryState {
    pub categories: Vec<Category>,
    pub terms_by_category: HashMap<String, Vec<GlossaryTerm>>,
    pub expanded: HashSet<String>,
    pub selected_index: usize,
    pub scroll_y: u16,
}

/// Local state of the quiz view. `all_questions` keeps the fetched set
/// untouched so "New Questions" always reshuffles from the full pool.
#[derive(Debug)]
pub struct QuizState {
    pub categories: Vec<Category>,
    pub all_questions: Vec<QuizQuestion>,
    pub current_questions: Vec<QuizQuestion>,
    pub selected_answers: HashMap<String, usize>,
    pub answered: HashSet<String>,
    pub current_index: usize,
}

#[derive(Debug)]
pub enum FetchRequest {
    Glossary,
    Quiz,
}

#[derive(Debug)]
pub enum FetchResponse {
    Glossary {
        categories: Vec<Category>,
        terms: Vec<GlossaryTerm>,
    },
    Quiz {
        categories: Vec<Category>,
        questions: Vec<QuizQuestion>,
    },
}
