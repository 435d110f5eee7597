pub mod layout;
mod glossary;
mod quiz;
mod shell;

pub use glossary::{build_glossary_lines, draw_glossary};
pub use layout::{ViewLayout, calculate_view_chunks};
pub use quiz::draw_quiz;
pub use shell::{draw_header, draw_help, draw_loading};
