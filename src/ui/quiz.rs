use crate::models::{Language, QuizState};
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_quiz(f: &mut Frame, area: Rect, state: &QuizState, language: Language) {
    let title = language.pick("Test Your Knowledge", "Pon a Prueba tu Conocimiento");

    let Some(question) = state.current_question() else {
        let empty = Paragraph::new(language.pick(
            "No questions available.",
            "No hay preguntas disponibles.",
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let category = state.category_name(&question.category_id, language);
    let progress = format!(
        "{} {} / {}  •  {}  •  {}: {} / {}",
        language.pick("Question", "Pregunta"),
        state.current_index + 1,
        state.current_questions.len(),
        truncate_string(category, 30),
        language.pick("Score", "Puntuación"),
        state.correct_count(),
        state.answered_count(),
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let answered = state.is_answered(&question.id);
    let selected = state.selected_answer(&question.id);
    let correct = selected == Some(question.correct_answer);

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        question.question(language).to_string(),
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));

    for (option_index, option) in question.options(language).iter().enumerate() {
        let style = if !answered {
            Style::default().fg(Color::Gray)
        } else if option_index == question.correct_answer {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if selected == Some(option_index) {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let letter = (b'A' + option_index as u8) as char;
        text.push_line(Line::from(Span::styled(
            format!("  {}. {}", letter, option),
            style,
        )));
    }

    if answered {
        text.push_line(Line::from(""));
        let (verdict, verdict_color) = if correct {
            (language.pick("✓ Correct!", "✓ ¡Correcto!"), Color::Green)
        } else {
            (language.pick("✗ Incorrect", "✗ Incorrecto"), Color::Red)
        };
        text.push_line(Line::from(Span::styled(
            verdict,
            Style::default()
                .fg(verdict_color)
                .add_modifier(Modifier::BOLD),
        )));

        text.push_line(Line::from(""));
        let panel_color = if correct { Color::Green } else { Color::Blue };
        text.push_line(Line::from(Span::styled(
            language.pick("Explanation:", "Explicación:"),
            Style::default()
                .fg(panel_color)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(Span::styled(
            question.explanation(language).to_string(),
            Style::default().fg(panel_color),
        )));
    }

    let card = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(card, chunks[1]);
}
