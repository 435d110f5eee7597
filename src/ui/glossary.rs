use crate::models::{GlossaryState, Language};
use crate::utils::{calculate_max_scroll, estimate_lines_height};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Build the glossary body as logical lines plus, per category, the index of
/// its header line. The offsets drive selection-follow scrolling.
pub fn build_glossary_lines(
    state: &GlossaryState,
    language: Language,
) -> (Vec<Line<'static>>, Vec<usize>) {
    let mut lines = Vec::new();
    let mut offsets = Vec::new();

    for (index, category) in state.categories.iter().enumerate() {
        offsets.push(lines.len());

        let expanded = state.is_expanded(&category.id);
        let marker = if expanded { "▼" } else { "▶" };
        let mut header_style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        if index == state.selected_index {
            header_style = header_style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(Span::styled(
            format!(
                "{} {}. {}",
                marker,
                category.order_index,
                category.name(language)
            ),
            header_style,
        )));

        if expanded {
            for term in state.terms_for(&category.id) {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("  {}", term.term(language)),
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  {}", term.definition(language)),
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {}",
                        language.pick("Real-World Example:", "Ejemplo del Mundo Real:")
                    ),
                    Style::default().fg(Color::Yellow),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  {}", term.example(language)),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    (lines, offsets)
}

pub fn draw_glossary(f: &mut Frame, area: Rect, state: &mut GlossaryState, language: Language) {
    let (lines, offsets) = build_glossary_lines(state, language);

    let text_width = area.width.saturating_sub(2).max(1) as usize;
    let visible_height = area.height.saturating_sub(2) as usize;

    // Keep the selected category header on screen.
    let header_offset = offsets.get(state.selected_index).copied().unwrap_or(0);
    let header_row = estimate_lines_height(&lines[..header_offset], text_width);
    let mut scroll = state.scroll_y as usize;
    if header_row < scroll {
        scroll = header_row;
    } else if visible_height > 0 && header_row >= scroll + visible_height {
        scroll = header_row - visible_height + 1;
    }

    let content_height = estimate_lines_height(&lines, text_width);
    let max_scroll = calculate_max_scroll(content_height, visible_height) as usize;
    let scroll = scroll.min(max_scroll);
    state.scroll_y = scroll as u16;

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(language.pick("Glossary", "Glosario")),
        );
    f.render_widget(body, area);
}
