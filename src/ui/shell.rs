use crate::models::{Language, View};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn tab_span(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Green)
    };
    Span::styled(format!(" {} ", label), style)
}

pub fn draw_header(f: &mut Frame, area: Rect, language: Language, view: View) {
    let title = language.pick("> Tech Glossary", "> Glosario Técnico");
    let subtitle = language.pick(
        "Learn technology concepts with real-world examples",
        "Aprende conceptos tecnológicos con ejemplos del mundo real",
    );

    let tabs = Line::from(vec![
        tab_span(
            language.pick("Glossary", "Glosario"),
            view == View::Glossary,
        ),
        Span::from("  "),
        tab_span(
            language.pick("Practice Quiz", "Cuestionario"),
            view == View::Quiz,
        ),
        Span::from("    "),
        Span::styled(language.label(), Style::default().fg(Color::DarkGray)),
    ]);

    let text = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
        tabs,
    ];

    let header = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

pub fn draw_help(f: &mut Frame, area: Rect, language: Language, view: View) {
    let mut spans = vec![
        key_span("Tab"),
        Span::from(format!(" {}  ", language.pick("Switch View", "Cambiar Vista"))),
        key_span("l"),
        Span::from(format!(" {}  ", language.pick("Language", "Idioma"))),
        key_span("↑/↓"),
        Span::from(format!(" {}  ", language.pick("Navigate", "Navegar"))),
    ];
    match view {
        View::Glossary => {
            spans.extend([
                key_span("Enter"),
                Span::from(format!(
                    " {}  ",
                    language.pick("Expand/Collapse", "Expandir/Contraer")
                )),
            ]);
        }
        View::Quiz => {
            spans.extend([
                key_span("a-d"),
                Span::from(format!(" {}  ", language.pick("Answer", "Responder"))),
                key_span("n"),
                Span::from(format!(
                    " {}  ",
                    language.pick("New Questions", "Nuevas Preguntas")
                )),
            ]);
        }
    }
    spans.extend([
        key_span("q"),
        Span::from(format!(" {}", language.pick("Quit", "Salir"))),
    ]);

    let help = Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

pub fn draw_loading(f: &mut Frame, area: Rect, language: Language) {
    let loading = Paragraph::new(language.pick("Loading...", "Cargando..."))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, area);
}
