use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc;
use std::time::Duration;

use tech_glossary::ui::{
    calculate_view_chunks, draw_glossary, draw_header, draw_help, draw_loading, draw_quiz,
};
use tech_glossary::{
    Config, FetchRequest, FetchResponse, GlossaryState, Language, QuizState, View,
    handle_glossary_input, handle_quiz_input, logger, spawn_fetch_worker,
};

fn main() -> io::Result<()> {
    logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tech-glossary: {}", e);
            std::process::exit(1);
        }
    };

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let _worker = spawn_fetch_worker(config, response_tx, request_rx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut language = Language::En;
    let mut view = View::Glossary;
    let mut glossary: Option<GlossaryState> = None;
    let mut quiz: Option<QuizState> = None;

    // The default view fetches on startup; loading shows until it resolves.
    let _ = request_tx.send(FetchRequest::Glossary);

    loop {
        // Install fetched snapshots for the active view. Responses for a view
        // the user has already left are dropped; re-activating fetches fresh.
        while let Ok(response) = response_rx.try_recv() {
            match response {
                FetchResponse::Glossary { categories, terms } => {
                    if view == View::Glossary {
                        glossary = Some(GlossaryState::new(categories, terms));
                    }
                }
                FetchResponse::Quiz {
                    categories,
                    questions,
                } => {
                    if view == View::Quiz {
                        quiz = Some(QuizState::new(categories, questions));
                    }
                }
            }
        }

        terminal.draw(|f| {
            let layout = calculate_view_chunks(f.area());
            draw_header(f, layout.header_area, language, view);
            match view {
                View::Glossary => match glossary.as_mut() {
                    Some(state) => draw_glossary(f, layout.content_area, state, language),
                    None => draw_loading(f, layout.content_area, language),
                },
                View::Quiz => match quiz.as_ref() {
                    Some(state) => draw_quiz(f, layout.content_area, state, language),
                    None => draw_loading(f, layout.content_area, language),
                },
            }
            draw_help(f, layout.help_area, language, view);
        })?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('q') => break,
                KeyCode::Char('l') => {
                    // Display-only toggle; both locales are already fetched.
                    language.toggle();
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    // Switching views drops the old snapshot and fetches fresh.
                    match view {
                        View::Glossary => {
                            view = View::Quiz;
                            quiz = None;
                            let _ = request_tx.send(FetchRequest::Quiz);
                        }
                        View::Quiz => {
                            view = View::Glossary;
                            glossary = None;
                            let _ = request_tx.send(FetchRequest::Glossary);
                        }
                    }
                }
                _ => match view {
                    View::Glossary => {
                        if let Some(state) = glossary.as_mut() {
                            handle_glossary_input(state, key);
                        }
                    }
                    View::Quiz => {
                        if let Some(state) = quiz.as_mut() {
                            handle_quiz_input(state, key);
                        }
                    }
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
