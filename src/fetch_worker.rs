use crate::api::Client;
use crate::config::Config;
use crate::logger;
use crate::models::{FetchRequest, FetchResponse};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Worker thread owning the HTTP client and a tokio runtime. The UI loop
/// sends a request on view activation and drains responses between draws.
/// A failed fetch is logged and replaced by an empty list; the view renders
/// empty rather than surfacing an error state.
pub fn spawn_fetch_worker(
    config: Config,
    tx: Sender<FetchResponse>,
    rx: Receiver<FetchRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("tech-glossary::fetch_worker".to_string())
        .spawn(move || {
            let client = Client::new(&config);
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("failed to build fetch runtime: {}", e));
                    return;
                }
            };

            loop {
                match rx.recv() {
                    Ok(FetchRequest::Glossary) => {
                        let (categories, terms) = rt.block_on(async {
                            tokio::join!(client.fetch_categories(), client.fetch_terms())
                        });
                        let categories = categories.unwrap_or_else(|e| {
                            logger::log(&format!("categories fetch failed: {}", e));
                            Vec::new()
                        });
                        let terms = terms.unwrap_or_else(|e| {
                            logger::log(&format!("terms fetch failed: {}", e));
                            Vec::new()
                        });
                        let _ = tx.send(FetchResponse::Glossary { categories, terms });
                    }
                    Ok(FetchRequest::Quiz) => {
                        let (categories, questions) = rt.block_on(async {
                            tokio::join!(client.fetch_categories(), client.fetch_questions())
                        });
                        let categories = categories.unwrap_or_else(|e| {
                            logger::log(&format!("categories fetch failed: {}", e));
                            Vec::new()
                        });
                        let questions = questions.unwrap_or_else(|e| {
                            logger::log(&format!("questions fetch failed: {}", e));
                            Vec::new()
                        });
                        let _ = tx.send(FetchResponse::Quiz {
                            categories,
                            questions,
                        });
                    }
                    Err(_) => {
                        // Channel disconnected, exit worker
                        logger::log("fetch worker channel disconnected, exiting");
                        break;
                    }
                }
            }
        })
        .expect("Failed to spawn fetch worker thread")
}
