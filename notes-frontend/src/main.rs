//! Terminal front end for the notes service.
//!
//! Reads one command per line from stdin and prints the list, the editor and
//! status changes. Saves and deletes run as background tasks so the prompt
//! stays responsive while a request is in flight.

use notes_frontend::intent::{self, UserIntent};
use notes_frontend::view::ViewSnapshot;
use notes_frontend::{Config, HttpNotesApi, NotesController};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

fn print_view(view: &ViewSnapshot) {
    println!();
    if view.notes.is_empty() {
        println!("  (no notes)");
    }
    for row in view.rows() {
        let marker = if row.selected { '>' } else { ' ' };
        println!("{} [{}] {}  {}", marker, row.id, row.title, row.preview);
    }
    println!("----");
    match &view.selected_id {
        Some(id) => println!("editing #{}", id),
        None => println!("new note"),
    }
    println!("title: {}", view.title);
    println!("body:  {}", view.content.replace('\n', "\n       "));
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let api = Arc::new(HttpNotesApi::new(&config.api_base_url));
    log::info!("[NOTES] Using notes service at {}", api.base_url());

    let controller = NotesController::new(api, config.timings);

    // Status line printer
    let mut rx = controller.subscribe();
    tokio::spawn(async move {
        let mut last_status = None;
        while rx.changed().await.is_ok() {
            let status = rx.borrow_and_update().status.clone();
            let text = status.as_ref().map(|s| (s.text.clone(), s.kind));
            if text != last_status {
                if let Some((text, kind)) = &text {
                    println!("[{}] {}", kind, text);
                }
                last_status = text;
            }
        }
    });

    controller.load().await;
    print_view(&controller.snapshot());
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Failed to read stdin: {}", e);
                std::process::exit(1);
            }
        };

        let intent = match intent::parse_command(&line) {
            Ok(intent) => intent,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match intent {
            UserIntent::Quit => break,
            UserIntent::Help => println!("{}", intent::HELP),
            UserIntent::Show => print_view(&controller.snapshot()),
            UserIntent::Save | UserIntent::Delete => {
                let controller = controller.clone();
                tokio::spawn(async move {
                    controller.dispatch(intent).await;
                });
            }
            UserIntent::Search(_) => {
                controller.dispatch(intent).await;
            }
            other => {
                controller.dispatch(other).await;
                print_view(&controller.snapshot());
            }
        }
    }
}
