// src/cli/chat.rs — Line-oriented chat with the digital twin

use crate::chat::{ChatRole, ChatWidget, SessionManager};

/// Run the chat REPL until EOF or `quit`.
pub async fn run_chat(manager: &SessionManager, owner: &str, greeting: String) -> anyhow::Result<()> {
    eprintln!(
        "folio v{} | {}'s Digital Twin | powered by {}\n",
        env!("CARGO_PKG_VERSION"),
        owner,
        manager.config().model,
    );

    let mut widget = ChatWidget::new(greeting);
    widget.toggle();
    if let Some(seed) = widget.transcript().last() {
        println!("{}", seed.text());
    }

    while let Some(input) = read_input() {
        let trimmed = input.trim();

        if trimmed == "quit" || trimmed == "exit" || trimmed == "/quit" {
            break;
        }

        if trimmed.starts_with('/') {
            handle_slash_command(trimmed, &widget, manager).await;
            continue;
        }

        widget.set_input(input);
        eprint!("  ...\r");
        if widget.send(manager).await {
            if let Some(reply) = widget.transcript().last() {
                println!("{}\n", reply.text());
            }
        }
    }

    eprintln!(
        "\nSession total: {} message(s)",
        widget.transcript().len()
    );
    Ok(())
}

fn read_input() -> Option<String> {
    use std::io::{self, BufRead, Write};

    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

async fn handle_slash_command(input: &str, widget: &ChatWidget, manager: &SessionManager) {
    let cmd = input.split_whitespace().next().unwrap_or(input);

    match cmd {
        "/status" => {
            eprintln!("  Model: {} ({})", manager.config().model, manager.provider_name());
            eprintln!("  Temperature: {:.2}", manager.config().temperature);
            match manager.session() {
                Some(session) => eprintln!(
                    "  Session: {} | {} message(s) in context | since {}",
                    session.id(),
                    session.history_len().await,
                    session.created_at().format("%H:%M:%S"),
                ),
                None => eprintln!("  Session: not started"),
            }
            eprintln!("  Transcript: {} message(s)", widget.transcript().len());
        }

        "/history" => {
            for (i, msg) in widget.transcript().iter().enumerate() {
                let who = match msg.role() {
                    ChatRole::User => "you ",
                    ChatRole::Model => "twin",
                };
                eprintln!(
                    "  {:>2}. [{}] {} {}",
                    i + 1,
                    msg.timestamp().format("%H:%M:%S"),
                    who,
                    crate::util::ellipsize(msg.text(), 60),
                );
            }
        }

        "/help" => {
            eprintln!("Slash commands:");
            eprintln!("  /status            Show model and session state");
            eprintln!("  /history           Show the transcript so far");
            eprintln!("  /help              Show this help");
            eprintln!("  /quit, quit, exit  End session");
        }

        _ => {
            eprintln!("Unknown command: {}. Type /help for commands.", cmd);
        }
    }
}
