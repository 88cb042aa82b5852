//! Chat commands for CLI.

use std::io::{BufRead, Write};

use campus_core::{Config, Responder, TypingDelay};
use clap::Subcommand;
use serde::Serialize;
use tracing::debug;

#[derive(Subcommand)]
pub enum ChatAction {
    /// Ask a single question
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Output as JSON (includes the matched topic)
        #[arg(long)]
        json: bool,
    },
    /// List topics, their keywords and suggested questions
    Topics {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive chat on stdin; "exit" or "quit" ends it
    Repl,
}

#[derive(Serialize)]
struct TopicSummary<'a> {
    id: &'a str,
    keywords: &'a [String],
    suggestion: Option<&'a str>,
}

pub fn run(action: ChatAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let responder = Responder::new(config.topic_table()?);

    match action {
        ChatAction::Ask { text, json } => {
            let question = text.join(" ");
            if json {
                let reply = responder.reply(&question);
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!("{}", responder.respond(&question));
            }
        }
        ChatAction::Topics { json } => {
            let summaries: Vec<_> = responder
                .table()
                .topics()
                .iter()
                .map(|t| TopicSummary {
                    id: &t.id,
                    keywords: &t.keywords,
                    suggestion: t.suggestion(),
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for summary in summaries {
                    println!("{}: {}", summary.id, summary.keywords.join(", "));
                    if let Some(suggestion) = summary.suggestion {
                        println!("  try: {suggestion}");
                    }
                }
            }
        }
        ChatAction::Repl => {
            let delay = config.chat.typing_delay()?;
            let stdin = std::io::stdin();
            repl(&responder, delay, stdin.lock(), std::io::stdout().lock())?;
        }
    }
    Ok(())
}

fn repl<R: BufRead, W: Write>(
    responder: &Responder,
    delay: Option<TypingDelay>,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    writeln!(output, "Ask me anything about campus. Type \"exit\" to leave.")?;
    for suggestion in responder.table().suggestions() {
        writeln!(output, "  - {suggestion}")?;
    }

    for line in input.lines() {
        let line = line?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Some(delay) = delay {
            let pause = delay.sample();
            debug!(?pause, "simulating typing");
            write!(output, "...")?;
            output.flush()?;
            std::thread::sleep(pause);
            write!(output, "\r   \r")?;
        }
        writeln!(output, "{}\n", responder.respond(message))?;
        output.flush()?;
    }
    Ok(())
}
