// MoyoCare terminal companion
// Line REPL over the chat session, with cycle controls and guided breathing

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use moyocare_core::brain::{CyclePhase, TurnPacket};
use moyocare_core::config::CompanionConfig;
use moyocare_core::models::ChatMessage;
use moyocare_core::responder::select_responder;
use moyocare_core::session::ChatSession;
use moyocare_core::telemetry::init_tracing;
use moyocare_core::wellness::{greeting_at, tip_for_day, BreathingExercise};

const HELP: &str = "Commands: /period on|off, /phase <menstrual|follicular|ovulation|luteal>, /breathe, /quit";

#[tokio::main]
async fn main() -> Result<()> {
    let config = CompanionConfig::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_format, "info").context("Failed to initialise logging")?;
    config.log_startup();
    info!("Starting MoyoCare");

    let responder = select_responder(&config)?;
    let mut session = ChatSession::new(responder);

    let now = Local::now();
    let tip = tip_for_day(now.ordinal());
    println!("{}, Sis 👋", greeting_at(&now));
    println!("{} · {}", session.cycle().status_label(), tip.title);
    println!("  {}", tip.body);
    println!();
    println!("Try one of these:");
    for prompt in session.suggested_prompts() {
        println!("  • {}", prompt);
    }
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('/') {
            let mut parts = command.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("quit"), _) | (Some("exit"), _) => break,
                (Some("period"), Some("on")) => {
                    session.set_period_mode(true);
                    println!("🌸 {}", session.cycle().status_label());
                }
                (Some("period"), Some("off")) => {
                    session.set_period_mode(false);
                    println!("{}", session.cycle().status_label());
                }
                (Some("phase"), Some(name)) => match name.parse::<CyclePhase>() {
                    Ok(phase) => {
                        session.set_cycle_phase(phase);
                        println!("{}", phase.description());
                    }
                    Err(e) => println!("{}", e),
                },
                (Some("breathe"), _) => run_breathing().await,
                _ => println!("{}", HELP),
            }
            continue;
        }

        // Pacing: thinking indicator, then the trace, then the reply
        println!("Moyo is thinking...");
        tokio::time::sleep(config.think_delay()).await;

        match session.send(line).await {
            Ok(Some(reply)) => {
                print_thinking(&reply);
                tokio::time::sleep(config.reveal_delay()).await;
                print_reply(&reply, session.last_turn());
            }
            Ok(None) => {}
            Err(e) => {
                error!("Turn failed: {}", e);
                println!("Sorry sis, I couldn't answer that just now. Please try again.");
            }
        }
    }

    info!(session_id = %session.id(), messages = session.messages().len(), "Session ended");
    Ok(())
}

fn print_thinking(reply: &ChatMessage) {
    for line in &reply.thinking {
        println!("  │ {}", line);
    }
}

fn print_reply(reply: &ChatMessage, turn: Option<&TurnPacket>) {
    if let (Some(sentiment), Some(intent)) = (&reply.sentiment, &reply.intent) {
        println!("[{} · {}]", sentiment, intent);
    }
    println!("{}", reply.content);
    if let Some(resources) = turn.and_then(|t| t.response.resources.as_ref()) {
        for resource in resources {
            println!("  ☎ {}", resource);
        }
    }
    println!();
}

async fn run_breathing() {
    let mut exercise = BreathingExercise::new();
    loop {
        println!(
            "{} · {} ({}s) · {}",
            exercise.progress_label(),
            exercise.instruction(),
            exercise.current_duration().as_secs(),
            exercise.prompt()
        );
        tokio::time::sleep(exercise.current_duration()).await;
        if exercise.advance().is_none() {
            break;
        }
    }
    println!("Well done, sis. 💜");
}
