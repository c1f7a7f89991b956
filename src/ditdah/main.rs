use clap::Parser;
use colored::*;
use ditdah::api::MorseApi;
use ditdah::commands::{CmdMessage, MessageLevel};
use ditdah::error::{DitdahError, Result};
use ditdah::model::{Direction, Mode};

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            target,
            american,
            input,
        } => handle_translate(target, american, input),
    }
}

fn handle_translate(target: String, american: bool, input: Vec<String>) -> Result<()> {
    // Mirrors the single-positional contract: reject extras before touching
    // the conversion core.
    if input.len() > 1 {
        return Err(DitdahError::TooManyArguments);
    }
    let direction: Direction = target.parse()?;

    let mode = if american {
        Mode::American
    } else {
        Mode::International
    };
    let api = MorseApi::new(mode);

    let input = input.into_iter().next().unwrap_or_default();
    let result = api.translate(direction, &input)?;

    println!("{}", result.output);
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
