//! CLI card guessing example.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use higher_card::{Guess, ParseGuessError, Round, RoundOptions};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("Welcome to the card guessing game!");

        let Some(name) = prompt_line(&mut input, "What is your name?: ") else {
            return ExitCode::FAILURE;
        };
        if name.is_empty() {
            println!("No name entered - exiting.");
            return ExitCode::FAILURE;
        }

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;

        let mut round = match Round::new(name, RoundOptions::default(), seed) {
            Ok(round) => round,
            Err(err) => {
                println!("{err}");
                return ExitCode::FAILURE;
            }
        };

        if let Err(err) = round.deal() {
            eprintln!("Deal error: {err}");
            return ExitCode::FAILURE;
        }

        let Some(answer) = prompt_line(
            &mut input,
            "You've been dealt two cards. Which is higher? [first/second]: ",
        ) else {
            return ExitCode::FAILURE;
        };

        let guess = match answer.parse::<Guess>() {
            Ok(guess) => guess,
            Err(ParseGuessError::Empty) => {
                println!("No guess entered - exiting.");
                return ExitCode::FAILURE;
            }
            Err(ParseGuessError::Invalid) => {
                println!("Invalid choice - exiting.");
                return ExitCode::FAILURE;
            }
        };

        match round.guess(guess.index()) {
            Ok(outcome) if outcome.correct => println!("Congrats! You guessed correctly!"),
            Ok(_) => println!("You guessed incorrectly."),
            Err(err) => {
                eprintln!("Guess error: {err}");
                return ExitCode::FAILURE;
            }
        }

        println!("Let's reveal the cards.");
        if let Some(hand) = round.revealed() {
            for (label, card) in ["First", "Second"].iter().zip(hand) {
                println!("{label} card: {card}");
            }
        }

        let Some(again) = prompt_line(&mut input, "Play again? [yes/no(default)]: ") else {
            return ExitCode::FAILURE;
        };
        if !again.eq_ignore_ascii_case("yes") {
            println!("Thanks for playing!");
            return ExitCode::SUCCESS;
        }
    }
}

/// Reads one trimmed line. Returns `None` on I/O errors.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => Some(line.trim().to_string()),
        Err(err) => {
            eprintln!("Error reading input: {err}");
            None
        }
    }
}
