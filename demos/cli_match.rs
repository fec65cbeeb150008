//! CLI matching game example.

use std::io::{self, Write};
use std::process::ExitCode;

use suitmatch::{GameOptions, GameOutcome, play_game_shared};

fn main() -> ExitCode {
    let input = prompt_line("Enter number of 52-card packs to use: ");
    let options = GameOptions::parse_input(&input).unwrap_or_else(|| {
        let fallback = GameOptions::default();
        eprintln!("Invalid input. Using {} pack.", fallback.packs);
        fallback
    });

    let report = match play_game_shared(options.packs) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Game error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for event in &report.events {
        println!("{event}");
    }

    if report.outcome == GameOutcome::Stalled {
        println!("Game ended after {} turns with no winner.", report.turns);
    }

    ExitCode::SUCCESS
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_owned()
}
