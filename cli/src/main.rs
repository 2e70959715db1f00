use anyhow::Result;
use clap::Parser;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use sweepling_core::{Difficulty, FlagOutcome, GamePhase, RevealOutcome, Session};

use command::{Command, HELP};
use narrator::Narrator;

mod clock;
mod command;
mod narrator;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Clear the board without opening a mine", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset to start with
    #[arg(short, long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut session = Session::with_seed(args.difficulty, seed)?;
    let narrator = Rc::new(RefCell::new(Narrator::new(seed)));
    let stopwatch = clock::Stopwatch::default();
    session.subscribe(narrator::observe(&narrator));
    session.subscribe(stopwatch.clone());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{} ({})", narrator.borrow_mut().greeting(), args.difficulty.label())?;
    writeln!(stdout, "{HELP}")?;

    loop {
        writeln!(stdout)?;
        write!(stdout, "{}", render::render(&session))?;
        writeln!(
            stdout,
            "{}",
            render::status_line(
                session.config(),
                session.phase(),
                session.flags_remaining(),
                stopwatch.elapsed_secs()
            )
        )?;
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err:#}")?;
                continue;
            }
        };

        let message = match command {
            Command::Open(coords) => match session.open(coords) {
                Ok(RevealOutcome::NoChange) if session.is_finished() => {
                    Some("The game is over, `r` starts a new one.".to_string())
                }
                Ok(RevealOutcome::HitMine) => Some("Boom!".to_string()),
                Ok(RevealOutcome::Won) => Some("Board cleared!".to_string()),
                Ok(_) => None,
                Err(err) => Some(err.to_string()),
            },
            Command::Flag(coords) => match session.toggle_flag(coords) {
                Ok(FlagOutcome::NoChange)
                    if !session.is_finished()
                        && !session.board()[coords].is_revealed
                        && session.flags_remaining() == 0 =>
                {
                    Some("No flags left.".to_string())
                }
                Ok(_) => None,
                Err(err) => Some(err.to_string()),
            },
            Command::Restart => {
                session.restart()?;
                None
            }
            Command::Difficulty(difficulty) => {
                session.set_difficulty(difficulty)?;
                Some(format!("Switched to {}.", difficulty.label()))
            }
            Command::Hint if session.phase() == GamePhase::Playing => {
                Some(narrator.borrow_mut().hint().to_string())
            }
            Command::Hint => Some("Hints are available once the game is under way.".to_string()),
            Command::Help => Some(HELP.to_string()),
            Command::Quit => break,
        };

        if let Some(message) = message {
            writeln!(stdout, "{message}")?;
        }
        if let Some(line) = narrator.borrow_mut().take_line() {
            writeln!(stdout, "{line}")?;
        }
    }

    Ok(())
}
