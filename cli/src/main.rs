use anyhow::Context;
use clap::Parser;
use memory_match_core::{GameConfig, TickOutcome};
use std::io::{self, BufRead, Write};
use std::time::Duration;

mod input;
mod render;
mod session;

use session::{Session, Update};

#[derive(Parser, Debug)]
#[command(version, about = "Find every matching pair of cards", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cards per row and column, the total has to be even
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIDE)]
    side: u8,

    /// How long a revealed pair stays up, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new(args.side, Duration::from_millis(args.delay_ms))
        .with_context(|| format!("cannot lay out a {0}x{0} grid", args.side))?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");

    let mut session = Session::new(config, seed)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", input::HELP)?;
    draw(&mut stdout, &session)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("could not read from stdin")?;
        let command = match input::parse(&line, session.side()) {
            Ok(command) => command,
            Err(input::InputError::Empty) => {
                session.tick();
                draw(&mut stdout, &session)?;
                continue;
            }
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };

        match session.update(command) {
            Update::Quit => break,
            Update::ShowHelp => writeln!(stdout, "{}", input::HELP)?,
            Update::Unchanged => {
                writeln!(stdout, "That card cannot be flipped right now")?;
            }
            Update::Redraw => {
                session.tick();
                draw(&mut stdout, &session)?;
            }
            Update::RedrawAndSettle => {
                draw(&mut stdout, &session)?;
                if session.settle() == TickOutcome::Won {
                    writeln!(
                        stdout,
                        "All pairs found in {} moves! Type `r` to play again.",
                        session.engine().moves()
                    )?;
                }
                draw(&mut stdout, &session)?;
            }
        }
    }

    Ok(())
}

fn draw(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out, "{}", render::board(&session.observe()))?;
    out.flush()
}
