use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use sweep_core::{Difficulty, WinPolicy};

use command::{Command, HELP};
use session::{Session, Step};

mod command;
mod render;
mod session;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    Beginner,
    Intermediate,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Difficulty of the first game
    #[arg(short, long, value_enum, default_value_t = DifficultyArg::Beginner)]
    difficulty: DifficultyArg,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only count a game as won once every mine is flagged
    #[arg(long)]
    strict_flags: bool,
}

fn draw(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let snapshot = session.snapshot();
    writeln!(out, "{}", render::BoardView(&snapshot))?;
    writeln!(out, "{}", render::StatusLine(&snapshot))
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("{:?}", args);

    let win_policy = if args.strict_flags {
        WinPolicy::RevealSafeAndFlagMines
    } else {
        WinPolicy::RevealSafe
    };
    let mut session = Session::new(args.difficulty.into(), win_policy, args.seed);

    let mut out = io::stdout().lock();
    draw(&mut out, &session)?;
    prompt(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read command")?;
        if line.trim().is_empty() {
            prompt(&mut out)?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => match session.execute(command) {
                Ok(Step::Redraw) => draw(&mut out, &session)?,
                Ok(Step::Unchanged) => writeln!(out, "Nothing changed")?,
                Ok(Step::Help) => writeln!(out, "{HELP}")?,
                Ok(Step::Quit) => break,
                Err(err) => writeln!(out, "{err}")?,
            },
            Err(err) => writeln!(out, "{err}")?,
        }
        prompt(&mut out)?;
    }

    log::debug!(
        "Bye, last {} game ended {:?}",
        session.difficulty(),
        session.engine().outcome()
    );
    Ok(())
}
