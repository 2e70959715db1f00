use anyhow::{Context, Result, bail};
use core::str::FromStr;
use sweepling_core::{Coord, Coord2, Difficulty};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open(Coord2),
    Flag(Coord2),
    Restart,
    Difficulty(Difficulty),
    Hint,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "o" | "open" => Self::Open(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "r" | "restart" => Self::Restart,
            "d" | "difficulty" => {
                let name = words.next().context("missing difficulty name")?;
                Self::Difficulty(name.parse()?)
            }
            "hint" => Self::Hint,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}, try `help`"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument {extra:?}");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2> {
    let row = words.next().context("missing row")?;
    let col = words.next().context("missing column")?;
    Ok((parse_axis(row)?, parse_axis(col)?))
}

fn parse_axis(word: &str) -> Result<Coord> {
    word.parse()
        .with_context(|| format!("{word:?} is not a valid coordinate"))
}

pub const HELP: &str = "\
commands:
  o <row> <col>   open a cell
  f <row> <col>   toggle a flag
  r               restart
  d <easy|medium|hard>
                  change difficulty
  hint            ask for a hint
  q               quit";
