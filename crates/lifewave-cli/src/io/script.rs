// crates/lifewave-cli/src/io/script.rs
//
// Event scripts, one step per line:
//   tick [n]            n periodic ticks (default 1)
//   press x y [0|1]     grid key (default pressed)
//   turn ch +|-         encoder turn
//   # ...               comment

use anyhow::{anyhow, bail, Context, Result};
use lifewave_core::{Direction, Event};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Ticks(u64),
    Event(Event),
}

pub fn load_script(path: &str) -> Result<Vec<Step>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read script {path}"))?;
    parse_script(&text).with_context(|| format!("parse script {path}"))
}

pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    let mut out = Vec::new();
    for (n, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let step = parse_line(line).with_context(|| format!("line {}: {raw}", n + 1))?;
        out.push(step);
    }
    Ok(out)
}

fn parse_line(line: &str) -> Result<Step> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["tick"] => Ok(Step::Ticks(1)),
        ["tick", n] => Ok(Step::Ticks(num(n)?)),
        ["press", x, y] => Ok(press(num(x)?, num(y)?, true)),
        ["press", x, y, p] => Ok(press(num(x)?, num(y)?, num::<u8>(p)? != 0)),
        ["turn", ch, dir] => {
            let dir = match *dir {
                "+" | "up" | "1" => Direction::Up,
                "-" | "down" | "0" => Direction::Down,
                other => bail!("unknown direction {other:?} (use + or -)"),
            };
            Ok(Step::Event(Event::ArcEncoder {
                encoder: num(ch)?,
                dir,
            }))
        }
        _ => bail!("unrecognised step"),
    }
}

fn press(x: u8, y: u8, pressed: bool) -> Step {
    Step::Event(Event::GridKey { x, y, pressed })
}

fn num<T: std::str::FromStr>(s: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    s.parse::<T>().map_err(|e| anyhow!("bad number {s:?}: {e}"))
}
