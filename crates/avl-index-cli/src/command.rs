//! One console line → one [`Command`].

use std::str::FromStr;

use crate::CliError;

/// Largest key count a single `fill` accepts.
pub const MAX_FILL: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert(i64),
    Delete(i64),
    Clear,
    /// Keys parsed up to the first token that is not an integer.
    Bulk {
        keys: Vec<i64>,
        rejected: Option<String>,
    },
    Exit,
    Show,
    Dump,
    Fill {
        count: usize,
        seed: Option<u64>,
    },
}

fn parse_key(token: Option<&str>) -> Result<i64, CliError> {
    let token = token.ok_or(CliError::MissingKey)?;
    token
        .parse()
        .map_err(|_| CliError::InvalidKey(token.to_string()))
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self, CliError> {
        let mut tokens = line.split_whitespace();
        let choice = tokens.next().unwrap_or_default();
        let cmd = match choice {
            "1" | "insert" => Command::Insert(parse_key(tokens.next())?),
            "2" | "delete" => Command::Delete(parse_key(tokens.next())?),
            "3" | "clear" => Command::Clear,
            "4" | "bulk" => {
                let mut keys = Vec::new();
                let mut rejected = None;
                for token in tokens {
                    match token.parse() {
                        Ok(key) => keys.push(key),
                        Err(_) => {
                            rejected = Some(token.to_string());
                            break;
                        }
                    }
                }
                Command::Bulk { keys, rejected }
            }
            "5" | "exit" => Command::Exit,
            "show" => Command::Show,
            "dump" => Command::Dump,
            "fill" => {
                let count = tokens.next().ok_or(CliError::MissingCount)?;
                let count = count
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n <= MAX_FILL)
                    .ok_or_else(|| CliError::InvalidCount(count.to_string()))?;
                let seed = match tokens.next() {
                    Some(seed) => Some(
                        seed.parse()
                            .map_err(|_| CliError::InvalidSeed(seed.to_string()))?,
                    ),
                    None => None,
                };
                Command::Fill { count, seed }
            }
            other => return Err(CliError::InvalidChoice(other.to_string())),
        };
        Ok(cmd)
    }
}
