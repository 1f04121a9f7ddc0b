//! Applies console commands to a tree and writes the replies to a sink.

use std::io::{BufRead, Write};

use avl_index::AvlTree;
use avl_index_util::Fuzzer;

use crate::command::MAX_FILL;
use crate::{CliError, Command, Shape};

const MENU: &str = "\
AVL Tree Operations:
1. Insert key        (1 <key>)
2. Delete key        (2 <key>)
3. Clear tree        (3)
4. Insert vector     (4 <key> <key> ...)
5. Exit              (5)
   show | dump | fill <count> [seed]
Enter choice (1-5): ";

pub struct Session<W> {
    tree: AvlTree<i64>,
    out: W,
    prompt: bool,
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Self {
            tree: AvlTree::new(),
            out,
            prompt: true,
        }
    }

    /// Suppresses the menu, for scripted input.
    pub fn quiet(mut self) -> Self {
        self.prompt = false;
        self
    }

    pub fn tree(&self) -> &AvlTree<i64> {
        &self.tree
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Applies one command. Returns `false` once the session should end.
    pub fn execute(&mut self, cmd: Command) -> Result<bool, CliError> {
        match cmd {
            Command::Insert(key) => {
                self.tree.insert(key);
                writeln!(self.out, "Inserted {key}")?;
            }
            Command::Delete(key) => {
                self.tree.delete(&key);
                writeln!(self.out, "Deleted {key}")?;
            }
            Command::Clear => {
                self.tree.clear();
                writeln!(self.out, "Tree cleared")?;
            }
            Command::Bulk { keys, rejected } => {
                let count = keys.len();
                self.tree.extend(keys);
                if let Some(bad) = rejected {
                    writeln!(self.out, "Warning: Skipped invalid input '{bad}'")?;
                }
                writeln!(self.out, "Inserted {count} values")?;
            }
            Command::Exit => {
                self.tree.clear();
                writeln!(self.out, "Exiting...")?;
                return Ok(false);
            }
            Command::Show => {
                writeln!(self.out, "{}", self.tree)?;
            }
            Command::Dump => {
                let shape = self.tree.root().map(Shape::of);
                serde_json::to_writer_pretty(&mut self.out, &shape)?;
                writeln!(self.out)?;
            }
            Command::Fill { count, seed } => {
                if count > MAX_FILL {
                    return Err(CliError::InvalidCount(count.to_string()));
                }
                let max = i64::try_from(count)
                    .map_err(|_| CliError::InvalidCount(count.to_string()))?;
                let fuzzer = match seed {
                    Some(seed) => Fuzzer::from_u64(seed),
                    None => Fuzzer::new(None),
                };
                let before = self.tree.size();
                self.tree.extend(fuzzer.keys(count, 0, max.saturating_mul(10).max(1)));
                writeln!(
                    self.out,
                    "Inserted {} of {count} drawn values (size {}, height {})",
                    self.tree.size() - before,
                    self.tree.size(),
                    self.tree.height()
                )?;
            }
        }
        Ok(true)
    }

    /// Reads commands line by line until `exit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), CliError> {
        self.show_menu()?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>().and_then(|cmd| self.execute(cmd)) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => writeln!(self.out, "{e}")?,
            }
            self.show_menu()?;
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), CliError> {
        if self.prompt {
            write!(self.out, "\n{MENU}")?;
            self.out.flush()?;
        }
        Ok(())
    }
}
