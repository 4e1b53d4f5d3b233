//! Shell Loop Module
//!
//! The read-parse-dispatch-print cycle driving the store, built on rustyline
//! for line editing, history, and tab completion over the command names.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::{debug, info};

use crate::cache::CacheStore;
use crate::command::Command;
use crate::config::Config;
use crate::executor::{CommandExecutor, Outcome};

// == Shell Helper ==
/// Completes the command word at the start of the line.
struct ShellHelper;

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Only the first word is a command name; arguments are free-form
        if line[..pos].contains(' ') {
            return Ok((pos, Vec::new()));
        }
        let prefix = &line[..pos];
        let candidates = Command::NAMES
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}
impl Helper for ShellHelper {}

// == Shell ==
/// Owns the store and the executor, and runs the interactive loop.
///
/// One thread executes the whole cycle; the readline call awaiting operator
/// input is the only blocking point.
pub struct Shell {
    config: Config,
    store: CacheStore,
    executor: CommandExecutor<SmallRng>,
    /// Stable-but-arbitrary identity for the startup banner
    address: String,
}

impl Shell {
    // == Constructor ==
    /// Creates a shell owning a fresh store, configured from `config`.
    pub fn new(config: Config) -> Self {
        let executor = CommandExecutor::from_config(&config);
        let address = format!("{}/{}", config.cache_name, std::process::id());
        Self {
            config,
            store: CacheStore::new(),
            executor,
            address,
        }
    }

    // == Run ==
    /// Runs the interactive loop until `exit` or end of input.
    ///
    /// Each reply is printed and flushed before the next read. End of input
    /// (Ctrl-D) and interruption (Ctrl-C) terminate without the exit message.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut editor: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
        editor.set_helper(Some(ShellHelper));

        if let Some(path) = &self.config.history_file {
            if editor.load_history(path).is_err() {
                debug!(%path, "no previous history");
            }
        }

        println!("Cache started. Address: {}", self.address);
        info!(address = %self.address, "store initialized");

        let prompt = format!("{}> ", self.config.cache_name);
        loop {
            match editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    let _ = editor.add_history_entry(line);
                    let command = Command::parse(line);
                    debug!(?command, "dispatching");
                    match self.executor.execute(&mut self.store, command) {
                        Outcome::Reply(reply) => {
                            println!("{reply}");
                            io::stdout().flush()?;
                        }
                        Outcome::Shutdown(reply) => {
                            println!("{reply}");
                            self.store.clear();
                            info!("store cleared, shutting down");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Eof) => {
                    debug!("input stream closed");
                    break;
                }
                Err(ReadlineError::Interrupted) => {
                    debug!("interrupted");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        if let Some(path) = &self.config.history_file {
            if let Err(err) = editor.save_history(path) {
                debug!(%path, %err, "failed to save history");
            }
        }
        Ok(())
    }
}
