//! Command Executor Module
//!
//! Dispatches parsed commands to store operations and formats one reply per
//! command. No I/O happens here; the shell loop owns the console.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cache::CacheStore;
use crate::command::Command;
use crate::config::Config;

/// Guidance printed for any input that failed to parse.
pub const INVALID_COMMAND_MSG: &str =
    "Invalid command, For assistance press TAB or type \"help\" then hit ENTER.";

/// Static command reference printed by `help`.
const HELP_TEXT: &str = "\
Cache test shell
----------------

Valid commands:
  put <key> <value>             - stores an entry
  get <key>                     - retrieves an entry
  remove <key>                  - removes an entry
  list                          - lists entries locally stored
  size                          - counts entries locally stored
  stats                         - prints hit/miss statistics
  fill <numEntries> <entrySize> - generates numEntries, each of entrySize bytes
  exit                          - quit cleanly
  help                          - prints this message
";

// == Outcome ==
/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and keep the loop running
    Reply(String),
    /// Print the reply, then shut the store down and terminate
    Shutdown(String),
}

// == Command Executor ==
/// Executes commands against a [`CacheStore`].
///
/// The random source for `fill` is an explicit capability held by the
/// executor rather than global state, so tests can substitute a seeded
/// generator and observe deterministic values.
#[derive(Debug)]
pub struct CommandExecutor<R: Rng> {
    rng: R,
}

impl CommandExecutor<SmallRng> {
    /// Creates an executor whose random source follows the configuration:
    /// seeded when `fill_seed` is set, entropy-seeded otherwise.
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.fill_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> CommandExecutor<R> {
    // == Constructor ==
    /// Creates an executor with the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    // == Execute ==
    /// Executes one command against the store.
    ///
    /// Every command kind is handled here; adding a variant to [`Command`]
    /// forces this match to be extended. Nothing panics past this boundary:
    /// all failure is a formatted reply.
    pub fn execute(&mut self, store: &mut CacheStore, command: Command) -> Outcome {
        match command {
            Command::Help => Outcome::Reply(HELP_TEXT.to_string()),
            Command::Put { key, value } => {
                let old = store.put(key.clone(), value.clone());
                Outcome::Reply(format!(
                    "Stored {} under key {}, replacing old value {}",
                    value,
                    key,
                    display(old)
                ))
            }
            Command::Get { key } => {
                let value = store.get(&key);
                Outcome::Reply(format!("Value of {} is {}", key, display(value)))
            }
            Command::Remove { key } => {
                let old = store.remove(&key);
                Outcome::Reply(format!(
                    "Removed entry {}, old value was {}",
                    key,
                    display(old)
                ))
            }
            Command::List => Outcome::Reply(format!(
                "Cache contains the following keys: {}",
                store.keys().join(", ")
            )),
            Command::Size => {
                Outcome::Reply(format!("Local node contains {} entries", store.len()))
            }
            Command::Stats => {
                let stats = store.stats();
                Outcome::Reply(format!(
                    "Puts: {}, hits: {}, misses: {}, removals: {}, hit rate: {:.2}",
                    stats.puts,
                    stats.hits,
                    stats.misses,
                    stats.removals,
                    stats.hit_rate()
                ))
            }
            Command::Fill { count, bytes } => Outcome::Reply(self.fill(store, count, bytes)),
            Command::Exit => Outcome::Shutdown("Exiting cleanly ... ".to_string()),
            Command::Invalid { reason } => {
                Outcome::Reply(format!("{INVALID_COMMAND_MSG}\n({reason})"))
            }
        }
    }

    // == Fill ==
    /// Creates `count` entries keyed `key0..key(count-1)`, each value a
    /// uniformly-random uppercase A-Z string of `bytes` characters.
    ///
    /// A non-positive `count` creates nothing and says so instead of
    /// reporting a misleading negative last index. Negative `bytes` behaves
    /// like zero: entries are created with empty values.
    fn fill(&mut self, store: &mut CacheStore, count: i64, bytes: i64) -> String {
        if count <= 0 {
            return "No entries created".to_string();
        }
        let len = bytes.max(0) as usize;
        for i in 0..count {
            let value = self.generate(len);
            store.put(format!("key{i}"), value);
        }
        format!("Created entries key0 through to key{}", count - 1)
    }

    /// Generates one uniformly-random string over A-Z.
    fn generate(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| (b'A' + self.rng.gen_range(0..26u8)) as char)
            .collect()
    }
}

// == Display Helper ==
/// Renders an optional value the way the console protocol expects.
fn display(value: Option<String>) -> String {
    value.unwrap_or_else(|| "none".to_string())
}
