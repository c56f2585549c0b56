//! The end-to-end run: validate, discover, list or confirm, then rewrite.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::Error;
use crate::console::Console;
use crate::discovery::{DiscoveryError, discover};
use crate::gate::SafetyGate;
use crate::storage::Storage;
use crate::stripper::strip_source;

/// Options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File or directory to process.
    pub src: PathBuf,
    /// Print the targets instead of rewriting them.
    pub list: bool,
}

impl Config {
    pub fn new(src: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            list: false,
        }
    }

    #[must_use]
    pub const fn list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Discovery found nothing to do.
    NoTargets,
    /// `--list` printed this many targets.
    Listed(usize),
    /// The operator declined the bulk confirmation.
    Declined,
    /// This many files were rewritten.
    Processed(usize),
}

/// Run with the default confirmation threshold.
pub fn run(
    config: &Config,
    console: &mut dyn Console,
    storage: &dyn Storage,
) -> Result<Outcome, Error> {
    Driver::new(console, storage).run(config)
}

/// Sequences discovery, the safety gate and per-file rewriting.
pub struct Driver<'a> {
    console: &'a mut dyn Console,
    storage: &'a dyn Storage,
    gate: SafetyGate,
}

impl<'a> Driver<'a> {
    pub fn new(console: &'a mut dyn Console, storage: &'a dyn Storage) -> Self {
        Self {
            console,
            storage,
            gate: SafetyGate::default(),
        }
    }

    #[must_use]
    pub const fn with_gate(mut self, gate: SafetyGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn run(&mut self, config: &Config) -> Result<Outcome, Error> {
        self.say("phpdoc-strip start.")?;

        let files = match discover(&config.src) {
            Ok(files) => files,
            Err(DiscoveryError::NotFound { path }) => {
                error!(path = %path.display(), "source path does not exist");
                return Err(Error::InvalidPath { path });
            }
            Err(e) => return Err(e.into()),
        };
        debug!(count = files.len(), src = %config.src.display(), "discovered targets");

        if files.is_empty() {
            self.say("phpdoc-strip target not found.")?;
            return Ok(Outcome::NoTargets);
        }

        if config.list {
            self.say("trim target is:")?;
            for (index, file) in files.iter().enumerate() {
                self.say(&format!("{:>3} `{}`", index + 1, file.display()))?;
            }
            return Ok(Outcome::Listed(files.len()));
        }

        let verdict = self
            .gate
            .confirm(files.len(), &mut *self.console)
            .map_err(Error::Console)?;
        if !verdict.proceeds() {
            self.say("phpdoc-strip was interrupted.")?;
            return Ok(Outcome::Declined);
        }

        for file in &files {
            self.trim_file(file)?;
        }

        self.say("phpdoc-strip end.")?;
        Ok(Outcome::Processed(files.len()))
    }

    fn trim_file(&mut self, path: &Path) -> Result<(), Error> {
        let source = self.storage.read(path).map_err(|source| {
            error!(path = %path.display(), %source, "read failed");
            Error::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let stripped = strip_source(&source);

        self.storage.write(path, &stripped.text).map_err(|source| {
            error!(path = %path.display(), %source, "write failed");
            Error::Persist {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!(
            path = %path.display(),
            removed = stripped.removed,
            preserved = stripped.preserved,
            "trimmed"
        );
        self.say(&format!(
            "trimmed `{}` ({} comment(s) removed)",
            path.display(),
            stripped.removed
        ))
    }

    fn say(&mut self, line: &str) -> Result<(), Error> {
        self.console.print(line).map_err(Error::Console)
    }
}
