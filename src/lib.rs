//! Strip ordinary comments from PHP sources while keeping phpdoc.
//!
//! Line comments (`//`, `#`) and block comments (`/* */`) are removed
//! together with the line they sit on. Doc comments (`/** */`) are kept
//! byte for byte.
//!
//! # Quick start
//!
//! ```
//! use phpdoc_strip::{strip, tokenize};
//!
//! let input = "<?php\n// drop me\necho 1;\n/** keep */\n";
//! let output = strip(&tokenize(input));
//! assert_eq!(output, "<?php\necho 1;\n/** keep */\n");
//! ```
//!
//! # Rewriting files
//!
//! [`run`] drives a whole pass over a file or directory: discovery,
//! an optional listing, a confirmation prompt for more than ten files,
//! then an in-place rewrite of each target.

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod console;
pub mod discovery;
pub mod driver;
pub mod gate;
pub mod lexer;
pub mod storage;
pub mod stripper;
pub mod token;

use std::io;
use std::path::PathBuf;

pub use console::{Console, StdConsole};
pub use discovery::{DiscoveryError, PHP_EXTENSION, discover};
pub use driver::{Config, Driver, Outcome, run};
pub use gate::{SafetyGate, Verdict};
pub use lexer::tokenize;
pub use storage::{LocalFs, Storage};
pub use stripper::{Stripped, rewrite, strip, strip_source};
pub use token::{Span, Token, TokenKind};

/// Errors that end a run early.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source path is neither a file nor a directory.
    #[error("`{}` is neither a file nor a directory", path.display())]
    InvalidPath { path: PathBuf },
    /// Walking the source directory failed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    /// A target could not be read.
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A target could not be rewritten. Files already written stay written.
    #[error("an error occurred while writing `{}`: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Progress output or the confirmation prompt failed.
    #[error("console error: {0}")]
    Console(#[source] io::Error),
}
