//! Command line flag parser with typed values, sub-commands and
//! "did you mean" suggestions.
//!
//! Flags are declared on a [`FlagParser`] together with a mutable reference
//! to the storage they fill in. Parsing validates the declarations, walks the
//! command line and writes converted values straight into that storage.
//!
//! ```
//! use flagparser::FlagParser;
//!
//! let (mut a, mut b) = (0i32, 0i32);
//! let mut verbose = false;
//!
//! let mut parser = FlagParser::new("calc");
//! let add = parser.add_command("add", "add two numbers");
//! add.add_flag(&mut a).set_name("a").set_help("number1 for add");
//! add.add_flag(&mut b).set_name("b").set_help("number2 for add");
//! parser.add_flag(&mut verbose).set_long_name("--verbose").set_help("verbose!");
//!
//! parser.parse(["calc", "add", "1", "2"]).unwrap();
//! assert_eq!(parser.selected(), Some("add"));
//! drop(parser);
//! assert_eq!(a + b, 3);
//! ```

mod flag;
mod help;
mod parser;
mod rt;
mod value;

pub mod completion;
pub mod console;
pub mod suggest;

use thiserror::Error;

pub use crate::{
    console::Console,
    flag::{Flag, FlagOptions, ParseCallback, SlotCallback},
    help::HelpLayout,
    parser::FlagParser,
    value::FlagValue,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a parse stopped. The first failure ends the parse.
#[derive(Debug, Error)]
pub enum Error {
    /// The declarations themselves are inconsistent; no token was read.
    #[error("{0}")]
    InvalidDeclaration(String),

    #[error("\"{name}\" is failed to parse: (reason: {}).", or_unknown(.reason))]
    ValueParse { name: String, reason: String },

    #[error("\"{name}\" is failed to parse: (reason: empty value).")]
    EmptyValue { name: String },

    #[error("met unknown argument: \"{arg}\"{}", suggestion_suffix(.suggestion))]
    UnknownArgument { arg: String, suggestion: Option<String> },

    #[error("\"{name}\" is positional, but not set.")]
    MissingPositional { name: String },

    #[error("\"{name}\" is required, but not set.")]
    MissingRequired { name: String },

    /// `--help` or `-h` was given; `help` has already been written to stderr.
    #[error("Got \"{arg}\".")]
    HelpRequested { arg: String, help: String },

    #[error("invalid utf8 argument: \"{arg}\"")]
    InvalidUtf8 { arg: String },
}

fn or_unknown(reason: &str) -> &str {
    if reason.is_empty() {
        "unknown"
    } else {
        reason
    }
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(it) => format!(", maybe you mean \"{it}\"?"),
        None => ".".to_string(),
    }
}

impl Error {
    pub fn is_help(&self) -> bool {
        matches!(self, Error::HelpRequested { .. })
    }

    /// Prints the error to stderr and exits with a non-zero code.
    pub fn exit(self) -> ! {
        let console = Console::detect_stderr();
        eprintln!("{}", console.error_banner(&self.to_string()));
        std::process::exit(1)
    }
}
