use std::ffi::OsString;

use crate::{Error, Result};

/// Remaining tokens of a command line.
///
/// Tokens are stored reversed so that consuming one is a `pop`. A sub-command
/// scope takes over the cursor of its parent and keeps consuming from it.
#[derive(Debug)]
pub(crate) struct Args {
    rargs: Vec<String>,
}

impl Args {
    /// Builds a cursor from a full argv; the program name at index 0 is skipped.
    pub(crate) fn new(args: Vec<String>) -> Self {
        let mut rargs = args;
        rargs.reverse();
        let mut res = Self { rargs };
        let _progn = res.next();
        res
    }

    /// Reads `std::env::args_os`. The program name is dropped unchecked, so
    /// only the arguments themselves have to be valid UTF-8.
    pub(crate) fn from_env() -> Result<Self> {
        let mut args = std::env::args_os();
        let _progn = args.next();
        let mut rargs = args.map(into_string).collect::<Result<Vec<_>>>()?;
        rargs.reverse();
        Ok(Args { rargs })
    }

    pub(crate) fn next(&mut self) -> Option<String> {
        self.rargs.pop()
    }

    pub(crate) fn next_value(&mut self, flag: &str) -> Result<String> {
        self.next().ok_or_else(|| Error::EmptyValue { name: flag.to_string() })
    }
}

fn into_string(arg: OsString) -> Result<String> {
    arg.into_string().map_err(|it| {
        // `to_string_lossy()` would replace invalid sequences, debug output escapes them instead.
        let dbg = format!("{it:?}");
        Error::InvalidUtf8 { arg: dbg.trim_matches('"').to_string() }
    })
}
