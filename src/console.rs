//! Terminal capabilities.
//!
//! Detection runs once, when a [`Console`] is created; the value is then
//! passed to whatever needs to style output.

use std::{
    env,
    io::{self, IsTerminal},
};

use crossterm::style::Stylize;

const TERMS: &[&str] =
    &["ansi", "bvterm", "color", "console", "cygwin", "konsole", "linux", "putty", "scoansi", "screen", "tmux"];

const TERM_PREFIXES: &[&str] = &["eterm", "kterm", "vt100", "vt102", "vt220", "vt320", "xterm"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Console {
    pub is_tty: bool,
    pub supports_ansi: bool,
    pub supports_8bit_color: bool,
    pub supports_truecolor: bool,
}

impl Console {
    /// No styling at all.
    pub fn plain() -> Self {
        Console::default()
    }

    /// Probes stderr and the `TERM` / `COLORTERM` environment variables.
    pub fn detect_stderr() -> Self {
        let term = env::var("TERM").ok();
        let colorterm = env::var("COLORTERM").ok();
        Console::from_env_values(io::stderr().is_terminal(), term.as_deref(), colorterm.as_deref())
    }

    pub fn from_env_values(is_tty: bool, term: Option<&str>, colorterm: Option<&str>) -> Self {
        let mut res = Console { is_tty, ..Console::default() };
        let Some(term) = term else {
            return res;
        };
        res.supports_ansi = TERMS.contains(&term)
            || TERM_PREFIXES.iter().any(|prefix| term.starts_with(prefix));
        match colorterm {
            Some("truecolor") => res.supports_truecolor = true,
            Some(it) if it.ends_with("-256") => res.supports_8bit_color = true,
            _ => (),
        }
        res
    }

    pub fn can_style(&self) -> bool {
        self.is_tty && self.supports_ansi
    }

    /// `[ERROR]: <msg>`, with a red banner when the terminal allows it.
    pub fn error_banner(&self, msg: &str) -> String {
        let banner = "[ERROR]:";
        if self.can_style() {
            format!("{} {msg}", banner.red())
        } else {
            format!("{banner} {msg}")
        }
    }
}
