//! Flag declarations.
//!
//! A [`Flag`] is either positional (it has a `name`) or optional (it has a
//! short and/or long alias). Its value is written straight into storage
//! borrowed from the caller; sub-commands are flags that own a nested
//! [`FlagParser`] instead of a value.

use std::fmt;

use log::warn;

use crate::{value::FlagValue, FlagParser};

/// Conversion callback that receives the raw token and writes wherever it likes.
pub type ParseCallback<'a> = Box<dyn FnMut(&str) -> Result<(), String> + 'a>;

/// Conversion callback that receives the raw token and the flag's storage.
pub type SlotCallback<'a, T> = Box<dyn FnMut(&str, &mut T) -> Result<(), String> + 'a>;

pub(crate) trait Convert {
    fn needs_value(&self) -> bool;
    fn convert(&mut self, input: &str) -> Result<(), String>;
}

struct Target<'a, T> {
    value: &'a mut T,
}

impl<T: FlagValue> Convert for Target<'_, T> {
    fn needs_value(&self) -> bool {
        T::needs_value()
    }
    fn convert(&mut self, input: &str) -> Result<(), String> {
        self.value.parse_into(input)
    }
}

struct Callback<'a> {
    needs_value: bool,
    f: ParseCallback<'a>,
}

impl Convert for Callback<'_> {
    fn needs_value(&self) -> bool {
        self.needs_value
    }
    fn convert(&mut self, input: &str) -> Result<(), String> {
        (self.f)(input)
    }
}

struct SlotConverter<'a, T> {
    value: &'a mut T,
    f: SlotCallback<'a, T>,
}

impl<T: FlagValue> Convert for SlotConverter<'_, T> {
    fn needs_value(&self) -> bool {
        T::needs_value()
    }
    fn convert(&mut self, input: &str) -> Result<(), String> {
        (self.f)(input, &mut *self.value)
    }
}

pub(crate) enum FlagKind<'a> {
    Value(Box<dyn Convert + 'a>),
    SubParser(FlagParser<'a>),
}

/// Declaration options, as an alternative to the chained setters.
///
/// ```
/// use flagparser::{FlagOptions, FlagParser};
///
/// let mut jobs = 0u32;
/// let mut parser = FlagParser::new("build");
/// parser.add_flag_with_options(
///     &mut jobs,
///     FlagOptions {
///         short_name: Some("-j".into()),
///         long_name: Some("--jobs".into()),
///         help: Some("number of parallel jobs".into()),
///         default_value: Some(4),
///         ..FlagOptions::default()
///     },
/// );
/// parser.parse(["build", "--jobs=8"]).unwrap();
/// drop(parser);
/// assert_eq!(jobs, 8);
/// ```
pub struct FlagOptions<'a, T> {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub name: Option<String>,
    pub help: Option<String>,
    pub required: bool,
    pub sequential: bool,
    pub default_value: Option<T>,
    pub custom_parser: Option<SlotCallback<'a, T>>,
}

impl<T> Default for FlagOptions<'_, T> {
    fn default() -> Self {
        FlagOptions {
            short_name: None,
            long_name: None,
            name: None,
            help: None,
            required: false,
            sequential: false,
            default_value: None,
            custom_parser: None,
        }
    }
}

pub struct Flag<'a> {
    short_name: String,
    long_name: String,
    name: String,
    help: String,
    is_required: bool,
    is_sequential: bool,
    is_set: bool,
    kind: FlagKind<'a>,
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("short_name", &self.short_name)
            .field("long_name", &self.long_name)
            .field("name", &self.name)
            .field("is_required", &self.is_required)
            .field("is_sequential", &self.is_sequential)
            .field("is_set", &self.is_set)
            .field("sub_parser", &self.as_sub_parser())
            .finish()
    }
}

impl<'a> Flag<'a> {
    fn with_kind(kind: FlagKind<'a>) -> Self {
        Flag {
            short_name: String::new(),
            long_name: String::new(),
            name: String::new(),
            help: String::new(),
            is_required: false,
            is_sequential: false,
            is_set: false,
            kind,
        }
    }

    pub(crate) fn from_value<T: FlagValue>(value: &'a mut T) -> Self {
        Flag::with_kind(FlagKind::Value(Box::new(Target { value })))
    }

    pub(crate) fn from_default<T: FlagValue>(value: &'a mut T, default_value: T) -> Self {
        *value = default_value;
        let mut flag = Flag::from_value(value);
        flag.is_set = true;
        flag
    }

    pub(crate) fn from_callback<T: FlagValue>(f: ParseCallback<'a>) -> Self {
        Flag::with_kind(FlagKind::Value(Box::new(Callback { needs_value: T::needs_value(), f })))
    }

    pub(crate) fn from_options<T: FlagValue + 'a>(
        value: &'a mut T,
        options: FlagOptions<'a, T>,
    ) -> Self {
        let FlagOptions {
            short_name,
            long_name,
            name,
            help,
            required,
            sequential,
            default_value,
            custom_parser,
        } = options;

        let is_set = match default_value {
            Some(default_value) => {
                *value = default_value;
                true
            }
            None => false,
        };
        let convert: Box<dyn Convert + 'a> = match custom_parser {
            Some(f) => Box::new(SlotConverter { value, f }),
            None => Box::new(Target { value }),
        };

        let mut flag = Flag::with_kind(FlagKind::Value(convert));
        flag.is_set = is_set;
        if let Some(short_name) = &short_name {
            flag.set_short_name(short_name);
        }
        if let Some(long_name) = &long_name {
            flag.set_long_name(long_name);
        }
        if let Some(name) = &name {
            flag.set_name(name);
        }
        if let Some(help) = &help {
            flag.set_help(help);
        }
        flag.is_required = required;
        flag.is_sequential = sequential;
        flag
    }

    pub(crate) fn sub_parser() -> Self {
        Flag::with_kind(FlagKind::SubParser(FlagParser::new("")))
    }

    /// Sets the short alias, e.g. `-v`. Anything that is not a single dash
    /// followed by ASCII alphanumerics or underscores is ignored.
    pub fn set_short_name(&mut self, short_name: &str) -> &mut Self {
        match short_name.strip_prefix('-') {
            Some(body) if is_name_body(body) => self.short_name = short_name.to_string(),
            _ => warn!("ignoring invalid short name: {short_name:?}"),
        }
        self
    }

    /// Sets the long alias, e.g. `--verbose`. Same rules as the short alias,
    /// with a double dash.
    pub fn set_long_name(&mut self, long_name: &str) -> &mut Self {
        match long_name.strip_prefix("--") {
            Some(body) if is_name_body(body) => self.long_name = long_name.to_string(),
            _ => warn!("ignoring invalid long name: {long_name:?}"),
        }
        self
    }

    /// Makes the flag positional (or names a sub-command).
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        if is_name_body(name) {
            self.name = name.to_string();
        } else {
            warn!("ignoring invalid name: {name:?}");
        }
        self
    }

    pub fn set_help(&mut self, help: &str) -> &mut Self {
        self.help = help.to_string();
        self
    }

    pub fn set_required(&mut self) -> &mut Self {
        self.is_required = true;
        self
    }

    pub fn set_sequential(&mut self) -> &mut Self {
        self.is_sequential = true;
        self
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn is_sequential(&self) -> bool {
        self.is_sequential
    }

    pub fn is_positional(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn is_optional(&self) -> bool {
        !self.short_name.is_empty() || !self.long_name.is_empty()
    }

    /// Whether a value (or a default) was assigned, or the sub-command was chosen.
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// `false` only for switches, which are set by their mere presence.
    pub fn needs_value(&self) -> bool {
        match &self.kind {
            FlagKind::Value(convert) => convert.needs_value(),
            FlagKind::SubParser(_) => true,
        }
    }

    pub fn as_sub_parser(&self) -> Option<&FlagParser<'a>> {
        match &self.kind {
            FlagKind::SubParser(parser) => Some(parser),
            FlagKind::Value(_) => None,
        }
    }

    pub fn as_sub_parser_mut(&mut self) -> Option<&mut FlagParser<'a>> {
        match &mut self.kind {
            FlagKind::SubParser(parser) => Some(parser),
            FlagKind::Value(_) => None,
        }
    }

    pub(crate) fn mark_set(&mut self) {
        self.is_set = true;
    }

    /// Converts `input` and stores it, marking the flag set on success.
    pub(crate) fn parse(&mut self, input: &str) -> Result<(), String> {
        match &mut self.kind {
            FlagKind::Value(convert) => {
                convert.convert(input)?;
                self.is_set = true;
                Ok(())
            }
            // Sub-commands are dispatched by the parser, never converted.
            FlagKind::SubParser(_) => Err(String::new()),
        }
    }

    /// The name used in messages: positional name, else long alias, else short alias.
    pub(crate) fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            return &self.name;
        }
        if !self.long_name.is_empty() {
            return &self.long_name;
        }
        &self.short_name
    }

    pub(crate) fn display_usage(&self) -> String {
        if self.is_positional() {
            return self.name.clone();
        }
        let alias = if self.short_name.is_empty() { &self.long_name } else { &self.short_name };
        format!("[{alias}]")
    }

    pub(crate) fn display_help(&self, help_start: usize) -> String {
        let mut buf = if self.is_positional() {
            self.name.clone()
        } else {
            match (self.short_name.is_empty(), self.long_name.is_empty()) {
                (false, false) => format!("{}, {}", self.short_name, self.long_name),
                (false, true) => self.short_name.clone(),
                _ => self.long_name.clone(),
            }
        };
        if self.help.is_empty() {
            return buf;
        }
        let width = buf.chars().count();
        if width < help_start {
            buf.push_str(&" ".repeat(help_start - width));
        } else {
            buf.push('\n');
            buf.push_str(&" ".repeat(help_start));
        }
        buf.push_str(&self.help);
        buf
    }

    /// Matches `arg` against the long alias, then the short one. An alias
    /// matches when it is followed by the end of `arg` or by `=`; the rest of
    /// `arg` is returned.
    pub(crate) fn consume_name_prefix<'t>(&self, arg: &'t str) -> Option<&'t str> {
        [&self.long_name, &self.short_name]
            .into_iter()
            .filter(|alias| !alias.is_empty())
            .find_map(|alias| {
                let rest = arg.strip_prefix(alias.as_str())?;
                (rest.is_empty() || rest.starts_with('=')).then_some(rest)
            })
    }
}

fn is_name_body(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
