use log::{debug, trace};

use crate::{
    flag::{Flag, FlagOptions},
    help::{self, HelpLayout},
    rt::Args,
    suggest,
    value::FlagValue,
    Error, Result,
};

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(Error::InvalidDeclaration(format!($($tt)*)))
    };
}

/// An ordered set of flag declarations.
///
/// Declaration order is significant: positional flags are filled in the order
/// they were added, and help lists flags in the same order.
///
/// ```
/// use flagparser::FlagParser;
///
/// let mut name = String::new();
/// let mut age = 0u8;
/// let mut married = false;
///
/// let mut parser = FlagParser::new("simple_flag");
/// parser.add_flag(&mut name).set_name("name").set_help("what's your name?");
/// parser.add_flag(&mut age).set_name("age").set_help("how old are you?");
/// parser.add_flag(&mut married).set_long_name("--married").set_help("are you married?");
/// parser.parse(["simple_flag", "chris", "42", "--married"]).unwrap();
/// drop(parser);
///
/// assert_eq!((name.as_str(), age, married), ("chris", 42, true));
/// ```
#[derive(Debug)]
pub struct FlagParser<'a> {
    program_name: String,
    flags: Vec<Flag<'a>>,
    layout: HelpLayout,
}

impl<'a> FlagParser<'a> {
    pub fn new(program_name: &str) -> Self {
        FlagParser {
            program_name: program_name.to_string(),
            flags: Vec::new(),
            layout: HelpLayout::default(),
        }
    }

    /// Sets the program name shown in the usage line.
    pub fn set_program_name(&mut self, program_name: &str) {
        self.program_name = program_name.to_string();
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn set_layout(&mut self, layout: HelpLayout) {
        self.layout = layout;
    }

    pub fn layout(&self) -> HelpLayout {
        self.layout
    }

    /// Declares a flag that writes into `value`.
    pub fn add_flag<T: FlagValue>(&mut self, value: &'a mut T) -> &mut Flag<'a> {
        self.push(Flag::from_value(value))
    }

    /// Declares a flag that writes into `value`, storing `default_value` right away.
    /// The flag counts as set from then on.
    pub fn add_flag_with_default<T: FlagValue>(
        &mut self,
        value: &'a mut T,
        default_value: T,
    ) -> &mut Flag<'a> {
        self.push(Flag::from_default(value, default_value))
    }

    /// Declares a flag whose conversion is entirely up to `f`. `T` only decides
    /// whether the flag takes a value. An error returned by `f` is reported
    /// verbatim as the reason.
    pub fn add_flag_with_parser<T: FlagValue>(
        &mut self,
        f: impl FnMut(&str) -> Result<(), String> + 'a,
    ) -> &mut Flag<'a> {
        self.push(Flag::from_callback::<T>(Box::new(f)))
    }

    pub fn add_flag_with_options<T: FlagValue + 'a>(
        &mut self,
        value: &'a mut T,
        options: FlagOptions<'a, T>,
    ) -> &mut Flag<'a> {
        self.push(Flag::from_options(value, options))
    }

    /// Declares a sub-command. Give it a name with [`Flag::set_name`] and
    /// declare its own flags through [`Flag::as_sub_parser_mut`].
    pub fn add_sub_parser(&mut self) -> &mut Flag<'a> {
        self.push(Flag::sub_parser())
    }

    /// Declares a named sub-command and returns its parser.
    pub fn add_command(&mut self, name: &str, help: &str) -> &mut FlagParser<'a> {
        let flag = self.add_sub_parser();
        flag.set_name(name).set_help(help);
        match flag.as_sub_parser_mut() {
            Some(parser) => parser,
            None => unreachable!("add_sub_parser always creates a sub-parser"),
        }
    }

    fn push(&mut self, flag: Flag<'a>) -> &mut Flag<'a> {
        let idx = self.flags.len();
        self.flags.push(flag);
        &mut self.flags[idx]
    }

    pub fn flags(&self) -> impl Iterator<Item = &Flag<'a>> {
        self.flags.iter()
    }

    /// Looks a declaration up by positional name, short alias or long alias.
    pub fn flag(&self, key: &str) -> Option<&Flag<'a>> {
        if key.is_empty() {
            return None;
        }
        self.flags.iter().find(|it| {
            [it.name(), it.short_name(), it.long_name()].into_iter().any(|name| name == key)
        })
    }

    pub fn sub_parser(&self, name: &str) -> Option<&FlagParser<'a>> {
        self.flag(name).and_then(Flag::as_sub_parser)
    }

    /// Name of the sub-command chosen by the last parse, if any.
    pub fn selected(&self) -> Option<&str> {
        self.flags.iter().find(|it| it.as_sub_parser().is_some() && it.is_set()).map(Flag::name)
    }

    pub fn help_message(&self) -> String {
        help::help_message(self)
    }

    /// Checks the declarations of this parser and of every nested sub-parser.
    pub fn validate(&self) -> Result<()> {
        let mut before_optional = true;
        let mut has_sub_parser = false;
        for flag in &self.flags {
            if !(flag.is_positional() || flag.is_optional()) {
                bail!("Flag should be positional or optional.");
            }
            if flag.is_positional() && flag.is_optional() {
                bail!(
                    "\"{}\" is positional and optional, please choose either one of them.",
                    flag.name()
                );
            }

            match flag.as_sub_parser() {
                Some(sub_parser) => {
                    if flag.is_optional() {
                        bail!("Subparser \"{}\" should be positional.", flag.display_name());
                    }
                    has_sub_parser = true;
                    sub_parser.validate()?;
                }
                None if flag.is_positional() => {
                    if !before_optional {
                        bail!(
                            "\"{}\" should be before any optional arguments.",
                            flag.display_name()
                        );
                    }
                }
                None => before_optional = false,
            }

            if !flag.needs_value() && flag.is_positional() {
                bail!(
                    "\"{}\" can't parse a value, how about considering using \
                     set_short_name() or set_long_name()?",
                    flag.name()
                );
            }
        }

        if has_sub_parser {
            if let Some(flag) =
                self.flags.iter().find(|it| it.is_positional() && it.as_sub_parser().is_none())
            {
                bail!(
                    "\"{}\" can't be positional if the parser has subparser, \
                     how about considering using set_short_name() or set_long_name()?",
                    flag.name()
                );
            }
        }

        Ok(())
    }

    /// Parses `args`; the first element is the program name and is skipped.
    pub fn parse<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = args.into_iter().map(Into::into).collect();
        self.run(Args::new(args))
    }

    pub fn parse_from_env(&mut self) -> Result<()> {
        let args = Args::from_env()?;
        self.run(args)
    }

    fn run(&mut self, mut args: Args) -> Result<()> {
        self.validate()?;
        debug!("{}: declarations are valid", self.program_name);
        self.dispatch(&mut args)
    }

    fn dispatch(&mut self, args: &mut Args) -> Result<()> {
        let positional_count = self.flags.iter().filter(|it| it.is_positional()).count();
        let has_sub_parser = self.flags.iter().any(|it| it.as_sub_parser().is_some());
        let mut positional_parsed = 0;

        while let Some(arg) = args.next() {
            trace!("{}: {arg:?}", self.program_name);
            if arg == "--help" || arg == "-h" {
                let help = self.help_message();
                eprintln!("{help}");
                return Err(Error::HelpRequested { arg, help });
            }

            if has_sub_parser {
                if let Some(idx) = self
                    .flags
                    .iter()
                    .position(|it| it.as_sub_parser().is_some() && it.name() == arg)
                {
                    return self.enter_sub_parser(idx, args);
                }
            }

            if !has_sub_parser && positional_parsed < positional_count {
                let idx = self.positional_index(positional_parsed);
                positional_parsed += 1;
                self.assign(idx, &arg)?;
                continue;
            }

            let Some((idx, rest)) = self.flags.iter().enumerate().find_map(|(idx, flag)| {
                if flag.is_positional() {
                    return None;
                }
                flag.consume_name_prefix(&arg).map(|rest| (idx, rest))
            }) else {
                return Err(self.unknown_argument(arg));
            };

            let value = if self.flags[idx].needs_value() {
                match rest.strip_prefix('=') {
                    Some(value) => value.to_string(),
                    None => args.next_value(self.flags[idx].display_name())?,
                }
            } else {
                rest.to_string()
            };
            self.assign(idx, &value)?;
        }

        if !has_sub_parser && positional_parsed < positional_count {
            if let Some(flag) = self.flags.iter().find(|it| it.is_positional() && !it.is_set()) {
                return Err(Error::MissingPositional { name: flag.name().to_string() });
            }
        }

        if let Some(flag) = self.flags.iter().find(|it| it.is_required() && !it.is_set()) {
            return Err(Error::MissingRequired { name: flag.display_name().to_string() });
        }

        Ok(())
    }

    fn positional_index(&self, nth: usize) -> usize {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, flag)| flag.is_positional())
            .nth(nth)
            .map(|(idx, _)| idx)
            .unwrap_or_else(|| unreachable!("only called while positionals remain"))
    }

    fn assign(&mut self, idx: usize, value: &str) -> Result<()> {
        let flag = &mut self.flags[idx];
        match flag.parse(value) {
            Ok(()) => {
                debug!("{}: set {:?}", self.program_name, flag.display_name());
                Ok(())
            }
            Err(reason) => {
                Err(Error::ValueParse { name: flag.display_name().to_string(), reason })
            }
        }
    }

    /// Hands the rest of the command line over to a sub-command. The outer
    /// loop does not resume afterwards.
    fn enter_sub_parser(&mut self, idx: usize, args: &mut Args) -> Result<()> {
        let program_name = format!("{} {}", self.program_name, self.flags[idx].name());
        let flag = &mut self.flags[idx];
        flag.mark_set();
        debug!("entering sub-command {program_name:?}");
        match flag.as_sub_parser_mut() {
            Some(sub_parser) => {
                sub_parser.set_program_name(&program_name);
                sub_parser.dispatch(args)
            }
            None => unreachable!("sub-command index points at a value flag"),
        }
    }

    fn unknown_argument(&self, arg: String) -> Error {
        let candidates = self
            .flags
            .iter()
            .flat_map(|it| [it.short_name(), it.long_name()])
            .filter(|it| !it.is_empty());
        let suggestion = suggest::most_similar(&arg, candidates).map(str::to_string);
        Error::UnknownArgument { arg, suggestion }
    }
}
