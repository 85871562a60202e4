use std::fmt::Write;

use crate::{Flag, FlagParser};

macro_rules! w {
    ($($tt:tt)*) => {
        { let _ = write!($($tt)*); }
    };
}

/// Column layout of the generated help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpLayout {
    /// Usage lines are wrapped once they grow past this width.
    pub line_width: usize,
    /// Column at which the help text of each entry starts.
    pub help_start: usize,
}

impl Default for HelpLayout {
    fn default() -> Self {
        HelpLayout { line_width: 50, help_start: 20 }
    }
}

pub(crate) fn help_message(parser: &FlagParser<'_>) -> String {
    let layout = parser.layout();
    let mut buf = String::new();

    w!(buf, "Usage:\n\n");
    emit_usage(&mut buf, parser, layout);

    let commands = parser.flags().filter(|it| it.as_sub_parser().is_some()).collect::<Vec<_>>();
    emit_section(&mut buf, "Commands", &commands, layout);

    let positionals = parser
        .flags()
        .filter(|it| it.is_positional() && it.as_sub_parser().is_none())
        .collect::<Vec<_>>();
    emit_section(&mut buf, "Positional arguments", &positionals, layout);

    let optionals = parser.flags().filter(|it| it.is_optional()).collect::<Vec<_>>();
    emit_section(&mut buf, "Optional arguments", &optionals, layout);

    buf
}

fn emit_usage(buf: &mut String, parser: &FlagParser<'_>, layout: HelpLayout) {
    let program = parser.program_name();
    let indent = program.chars().count();
    let width = layout.line_width.saturating_sub(indent);

    w!(buf, "{program}");
    let mut remain = width as isize;
    let mut has_commands = false;
    for flag in parser.flags() {
        if flag.as_sub_parser().is_some() {
            has_commands = true;
            continue;
        }
        if remain < 0 {
            w!(buf, "\n{blank:indent$}", blank = "");
            remain = width as isize;
        }
        let usage = flag.display_usage();
        remain -= 1 + usage.chars().count() as isize;
        w!(buf, " {usage}");
    }
    if has_commands {
        w!(buf, " <command> <args>");
    }
    w!(buf, "\n");
}

fn emit_section(buf: &mut String, title: &str, flags: &[&Flag<'_>], layout: HelpLayout) {
    if flags.is_empty() {
        return;
    }
    w!(buf, "\n{title}:\n\n");
    for flag in flags {
        w!(buf, "{}\n", flag.display_help(layout.help_start));
    }
}
