use flagparser::FlagParser;

#[derive(Debug, Default)]
pub struct Calc {
    pub verbose: bool,
    pub command: Option<String>,
    pub add: Add,
    pub pow: Pow,
}

#[derive(Debug, Default)]
pub struct Add {
    pub a: i32,
    pub b: i32,
}

#[derive(Debug, Default)]
pub struct Pow {
    pub base: i32,
    pub exponent: i32,
}

impl Calc {
    pub fn from_vec(args: Vec<String>) -> flagparser::Result<Self> {
        let mut res = Calc::default();
        res.command = {
            let mut p = FlagParser::new("sub_parser");

            let add = p.add_command("add", "add");
            add.add_flag(&mut res.add.a).set_name("a").set_help("number1 for add");
            add.add_flag(&mut res.add.b).set_name("b").set_help("number2 for add");

            let pow = p.add_command("pow", "pow");
            pow.add_flag(&mut res.pow.base).set_name("base").set_help("base for pow");
            pow.add_flag(&mut res.pow.exponent).set_name("exponent").set_help("exponent for pow");

            p.add_flag(&mut res.verbose).set_long_name("--verbose").set_help("verbose!");
            p.parse(args)?;
            p.selected().map(str::to_string)
        };
        Ok(res)
    }
}

#[derive(Debug, Default)]
pub struct Git {
    pub command: Vec<String>,
    pub remote: String,
    pub force: bool,
}

impl Git {
    /// Two levels deep: `git remote add <name>`.
    pub fn from_vec(args: Vec<String>) -> flagparser::Result<Self> {
        let mut res = Git::default();
        let mut status_short = false;
        res.command = {
            let mut p = FlagParser::new("git");

            let remote = p.add_command("remote", "manage remotes");
            remote
                .add_command("add", "add a remote")
                .add_flag(&mut res.remote)
                .set_name("name")
                .set_help("remote name");
            remote.add_flag(&mut res.force).set_short_name("-f").set_long_name("--force");

            p.add_command("status", "show status").add_flag(&mut status_short).set_short_name("-s");
            p.parse(args)?;

            let mut command = Vec::new();
            let mut scope = Some(&p);
            while let Some(parser) = scope {
                scope = parser.selected().and_then(|name| {
                    command.push(name.to_string());
                    parser.sub_parser(name)
                });
            }
            command
        };
        Ok(res)
    }
}
