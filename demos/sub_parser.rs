use flagparser::{completion, FlagParser};

fn main() {
    env_logger::init();

    let (mut a, mut b) = (0i64, 0i64);
    let (mut base, mut exponent) = (0i64, 0u32);
    let mut verbose = false;
    let mut print_completion = false;

    let command = {
        let mut parser = FlagParser::new("sub_parser");

        let add = parser.add_command("add", "add");
        add.add_flag(&mut a).set_name("a").set_help("number1 for add");
        add.add_flag(&mut b).set_name("b").set_help("number2 for add");

        let pow = parser.add_command("pow", "pow");
        pow.add_flag(&mut base).set_name("base").set_help("base for pow");
        pow.add_flag(&mut exponent).set_name("exponent").set_help("exponent for pow");

        parser.add_flag(&mut verbose).set_long_name("--verbose").set_help("verbose!");
        parser
            .add_flag(&mut print_completion)
            .set_long_name("--completion")
            .set_help("print the flag tree as JSON");

        if let Err(err) = parser.parse_from_env() {
            err.exit()
        }
        if parser.flag("--completion").is_some_and(|it| it.is_set()) {
            match completion::to_json(&parser) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("failed to serialize flags: {err}"),
            }
            return;
        }
        parser.selected().map(str::to_string)
    };

    if verbose {
        println!("command: {command:?}");
    }
    match command.as_deref() {
        Some("add") => println!("{}", a + b),
        Some("pow") => match base.checked_pow(exponent) {
            Some(it) => println!("{it}"),
            None => {
                eprintln!("{base} to the power of {exponent} overflows");
                std::process::exit(1)
            }
        },
        _ => println!("no command given, try --help"),
    }
}
