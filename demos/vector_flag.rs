use flagparser::FlagParser;

fn main() {
    env_logger::init();

    let mut numbers: Vec<i64> = Vec::new();
    {
        let mut parser = FlagParser::new("vector_flag");
        parser
            .add_flag(&mut numbers)
            .set_short_name("-n")
            .set_long_name("--number")
            .set_help("numbers for add, you can accumulate!")
            .set_required()
            .set_sequential();
        if let Err(err) = parser.parse_from_env() {
            err.exit()
        }
    }

    let sum: i64 = numbers.iter().sum();
    println!("{} = {sum}", numbers.iter().map(i64::to_string).collect::<Vec<_>>().join(" + "));
}
