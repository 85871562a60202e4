use flagparser::FlagParser;

fn main() {
    env_logger::init();

    let mut name = String::new();
    let mut age = 0u8;
    let mut married = false;
    {
        let mut parser = FlagParser::new("simple_flag");
        parser.add_flag(&mut name).set_name("name").set_help("what's your name?");
        parser.add_flag(&mut age).set_name("age").set_help("how old are you?");
        parser.add_flag(&mut married).set_long_name("--married").set_help("are you married?");
        if let Err(err) = parser.parse_from_env() {
            err.exit()
        }
    }

    println!("name: {name}");
    println!("age: {age}");
    println!("married: {married}");
}
