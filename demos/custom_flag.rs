use flagparser::{FlagParser, FlagValue};

#[derive(Default)]
struct OddNumber(u32);

impl FlagValue for OddNumber {
    fn parse_into(&mut self, input: &str) -> Result<(), String> {
        let mut n = 0u32;
        n.parse_into(input)?;
        if n % 2 == 0 {
            return Err(format!("{n} is not a odd number"));
        }
        self.0 = n;
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let mut number = OddNumber::default();
    let mut animal = String::new();
    {
        let mut parser = FlagParser::new("custom_flag");
        parser
            .add_flag(&mut number)
            .set_name("number")
            .set_required()
            .set_help("Please input only odd numbers!");
        let animal = &mut animal;
        parser
            .add_flag_with_parser::<String>(move |arg| match arg {
                "cat" | "dog" => {
                    *animal = arg.to_string();
                    Ok(())
                }
                _ => Err(format!("{arg} is not either cat or dog")),
            })
            .set_short_name("-a")
            .set_long_name("--animal")
            .set_help("cat or dog");
        if let Err(err) = parser.parse_from_env() {
            err.exit()
        }
    }

    println!("odd number: {}", number.0);
    if !animal.is_empty() {
        println!("animal: {animal}");
    }
}
