use flagparser::{FlagOptions, FlagParser, FlagValue};

#[derive(Debug, Default)]
pub struct Animal {
    pub animal: String,
}

impl Animal {
    pub fn from_vec(args: Vec<String>) -> flagparser::Result<Self> {
        let mut res = Animal::default();
        {
            let animal = &mut res.animal;
            let mut p = FlagParser::new("program");
            p.add_flag_with_parser::<String>(move |arg| {
                if arg == "cat" || arg == "dog" {
                    *animal = arg.to_string();
                    return Ok(());
                }
                Err(format!("{arg} is not either cat or dog"))
            })
            .set_short_name("-a");
            p.parse(args)?;
        }
        Ok(res)
    }
}

#[derive(Debug, Default)]
pub struct OddNumber {
    pub number: u16,
}

impl FlagValue for OddNumber {
    fn parse_into(&mut self, input: &str) -> Result<(), String> {
        let mut n = 0u16;
        n.parse_into(input)?;
        if n % 2 == 0 {
            return Err(format!("{n} is not a odd number"));
        }
        self.number = n;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CustomFlag {
    pub number: OddNumber,
    pub level: u8,
}

impl CustomFlag {
    pub fn from_vec(args: Vec<String>) -> flagparser::Result<Self> {
        let mut res = CustomFlag::default();
        {
            let mut p = FlagParser::new("custom_flag");
            p.add_flag(&mut res.number)
                .set_name("number")
                .set_required()
                .set_help("Please input only odd numbers!");
            p.add_flag_with_options(
                &mut res.level,
                FlagOptions {
                    short_name: Some("-l".to_string()),
                    long_name: Some("--level".to_string()),
                    help: Some("verbosity, up to 3".to_string()),
                    default_value: Some(1),
                    custom_parser: Some(Box::new(|input: &str, level: &mut u8| -> Result<(), String> {
                        let mut n = 0u8;
                        n.parse_into(input)?;
                        if n > 3 {
                            return Err(format!("{n} is more than 3"));
                        }
                        *level = n;
                        Ok(())
                    })),
                    ..FlagOptions::default()
                },
            );
            p.parse(args)?;
        }
        Ok(res)
    }
}

/// A converter that fails without saying why.
#[derive(Debug, Default)]
pub struct Silent;

impl Silent {
    pub fn from_vec(args: Vec<String>) -> flagparser::Result<Self> {
        let mut p = FlagParser::new("program");
        p.add_flag_with_parser::<String>(|_| Err(String::new())).set_short_name("-a");
        p.parse(args)?;
        Ok(Silent)
    }
}
