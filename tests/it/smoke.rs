use flagparser::FlagParser;

#[derive(Debug, Default)]
pub struct Person {
    pub name: String,
    pub age: u8,
    pub married: bool,
}

impl Person {
    pub fn from_vec(args: Vec<String>) -> flagparser::Result<Self> {
        let mut res = Person::default();
        {
            let mut p = FlagParser::new("simple_flag");
            p.add_flag(&mut res.name).set_name("name").set_help("what's your name?");
            p.add_flag(&mut res.age).set_name("age").set_help("how old are you?");
            p.add_flag(&mut res.married).set_long_name("--married").set_help("are you married?");
            p.parse(args)?;
        }
        Ok(res)
    }
}

#[derive(Debug, Default)]
pub struct Positionals {
    pub flag: u16,
    pub flag2: u16,
}

impl Positionals {
    pub fn from_vec(args: Vec<String>) -> flagparser::Result<Self> {
        let mut res = Positionals::default();
        {
            let mut p = FlagParser::new("program");
            p.add_flag(&mut res.flag).set_name("flag");
            p.add_flag(&mut res.flag2).set_name("flag2");
            p.parse(args)?;
        }
        Ok(res)
    }
}

#[derive(Debug, Default)]
pub struct Defaulted {
    pub flag: u16,
    pub limit: u16,
}

impl Defaulted {
    pub fn from_vec(args: Vec<String>) -> flagparser::Result<Self> {
        let mut res = Defaulted::default();
        {
            let mut p = FlagParser::new("program");
            p.add_flag_with_default(&mut res.flag, 12).set_name("flag");
            p.add_flag_with_default(&mut res.limit, 100).set_long_name("--limit").set_required();
            p.parse(args)?;
        }
        Ok(res)
    }
}

#[derive(Debug, Default)]
pub struct Options {
    pub a: u16,
    pub b: i16,
    pub value: u16,
    pub title: String,
}

impl Options {
    pub fn from_vec(args: Vec<String>) -> flagparser::Result<Self> {
        let mut res = Options::default();
        {
            let mut p = FlagParser::new("program");
            p.add_flag(&mut res.a).set_short_name("-a");
            p.add_flag(&mut res.b).set_short_name("-b").set_required();
            p.add_flag(&mut res.value).set_long_name("--value");
            p.add_flag(&mut res.title).set_short_name("-t").set_long_name("--title");
            p.parse(args)?;
        }
        Ok(res)
    }
}
