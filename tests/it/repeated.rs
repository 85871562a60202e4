use flagparser::FlagParser;

#[derive(Debug, Default)]
pub struct VectorFlag {
    pub numbers: Vec<i32>,
}

impl VectorFlag {
    pub fn from_vec(args: Vec<String>) -> flagparser::Result<Self> {
        let mut res = VectorFlag::default();
        {
            let mut p = FlagParser::new("vector_flag");
            p.add_flag(&mut res.numbers)
                .set_short_name("-n")
                .set_long_name("--number")
                .set_help("numbers for add, you can accumulate!")
                .set_required()
                .set_sequential();
            p.parse(args)?;
        }
        Ok(res)
    }
}

#[derive(Debug, Default)]
pub struct Files {
    pub output: String,
    pub include: Vec<String>,
}

impl Files {
    pub fn from_vec(args: Vec<String>) -> flagparser::Result<Self> {
        let mut res = Files::default();
        {
            let mut p = FlagParser::new("files");
            p.add_flag(&mut res.output).set_name("output");
            p.add_flag(&mut res.include).set_short_name("-I").set_sequential();
            p.parse(args)?;
        }
        Ok(res)
    }
}
