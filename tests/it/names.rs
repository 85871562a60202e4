use flagparser::FlagParser;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn long_alias_takes_separate_or_attached_value(body in "[a-z_][a-z0-9_]{0,10}", n in any::<i32>(), attached in any::<bool>()) {
        let alias = format!("--{body}");
        let mut value = 0i32;
        {
            let mut p = FlagParser::new("program");
            p.add_flag(&mut value).set_long_name(&alias);
            let args = if attached {
                vec!["program".to_string(), format!("{alias}={n}")]
            } else {
                vec!["program".to_string(), alias.clone(), n.to_string()]
            };
            prop_assert!(p.parse(args).is_ok());
        }
        prop_assert_eq!(value, n);
    }

    #[test]
    fn alias_with_trailing_text_is_unknown(body in "[a-z]{1,8}", tail in "[a-z0-9]{1,4}") {
        let alias = format!("--{body}");
        let mut value = 0i32;
        let mut p = FlagParser::new("program");
        p.add_flag(&mut value).set_long_name(&alias);
        let arg = format!("{alias}{tail}");
        let err = p.parse(["program", arg.as_str(), "1"]).unwrap_err();
        let unknown = matches!(err, flagparser::Error::UnknownArgument { .. });
        prop_assert!(unknown);
    }
}
