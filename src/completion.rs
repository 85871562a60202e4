//! JSON description of a flag tree, for shell autocompletion tooling.

use std::{fs, io, path::Path};

use serde::Serialize;

use crate::{Flag, FlagParser};

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlagEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sequential: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_flags: Option<Vec<FlagEntry>>,
}

pub fn flag_tree(parser: &FlagParser<'_>) -> Vec<FlagEntry> {
    parser.flags().map(flag_entry).collect()
}

fn flag_entry(flag: &Flag<'_>) -> FlagEntry {
    let mut res = FlagEntry::default();
    if flag.is_positional() {
        res.name = Some(flag.name().to_string());
    } else {
        res.short_name = non_empty(flag.short_name());
        res.long_name = non_empty(flag.long_name());
        res.is_sequential = Some(flag.is_sequential());
        res.needs_value = Some(flag.needs_value());
    }
    res.help = non_empty(flag.help());
    res.sub_flags = flag.as_sub_parser().map(flag_tree);
    res
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

pub fn to_json(parser: &FlagParser<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&flag_tree(parser))
}

pub fn write_json(parser: &FlagParser<'_>, path: impl AsRef<Path>) -> io::Result<()> {
    let json = to_json(parser)?;
    fs::write(path, json)
}
