//! parse document with structure like
//! ```text
//! title1
//!  key1: value1
//!  key2: value with spaces
//! title2
//!  key3: value3
//! ```
//! into HashMap<String, HashMap<String, Option<String>>>. Every value runs to the end of its line, so
//! expressions like `x * x / 2` survive untouched. User may pass a template: keys listed in the template but
//! absent from the document appear in the result as None.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, line_ending, multispace0, not_line_ending, space0},
    combinator::{eof, map, recognize},
    multi::{many0, many1},
    sequence::{delimited, pair, terminated},
};
use std::collections::HashMap;

pub type SectionMap = HashMap<String, Option<String>>;
pub type DocumentMap = HashMap<String, SectionMap>;

/// identifier: letter or underscore followed by letters, digits, underscores
fn parse_identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    parser.parse(input)
}

/// Parses a title: an identifier alone on its line
fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_identifier(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = alt((line_ending, eof)).parse(input)?;
    Ok((input, title))
}

/// Parses `key: value` where value is the rest of the line
fn parse_key_value_pair(input: &str) -> IResult<&str, (String, String)> {
    let (input, _) = space0(input)?;
    let (input, key) = parse_identifier(input)?;
    let (input, _) = delimited(space0, tag(":"), space0).parse(input)?;
    let (input, value) = not_line_ending(input)?;
    let (input, _) = alt((line_ending, eof)).parse(input)?;
    Ok((input, (key, value.trim().to_string())))
}

/// Parses a section with a title and zero or more key-value pairs
fn parse_section(input: &str) -> IResult<&str, (String, SectionMap)> {
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let mut parser = many0(terminated(parse_key_value_pair, multispace0));
    let (input, pairs) = parser.parse(input)?;

    let mut section_map = HashMap::new();
    for (key, value) in pairs {
        let value = if value.is_empty() { None } else { Some(value) };
        section_map.insert(key, value);
    }
    Ok((input, (title, section_map)))
}

/// Filters out comment lines (starting with //, #, or %) and blank lines
fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the entire (comment-free) document into a HashMap
fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let mut parser = many1(delimited(multispace0, parse_section, multispace0));
    let (input, sections) = parser.parse(input)?;

    let mut result = HashMap::new();
    for (title, section_map) in sections {
        result
            .entry(title)
            .or_insert_with(HashMap::new)
            .extend(section_map);
    }
    Ok((input, result))
}

/// Parses a document, optionally merging it with a template so that every expected
/// title and key is present in the result
pub fn parse_document_as(input: &str, template: Option<&DocumentMap>) -> Result<DocumentMap, String> {
    let filtered = filter_comments(input);
    let (remaining, mut parsed) = match parse_document(&filtered) {
        Ok(res) => res,
        Err(e) => return Err(format!("Parsing error: {:?}", e)),
    };
    if !remaining.trim().is_empty() {
        return Err(format!(
            "Failed to parse entire document. Remaining: '{}'",
            remaining
        ));
    }

    if let Some(template) = template {
        for (title, keys_map) in template {
            let section_map = parsed.entry(title.clone()).or_insert_with(HashMap::new);
            for key in keys_map.keys() {
                section_map.entry(key.clone()).or_insert(None);
            }
        }
    }
    Ok(parsed)
}

/// Builds a template from section titles and their keys
pub fn template_from(sections: &[(&str, &[&str])]) -> DocumentMap {
    sections
        .iter()
        .map(|(title, keys)| {
            let keys_map = keys.iter().map(|k| (k.to_string(), None)).collect();
            (title.to_string(), keys_map)
        })
        .collect()
}

/////////////////////////////TESTS////////////////////////////////////////////////////
