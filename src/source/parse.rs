use std::io::BufRead;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{space0, space1};
use nom::combinator::{all_consuming, map, value};
use nom::multi::{many0, many1};
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};

use super::{FetchOutput, RawEvr, RawRecord, RecordKind};
use crate::constants::NONE_PLACEHOLDER;
use crate::errors::*;

/// One meaningful line of helper output.
///
/// The helper prints one package per line, either with the EVR split up
///
/// ```text
/// <kind> <name> <epoch> <version> <release> <arch>
/// ```
///
/// (`(none)` standing in for an epoch or release that is not set), or in the short form
/// `<kind> <name> <evr> <arch>`. `<kind>` is one of `installed`, `available` or `both`. Global
/// options are reported as `[option <key>] <value>...`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HelperLine {
    Package(RawRecord),
    Option { key: String, values: Vec<String> },
}

impl FetchOutput {
    /// Add a parsed line; a repeated option replaces the earlier one
    pub fn push(&mut self, line: HelperLine) {
        match line {
            HelperLine::Package(record) => self.records.push(record),
            HelperLine::Option { key, values } => {
                self.options.insert(key, values);
            }
        }
    }
}

enum Line<'a> {
    Package(RecordKind, Vec<&'a str>),
    Option(&'a str, Vec<&'a str>),
}

fn field(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace).parse(input)
}

fn kind(input: &str) -> IResult<&str, RecordKind> {
    alt((
        value(RecordKind::Installed, tag("installed")),
        value(RecordKind::Available, tag("available")),
        value(RecordKind::Both, tag("both")),
    ))
    .parse(input)
}

fn package_line(input: &str) -> IResult<&str, (RecordKind, Vec<&str>)> {
    (kind, many1(preceded(space1, field))).parse(input)
}

fn option_line(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    (
        delimited(
            (tag("["), space0, tag("option"), space1),
            take_till1(|c: char| c == ']' || c.is_whitespace()),
            (space0, tag("]")),
        ),
        many0(preceded(space1, field)),
    )
        .parse(input)
}

fn line(input: &str) -> IResult<&str, Line<'_>> {
    all_consuming(alt((
        map(option_line, |(key, values)| Line::Option(key, values)),
        map(package_line, |(kind, fields)| Line::Package(kind, fields)),
    )))
    .parse(input)
}

fn placeholder(field: &str) -> Option<&str> {
    Some(field).filter(|f| *f != NONE_PLACEHOLDER)
}

/// Parse one line of helper output. Blank lines yield `None`.
pub fn parse_line(line_number: usize, raw: &str) -> Result<Option<HelperLine>, CatalogError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let malformed = || CatalogError::MalformedLine {
        line_number,
        line: raw.to_string(),
    };

    let (_, parsed) = line(trimmed).map_err(|_| malformed())?;
    let parsed = match parsed {
        Line::Option(key, values) => HelperLine::Option {
            key: key.to_string(),
            values: values.into_iter().map(String::from).collect(),
        },
        Line::Package(kind, fields) => {
            let (name, evr, arch) = match fields.as_slice() {
                [name, epoch, version, release, arch] => {
                    let epoch = match placeholder(epoch) {
                        Some(epoch) => Some(epoch.parse::<u64>().map_err(|_| malformed())?),
                        None => None,
                    };
                    let evr = RawEvr::Split {
                        epoch,
                        version: version.to_string(),
                        release: placeholder(release).map(String::from),
                    };
                    (name, evr, arch)
                }
                [name, evr, arch] => (name, RawEvr::Combined(evr.to_string()), arch),
                _ => return Err(malformed()),
            };
            HelperLine::Package(RawRecord {
                name: name.to_string(),
                evr,
                arch: arch.to_string(),
                kind,
            })
        }
    };

    log::trace!("helper line {}: {:?}", line_number, parsed);
    Ok(Some(parsed))
}

/// Parse the complete output of a helper run
///
/// Lines end in `\n` or `\r\n`. A line that is not valid UTF-8 is reported as malformed.
pub fn parse_output<R: BufRead>(mut reader: R) -> Result<FetchOutput, CatalogError> {
    let mut output = FetchOutput::default();
    let mut buf = Vec::new();
    let mut line_number = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        let line = std::str::from_utf8(bytes).map_err(|_| CatalogError::MalformedLine {
            line_number,
            line: String::from_utf8_lossy(bytes).into_owned(),
        })?;
        if let Some(parsed) = parse_line(line_number, line)? {
            output.push(parsed);
        }
    }
    Ok(output)
}
