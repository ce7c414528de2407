// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Record parser for the comma-separated property source.


use chumsky::prelude::*;
use log::debug;

use crate::error::FormatError;

pub struct CsvParser {
    parser: Box<dyn Parser<char, Vec<Vec<String>>, Error = Simple<char>>>,
}

impl CsvParser {
    pub fn new() -> CsvParser {
        let parser = gen_csv_parser();
        CsvParser {
            parser: Box::new(parser),
        }
    }

    /// Parses every record of `input`. Blank lines are dropped.
    pub fn parse(&self, input: &str) -> Result<Vec<Vec<String>>, FormatError> {
        match self.parser.parse(input) {
            Ok(records) => Ok(records),
            Err(errs) => {
                for err in &errs {
                    debug!("CSV parse error: {}", err);
                }
                let err = &errs[0];
                Err(FormatError::Syntax {
                    line: line_of(input, err.span().start),
                    message: err.to_string(),
                })
            }
        }
    }
}

// Spans are in chars, not bytes.
fn line_of(input: &str, offset: usize) -> usize {
    input.chars().take(offset).filter(|c| *c == '\n').count() + 1
}

fn gen_csv_parser() -> impl Parser<char, Vec<Vec<String>>, Error = Simple<char>> {
    // Fields carry whether they were quoted, so that a line holding only
    // `""` is a record and not a blank line.
    let quoted = just('"')
        .ignore_then(
            just("\r\n")
                .to('\n')
                .or(none_of("\""))
                .or(just("\"\"").to('"'))
                .repeated(),
        )
        .then_ignore(just('"'))
        .collect::<String>()
        .map(|value| (value, true))
        .labelled("quoted field");

    let unquoted = none_of(",\"\r\n")
        .repeated()
        .collect::<String>()
        .map(|value| (value, false))
        .labelled("field");

    let field = quoted.or(unquoted);

    let record = field.separated_by(just(',')).map(|fields: Vec<(String, bool)>| {
        let blank = matches!(&fields[..], [(value, false)] if value.is_empty());
        if blank {
            None
        } else {
            Some(fields.into_iter().map(|(value, _)| value).collect::<Vec<_>>())
        }
    });

    let newline = just('\r').or_not().then(just('\n')).ignored();

    let records = record
        .separated_by(newline)
        .then_ignore(end())
        .map(|records| records.into_iter().flatten().collect::<Vec<_>>());
    records
}
