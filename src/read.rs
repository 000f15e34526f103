// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Loading whole files. The list parser accepts exactly one
//! expression, while a grammar file may hold several at top level, so
//! the file contents are wrapped in one synthetic pair of round
//! brackets before parsing; the returned element is that implicit
//! outer list and its children are the file's top-level expressions.

use crate::parse::{parse, ParseErrorWithPos};
use crate::settings::Settings;
use crate::value::Element;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("reading {1:?}: {0}")]
    Io(std::io::Error, PathBuf),
    #[error("{0} in {1:?}")]
    Parse(ParseErrorWithPos, PathBuf),
}

/// Wrap `text` in an implicit outer list and parse it. Positions in
/// errors are relative to the wrapped, comment-stripped text; the
/// synthetic opening bracket occupies line 1.
pub fn read_string(
    text: &str,
    settings: &Settings,
) -> Result<Element, ParseErrorWithPos> {
    parse(&format!("(\n{}\n)", text), settings)
}

pub fn read_file(
    path: &Path,
    settings: &Settings,
) -> Result<Element, ReadError> {
    let text = fs::read_to_string(path)
        .map_err(|e| ReadError::Io(e, path.to_path_buf()))?;
    read_string(&text, settings)
        .map_err(|e| ReadError::Parse(e, path.to_path_buf()))
}
