// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Comment stripping, done as a preprocessing pass over the whole
//! input before tokenization. A `;` opens a comment running to the
//! end of the line, unless preceded by a backslash. Lines left empty
//! or all-whitespace are dropped wholesale, newline included; the
//! positions the tokenizer reports are therefore relative to the
//! stripped text.

/// Byte offset of the first unescaped `;` in `line`, if any.
fn comment_start(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ';' {
            return Some(i);
        }
    }
    None
}

pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };
        let body = match comment_start(body) {
            Some(i) => &body[..i],
            None => body,
        };
        if !body.trim().is_empty() {
            out.push_str(body);
            out.push_str(newline);
        }
    }
    out
}
