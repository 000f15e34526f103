// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Positions in the comment-stripped source text. The stripper drops
//! blank and comment-only lines wholesale, so line numbers refer to
//! the stripped text, not the original file.

use std::cmp::Eq;

/// Both line and col are zero based; Emacs uses 1-based line
/// numbering, so line is incremented by 1 in Display.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Pos {
    pub line: u32,
    pub col: u32,
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        // This, when prefixed with a Debug style path string, is
        // following the Emacs convention for location information.
        f.write_fmt(format_args!("@{}.{}", self.line + 1, self.col))
    }
}

/// Pair every character of `s` with its position. The tokenizer pulls
/// from this; all error positions originate here.
pub fn chars_with_pos(s: &str) -> impl Iterator<Item = (char, Pos)> + '_ {
    let mut pos = Pos { line: 0, col: 0 };
    s.chars().map(move |c| {
        let p = pos;
        pos = if c == '\n' {
            Pos { line: p.line + 1, col: 0 }
        } else {
            Pos { line: p.line, col: p.col + 1 }
        };
        (c, p)
    })
}
