// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Translating the character stream to a token stream. Deliberately
//! dumb: a token is either a single bracket character or a maximal
//! run of characters that are neither brackets nor whitespace.
//! Whitespace only separates tokens and never becomes one. Quoted
//! strings are *not* recognized here; the parser reassembles them
//! from word tokens (see [parse](../parse/index.html)).

use crate::pos::Pos;
use crate::value::Parenkind;
use genawaiter::rc::Gen;
use kstring::KString;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Open(Parenkind),
    Close(Parenkind),
    Word(KString),
}

/// Renders the token's source text; the parser relies on this when
/// gluing a broken quoted string back together.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Token::Open(k) => f.write_char(k.opening()),
            Token::Close(k) => f.write_char(k.closing()),
            Token::Word(s) => f.write_str(s),
        }
    }
}

#[derive(Debug)]
pub struct TokenWithPos(pub Token, pub Pos);

pub fn maybe_open_close(c: char) -> Option<Token> {
    match c {
        '(' => Some(Token::Open(Parenkind::Round)),
        '[' => Some(Token::Open(Parenkind::Square)),
        '{' => Some(Token::Open(Parenkind::Curly)),
        ')' => Some(Token::Close(Parenkind::Round)),
        ']' => Some(Token::Close(Parenkind::Square)),
        '}' => Some(Token::Close(Parenkind::Curly)),
        _ => None,
    }
}

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && maybe_open_close(c).is_none()
}

/// One-pass, pull-based token stream over a position-tagged character
/// stream (see [chars_with_pos](crate::pos::chars_with_pos)). A word
/// token carries the position of its first character.
pub fn tokenize<'s>(
    cs: impl Iterator<Item = (char, Pos)> + 's,
) -> impl Iterator<Item = TokenWithPos> + 's {
    Gen::new(|co| async move {
        let mut cs = cs;
        let mut tmp = String::new();
        let mut maybe_next_c_pos = None;
        loop {
            let (c, pos) = match maybe_next_c_pos.take().or_else(|| cs.next()) {
                Some(cp) => cp,
                None => return,
            };
            if let Some(t) = maybe_open_close(c) {
                co.yield_(TokenWithPos(t, pos)).await;
            } else if c.is_whitespace() {
                // separator only
            } else {
                tmp.clear();
                tmp.push(c);
                loop {
                    match cs.next() {
                        Some((c1, pos1)) => {
                            if is_word_char(c1) {
                                tmp.push(c1);
                            } else {
                                maybe_next_c_pos = Some((c1, pos1));
                                break;
                            }
                        }
                        None => break,
                    }
                }
                co.yield_(TokenWithPos(Token::Word(KString::from_ref(&tmp)),
                                       pos)).await;
            }
        }
    }).into_iter()
}
