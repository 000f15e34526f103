// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The push-down automaton turning a token stream into one tree.
//!
//! A loop over an explicit state enum and a stack of list builders,
//! not recursive descent: nesting depth costs heap rather than call
//! stack, and the attach-or-discard decision for a finished list
//! happens at a single point, the closing-bracket rule.
//!
//! Two kinds of input are dropped silently, by design rather than as
//! errors: word tokens containing `%`, and any finished list that has
//! one of the configured trace markers as a direct atom child (see
//! [settings](../settings/index.html)).

use crate::pos::{chars_with_pos, Pos};
use crate::settings::{Filter, Settings};
use crate::strip::strip_comments;
use crate::tokenize::{tokenize, Token, TokenWithPos};
use crate::value::{Element, ListNode, Parenkind};
use kstring::KString;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("expression must start with an opening bracket")]
    ExpectedOpenParen,
    #[error("unexpected closing character '{}'", .0.closing())]
    UnexpectedClose(Parenkind),
    #[error("'{}' opened {1} expects '{}', got '{}'",
            .0.opening(), .0.closing(), .2.closing())]
    MismatchedBracket(Parenkind, Pos, Parenkind),
    #[error("word with nothing open")]
    ExpectedOpenFirst,
    #[error("premature EOF while expecting closing character '{}'",
            .0.closing())]
    UnclosedBracket(Parenkind),
    #[error("no expression found")]
    EmptyExpression,
    #[error("expected a single expression, got {0}")]
    MultipleTopLevelExpressions(usize),
}

#[derive(Error, Debug, PartialEq)]
#[error("{err} {pos}")]
pub struct ParseErrorWithPos {
    pub err: ParseError,
    pub pos: Pos,
}

impl ParseError {
    fn at(self, p: Pos) -> ParseErrorWithPos {
        ParseErrorWithPos {
            err: self,
            pos: p,
        }
    }
}

/// A list still being built; becomes a [ListNode](ListNode) when its
/// closing bracket arrives. `openpos` only feeds diagnostics.
#[derive(Debug)]
struct ListBuilder {
    kind: Parenkind,
    openpos: Pos,
    children: Vec<Element>,
}

impl ListBuilder {
    fn open(kind: Parenkind, openpos: Pos) -> ListBuilder {
        ListBuilder {
            kind,
            openpos,
            children: Vec::new(),
        }
    }
    fn finish(self) -> ListNode {
        ListNode {
            kind: self.kind,
            children: self.children,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    ExpectOpen,
    AfterOpen,
    AfterClose,
    AfterWord,
    End,
}

fn filter_hit(filter: &Filter, children: &[Element]) -> bool {
    children.iter().any(|e| match e {
        Element::Atom(s) => filter.is_marker(s),
        Element::List(_) => false,
    })
}

/// Pulls the next token, reassembling quoted strings. A word starting
/// and ending with `"` loses the two delimiting quotes; a word that
/// only starts with one was broken apart by the tokenizer at
/// whitespace, so further tokens are glued back on with single spaces
/// until the accumulated text ends with `"` again, then every quote
/// character is removed. Running out of tokens mid-string counts as
/// plain end of input and the partial word is lost.
fn next_token(
    ts: &mut impl Iterator<Item = TokenWithPos>,
) -> Option<TokenWithPos> {
    let TokenWithPos(t, pos) = ts.next()?;
    let w = match t {
        Token::Word(w) => w,
        other => return Some(TokenWithPos(other, pos)),
    };
    if !w.starts_with('"') {
        return Some(TokenWithPos(Token::Word(w), pos));
    }
    if w.len() >= 2 && w.ends_with('"') {
        let s = w.as_str();
        let inner = &s[1..s.len() - 1];
        return Some(TokenWithPos(Token::Word(KString::from_ref(inner)), pos));
    }
    let mut acc = String::from(w.as_str());
    loop {
        let TokenWithPos(t1, _) = ts.next()?;
        acc.push(' ');
        acc.push_str(&t1.to_string());
        if acc.ends_with('"') {
            let cleaned: String = acc.chars().filter(|c| *c != '"').collect();
            return Some(TokenWithPos(Token::Word(KString::from_ref(&cleaned)),
                                     pos));
        }
    }
}

fn automaton(
    ts: &mut impl Iterator<Item = TokenWithPos>,
    settings: &Settings,
) -> Result<Element, ParseErrorWithPos> {
    // index 0 is the synthetic root holder; its kind is never rendered
    let mut stack: Vec<ListBuilder> =
        vec![ListBuilder::open(Parenkind::Round, Pos { line: 0, col: 0 })];
    let mut state = State::ExpectOpen;
    let mut lastpos = Pos { line: 0, col: 0 };
    loop {
        match state {
            State::ExpectOpen => match ts.next() {
                Some(TokenWithPos(Token::Open(kind), pos)) => {
                    stack.push(ListBuilder::open(kind, pos));
                    lastpos = pos;
                    state = State::AfterOpen;
                }
                Some(TokenWithPos(_, pos)) => {
                    return Err(ParseError::ExpectedOpenParen.at(pos))
                }
                None => return Err(ParseError::ExpectedOpenParen.at(lastpos)),
            },
            State::AfterOpen | State::AfterClose | State::AfterWord => {
                match next_token(ts) {
                    None => state = State::End,
                    Some(TokenWithPos(Token::Open(kind), pos)) => {
                        stack.push(ListBuilder::open(kind, pos));
                        lastpos = pos;
                        state = State::AfterOpen;
                    }
                    Some(TokenWithPos(Token::Close(kind), pos)) => {
                        lastpos = pos;
                        let top = match stack.pop() {
                            Some(top) if !stack.is_empty() => top,
                            // only the synthetic root was left
                            _ => return Err(
                                ParseError::UnexpectedClose(kind).at(pos)),
                        };
                        if kind != top.kind {
                            return Err(ParseError::MismatchedBracket(
                                top.kind, top.openpos, kind).at(pos));
                        }
                        if !filter_hit(settings.filter, &top.children) {
                            if let Some(parent) = stack.last_mut() {
                                parent.children.push(
                                    Element::List(top.finish()));
                            }
                        }
                        state = State::AfterClose;
                    }
                    Some(TokenWithPos(Token::Word(word), pos)) => {
                        lastpos = pos;
                        // unreachable while the root sentinel is on
                        // the stack
                        let parent = match stack.last_mut() {
                            Some(p) => p,
                            None => return Err(
                                ParseError::ExpectedOpenFirst.at(pos)),
                        };
                        if !word.contains('%') {
                            parent.children.push(Element::Atom(word));
                        }
                        state = State::AfterWord;
                    }
                }
            }
            State::End => {
                if stack.len() > 1 {
                    let top = &stack[stack.len() - 1];
                    return Err(ParseError::UnclosedBracket(top.kind)
                               .at(top.openpos));
                }
                let root = match stack.pop() {
                    Some(root) => root,
                    None => return Err(ParseError::EmptyExpression.at(lastpos)),
                };
                let mut children = root.children;
                return match children.len() {
                    0 => Err(ParseError::EmptyExpression.at(lastpos)),
                    1 => Ok(children.remove(0)),
                    n => Err(ParseError::MultipleTopLevelExpressions(n)
                             .at(lastpos)),
                };
            }
        }
    }
}

/// Parse one expression out of `text`: strip comments, tokenize the
/// stripped text, run the automaton. Error positions refer to the
/// stripped text.
pub fn parse(
    text: &str,
    settings: &Settings,
) -> Result<Element, ParseErrorWithPos> {
    let stripped = strip_comments(text);
    let mut ts = tokenize(chars_with_pos(&stripped));
    automaton(&mut ts, settings)
}
