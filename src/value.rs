// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The parsed tree: atoms and bracketed lists.

//! A [ListNode](ListNode) remembers which bracket style opened it;
//! the closing character is always derived from the opening one, so
//! the two can never disagree. `Display` renders the tree back to
//! text with the original bracket styles but normalized whitespace
//! (one space between items) and without comments.

use kstring::KString;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parenkind {
    Round,
    Square,
    Curly,
}

impl Parenkind {
    pub fn opening(self) -> char {
        match self {
            Parenkind::Round => '(',
            Parenkind::Square => '[',
            Parenkind::Curly => '{',
        }
    }
    pub fn closing(self) -> char {
        match self {
            Parenkind::Round => ')',
            Parenkind::Square => ']',
            Parenkind::Curly => '}',
        }
    }
}

/// One bracketed group. Immutable once attached to a parent; only the
/// parser's builder stack ever grows `children`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListNode {
    pub kind: Parenkind,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Atom(KString),
    List(ListNode),
}

impl Element {
    /// The node if this element is a list.
    pub fn as_list(&self) -> Option<&ListNode> {
        match self {
            Element::List(n) => Some(n),
            Element::Atom(_) => None,
        }
    }

    /// The text if this element is an atom.
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Element::Atom(s) => Some(s.as_str()),
            Element::List(_) => None,
        }
    }
}

impl std::fmt::Display for ListNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_char(self.kind.opening())?;
        for (i, item) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            item.fmt(f)?;
        }
        f.write_char(self.kind.closing())
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Element::Atom(s) => f.write_str(s),
            Element::List(n) => n.fmt(f),
        }
    }
}

/// Easily create an atom
pub fn atom(s: &str) -> Element {
    Element::Atom(KString::from_ref(s))
}

/// Easily create a list from already-built elements
pub fn list(kind: Parenkind, children: Vec<Element>) -> Element {
    Element::List(ListNode { kind, children })
}
