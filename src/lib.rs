// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! S-expression reader for unification grammar files, with the
//! following properties:
//!
//! * Three bracket styles (`()`, `[]`, `{}`); each list remembers the
//!   style it was written with and renders with it again.
//!
//! * Line comments (`;` to end of line) are stripped before
//!   tokenization; comment-only lines disappear entirely, so error
//!   positions refer to the stripped text.
//!
//! * Quoted multi-word atoms: `"hello world"` becomes the single atom
//!   `hello world`.
//!
//! * Debug/trace sub-expressions such as `(trace on)` are filtered
//!   out while parsing; the marker set is configurable via
//!   [settings](settings/index.html).
//!
//! Parsing is a pull-based pipeline over an explicit stack, no
//! recursion: [strip](strip/index.html) →
//! [tokenize](tokenize/index.html) → [parse](parse/index.html). Use
//! [read](read/index.html) to load a whole file as one implicit outer
//! list. Semantic interpretation of the resulting tree is a concern
//! of downstream crates, not this one.

pub mod parse;
pub mod pos;
pub mod read;
pub mod settings;
pub mod strip;
pub mod tokenize;
pub mod value;
