// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for parsing, mainly which sub-expressions get filtered
//! out of the tree.

/// A list that carries one of these marker strings as a direct atom
/// child is dropped at its closing bracket instead of being attached
/// to its parent. Exact-token membership, no pattern matching.
#[derive(Debug)]
pub struct Filter<'t> {
    pub markers: &'t [&'t str],
}

impl Filter<'_> {
    pub fn is_marker(&self, word: &str) -> bool {
        self.markers.contains(&word)
    }
}

/// The markers FUF grammar files use for debugging and demo
/// annotations.
pub const FUF_MARKERS: &[&str] = &["control-demo", "control", ":demo", "trace"];

pub const FUF_FILTER: Filter<'static> = Filter { markers: FUF_MARKERS };

/// Keep nothing out of the tree (other than `%` words, which are
/// always dropped).
pub const NO_FILTER: Filter<'static> = Filter { markers: &[] };

#[derive(Debug)]
pub struct Settings<'t> {
    pub filter: &'t Filter<'t>,
}

pub const FUF_SETTINGS: Settings<'static> = Settings { filter: &FUF_FILTER };
