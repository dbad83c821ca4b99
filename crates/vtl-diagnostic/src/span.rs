// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

/// A source-text position inherited from the parser. Engine
/// code that has no parser behind it (tests, programmatically-built
/// expressions) uses [`Span::none`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn none() -> Self {
        Self { start: 0, end: 0 }
    }

    pub fn is_none(&self) -> bool {
        self.start == 0 && self.end == 0
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            f.write_str("<unknown>")
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}
