//! Lexer modes.
//!
//! The lexer is always in exactly one of two flat, exclusive modes. Only an
//! opening tag leaves [`Mode::Markup`] and only a closing tag leaves
//! [`Mode::Script`].

use std::fmt;

/// The active lexing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Literal passthrough text outside of tags. The initial mode.
    #[default]
    Markup,
    /// Code between an opening and a closing tag.
    Script,
}

impl Mode {
    /// The single-mode set containing this mode.
    #[inline]
    pub fn as_set(self) -> ModeSet {
        match self {
            Mode::Markup => ModeSet::MARKUP,
            Mode::Script => ModeSet::SCRIPT,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Markup => write!(f, "markup"),
            Mode::Script => write!(f, "script"),
        }
    }
}

bitflags::bitflags! {
    /// The modes a rule is valid in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModeSet: u8 {
        const MARKUP = 1 << 0;
        const SCRIPT = 1 << 1;
        const ANY    = Self::MARKUP.bits() | Self::SCRIPT.bits();
    }
}

impl ModeSet {
    /// Whether a rule scoped to this set may run while `mode` is active.
    #[inline]
    pub fn includes(self, mode: Mode) -> bool {
        self.contains(mode.as_set())
    }
}
