use bitflags::bitflags;

bitflags! {
    /// Options a [`PathRegex`](super::PathRegex) was compiled with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternFlags: u8 {
        const SENSITIVE = 0b0000_0001;
        const LOOSE = 0b0000_0010;
        const STRICT = 0b0000_0100;
        const START = 0b0000_1000;
        const END = 0b0001_0000;
        const TRAILING = 0b0010_0000;
        /// The expression was supplied pre-compiled and used as-is.
        const RAW = 0b0100_0000;
    }
}

impl PatternFlags {
    /// Inline flag group prepended to every generated expression.
    pub(crate) fn inline_prefix(&self) -> &'static str {
        if self.contains(Self::SENSITIVE) {
            ""
        } else {
            "(?i)"
        }
    }
}
