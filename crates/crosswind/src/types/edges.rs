//! Edge sets for spacing, borders, and position insets.

use bitflags::bitflags;

bitflags! {
    /// The box edges a spacing or inset intent applies to.
    ///
    /// `LEADING`/`TRAILING` are writing-direction aware (CSS logical
    /// properties), so they serialize to `s`/`e` suffixes and `start`/`end`
    /// inset names rather than physical left/right.
    ///
    /// The default is [`Edges::ALL`]; passing `ALL` explicitly is
    /// indistinguishable from omitting the edge argument.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEADING = 1 << 2;
        const TRAILING = 1 << 3;
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const HORIZONTAL = Self::LEADING.bits() | Self::TRAILING.bits();
        const ALL = Self::VERTICAL.bits() | Self::HORIZONTAL.bits();
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::ALL
    }
}

impl Edges {
    /// Spacing/border suffixes in a fixed emission order.
    ///
    /// Full axes fold to their shorthand (`x`, `y`); the complete set folds
    /// to the empty suffix. An empty set yields no suffixes and therefore no
    /// classes.
    pub fn suffixes(&self) -> Vec<&'static str> {
        if self.contains(Self::ALL) {
            return vec![""];
        }
        let mut out = Vec::new();
        let mut rest = *self;
        if rest.contains(Self::HORIZONTAL) {
            out.push("x");
            rest.remove(Self::HORIZONTAL);
        }
        if rest.contains(Self::VERTICAL) {
            out.push("y");
            rest.remove(Self::VERTICAL);
        }
        if rest.contains(Self::TOP) {
            out.push("t");
        }
        if rest.contains(Self::BOTTOM) {
            out.push("b");
        }
        if rest.contains(Self::LEADING) {
            out.push("s");
        }
        if rest.contains(Self::TRAILING) {
            out.push("e");
        }
        out
    }

    /// Inset class stems for position offsets, same folding rules as
    /// [`suffixes`](Self::suffixes).
    pub fn inset_stems(&self) -> Vec<&'static str> {
        if self.contains(Self::ALL) {
            return vec!["inset"];
        }
        let mut out = Vec::new();
        let mut rest = *self;
        if rest.contains(Self::HORIZONTAL) {
            out.push("inset-x");
            rest.remove(Self::HORIZONTAL);
        }
        if rest.contains(Self::VERTICAL) {
            out.push("inset-y");
            rest.remove(Self::VERTICAL);
        }
        if rest.contains(Self::TOP) {
            out.push("top");
        }
        if rest.contains(Self::BOTTOM) {
            out.push("bottom");
        }
        if rest.contains(Self::LEADING) {
            out.push("start");
        }
        if rest.contains(Self::TRAILING) {
            out.push("end");
        }
        out
    }
}
