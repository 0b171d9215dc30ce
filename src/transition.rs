//! Transition codec (C1): pack/unpack a 32-bit transition word.
//!
//! Ported from the `transition` union in `Automaton.h`, but materialized
//! with explicit shifts and masks rather than C bit-fields, whose order and
//! padding are not portable (see the REDESIGN FLAGS in `SPEC_FULL.md` §9).
//! `attr` and `term` sit at the same bit positions in both layouts; only the
//! low two bits and the width of `dest` differ.

const TERM_SHIFT: u32 = 31;
const ATTR_SHIFT: u32 = 23;
const ATTR_MASK: u32 = 0xFF;

/// A single labeled arc, decoupled from its on-disk sibling-flag encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Trans {
    /// The input symbol this arc consumes.
    pub attr: u8,
    /// Whether the string ending at this arc is accepted.
    pub term: bool,
    /// Arena address of the target state; 0 means no target.
    pub dest: u32,
}

impl Trans {
    /// A placeholder transition with every field zeroed, used by
    /// `tree_shape.rs` to pre-fill its output array before placement.
    pub(crate) fn zero() -> Self {
        Trans::default()
    }
}

// -- list layout: term:1 attr:8 dest:22 last:1 --

/// Largest arena address the list layout's 22-bit `dest` field can hold.
pub const LIST_MAX_DEST: u32 = (1 << 22) - 1;

pub(crate) fn encode_list(t: Trans, last: bool) -> u32 {
    debug_assert!(t.dest <= LIST_MAX_DEST, "dest {} overflows list layout", t.dest);
    ((t.term as u32) << TERM_SHIFT) | ((t.attr as u32) << ATTR_SHIFT) | (t.dest << 1) | (last as u32)
}

pub(crate) fn decode_list(word: u32) -> (Trans, bool) {
    let term = (word >> TERM_SHIFT) & 1 != 0;
    let attr = ((word >> ATTR_SHIFT) & ATTR_MASK) as u8;
    let last = word & 1 != 0;
    let dest = (word >> 1) & LIST_MAX_DEST;
    (Trans { attr, term, dest }, last)
}

// -- tree layout: term:1 attr:8 dest:21 rlast:1 llast:1 --

/// Largest arena address the tree layout's 21-bit `dest` field can hold.
pub const TREE_MAX_DEST: u32 = (1 << 21) - 1;

pub(crate) fn encode_tree(t: Trans, llast: bool, rlast: bool) -> u32 {
    debug_assert!(t.dest <= TREE_MAX_DEST, "dest {} overflows tree layout", t.dest);
    ((t.term as u32) << TERM_SHIFT)
        | ((t.attr as u32) << ATTR_SHIFT)
        | (t.dest << 2)
        | ((rlast as u32) << 1)
        | (llast as u32)
}

pub(crate) fn decode_tree(word: u32) -> (Trans, bool, bool) {
    let term = (word >> TERM_SHIFT) & 1 != 0;
    let attr = ((word >> ATTR_SHIFT) & ATTR_MASK) as u8;
    let llast = word & 1 != 0;
    let rlast = (word >> 1) & 1 != 0;
    let dest = (word >> 2) & TREE_MAX_DEST;
    (Trans { attr, term, dest }, llast, rlast)
}

/// A transition word's `term` bit sits at the same position in both
/// layouts, so statistics can scan raw words without knowing the layout.
pub(crate) fn word_is_term(word: u32) -> bool {
    (word >> TERM_SHIFT) & 1 != 0
}
