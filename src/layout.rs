//! Layout abstraction (C1/C5): the two on-disk transition encodings behind
//! one statically-dispatched capability set.
//!
//! `List` and `Tree` are zero-sized marker types implementing [`Layout`].
//! Builder and automaton code is generic over `L: Layout` and monomorphizes
//! per layout at compile time — there is no dynamic dispatch on the query
//! hot path, per the Design Notes on avoiding runtime polymorphism there.

use crate::config::LayoutTag;
use crate::transition::{
    decode_list, decode_tree, encode_list, encode_tree, Trans, LIST_MAX_DEST, TREE_MAX_DEST,
};
use crate::tree_shape::shape_tree;

/// Capabilities shared by both transition encodings.
///
/// All methods take the whole arena word slice plus the absolute index of
/// the state's first transition word; every layout is self-terminating (a
/// `last`/`llast+rlast` flag marks where the state's run of words ends), so
/// no separate sibling count needs to be threaded through.
pub trait Layout: Copy + Clone + std::fmt::Debug + Eq + 'static {
    /// The runtime tag corresponding to this static layout.
    const TAG: LayoutTag;

    /// Largest arena address this layout's `dest` field can encode.
    fn max_dest() -> u32;

    /// Encode one state's outgoing transitions into arena words, in the
    /// order they will be written to the arena. `transitions` must be
    /// non-empty (a dead end is represented by a `dest` of 0 on the
    /// incoming arc, never by interning a childless state) and sorted by
    /// `attr`, which the builder always guarantees.
    fn encode_state(transitions: &[Trans]) -> Vec<u32>;

    /// Look up the outgoing transition labeled `attr` from the state whose
    /// first word is at `start`.
    fn find(words: &[u32], start: usize, attr: u8) -> Option<Trans>;

    /// All of the state's transitions, in ascending `attr` order.
    fn children_sorted(words: &[u32], start: usize) -> Vec<Trans>;
}

/// Linear sibling list terminated by a `last` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct List;

/// Complete binary search tree over sibling symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tree;

impl Layout for List {
    const TAG: LayoutTag = LayoutTag::List;

    fn max_dest() -> u32 {
        LIST_MAX_DEST
    }

    fn encode_state(transitions: &[Trans]) -> Vec<u32> {
        debug_assert!(!transitions.is_empty(), "states with no children are never interned");
        let n = transitions.len();
        transitions
            .iter()
            .enumerate()
            .map(|(i, t)| encode_list(*t, i + 1 == n))
            .collect()
    }

    fn find(words: &[u32], start: usize, attr: u8) -> Option<Trans> {
        let mut i = start;
        loop {
            let (t, last) = decode_list(words[i]);
            if t.attr == attr {
                return Some(t);
            }
            if last {
                return None;
            }
            i += 1;
        }
    }

    fn children_sorted(words: &[u32], start: usize) -> Vec<Trans> {
        let mut out = Vec::new();
        let mut i = start;
        loop {
            let (t, last) = decode_list(words[i]);
            out.push(t);
            if last {
                break;
            }
            i += 1;
        }
        out
    }
}

impl Layout for Tree {
    const TAG: LayoutTag = LayoutTag::Tree;

    fn max_dest() -> u32 {
        TREE_MAX_DEST
    }

    fn encode_state(transitions: &[Trans]) -> Vec<u32> {
        debug_assert!(!transitions.is_empty(), "states with no children are never interned");
        let shaped = shape_tree(transitions);
        let n = shaped.len();
        shaped
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let llast = 2 * i + 1 >= n;
                let rlast = 2 * i + 2 >= n;
                encode_tree(*t, llast, rlast)
            })
            .collect()
    }

    fn find(words: &[u32], start: usize, attr: u8) -> Option<Trans> {
        let mut rel = 0usize;
        loop {
            let (t, llast, rlast) = decode_tree(words[start + rel]);
            if t.attr == attr {
                return Some(t);
            }
            if attr < t.attr {
                if llast {
                    return None;
                }
                rel = 2 * rel + 1;
            } else {
                if rlast {
                    return None;
                }
                rel = 2 * rel + 2;
            }
        }
    }

    fn children_sorted(words: &[u32], start: usize) -> Vec<Trans> {
        let mut out = Vec::new();
        in_order(words, start, 0, &mut out);
        out
    }
}

fn in_order(words: &[u32], start: usize, rel: usize, out: &mut Vec<Trans>) {
    let (t, llast, rlast) = decode_tree(words[start + rel]);
    if !llast {
        in_order(words, start, 2 * rel + 1, out);
    }
    out.push(t);
    if !rlast {
        in_order(words, start, 2 * rel + 2, out);
    }
}
