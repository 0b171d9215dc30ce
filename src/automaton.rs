//! The built, queryable automaton (C6 accessors + C7 query).
//!
//! Grounded on `check_string` in `original_source/Automaton/Automaton.h`
//! for [`Automaton::contains`], and on the teacher's
//! `NFA::next_state_unchecked` for the "walk one transition at a time
//! without panicking on a dead end" shape. Persistence backing (owned
//! words vs. a memory map) lives in `persist.rs`; this module only needs
//! to know it can borrow a `&[u32]` from whichever backing it holds.

use std::marker::PhantomData;

use crate::arena::Arena;
use crate::builder::decode_pseudo_word;
use crate::layout::Layout;
use crate::persist::Backing;
use crate::transition::Trans;

/// A minimal acyclic automaton over one of the two transition layouts.
///
/// Construct one with [`crate::builder::Builder`], or load one from disk
/// with [`crate::persist`].
pub struct Automaton<L: Layout> {
    pub(crate) backing: Backing,
    _marker: PhantomData<L>,
}

impl<L: Layout> Automaton<L> {
    pub(crate) fn from_arena(arena: Arena) -> Self {
        Automaton { backing: Backing::Owned(arena.into_words()), _marker: PhantomData }
    }

    pub(crate) fn from_backing(backing: Backing) -> Self {
        Automaton { backing, _marker: PhantomData }
    }

    fn words(&self) -> &[u32] {
        self.backing.words()
    }

    /// Arena address of the automaton's start state.
    pub fn start_state(&self) -> u32 {
        decode_pseudo_word(self.words()[0]).0
    }

    /// Whether the empty string is itself a lexicon entry.
    ///
    /// The empty string has no incoming arc to carry a `term` bit, so its
    /// acceptance is recorded in the pseudo-state word instead (see
    /// `builder::pseudo_word`).
    pub fn accepts_empty(&self) -> bool {
        decode_pseudo_word(self.words()[0]).1
    }

    /// Whether `word` is a member of the lexicon this automaton encodes.
    pub fn contains(&self, word: &[u8]) -> bool {
        if word.is_empty() {
            return self.accepts_empty();
        }
        let words = self.words();
        let mut addr = self.start_state() as usize;
        let mut last_term = false;
        for &byte in word {
            if addr == 0 {
                // Dead end: the state we're in has no outgoing transitions
                // at all, so no further byte can possibly match.
                return false;
            }
            match L::find(words, addr, byte) {
                Some(t) => {
                    last_term = t.term;
                    addr = t.dest as usize;
                }
                None => return false,
            }
        }
        last_term
    }

    /// The outgoing transitions of the state at `addr`, in ascending
    /// symbol order. `addr == 0` is the dead-end sentinel and always has
    /// no children. Used by enumeration (`enumerate.rs`).
    pub(crate) fn children_at(&self, addr: usize) -> Vec<Trans> {
        if addr == 0 {
            return Vec::new();
        }
        L::children_sorted(self.words(), addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::config::{AutomatonConfig, LayoutTag};
    use crate::layout::{List, Tree};

    fn build<L: Layout>(words: &[&str], layout: LayoutTag) -> Automaton<L> {
        let mut b: Builder<L> = Builder::new(AutomatonConfig::for_layout(layout));
        for w in words {
            b.insert(w.as_bytes()).unwrap();
        }
        b.finish().unwrap()
    }

    #[test]
    fn list_and_tree_agree_on_membership() {
        let words = ["a", "an", "and", "bat", "batman", "z"];
        let list: Automaton<List> = build(&words, LayoutTag::List);
        let tree: Automaton<Tree> = build(&words, LayoutTag::Tree);
        for w in &words {
            assert!(list.contains(w.as_bytes()));
            assert!(tree.contains(w.as_bytes()));
        }
        for absent in ["", "ba", "batma", "zz", "aa"] {
            assert!(!list.contains(absent.as_bytes()));
            assert!(!tree.contains(absent.as_bytes()));
        }
    }

    #[test]
    fn start_state_is_stable_for_empty_lexicon_root() {
        let automaton: Automaton<List> = build(&["only"], LayoutTag::List);
        assert!(!automaton.accepts_empty());
        assert!(automaton.start_state() > 0);
    }
}
