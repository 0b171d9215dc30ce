//! Enumeration (C8): list every lexicon string the automaton accepts, in
//! lexicographic order.
//!
//! The recursive form is a direct port of `list_strings` in
//! `original_source/Automaton/Automaton.h`: descend depth-first, extending
//! a shared path buffer and reporting a string whenever an arc's `term` bit
//! is set. The iterator form has no analog in the original (which is
//! directly recursive); it keeps an explicit frame stack instead, in the
//! spirit of the teacher's `IterTransitionsMut` — a hand-rolled, stateful
//! iterator that walks automaton structure one step at a time rather than
//! borrowing a callback.

use crate::automaton::Automaton;
use crate::layout::Layout;
use crate::transition::Trans;

/// Recursively collect every string in `automaton`'s lexicon, in ascending
/// lexicographic order.
pub fn enumerate_recursive<L: Layout>(automaton: &Automaton<L>) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    if automaton.accepts_empty() {
        out.push(Vec::new());
    }
    let mut path = Vec::new();
    visit(automaton, automaton.start_state() as usize, &mut path, &mut out);
    out
}

fn visit<L: Layout>(automaton: &Automaton<L>, addr: usize, path: &mut Vec<u8>, out: &mut Vec<Vec<u8>>) {
    for t in automaton.children_at(addr) {
        path.push(t.attr);
        if t.term {
            out.push(path.clone());
        }
        if t.dest != 0 {
            visit(automaton, t.dest as usize, path, out);
        }
        path.pop();
    }
}

struct Frame {
    children: Vec<Trans>,
    idx: usize,
}

/// A suspendable, explicit-stack equivalent of [`enumerate_recursive`].
///
/// Each call to `next()` advances exactly as far as it needs to to produce
/// one more string, instead of materializing the whole lexicon up front —
/// useful for large automatons where the caller may stop early.
pub struct EnumIter<'a, L: Layout> {
    automaton: &'a Automaton<L>,
    stack: Vec<Frame>,
    path: Vec<u8>,
    emitted_empty: bool,
}

impl<'a, L: Layout> EnumIter<'a, L> {
    pub fn new(automaton: &'a Automaton<L>) -> Self {
        let root = Frame { children: automaton.children_at(automaton.start_state() as usize), idx: 0 };
        EnumIter { automaton, stack: vec![root], path: Vec::new(), emitted_empty: false }
    }
}

impl<'a, L: Layout> Iterator for EnumIter<'a, L> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if !self.emitted_empty {
            self.emitted_empty = true;
            if self.automaton.accepts_empty() {
                return Some(Vec::new());
            }
        }

        loop {
            let frame = self.stack.last_mut()?;
            if frame.idx >= frame.children.len() {
                self.stack.pop();
                self.path.pop();
                continue;
            }

            let t = frame.children[frame.idx];
            frame.idx += 1;
            self.path.push(t.attr);

            if t.dest != 0 {
                // A child frame now owns popping this path byte, once its
                // own children are exhausted.
                let children = self.automaton.children_at(t.dest as usize);
                self.stack.push(Frame { children, idx: 0 });
                if t.term {
                    return Some(self.path.clone());
                }
            } else {
                // Dead end: no frame will ever pop this byte for us.
                if t.term {
                    let result = self.path.clone();
                    self.path.pop();
                    return Some(result);
                }
                self.path.pop();
            }
        }
    }
}
