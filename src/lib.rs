//! Minimal acyclic deterministic finite-state automaton over byte-string
//! lexicons.
//!
//! Build one incrementally from a sorted stream of lines with
//! [`Builder`](builder::Builder), query membership with
//! [`Automaton::contains`](automaton::Automaton::contains), enumerate every
//! entry back out with [`enumerate`], and persist the result to disk with
//! [`persist`]. Two on-disk transition encodings are available, chosen at
//! the type level: [`layout::List`] (a linear sibling scan) and
//! [`layout::Tree`] (a complete binary search tree over sibling symbols).
//! Both share the same construction, query, and enumeration API through
//! the [`layout::Layout`] trait.

mod arena;
mod builder;
mod config;
mod error;
mod layout;
mod register;
mod transition;
mod tree_shape;

pub mod automaton;
pub mod enumerate;
pub mod lines;
pub mod persist;

pub use automaton::Automaton;
pub use builder::Builder;
pub use config::{AutomatonConfig, LayoutTag};
pub use enumerate::{enumerate_recursive, EnumIter};
pub use error::AutomatonError;
pub use layout::{List, Layout, Tree};
pub use transition::Trans;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AutomatonConfig;

    /// End-to-end smoke test: build from lines, query, enumerate, and
    /// persist-round-trip, all through the public API surface.
    #[test]
    fn builds_queries_enumerates_and_persists() {
        let lexicon = ["ant", "anteater", "ants", "bee", "beetle"];

        let mut builder: Builder<List> = Builder::new(AutomatonConfig::for_layout(LayoutTag::List));
        for w in &lexicon {
            builder.insert(w.as_bytes()).unwrap();
        }
        let automaton = builder.finish().unwrap();

        for w in &lexicon {
            assert!(automaton.contains(w.as_bytes()));
        }
        assert!(!automaton.contains(b"an"));

        let listed: Vec<String> = enumerate_recursive(&automaton)
            .into_iter()
            .map(|w| String::from_utf8(w).unwrap())
            .collect();
        assert_eq!(listed, lexicon);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smoke.madfa");
        persist::save(&automaton, &path).unwrap();
        let loaded: Automaton<List> = persist::load(&path).unwrap();
        for w in &lexicon {
            assert!(loaded.contains(w.as_bytes()));
        }
    }
}
