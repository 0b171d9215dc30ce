//! State-hash register (C3): deduplicate states so the automaton stays
//! minimal.
//!
//! Grounded on the `hash_table`/bucket chains and `hash_state`/`make_state`
//! in `original_source/Automaton/Automaton.h`. Re-expressed as a
//! `Vec<Vec<(addr, len)>>` chained table (the Rust idiom for the C
//! linked-list-of-buckets design) rather than `std::collections::HashMap`,
//! to keep exact control over the mandated hash and comparison contract:
//! content equality is raw-word equality against the arena, and the hash
//! is the original's multiplicative scheme, not `std::hash`.

use crate::arena::Arena;

/// Multiplicative hash from `Automaton.h`'s `hash_state`, applied to the
/// sum of a state's encoded words. Computed with wrapping arithmetic to
/// match the original's unsigned-overflow semantics exactly.
fn hash_words(words: &[u32], table_size: usize) -> usize {
    let sum = words.iter().fold(0u32, |acc, &w| acc.wrapping_add(w));
    ((sum.wrapping_mul(324027)) >> 13) as usize % table_size
}

/// Interning table mapping encoded state content to its arena address.
#[derive(Debug)]
pub(crate) struct Register {
    table: Vec<Vec<(u32, u32)>>,
}

impl Register {
    /// A register with `table_size` buckets.
    pub fn new(table_size: usize) -> Self {
        let table_size = table_size.max(1);
        Register { table: vec![Vec::new(); table_size] }
    }

    /// Return the existing address for a state whose encoded content
    /// equals `words`, or append it to `arena` and register a new one.
    pub fn intern(&mut self, arena: &mut Arena, words: &[u32]) -> (u32, bool) {
        let bucket = hash_words(words, self.table.len());
        for &(addr, len) in &self.table[bucket] {
            let len = len as usize;
            let addr = addr as usize;
            if len == words.len() && &arena.words()[addr..addr + len] == words {
                return (addr as u32, false);
            }
        }
        let addr = arena.append(words);
        self.table[bucket].push((addr, words.len() as u32));
        (addr, true)
    }
}
