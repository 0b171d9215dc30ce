//! Configuration surface (C13): capacities and layout selection.
//!
//! Mirrors the teacher's `Automaton::new(print_statistics, max_str_len,
//! max_chars, ht_size, ...)` default-argument constructor, turned into a
//! proper config struct per `SPEC_FULL.md` §3.1.

/// Which on-disk transition encoding an automaton uses.
///
/// Tree and list files are not interchangeable (§6); this tag is how a
/// caller tells the library which one it is dealing with at runtime (e.g.
/// from a CLI flag or filename suffix), before it dispatches into the
/// corresponding statically-typed [`crate::layout::List`] /
/// [`crate::layout::Tree`] code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutTag {
    /// Linear sibling list terminated by a `last` flag.
    List,
    /// Complete binary search tree over sibling symbols.
    Tree,
}

impl LayoutTag {
    /// The default maximum arena size (in words) for this layout, sized to
    /// exactly fill its `dest` field's address space.
    pub fn default_max_arena_size(self) -> usize {
        match self {
            LayoutTag::List => 1 << 22,
            LayoutTag::Tree => 1 << 21,
        }
    }
}

impl std::str::FromStr for LayoutTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(LayoutTag::List),
            "tree" => Ok(LayoutTag::Tree),
            other => Err(format!("unknown layout {other:?}, expected \"list\" or \"tree\"")),
        }
    }
}

/// Default maximal lexicon string length, matching `MAX_STR_LEN` in the
/// original source.
pub const DEFAULT_MAX_STR_LEN: usize = 300;

/// Default alphabet size. Informational only: symbols are always `u8`.
pub const DEFAULT_MAX_CHARS: usize = 256;

/// Default register (hash table) bucket count.
pub const DEFAULT_HASH_TABLE_SIZE: usize = 1 << 20;

/// Capacities and knobs shared by the builder and the CLI.
#[derive(Debug, Clone)]
pub struct AutomatonConfig {
    /// Whether to emit progress/summary diagnostics while building (C11).
    pub print_statistics: bool,
    /// Maximum accepted lexicon line length, in bytes.
    pub max_str_len: usize,
    /// Informational alphabet size; symbols are always one byte.
    pub max_chars: usize,
    /// Number of buckets in the state-hash register.
    pub hash_table_size: usize,
    /// Maximum arena size, in 32-bit words, including the reserved
    /// pseudo-state slot. Defaults to the chosen layout's `dest`-width
    /// ceiling; raising it above that ceiling is a caller error, since no
    /// encoding could ever address such a slot.
    pub max_arena_size: usize,
}

impl AutomatonConfig {
    /// Defaults appropriate for `layout`, matching the constants in
    /// `original_source/Automaton/Automaton.h`.
    pub fn for_layout(layout: LayoutTag) -> Self {
        AutomatonConfig {
            print_statistics: true,
            max_str_len: DEFAULT_MAX_STR_LEN,
            max_chars: DEFAULT_MAX_CHARS,
            hash_table_size: DEFAULT_HASH_TABLE_SIZE,
            max_arena_size: layout.default_max_arena_size(),
        }
    }
}
