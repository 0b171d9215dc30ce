//! Persistence (C6): flat on-disk representation and both load paths.
//!
//! Grounded on `save_automat`/`read_automat` in
//! `original_source/Automaton/Automaton.h`: the file is exactly the arena's
//! word array, pseudo-state included, with no header. `Backing::Mapped`
//! reinterprets a `memmap2::Mmap` in place rather than copying it into a
//! `Vec<u32>`, matching the original's `mmap`-backed read path and the
//! crate's use of `memmap2` elsewhere for "map a flat binary blob and read
//! words out of it" (see `bytecodealliance-wasmtime`'s `cranelift/jit`,
//! which maps its compiled code the same way).
//!
//! Words are written and read native-endian. This makes the mmap path a
//! true zero-copy reinterpretation of the bytes on disk, at the cost of
//! portability: a file written on a big-endian host is not readable on a
//! little-endian one. That tradeoff is inherent to any zero-copy binary
//! format and is accepted here rather than worked around.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use memmap2::Mmap;

use crate::automaton::Automaton;
use crate::builder::decode_pseudo_word;
use crate::error::AutomatonError;
use crate::layout::Layout;

/// Where an [`Automaton`]'s words actually live.
pub(crate) enum Backing {
    Owned(Vec<u32>),
    Mapped(Mmap),
}

impl Backing {
    pub fn words(&self) -> &[u32] {
        match self {
            Backing::Owned(words) => words,
            Backing::Mapped(mmap) => bytes_as_words(mmap).expect("validated at load time"),
        }
    }
}

fn bytes_as_words(bytes: &[u8]) -> Result<&[u32], AutomatonError> {
    if bytes.len() % 4 != 0 {
        return Err(AutomatonError::Corrupt {
            reason: format!("file length {} is not a multiple of 4", bytes.len()),
        });
    }
    if (bytes.as_ptr() as usize) % std::mem::align_of::<u32>() != 0 {
        return Err(AutomatonError::Corrupt {
            reason: "memory map is not u32-aligned".to_string(),
        });
    }
    // SAFETY: length is a multiple of 4 and the start address is aligned
    // to 4 bytes, both checked above; `u32` has no invalid bit patterns,
    // so any 4-byte group is a valid `u32`.
    Ok(unsafe { std::slice::from_raw_parts(bytes.as_ptr().cast::<u32>(), bytes.len() / 4) })
}

fn validate(words: &[u32]) -> Result<(), AutomatonError> {
    if words.len() < 2 {
        return Err(AutomatonError::Corrupt {
            reason: format!("file has {} word(s), fewer than the required minimum of 2", words.len()),
        });
    }
    let start = decode_pseudo_word(words[0]).0 as usize;
    if start >= words.len() {
        return Err(AutomatonError::Corrupt {
            reason: format!("start address {start} is outside the arena (size {})", words.len()),
        });
    }
    Ok(())
}

/// Write `automaton`'s arena to `path` as a flat array of native-endian
/// `u32` words.
pub fn save<L: Layout>(automaton: &Automaton<L>, path: impl AsRef<Path>) -> Result<(), AutomatonError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for &word in automaton.backing.words() {
        out.write_all(&word.to_ne_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Load an automaton by reading the whole file into memory.
pub fn load<L: Layout>(path: impl AsRef<Path>) -> Result<Automaton<L>, AutomatonError> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    if bytes.len() % 4 != 0 {
        return Err(AutomatonError::Corrupt {
            reason: format!("file length {} is not a multiple of 4", bytes.len()),
        });
    }
    let words: Vec<u32> = bytes
        .chunks_exact(4)
        .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    validate(&words)?;
    Ok(Automaton::from_backing(Backing::Owned(words)))
}

/// Load an automaton by memory-mapping `path`, avoiding a copy of its
/// contents into owned memory.
///
/// # Safety
/// This inherits `memmap2::Mmap::map`'s caveat: the file must not be
/// truncated or mutated by another process while the mapping is alive, or
/// behavior is undefined.
pub unsafe fn load_mmap<L: Layout>(path: impl AsRef<Path>) -> Result<Automaton<L>, AutomatonError> {
    let file = File::open(path)?;
    let mmap = Mmap::map(&file)?;
    let words = bytes_as_words(&mmap)?;
    validate(words)?;
    Ok(Automaton::from_backing(Backing::Mapped(mmap)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::config::{AutomatonConfig, LayoutTag};
    use crate::layout::{List, Tree};

    #[test]
    fn save_and_load_round_trips_list() {
        let mut b: Builder<List> = Builder::new(AutomatonConfig::for_layout(LayoutTag::List));
        for w in ["ab", "abc", "b"] {
            b.insert(w.as_bytes()).unwrap();
        }
        let automaton = b.finish().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.list");
        save(&automaton, &path).unwrap();

        let loaded: Automaton<List> = load(&path).unwrap();
        assert!(loaded.contains(b"ab"));
        assert!(loaded.contains(b"abc"));
        assert!(loaded.contains(b"b"));
        assert!(!loaded.contains(b"a"));
    }

    #[test]
    fn save_and_mmap_load_round_trips_tree() {
        let mut b: Builder<Tree> = Builder::new(AutomatonConfig::for_layout(LayoutTag::Tree));
        for w in ["mango", "map", "maple", "zebra"] {
            b.insert(w.as_bytes()).unwrap();
        }
        let automaton = b.finish().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.tree");
        save(&automaton, &path).unwrap();

        let loaded: Automaton<Tree> = unsafe { load_mmap(&path).unwrap() };
        assert!(loaded.contains(b"mango"));
        assert!(loaded.contains(b"map"));
        assert!(loaded.contains(b"maple"));
        assert!(loaded.contains(b"zebra"));
        assert!(!loaded.contains(b"ma"));
    }

    #[test]
    fn truncated_file_is_reported_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.bin");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();
        let err = load::<List>(&path).unwrap_err();
        assert!(matches!(err, AutomatonError::Corrupt { .. }));
    }
}
