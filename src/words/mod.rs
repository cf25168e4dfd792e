use std::collections::HashSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use thiserror::Error;
use tokio::fs;

use crate::{models::WordEntry, utils::letters::is_board_word};

/// Shortest word worth hiding
pub const MIN_WORD_LENGTH: usize = 2;

/// Coordination chemistry vocabulary shipped with the game
pub static CHEMISTRY_WORDS: Lazy<Vec<WordEntry>> = Lazy::new(|| {
    vec![
        WordEntry::new("LIGAND", "An ion or molecule that binds to a central metal atom."),
        WordEntry::new(
            "CHELATE",
            "A compound containing a ligand bonded to a central metal at two or more points.",
        ),
        WordEntry::new(
            "ISOMER",
            "Compounds with the same formula but different arrangements of atoms.",
        ),
        WordEntry::new(
            "SPECTROCHEMICAL",
            "A series ranking ligands by the strength of field they produce.",
        ),
        WordEntry::new(
            "OCTAHEDRAL",
            "A molecular geometry with one atom at the center and six at the corners.",
        ),
        WordEntry::new("ENTROPY", "The driving thermodynamic force behind the Chelate Effect."),
        WordEntry::new(
            "DENTICITY",
            "The number of donor groups in a single ligand that bind to a central metal.",
        ),
        WordEntry::new(
            "JAHNTELLER",
            "Geometric distortion in non-linear molecular systems to reduce energy.",
        ),
        WordEntry::new(
            "ORBITAL",
            "A mathematical function describing the wave-like behavior of an electron.",
        ),
        WordEntry::new(
            "CHIRALITY",
            "A geometric property where a molecule is non-superimposable on its mirror image.",
        ),
    ]
});

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,

    #[error("word {word:?} must be at least 2 letters of A-Z")]
    InvalidWord { word: String },

    #[error("word {word} has an empty definition")]
    EmptyDefinition { word: String },

    #[error("word {word} appears more than once")]
    Duplicate { word: String },

    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse word list {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A validated set of hidden words and their clues, in display order.
#[derive(Debug, Clone)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Validate and normalize a list of entries.
    ///
    /// Words are trimmed and uppercased, then must be A-Z only and at least
    /// two letters long. Definitions must be non-empty and words unique.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, WordListError> {
        if entries.is_empty() {
            return Err(WordListError::Empty);
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(entries.len());

        for entry in entries {
            let word = entry.word.trim().to_uppercase();
            if word.len() < MIN_WORD_LENGTH || !is_board_word(&word) {
                return Err(WordListError::InvalidWord { word: entry.word });
            }

            let definition = entry.definition.trim().to_string();
            if definition.is_empty() {
                return Err(WordListError::EmptyDefinition { word });
            }

            if !seen.insert(word.clone()) {
                return Err(WordListError::Duplicate { word });
            }

            normalized.push(WordEntry { word, definition });
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// The built-in chemistry list
    pub fn builtin() -> Self {
        Self {
            entries: CHEMISTRY_WORDS.clone(),
        }
    }

    /// Load a word list from a JSON array of `{ "word", "definition" }` objects
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| WordListError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let entries: Vec<WordEntry> =
            serde_json::from_str(&content).map_err(|source| WordListError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let list = Self::new(entries)?;
        tracing::info!("Loaded {} words from {}", list.len(), path.display());

        Ok(list)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|entry| entry.word == word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("chem-search-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_builtin_list() {
        let list = WordList::builtin();
        assert_eq!(list.len(), 10);
        assert!(list.contains("SPECTROCHEMICAL"));
        assert!(WordList::new(list.entries().to_vec()).is_ok());
    }

    #[test]
    fn test_normalizes_words() {
        let list = WordList::new(vec![WordEntry::new(" ligand ", " binds metal ")]).unwrap();
        assert_eq!(list.entries()[0].word, "LIGAND");
        assert_eq!(list.entries()[0].definition, "binds metal");
        assert_eq!(list.get("LIGAND").map(|e| e.letter_count()), Some(6));
    }

    #[test]
    fn test_rejects_invalid_entries() {
        assert!(matches!(WordList::new(vec![]), Err(WordListError::Empty)));
        assert!(matches!(
            WordList::new(vec![WordEntry::new("A", "too short")]),
            Err(WordListError::InvalidWord { .. })
        ));
        assert!(matches!(
            WordList::new(vec![WordEntry::new("JAHN-TELLER", "hyphen")]),
            Err(WordListError::InvalidWord { .. })
        ));
        assert!(matches!(
            WordList::new(vec![WordEntry::new("ISOMER", "  ")]),
            Err(WordListError::EmptyDefinition { .. })
        ));
        assert!(matches!(
            WordList::new(vec![
                WordEntry::new("ISOMER", "one"),
                WordEntry::new("isomer", "two"),
            ]),
            Err(WordListError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path();
        std::fs::write(
            &path,
            r#"[{"word": "cat", "definition": "A small feline."}, {"word": "DOG", "def": "A loyal friend."}]"#,
        )
        .unwrap();

        let list = tokio_test::block_on(WordList::load(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get("DOG").unwrap().definition, "A loyal friend.");
        assert!(list.contains("CAT"));
    }

    #[test]
    fn test_load_reports_missing_and_malformed_files() {
        let missing = temp_path();
        assert!(matches!(
            tokio_test::block_on(WordList::load(&missing)),
            Err(WordListError::Io { .. })
        ));

        let path = temp_path();
        std::fs::write(&path, "not json").unwrap();
        let result = tokio_test::block_on(WordList::load(&path));
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(WordListError::Parse { .. })));
    }
}
