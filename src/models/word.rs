use serde::{Deserialize, Serialize};

/// A hidden word and the clue shown for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    /// Clue text; older word files call this field `def`
    #[serde(alias = "def")]
    pub definition: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }

    /// Number of letters, used for the clue blanks
    pub fn letter_count(&self) -> usize {
        self.word.len()
    }
}
