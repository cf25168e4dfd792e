use std::collections::HashSet;

/// Checks resolved drag text against the round's target words.
pub struct WordValidator {
    targets: HashSet<String>,
}

impl WordValidator {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if word is one of the targets
    pub fn is_target(&self, word: &str) -> bool {
        self.targets.contains(word)
    }

    /// The forward reading followed by the reversed one. Palindromes yield a
    /// single reading.
    pub fn readings(text: &str) -> Vec<String> {
        let reversed: String = text.chars().rev().collect();
        if reversed == text {
            vec![text.to_string()]
        } else {
            vec![text.to_string(), reversed]
        }
    }

    /// Every reading of `text` that names a target not yet in `found`, in
    /// forward-then-reverse order. No deduplication is applied between the two.
    pub fn matches(&self, text: &str, found: &HashSet<String>) -> Vec<String> {
        Self::readings(text)
            .into_iter()
            .filter(|reading| self.is_target(reading) && !found.contains(reading))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> WordValidator {
        WordValidator::new(["LIGAND", "ORBITAL", "DOG", "GOD"])
    }

    #[test]
    fn test_readings() {
        assert_eq!(WordValidator::readings("CAT"), vec!["CAT", "TAC"]);
        assert_eq!(WordValidator::readings("ABA"), vec!["ABA"]);
        assert_eq!(WordValidator::readings("Q"), vec!["Q"]);
    }

    #[test]
    fn test_forward_match() {
        let found = HashSet::new();
        assert_eq!(validator().matches("LIGAND", &found), vec!["LIGAND"]);
    }

    #[test]
    fn test_reverse_match() {
        let found = HashSet::new();
        assert_eq!(validator().matches("LATIBRO", &found), vec!["ORBITAL"]);
    }

    #[test]
    fn test_found_words_do_not_match() {
        let found: HashSet<String> = ["LIGAND".to_string()].into_iter().collect();
        assert!(validator().matches("LIGAND", &found).is_empty());
        assert!(validator().matches("DNAGIL", &found).is_empty());
    }

    #[test]
    fn test_both_readings_can_match() {
        let found = HashSet::new();
        assert_eq!(validator().matches("DOG", &found), vec!["DOG", "GOD"]);
    }

    #[test]
    fn test_partial_and_case_mismatch() {
        let found = HashSet::new();
        assert!(validator().matches("LIGAN", &found).is_empty());
        assert!(validator().matches("ligand", &found).is_empty());
    }
}
