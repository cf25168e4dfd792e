use rand::Rng;

/// Filler alphabet. Every letter is equally likely.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Pick a uniformly random uppercase letter
pub fn random_letter(rng: &mut impl Rng) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())] as char
}

/// Check whether a word only uses the filler alphabet
pub fn is_board_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_random_letter_is_uppercase() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(random_letter(&mut rng).is_ascii_uppercase());
        }
    }

    #[test]
    fn test_random_letter_covers_alphabet() {
        let mut rng = StdRng::seed_from_u64(11);
        let seen: HashSet<char> = (0..5000).map(|_| random_letter(&mut rng)).collect();
        assert_eq!(seen.len(), 26);
    }

    #[test]
    fn test_is_board_word() {
        assert!(is_board_word("LIGAND"));
        assert!(!is_board_word("ligand"));
        assert!(!is_board_word("JAHN-TELLER"));
        assert!(!is_board_word(""));
    }
}
