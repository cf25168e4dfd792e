use std::cmp::Reverse;

use rand::Rng;

use crate::{
    models::{Coordinate, Direction, Grid, SolutionMap, WordEntry},
    utils::letters::random_letter,
};

/// Board edge length used by the themed puzzle
pub const DEFAULT_GRID_SIZE: usize = 15;
/// Random placements tried per word before it is dropped from the round
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 100;

/// Outcome of trying to fit one word onto the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// The word occupies these cells, in reading order
    Placed(Vec<Coordinate>),
    /// Every attempt collided or ran off the board
    Skipped,
}

/// A freshly generated round: the board, its answer key, and the words that
/// could not be fitted.
#[derive(Debug, Clone)]
pub struct GeneratedGrid {
    pub grid: Grid,
    pub solutions: SolutionMap,
    pub skipped: Vec<String>,
}

/// Working matrix. `None` marks a cell no word has claimed yet.
type Matrix = Vec<Vec<Option<char>>>;

#[derive(Debug, Clone, Copy)]
pub struct GridGenerator {
    size: usize,
    max_attempts: usize,
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl GridGenerator {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            max_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Generate a fully lettered board with as many of `words` hidden in it as fit.
    ///
    /// Longest words are placed first. Words that cannot be placed within the
    /// attempt budget are logged and left out of the answer key; the board is
    /// still filled completely.
    pub fn generate(&self, words: &[WordEntry], rng: &mut impl Rng) -> GeneratedGrid {
        let mut matrix: Matrix = vec![vec![None; self.size]; self.size];
        let mut solutions = SolutionMap::default();
        let mut skipped = Vec::new();

        let mut ordered: Vec<&WordEntry> = words.iter().collect();
        ordered.sort_by_key(|entry| Reverse(entry.word.len()));

        for entry in ordered {
            let word = entry.word.as_str();
            if solutions.contains(word) {
                tracing::debug!("Word {} listed twice, keeping first placement", word);
                continue;
            }

            match self.place_word(&mut matrix, word, rng) {
                Placement::Placed(cells) => {
                    tracing::debug!("Placed {} starting at {:?}", word, cells[0]);
                    solutions.insert(word.to_string(), cells);
                }
                Placement::Skipped => {
                    tracing::warn!(
                        "Could not place word {} after {} attempts",
                        word,
                        self.max_attempts
                    );
                    skipped.push(word.to_string());
                }
            }
        }

        let letters = matrix
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.unwrap_or_else(|| random_letter(rng)))
                    .collect()
            })
            .collect();

        GeneratedGrid {
            grid: Grid::from_letters(letters),
            solutions,
            skipped,
        }
    }

    /// Try random starts and directions until the word fits or attempts run out
    fn place_word(&self, matrix: &mut Matrix, word: &str, rng: &mut impl Rng) -> Placement {
        if self.size == 0 || word.is_empty() {
            return Placement::Skipped;
        }

        let letters: Vec<char> = word.chars().collect();

        for _ in 0..self.max_attempts {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let start = Coordinate {
                row: rng.random_range(0..self.size),
                col: rng.random_range(0..self.size),
            };

            if let Some(cells) = self.fit(matrix, &letters, start, direction) {
                for (cell, letter) in cells.iter().zip(&letters) {
                    matrix[cell.row][cell.col] = Some(*letter);
                }
                return Placement::Placed(cells);
            }
        }

        Placement::Skipped
    }

    /// Cells the word would occupy, if every one is on the board and either
    /// empty or already holding the same letter.
    fn fit(
        &self,
        matrix: &Matrix,
        letters: &[char],
        start: Coordinate,
        direction: Direction,
    ) -> Option<Vec<Coordinate>> {
        let mut cells = Vec::with_capacity(letters.len());

        for (i, letter) in letters.iter().enumerate() {
            let cell = start.offset(direction, i, self.size)?;
            match matrix[cell.row][cell.col] {
                Some(existing) if existing != *letter => return None,
                _ => cells.push(cell),
            }
        }

        Some(cells)
    }
}
