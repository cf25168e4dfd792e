use std::{collections::BTreeMap, ops::Index};

use serde::{Deserialize, Serialize};

/// A cell position on the board. Both components lie in `[0, size)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `distance` cells from this coordinate along `direction`.
    /// Returns `None` when the result leaves a `size`x`size` board.
    pub fn offset(self, direction: Direction, distance: usize, size: usize) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let distance = distance as isize;
        let row = self.row as isize + d_row * distance;
        let col = self.col as isize + d_col * distance;

        let bound = size as isize;
        if row < 0 || row >= bound || col < 0 || col >= bound {
            return None;
        }

        Some(Self {
            row: row as usize,
            col: col as usize,
        })
    }
}

/// The eight straight directions a word can run in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    Down,
    DownRight,
    UpRight,
    Left,
    Up,
    UpLeft,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::UpRight,
        Direction::Left,
        Direction::Up,
        Direction::UpLeft,
        Direction::DownLeft,
    ];

    /// Unit vector as `(d_row, d_col)`
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridCell {
    pub coordinate: Coordinate,
    pub letter: char,
}

/// A finished, fully lettered square board.
///
/// Boards are only built by the generator (or from fixed rows in tests) and
/// expose no way to change a letter afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<GridCell>>,
}

impl Grid {
    /// Build a board from a square matrix of letters.
    pub(crate) fn from_letters(letters: Vec<Vec<char>>) -> Self {
        let size = letters.len();
        let cells = letters
            .into_iter()
            .enumerate()
            .map(|(row, line)| {
                line.into_iter()
                    .enumerate()
                    .map(|(col, letter)| GridCell {
                        coordinate: Coordinate { row, col },
                        letter,
                    })
                    .collect()
            })
            .collect();

        Self { size, cells }
    }

    /// Build a board from text rows such as `["CAT", "XYZ", "QRS"]`.
    /// Returns `None` unless the rows form a non-empty square of uppercase ASCII letters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let size = rows.len();
        if size == 0 {
            return None;
        }

        let mut letters = Vec::with_capacity(size);
        for row in rows {
            let line: Vec<char> = row.as_ref().chars().collect();
            if line.len() != size || !line.iter().all(|c| c.is_ascii_uppercase()) {
                return None;
            }
            letters.push(line);
        }

        Some(Self::from_letters(letters))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.size && coordinate.col < self.size
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<&GridCell> {
        self.cells
            .get(coordinate.row)
            .and_then(|row| row.get(coordinate.col))
    }

    pub fn letter_at(&self, coordinate: Coordinate) -> Option<char> {
        self.get(coordinate).map(|cell| cell.letter)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().flatten()
    }
}

impl Index<Coordinate> for Grid {
    type Output = GridCell;

    fn index(&self, coordinate: Coordinate) -> &GridCell {
        &self.cells[coordinate.row][coordinate.col]
    }
}

/// Answer key: every placed word and the cells it occupies, in reading order.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SolutionMap {
    placements: BTreeMap<String, Vec<Coordinate>>,
}

impl SolutionMap {
    pub(crate) fn insert(&mut self, word: String, cells: Vec<Coordinate>) {
        self.placements.insert(word, cells);
    }

    pub fn get(&self, word: &str) -> Option<&[Coordinate]> {
        self.placements.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.placements.contains_key(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Coordinate])> {
        self.placements
            .iter()
            .map(|(word, cells)| (word.as_str(), cells.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas_are_unit_and_distinct() {
        let deltas: std::collections::HashSet<_> =
            Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
        assert!(deltas
            .iter()
            .all(|(r, c)| (-1..=1).contains(r) && (-1..=1).contains(c)));
    }

    #[test]
    fn test_offset_stays_in_bounds() {
        let origin = Coordinate::new(0, 0);
        assert_eq!(
            origin.offset(Direction::DownRight, 2, 3),
            Some(Coordinate::new(2, 2))
        );
        assert_eq!(origin.offset(Direction::DownRight, 3, 3), None);
        assert_eq!(origin.offset(Direction::Up, 1, 3), None);
        assert_eq!(origin.offset(Direction::Left, 0, 3), Some(origin));
    }

    #[test]
    fn test_grid_from_rows() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.letter_at(Coordinate::new(1, 0)), Some('C'));
        assert_eq!(grid[Coordinate::new(0, 1)].letter, 'B');
        assert_eq!(grid.letter_at(Coordinate::new(2, 0)), None);
        assert!(grid
            .cells()
            .all(|cell| grid[cell.coordinate].letter == cell.letter));
    }

    #[test]
    fn test_grid_from_rows_rejects_bad_shapes() {
        assert!(Grid::from_rows::<&str>(&[]).is_none());
        assert!(Grid::from_rows(&["ABC", "DE"]).is_none());
        assert!(Grid::from_rows(&["ab", "cd"]).is_none());
    }
}
