use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::{
    game::{
        grid::{GridGenerator, DEFAULT_GRID_SIZE, DEFAULT_PLACEMENT_ATTEMPTS},
        selection::SelectionResolver,
        validator::WordValidator,
    },
    models::{Coordinate, Grid, SolutionMap, WordEntry},
    words::WordList,
};

/// Hints granted per round
pub const DEFAULT_MAX_HINTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub grid_size: usize,
    pub max_attempts: usize,
    pub max_hints: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            max_hints: DEFAULT_MAX_HINTS,
        }
    }
}

/// What a released drag amounted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A new target word was found
    Found {
        word: String,
        cells: Vec<Coordinate>,
        won: bool,
    },
    /// The selection spells a word that was already found this round
    AlreadyFound { word: String },
    /// Nothing matched; `text` is the forward reading
    NoMatch { text: String },
}

/// A clue as shown next to the board
#[derive(Debug, Clone, Copy)]
pub struct Clue<'a> {
    pub entry: &'a WordEntry,
    pub found: bool,
    pub placed: bool,
}

/// Optional stopwatch. Disabling it clears the elapsed time and it stops
/// advancing once the round is won.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    started_at: Option<DateTime<Utc>>,
    stopped_at: Option<DateTime<Utc>>,
}

impl Timer {
    pub fn is_enabled(&self) -> bool {
        self.started_at.is_some()
    }

    fn enable(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
            self.stopped_at = None;
        }
    }

    fn disable(&mut self) {
        self.started_at = None;
        self.stopped_at = None;
    }

    fn stop(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_some() && self.stopped_at.is_none() {
            self.stopped_at = Some(now);
        }
    }

    fn restart(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_some() {
            self.started_at = Some(now);
            self.stopped_at = None;
        }
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        match self.started_at {
            Some(start) => (self.stopped_at.unwrap_or(now) - start).max(Duration::zero()),
            None => Duration::zero(),
        }
    }
}

/// State for one player working through successive rounds.
///
/// Each round owns an immutable board and answer key; `reset` swaps both
/// out together.
pub struct GameSession {
    round_id: Uuid,
    words: WordList,
    settings: SessionSettings,
    validator: WordValidator,
    grid: Grid,
    solutions: SolutionMap,
    skipped: Vec<String>,
    found: Vec<String>,
    found_set: HashSet<String>,
    found_cells: HashSet<Coordinate>,
    hints_remaining: u32,
    active_hint: Option<Coordinate>,
    timer: Timer,
}

impl GameSession {
    pub fn new(words: WordList, settings: SessionSettings, rng: &mut impl Rng) -> Self {
        let validator = WordValidator::new(words.entries().iter().map(|e| e.word.clone()));
        let mut session = Self {
            round_id: Uuid::nil(),
            words,
            settings,
            validator,
            grid: Grid::from_letters(Vec::new()),
            solutions: SolutionMap::default(),
            skipped: Vec::new(),
            found: Vec::new(),
            found_set: HashSet::new(),
            found_cells: HashSet::new(),
            hints_remaining: settings.max_hints,
            active_hint: None,
            timer: Timer::default(),
        };
        session.new_round(rng);
        session
    }

    /// Throw away the current board and start a fresh round
    pub fn reset(&mut self, rng: &mut impl Rng, now: DateTime<Utc>) {
        self.new_round(rng);
        self.timer.restart(now);
    }

    fn new_round(&mut self, rng: &mut impl Rng) {
        let generated = GridGenerator::new(self.settings.grid_size)
            .with_max_attempts(self.settings.max_attempts)
            .generate(self.words.entries(), rng);

        self.round_id = Uuid::new_v4();
        self.grid = generated.grid;
        self.solutions = generated.solutions;
        self.skipped = generated.skipped;
        self.found.clear();
        self.found_set.clear();
        self.found_cells.clear();
        self.hints_remaining = self.settings.max_hints;
        self.active_hint = None;

        tracing::info!(
            "Round {} ready: {} of {} words placed",
            self.round_id,
            self.solutions.len(),
            self.words.len()
        );
        if !self.skipped.is_empty() {
            tracing::warn!(
                "Round {} is missing words: {}",
                self.round_id,
                self.skipped.join(", ")
            );
        }
    }

    /// Resolve a released drag from `start` to `end`.
    ///
    /// The forward reading is tried before the reversed one and only the first
    /// new match is credited. Endpoints off the board select nothing.
    pub fn submit_drag(
        &mut self,
        start: Coordinate,
        end: Coordinate,
        now: DateTime<Utc>,
    ) -> SelectionOutcome {
        if !self.grid.contains(start) || !self.grid.contains(end) {
            tracing::debug!("Ignoring drag {:?} -> {:?} outside the board", start, end);
            return SelectionOutcome::NoMatch {
                text: String::new(),
            };
        }

        let cells = SelectionResolver::cells_on_line(start, end);
        let text = SelectionResolver::word_from_cells(&self.grid, &cells);

        if let Some(word) = self.validator.matches(&text, &self.found_set).into_iter().next() {
            self.found.push(word.clone());
            self.found_set.insert(word.clone());
            self.found_cells.extend(cells.iter().copied());

            let won = self.is_won();
            tracing::info!(
                "Round {}: found {} ({}/{})",
                self.round_id,
                word,
                self.found_placed_count(),
                self.solutions.len()
            );
            if won {
                self.timer.stop(now);
                tracing::info!("Round {} complete", self.round_id);
            }

            return SelectionOutcome::Found { word, cells, won };
        }

        if let Some(word) = WordValidator::readings(&text)
            .into_iter()
            .find(|reading| self.found_set.contains(reading))
        {
            return SelectionOutcome::AlreadyFound { word };
        }

        SelectionOutcome::NoMatch { text }
    }

    /// Reveal the first cell of a random unfound word.
    ///
    /// Returns `None` without spending a hint when none remain, the round is
    /// won, or every placed word is already found.
    pub fn use_hint(&mut self, rng: &mut impl Rng) -> Option<Coordinate> {
        if self.hints_remaining == 0 || self.is_won() {
            return None;
        }

        let unfound: Vec<&[Coordinate]> = self
            .solutions
            .iter()
            .filter(|(word, _)| !self.found_set.contains(*word))
            .map(|(_, cells)| cells)
            .collect();
        if unfound.is_empty() {
            return None;
        }

        let cells = unfound[rng.random_range(0..unfound.len())];
        let first = *cells.first()?;

        self.hints_remaining -= 1;
        self.active_hint = Some(first);
        tracing::debug!(
            "Hint revealed {:?}, {} remaining",
            first,
            self.hints_remaining
        );

        Some(first)
    }

    /// Hide the highlighted hint cell
    pub fn clear_hint(&mut self) {
        self.active_hint = None;
    }

    pub fn enable_timer(&mut self, now: DateTime<Utc>) {
        self.timer.enable(now);
        if self.is_won() {
            self.timer.stop(now);
        }
    }

    pub fn disable_timer(&mut self) {
        self.timer.disable();
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        self.timer.elapsed(now)
    }

    /// All placed words found. A round where nothing could be placed is never won.
    pub fn is_won(&self) -> bool {
        !self.solutions.is_empty() && self.solutions.words().all(|w| self.found_set.contains(w))
    }

    /// `(found, placed)` counting only words that are on the board
    pub fn progress(&self) -> (usize, usize) {
        (self.found_placed_count(), self.solutions.len())
    }

    fn found_placed_count(&self) -> usize {
        self.solutions
            .words()
            .filter(|w| self.found_set.contains(*w))
            .count()
    }

    pub fn clues(&self) -> Vec<Clue<'_>> {
        self.words
            .entries()
            .iter()
            .map(|entry| Clue {
                entry,
                found: self.found_set.contains(&entry.word),
                placed: self.solutions.contains(&entry.word),
            })
            .collect()
    }

    pub fn round_id(&self) -> Uuid {
        self.round_id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn solutions(&self) -> &SolutionMap {
        &self.solutions
    }

    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Found words in the order they were found
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    pub fn is_found_cell(&self, coordinate: Coordinate) -> bool {
        self.found_cells.contains(&coordinate)
    }

    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    pub fn active_hint(&self) -> Option<Coordinate> {
        self.active_hint
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }
}
