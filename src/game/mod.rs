// Word search engine: board generation, drag resolution and round state

pub mod grid;
pub mod selection;
pub mod session;
pub mod validator;

pub use grid::{GeneratedGrid, GridGenerator, Placement};
pub use selection::SelectionResolver;
pub use session::{Clue, GameSession, SelectionOutcome, SessionSettings};
pub use validator::WordValidator;
