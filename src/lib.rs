//! Themed word-search puzzle engine.
//!
//! [`game::GridGenerator`] hides a word list in a fully lettered square board,
//! [`game::SelectionResolver`] turns a straight drag into cells and text, and
//! [`game::GameSession`] keeps the per-round state a front end needs.

pub mod config;
pub mod game;
pub mod models;
pub mod utils;
pub mod words;
