pub mod game;
pub mod word;

pub use game::{
    // Board types
    Coordinate, Direction, Grid, GridCell,
    // Answer key
    SolutionMap,
};
pub use word::WordEntry;
