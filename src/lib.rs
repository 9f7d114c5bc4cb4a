//! arcboard - Loading, validation and display of ARC-style grid puzzle datasets

pub mod board;
pub mod loader;
pub mod palette;
pub mod plot;
pub mod riddle;

// Re-export commonly used types
pub use board::{Board, BoardError, MAX_CELL_VALUE};
pub use loader::{DatasetError, read_dataset};
pub use plot::{Figure, Panel, PanelSlot};
pub use riddle::{BoardPair, Riddle, SaveError};
