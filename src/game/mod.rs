//! Core Connect Four game logic: board representation, player types, and the
//! mutable engine that drives a game with undo and reset.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, Position, CONNECT, DEFAULT_COLS, DEFAULT_ROWS};
pub use engine::{DropResult, GameEngine, GameStatus, Move, UndoResult};
pub use player::Player;
