use tracing::{debug, info, instrument};

use super::board::{Board, Cell, Position, CONNECT};
use super::Player;
use crate::error::{BoardError, MoveError, UndoError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(Player),
    Tie,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A single successful drop, as recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

/// Everything a front end needs to render a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResult {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    pub status: GameStatus,
}

/// The cell vacated by an undo and whose piece it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoResult {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Turn-based Connect Four state machine.
///
/// Owns the grid, the player to move, the drop history and the game status.
/// Every operation either succeeds completely or returns an error without
/// touching any of them.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEngine {
    board: Board,
    history: Vec<Move>,
    current_player: Player,
    status: GameStatus,
}

impl GameEngine {
    /// Create an engine for a `width` x `height` grid
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::with_size(width, height)?))
    }

    fn with_board(board: Board) -> Self {
        GameEngine {
            board,
            history: Vec::new(),
            current_player: Player::One, // Player 1 starts
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Cell contents, `None` if `(row, col)` is off the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Get list of columns that still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// The four cells that won the game, while the status is `Win`
    pub fn winning_line(&self) -> Option<[Position; CONNECT]> {
        match self.status {
            GameStatus::Win(player) => self.board.winning_line(player),
            _ => None,
        }
    }

    /// Drop the current player's piece into `column`.
    ///
    /// The turn passes to the other player only while the game stays in
    /// progress; after a win or tie the winner (or last mover) stays current.
    #[instrument(skip(self), fields(player = self.current_player.id()))]
    pub fn drop_piece(&mut self, column: usize) -> Result<DropResult, MoveError> {
        if self.is_terminal() {
            debug!("drop rejected, game is over");
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(column, player.to_cell())
            .inspect_err(|e| debug!(error = %e, "drop rejected"))?;
        self.history.push(Move {
            column,
            row,
            player,
        });
        debug!(row, moves = self.history.len(), "piece placed");

        if self.board.check_win(player) {
            self.status = GameStatus::Win(player);
            info!(winner = player.id(), moves = self.history.len(), "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Tie;
            info!(moves = self.history.len(), "game tied");
        } else {
            self.current_player = player.other();
        }

        Ok(DropResult {
            row,
            column,
            player,
            status: self.status,
        })
    }

    /// Take back the most recent drop. The player who made it moves again.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<UndoResult, UndoError> {
        let last = self.history.pop().ok_or(UndoError::NothingToUndo)?;

        self.board.clear_cell(last.row, last.column);
        // Only the move just removed can have ended the game.
        self.status = GameStatus::InProgress;
        self.current_player = last.player;
        debug!(
            row = last.row,
            column = last.column,
            player = last.player.id(),
            "move undone"
        );

        Ok(UndoResult {
            row: last.row,
            column: last.column,
            player: last.player,
        })
    }

    /// Clear the board and history and hand the first move back to player 1
    pub fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
        info!(
            width = self.width(),
            height = self.height(),
            "game reset"
        );
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_board(Board::new())
    }
}
