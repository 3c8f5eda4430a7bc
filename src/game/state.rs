use crate::config::GameConfig;

use super::{board, Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state at the configured board size
    pub fn new(config: &GameConfig) -> Self {
        GameState {
            board: Board::new(config),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                board::MoveError::ColumnFull => MoveError::ColumnFull,
                board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        // Check for win
        if self.board.check_win(row, column) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(&GameConfig::default());
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::new(&GameConfig::default());
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
        // Original state is untouched
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_invalid_column_rejected() {
        let mut state = GameState::new(&GameConfig::default());
        assert_eq!(state.apply_move_mut(7), Err(MoveError::InvalidColumn));
        assert_eq!(state.current_player(), Player::Red);
    }

    #[test]
    fn test_full_column_rejected() {
        let mut state = GameState::new(&GameConfig::default());
        for _ in 0..3 {
            state.apply_move_mut(0).unwrap(); // Red
            state.apply_move_mut(0).unwrap(); // Yellow
        }
        assert_eq!(state.apply_move_mut(0), Err(MoveError::ColumnFull));
        assert!(!state.legal_actions().contains(&0));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::new(&GameConfig::default());

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_win_with_configured_length() {
        let config = GameConfig {
            rows: 4,
            cols: 4,
            win_length: 3,
        };
        let mut state = GameState::new(&config);

        state.apply_move_mut(0).unwrap(); // Red
        state.apply_move_mut(3).unwrap(); // Yellow
        state.apply_move_mut(1).unwrap(); // Red
        state.apply_move_mut(3).unwrap(); // Yellow
        state.apply_move_mut(2).unwrap(); // Red completes three in a row

        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut state = GameState::new(&GameConfig::default());
        for _ in 0..3 {
            state.apply_move_mut(0).unwrap(); // Red
            state.apply_move_mut(1).unwrap(); // Yellow
        }
        state.apply_move_mut(0).unwrap(); // Red wins vertically

        assert!(state.is_terminal());
        assert_eq!(state.apply_move_mut(2), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        let config = GameConfig {
            rows: 4,
            cols: 4,
            win_length: 4,
        };
        let mut state = GameState::new(&config);

        // Fills the board as two-row color bands per column, leaving no run
        // of four in any direction:
        //   Y R Y R
        //   Y R Y R
        //   R Y R Y
        //   R Y R Y
        let moves = [0, 1, 0, 1, 2, 3, 2, 3, 1, 0, 1, 0, 3, 2, 3, 2];
        for &col in &moves {
            state.apply_move_mut(col).unwrap();
        }

        assert!(state.board().is_full());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }
}
