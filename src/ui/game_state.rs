//! Game state management for the Othello GUI

use crate::eval::EvalMode;
use crate::{AIEngine, Board, Coord, EngineConfig, EngineMode, Move, MoveResult, Side};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Depth used for the hint button; kept shallow so the UI does not stall
const HINT_DEPTH: u8 = 4;

/// Reasons a human move is rejected
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    #[error("game is over")]
    GameOver,
    #[error("AI is thinking")]
    AiThinking,
    #[error("not your turn")]
    NotYourTurn,
    #[error("illegal move at {0}")]
    IllegalMove(Coord),
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_side: Side },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_side: Side::Black,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Final outcome, filled in once neither side can move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `None` on a draw
    pub winner: Option<Side>,
    pub black: u32,
    pub white: u32,
}

impl GameResult {
    fn from_board(board: &Board) -> Self {
        Self {
            winner: board.winner(),
            black: board.count_black(),
            white: board.count_white(),
        }
    }
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub to_move: Side,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Coord>,
    /// Every move played, passes included, in order
    pub move_history: Vec<(Move, Side)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Coord>,
    pub message: Option<String>,
    pub show_hints: bool,

    // AI engine configuration
    pub engine_mode: EngineMode,
    ai_time_budget_ms: u64,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            to_move: Side::Black,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            show_hints: true,
            engine_mode: EngineMode::Production,
            ai_time_budget_ms: 5_000,
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Side::Black;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_side } => self.to_move == human_side,
            GameMode::PvP => true,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_side } => self.to_move != human_side,
            GameMode::PvP => false,
        }
    }

    /// Side the engine plays, if any
    pub fn ai_side(&self) -> Option<Side> {
        match self.mode {
            GameMode::PvE { human_side } => Some(human_side.opponent()),
            GameMode::PvP => None,
        }
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a disk for the human player
    pub fn try_place(&mut self, pos: Coord) -> Result<(), PlayError> {
        if self.game_over.is_some() {
            return Err(PlayError::GameOver);
        }

        if self.is_ai_thinking() {
            return Err(PlayError::AiThinking);
        }

        if !self.is_human_turn() {
            return Err(PlayError::NotYourTurn);
        }

        if !self.board.is_legal_move(Move::Place(pos), self.to_move) {
            return Err(PlayError::IllegalMove(pos));
        }

        self.execute_move(Move::Place(pos));
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mov: Move) {
        let side = self.to_move;

        if !self.board.apply_move(mov, side) {
            log::warn!("rejected {} {} in GUI", side.name(), mov);
            return;
        }

        self.move_history.push((mov, side));
        if let Move::Place(pos) = mov {
            self.last_move = Some(pos);
        }
        self.suggested_move = None;
        self.message = None;

        self.to_move = side.opponent();
        self.settle_turn();
        self.move_timer.start();
    }

    /// End the game or skip a side that cannot move
    fn settle_turn(&mut self) {
        if self.board.is_terminal() {
            let result = GameResult::from_board(&self.board);
            log::info!(
                "game over: black {} white {} ({:?})",
                result.black,
                result.white,
                result.winner
            );
            self.game_over = Some(result);
            return;
        }

        if !self.board.has_any_move(self.to_move) {
            let side = self.to_move;
            log::info!("{} has no legal move, passing", side.name());
            self.move_history.push((Move::Pass, side));
            self.message = Some(format!("{} has no legal move and passes", side.name()));
            self.to_move = side.opponent();
        }
    }

    fn engine_config(&self) -> EngineConfig {
        self.engine_mode.config()
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let side = self.to_move;
        let config = self.engine_config();
        let budget = self.ai_time_budget_ms;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_board(side, config, board);
            let result = engine.choose_move_with_stats(Some(budget));
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result);
            self.move_timer.set_ai_time(elapsed);

            match move_result.chosen {
                Move::Place(_) => self.execute_move(move_result.chosen),
                Move::Pass => {
                    // Only reachable if the position changed under the engine
                    self.move_history.push((Move::Pass, self.to_move));
                    self.to_move = self.to_move.opponent();
                    self.settle_turn();
                }
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Run a shallow search for the side to move and mark the result
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let config = EngineConfig::new(HINT_DEPTH, EvalMode::Heuristic);
        let mut engine = AIEngine::with_board(self.to_move, config, self.board);
        let result = engine.choose_move_with_stats(None);

        self.suggested_move = result.chosen.coord();
        self.last_ai_result = Some(result);
    }

    /// Take back the last human move (and any engine replies after it)
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        let last_human = match self.mode {
            GameMode::PvE { human_side } => self
                .move_history
                .iter()
                .rposition(|&(mov, side)| side == human_side && !mov.is_pass()),
            GameMode::PvP => self.move_history.iter().rposition(|(mov, _)| !mov.is_pass()),
        };

        let Some(keep) = last_human else {
            return;
        };

        self.move_history.truncate(keep);
        self.replay();
    }

    /// Rebuild the board from the move history
    fn replay(&mut self) {
        self.board = Board::new();
        self.to_move = Side::Black;
        self.game_over = None;
        self.last_move = None;
        self.suggested_move = None;
        self.message = None;

        for &(mov, side) in &self.move_history {
            self.board.apply_move(mov, side);
            if let Move::Place(pos) = mov {
                self.last_move = Some(pos);
            }
            self.to_move = side.opponent();
        }

        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().expect("valid board")
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(GameMode::default());
        assert_eq!(state.to_move, Side::Black);
        assert!(state.is_human_turn());
        assert!(!state.is_ai_turn());
        assert_eq!(state.ai_side(), Some(Side::White));
        assert!(state.game_over.is_none());
    }

    #[test]
    fn test_try_place_errors() {
        let mut state = GameState::new(GameMode::PvP);
        assert_eq!(
            state.try_place(Coord::new(0, 0)),
            Err(PlayError::IllegalMove(Coord::new(0, 0)))
        );

        let mut state = GameState::new(GameMode::PvE {
            human_side: Side::White,
        });
        assert_eq!(state.try_place(Coord::new(2, 3)), Err(PlayError::NotYourTurn));
    }

    #[test]
    fn test_play_error_messages() {
        assert_eq!(PlayError::GameOver.to_string(), "game is over");
        assert_eq!(
            PlayError::IllegalMove(Coord::new(1, 2)).to_string(),
            "illegal move at (1, 2)"
        );
    }

    #[test]
    fn test_hotseat_alternates() {
        let mut state = GameState::new(GameMode::PvP);
        assert_eq!(state.try_place(Coord::new(2, 3)), Ok(()));
        assert_eq!(state.to_move, Side::White);
        assert_eq!(state.last_move, Some(Coord::new(2, 3)));

        assert_eq!(state.try_place(Coord::new(2, 2)), Ok(()));
        assert_eq!(state.to_move, Side::Black);
        assert_eq!(state.move_history.len(), 2);
    }

    #[test]
    fn test_auto_pass() {
        let mut state = GameState::new(GameMode::PvP);
        state.board = board(
            "bw......
             ........
             ........
             ........
             ........
             ........
             ........
             ......wb",
        );

        assert_eq!(state.try_place(Coord::new(2, 0)), Ok(()));

        // White is stuck, so Black moves again
        assert_eq!(state.to_move, Side::Black);
        assert_eq!(state.move_history.last(), Some(&(Move::Pass, Side::White)));
        assert!(state.message.is_some());
        assert!(state.game_over.is_none());
    }

    #[test]
    fn test_game_over() {
        let mut state = GameState::new(GameMode::PvP);
        state.board = board(
            "bww.....
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );

        assert_eq!(state.try_place(Coord::new(3, 0)), Ok(()));
        assert_eq!(
            state.game_over,
            Some(GameResult {
                winner: Some(Side::Black),
                black: 4,
                white: 0,
            })
        );
        assert_eq!(state.try_place(Coord::new(4, 0)), Err(PlayError::GameOver));
    }

    #[test]
    fn test_undo_hotseat() {
        let mut state = GameState::new(GameMode::PvP);
        state.try_place(Coord::new(2, 3)).expect("legal");
        state.try_place(Coord::new(2, 2)).expect("legal");

        state.undo();
        assert_eq!(state.move_history.len(), 1);
        assert_eq!(state.to_move, Side::White);
        assert_eq!(state.last_move, Some(Coord::new(2, 3)));

        state.undo();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.to_move, Side::Black);
        assert_eq!(state.last_move, None);

        // Nothing left to take back
        state.undo();
        assert!(state.move_history.is_empty());
    }

    #[test]
    fn test_undo_removes_engine_reply() {
        let mut state = GameState::new(GameMode::default());
        state.try_place(Coord::new(2, 3)).expect("legal");
        state.execute_move(Move::at(2, 2));
        assert_eq!(state.move_history.len(), 2);

        state.undo();
        assert!(state.move_history.is_empty());
        assert_eq!(state.board, Board::new());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_suggestion_is_legal() {
        let mut state = GameState::new(GameMode::PvP);
        state.request_suggestion();

        let pos = state.suggested_move.expect("opening has moves");
        assert!(Board::new().legal_moves(Side::Black).contains(&pos));
        // Suggesting does not play the move
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_ai_replies_on_background_thread() {
        let mut state = GameState::new(GameMode::default());
        state.engine_mode = EngineMode::Validation;
        state.try_place(Coord::new(2, 3)).expect("legal");

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        assert_eq!(state.try_place(Coord::new(2, 2)), Err(PlayError::AiThinking));

        for _ in 0..500 {
            state.check_ai_result();
            if !state.is_ai_thinking() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }

        assert!(!state.is_ai_thinking());
        assert_eq!(state.move_history.len(), 2);
        assert_eq!(state.to_move, Side::Black);
        assert_eq!(state.board.total_occupied(), 6);
    }
}
