//! Game state management for the Isolation GUI

use crate::{AIEngine, Board, Deadline, GameBoard, MoveResult, Player, Pos, SearchConfig, SearchType};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Default board side in the GUI
pub const DEFAULT_BOARD_SIDE: u8 = crate::board::DEFAULT_SIDE;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::One }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<crate::Result<MoveResult>>,
        start_time: Instant,
    },
}

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    /// Loser had no legal move
    Isolation,
    /// Engine ran out of time before finishing depth 1
    Forfeit,
    /// Engine saw a forced loss on every move and resigned
    Resignation,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Player,
    pub win_type: WinType,
}

/// Engine options edited from the settings card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiSettings {
    pub config: SearchConfig,
    /// Wall-clock budget per engine move
    pub time_limit_ms: u64,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            time_limit_ms: 1_000,
        }
    }
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
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
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Player)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    pub settings: AiSettings,
    board_side: u8,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::default(),
            mode,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            settings: AiSettings::default(),
            board_side: DEFAULT_BOARD_SIDE,
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new(self.board_side, self.board_side).unwrap_or_default();
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    /// Side length used by the next new game
    pub fn board_side(&self) -> u8 {
        self.board_side
    }

    pub fn set_board_side(&mut self, side: u8) {
        self.board_side = side;
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.board.active_player()
    }

    /// Moves available to the side to act
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.board.legal_moves(self.current_turn())
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() == human,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() != human,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to move the current player's token to the given cell
    pub fn try_move(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !self.board.is_legal(pos) {
            return Err("Not a legal move".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let player = self.current_turn();
        self.board.apply_move(pos);

        self.move_history.push((pos, player));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.move_timer.stop();

        // The side now on move has nowhere to go
        if self.legal_moves().is_empty() {
            self.game_over = Some(GameResult {
                winner: player,
                win_type: WinType::Isolation,
            });
            return;
        }

        self.move_timer.start();
        self.message = None;
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let legal = self.legal_moves();
        let AiSettings { config, time_limit_ms } = self.settings;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let deadline = Deadline::from_millis(time_limit_ms);
            let result = AIEngine::new(config)
                .map(|mut engine| engine.get_move_with_stats(&board, &legal, &deadline));
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
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
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

        let Some((result, elapsed)) = result else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(elapsed);

        let move_result = match result {
            Ok(move_result) => move_result,
            Err(err) => {
                log::error!("engine rejected its configuration: {err}");
                self.message = Some(format!("AI error: {err}"));
                return;
            }
        };
        self.last_ai_result = Some(move_result);

        match (move_result.best_move, move_result.search_type) {
            (Some(pos), _) => self.execute_move(pos),
            (None, SearchType::Forfeit) => {
                self.game_over = Some(GameResult {
                    winner: self.current_turn().opponent(),
                    win_type: WinType::Forfeit,
                });
                self.message = Some("AI ran out of time and forfeits".to_string());
            }
            (None, SearchType::Search) => {
                self.game_over = Some(GameResult {
                    winner: self.current_turn().opponent(),
                    win_type: WinType::Resignation,
                });
                self.message = Some("AI sees a forced loss and resigns".to_string());
            }
            (None, _) => self.message = Some("AI could not find a move".to_string()),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let legal = self.legal_moves();
        // Quick suggestion with a short budget
        let deadline = Deadline::from_millis(self.settings.time_limit_ms.min(300));
        match AIEngine::new(self.settings.config) {
            Ok(mut engine) => {
                let result = engine.get_move_with_stats(&self.board, &legal, &deadline);
                self.suggested_move = result.best_move;
                self.last_ai_result = Some(result);
            }
            Err(err) => self.message = Some(format!("AI error: {err}")),
        }
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        // For PvE, undo two moves (human + AI)
        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };
        let keep = self.move_history.len().saturating_sub(undo_count);
        self.move_history.truncate(keep);

        let moves: Vec<Pos> = self.move_history.iter().map(|&(pos, _)| pos).collect();
        let (height, width) = self.board.dimensions();
        match Board::replay(height, width, &moves) {
            Ok(board) => self.board = board,
            Err(err) => {
                self.message = Some(err.to_string());
                return;
            }
        }

        self.game_over = None;
        self.last_move = moves.last().copied();
        self.suggested_move = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotseat() -> GameState {
        GameState::new(GameMode::PvP {
            show_suggestions: false,
        })
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = hotseat();
        assert_eq!(state.current_turn(), Player::One);
        state.try_move(Pos::new(3, 3)).unwrap();
        assert_eq!(state.current_turn(), Player::Two);
        state.try_move(Pos::new(0, 0)).unwrap();
        assert_eq!(state.current_turn(), Player::One);
        assert_eq!(state.move_history.len(), 2);
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut state = hotseat();
        state.try_move(Pos::new(3, 3)).unwrap();
        state.try_move(Pos::new(0, 0)).unwrap();
        // Not a knight jump from (3, 3)
        assert!(state.try_move(Pos::new(3, 4)).is_err());
        // Visited
        assert!(state.try_move(Pos::new(0, 0)).is_err());
        assert!(state.try_move(Pos::new(1, 2)).is_ok());
    }

    #[test]
    fn test_game_over_when_mover_is_stuck() {
        let mut state = hotseat();
        state.set_board_side(3);
        state.reset();
        state.try_move(Pos::new(0, 0)).unwrap();
        // (1, 1) has no knight moves on a 3x3 board
        state.try_move(Pos::new(1, 1)).unwrap();
        state.try_move(Pos::new(1, 2)).unwrap();

        assert_eq!(
            state.game_over,
            Some(GameResult {
                winner: Player::One,
                win_type: WinType::Isolation,
            })
        );
        assert!(state.try_move(Pos::new(2, 0)).is_err());
    }

    #[test]
    fn test_undo_replays_history() {
        let mut state = hotseat();
        state.try_move(Pos::new(3, 3)).unwrap();
        state.try_move(Pos::new(0, 0)).unwrap();
        let before = state.board.clone();
        state.try_move(Pos::new(1, 2)).unwrap();

        state.undo();
        assert_eq!(state.board, before);
        assert_eq!(state.last_move, Some(Pos::new(0, 0)));
        assert_eq!(state.current_turn(), Player::One);
    }

    #[test]
    fn test_pve_undo_takes_back_both_moves() {
        let mut state = GameState::new(GameMode::PvE { human: Player::One });
        state.try_move(Pos::new(3, 3)).unwrap();
        // Stand-in for the engine reply
        state.execute_move(Pos::new(0, 0));
        state.undo();
        assert!(state.move_history.is_empty());
        assert_eq!(state.board, Board::default());
    }

    #[test]
    fn test_engine_resigns_lost_position() {
        let mut state = GameState::new(GameMode::PvE { human: Player::One });
        state.try_move(Pos::new(3, 3)).unwrap();
        let (sender, receiver) = channel();
        state.ai_state = AiState::Thinking {
            receiver,
            start_time: Instant::now(),
        };
        sender
            .send(Ok(MoveResult {
                best_move: None,
                score: f64::NEG_INFINITY,
                search_type: SearchType::Search,
                depth: 3,
                nodes: 42,
                time_ms: 1,
            }))
            .unwrap();

        state.check_ai_result();
        assert!(!state.is_ai_thinking());
        assert_eq!(
            state.game_over,
            Some(GameResult {
                winner: Player::One,
                win_type: WinType::Resignation,
            })
        );
        assert_eq!(state.move_history.len(), 1);
    }

    #[test]
    fn test_suggestion_is_legal() {
        let mut state = hotseat();
        state.try_move(Pos::new(3, 3)).unwrap();
        state.try_move(Pos::new(0, 0)).unwrap();
        state.settings.config = state.settings.config.with_iterative(false).with_depth(1);
        state.request_suggestion();
        let suggestion = state.suggested_move.unwrap();
        assert!(state.legal_moves().contains(&suggestion));
    }
}
