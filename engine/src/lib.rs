pub mod config;
pub mod logger;

mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, Cell, Line};
pub use bot_controller::select_move;
pub use error::{ConfigError, OutOfBounds, PlaceMarkError};
pub use game_state::{GameSnapshot, GameState, HUMAN_WIN_POINTS};
pub use session::XoSession;
pub use session_rng::SessionRng;
pub use settings::{DEFAULT_OPPONENT_DELAY_MS, DEFAULT_RESTART_DELAY_MS, SessionSettings};
pub use types::{BOARD_SIZE, LineKind, PlacementRules, Player, Position, RoundPhase, WinningLine};
pub use win_detector::{evaluate, evaluate_with_line};
