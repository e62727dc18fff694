use crate::board::{Board, Cell};
use crate::error::PlaceMarkError;
use crate::log;
use crate::types::{PlacementRules, Player, Position, RoundPhase};
use crate::win_detector::evaluate_with_line;

pub const HUMAN_WIN_POINTS: u32 = 100;

/// What a presentation layer reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub turn: Player,
    pub winner: Option<Player>,
    pub score: u32,
    pub phase: RoundPhase,
}

#[derive(Debug)]
pub struct GameState {
    board: Board,
    turn: Player,
    winner: Option<Player>,
    score: u32,
    phase: RoundPhase,
    round: u64,
    generation: u64,
    rules: PlacementRules,
}

impl GameState {
    pub fn new(rules: PlacementRules) -> Self {
        Self {
            board: Board::new(),
            turn: Player::Human,
            winner: None,
            score: 0,
            phase: RoundPhase::InProgress,
            round: 0,
            generation: 0,
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Number of finished rounds. Identifies the round a restart belongs to.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Bumped on every mutation. A deferred action holding an older value is stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rules(&self) -> PlacementRules {
        self.rules
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            turn: self.turn,
            winner: self.winner,
            score: self.score,
            phase: self.phase,
        }
    }

    /// Writes `player`'s mark, flips the turn and evaluates the round.
    ///
    /// Returns the verdict if the placement ended the round.
    pub fn place_mark(&mut self, position: Position, player: Player) -> Result<Option<Player>, PlaceMarkError> {
        if self.phase != RoundPhase::InProgress {
            return Err(PlaceMarkError::RoundOver);
        }

        if self.rules == PlacementRules::Strict {
            if player != self.turn {
                return Err(PlaceMarkError::NotYourTurn { player });
            }
            if self.board.cell(position) != Cell::Empty {
                return Err(PlaceMarkError::CellOccupied {
                    row: position.row(),
                    col: position.col(),
                });
            }
        }

        self.board.place(position, player.cell());
        self.turn = self.turn.other();
        self.generation += 1;

        Ok(self.evaluate_round())
    }

    /// Runs the win detector and, on a verdict, closes the round: the score is
    /// updated, the board cleared and the state held in `RoundOver` until
    /// [`GameState::rearm`].
    pub fn evaluate_round(&mut self) -> Option<Player> {
        let line = evaluate_with_line(&self.board)?;
        let verdict = line.player;

        if verdict == Player::Human {
            self.score += HUMAN_WIN_POINTS;
        }

        log!(
            "Round {} won by {} on {} ({} -> {}), score {}",
            self.round + 1,
            verdict,
            line.kind,
            line.start(),
            line.end(),
            self.score
        );

        self.winner = Some(verdict);
        self.board.reset();
        self.phase = RoundPhase::RoundOver;
        self.round += 1;
        self.generation += 1;

        Some(verdict)
    }

    /// Starts the next round after a verdict. The turn stays whatever it was
    /// when the round ended. Returns false if `round` is not the round that
    /// just ended.
    pub fn rearm(&mut self, round: u64) -> bool {
        if self.phase != RoundPhase::RoundOver || self.round != round {
            return false;
        }

        self.winner = None;
        self.phase = RoundPhase::InProgress;
        self.generation += 1;

        log!("Round {} started, {} moves first", self.round + 1, self.turn);
        true
    }

    /// Clears the board only; score, winner, turn and phase are kept.
    pub fn reset_round(&mut self) {
        self.board.reset();
        self.generation += 1;

        log!("Board reset during round {} ({} to move)", self.round + 1, self.turn);
    }
}
