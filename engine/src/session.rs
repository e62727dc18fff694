use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, Notify, watch};
use tokio::time::{Instant, sleep, sleep_until};

use crate::bot_controller::select_move;
use crate::error::PlaceMarkError;
use crate::game_state::{GameSnapshot, GameState};
use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::SessionSettings;
use crate::types::{PlacementRules, Player, Position, RoundPhase};

/// One game session: the single `GameState`, its timers and its subscribers.
///
/// Cloning yields another handle to the same session. [`XoSession::run`]
/// drives the opponent and the restart hold and must be spawned once; the
/// human side calls [`XoSession::place_mark`] and [`XoSession::reset_round`].
#[derive(Clone)]
pub struct XoSession {
    state: Arc<Mutex<GameState>>,
    rng: Arc<Mutex<SessionRng>>,
    settings: SessionSettings,
    seed: u64,
    changed: Arc<Notify>,
    snapshot_tx: Arc<watch::Sender<GameSnapshot>>,
    stopped: Arc<AtomicBool>,
}

enum Step {
    Idle,
    OpponentTurn { generation: u64 },
    Restart { round: u64, deadline: Instant },
}

impl XoSession {
    pub fn new(settings: SessionSettings) -> Self {
        let rng = SessionRng::from_seed_or_random(settings.seed);
        let seed = rng.seed();
        let state = GameState::new(settings.rules);
        let (snapshot_tx, _) = watch::channel(state.snapshot());

        Self {
            state: Arc::new(Mutex::new(state)),
            rng: Arc::new(Mutex::new(rng)),
            settings,
            seed,
            changed: Arc::new(Notify::new()),
            snapshot_tx: Arc::new(snapshot_tx),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Human move. Refused placements leave the session untouched.
    pub async fn place_mark(&self, row: usize, col: usize) -> Result<Option<Player>, PlaceMarkError> {
        let result = self.try_place_human(row, col).await;
        if let Err(e) = &result {
            log!("[session:{}] Human move at ({}, {}) refused: {}", self.seed, row, col, e);
        }
        result
    }

    async fn try_place_human(&self, row: usize, col: usize) -> Result<Option<Player>, PlaceMarkError> {
        let position = Position::new(row, col)?;

        let mut state = self.state.lock().await;
        let verdict = state.place_mark(position, Player::Human)?;
        self.publish(&state);
        drop(state);

        self.changed.notify_one();
        Ok(verdict)
    }

    /// Clears the board mid-round. Any pending opponent move is superseded.
    pub async fn reset_round(&self) {
        let mut state = self.state.lock().await;
        state.reset_round();
        self.publish(&state);
        drop(state);

        self.changed.notify_one();
    }

    /// Stops [`XoSession::run`] at its next wake-up.
    pub fn shutdown(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        self.changed.notify_one();
    }

    pub async fn run(self) {
        log!(
            "[session:{}] Started (opponent delay {:?}, restart delay {:?}, {:?} rules)",
            self.seed,
            self.settings.opponent_delay(),
            self.settings.restart_delay(),
            self.settings.rules
        );

        let mut pending_restart: Option<(u64, Instant)> = None;

        while !self.stopped.load(Ordering::SeqCst) {
            match self.next_step(&mut pending_restart).await {
                Step::Idle => self.changed.notified().await,
                Step::OpponentTurn { generation } => {
                    tokio::select! {
                        _ = sleep(self.settings.opponent_delay()) => {
                            self.play_opponent_turn(generation).await;
                        }
                        _ = self.changed.notified() => {}
                    }
                }
                Step::Restart { round, deadline } => {
                    tokio::select! {
                        _ = sleep_until(deadline) => {
                            self.restart(round).await;
                        }
                        _ = self.changed.notified() => {}
                    }
                }
            }
        }

        log!("[session:{}] Stopped", self.seed);
    }

    async fn next_step(&self, pending_restart: &mut Option<(u64, Instant)>) -> Step {
        let state = self.state.lock().await;

        match state.phase() {
            RoundPhase::RoundOver => {
                let round = state.round();
                let deadline = match *pending_restart {
                    Some((pending_round, deadline)) if pending_round == round => deadline,
                    _ => {
                        let deadline = Instant::now() + self.settings.restart_delay();
                        *pending_restart = Some((round, deadline));
                        deadline
                    }
                };
                Step::Restart { round, deadline }
            }
            RoundPhase::InProgress if state.turn() == Player::Opponent => {
                // A full board under strict rules has nothing left to pick; wait for a reset.
                if state.rules() == PlacementRules::Strict && state.board().is_full() {
                    Step::Idle
                } else {
                    Step::OpponentTurn {
                        generation: state.generation(),
                    }
                }
            }
            RoundPhase::InProgress => Step::Idle,
        }
    }

    async fn play_opponent_turn(&self, generation: u64) {
        let mut state = self.state.lock().await;

        if state.generation() != generation
            || state.phase() != RoundPhase::InProgress
            || state.turn() != Player::Opponent
        {
            return;
        }

        if state.evaluate_round().is_some() {
            self.publish(&state);
            return;
        }

        let chosen = {
            let mut rng = self.rng.lock().await;
            select_move(state.board(), &mut rng, state.rules())
        };

        let Some(position) = chosen else {
            log!("[session:{}] Opponent found no move, retrying", self.seed);
            return;
        };

        match state.place_mark(position, Player::Opponent) {
            Ok(_) => self.publish(&state),
            Err(e) => {
                log!("[session:{}] Opponent failed to place mark at {}: {}", self.seed, position, e);
            }
        }
    }

    async fn restart(&self, round: u64) {
        let mut state = self.state.lock().await;
        if state.rearm(round) {
            self.publish(&state);
        }
    }

    fn publish(&self, state: &GameState) {
        self.snapshot_tx.send_replace(state.snapshot());
    }
}
