use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ready -> Playing, on the first open
/// - Playing -> Won
/// - Playing -> Lost
///
/// Only a restart leads back to `Ready`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No mines placed yet
    #[default]
    Ready,
    /// Mines placed, reveals and flags accepted
    Playing,
    /// Every safe cell was opened
    Won,
    /// A mine was opened
    Lost,
}

impl GamePhase {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Notification sent to observers after a session call has finished mutating the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Started { first_click: Coord2 },
    Opened { coords: Coord2, revealed: CellCount },
    Flagged { coords: Coord2, outcome: FlagOutcome },
    Won,
    Lost { exploded: Coord2 },
    Restarted { config: GameConfig },
}

/// Fire-and-forget listener for presentation side channels such as sound or flavor text.
///
/// Observers cannot report errors back, whatever fails inside them stays there.
pub trait SessionObserver {
    fn notify(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> SessionObserver for F {
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Owns the board and the phase of one game at a time, from the first open to a win or a loss.
pub struct Session<G = RandomMineGenerator> {
    config: GameConfig,
    board: Board,
    phase: GamePhase,
    exploded_cell: Option<Coord2>,
    generator: G,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Session {
    /// Session with a seeded random generator and the default 3x3 safe zone.
    pub fn with_seed(config: impl Into<GameConfig>, seed: u64) -> Result<Self> {
        Self::new(config, RandomMineGenerator::new(seed))
    }
}

impl<G: MineGenerator> Session<G> {
    pub fn new(config: impl Into<GameConfig>, generator: G) -> Result<Self> {
        let config = config.into();
        config.validate()?;
        Ok(Self {
            config,
            board: Board::new(config.rows, config.cols)?,
            phase: GamePhase::Ready,
            exploded_cell: None,
            generator,
            observers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn flags_used(&self) -> CellCount {
        self.board.flagged_count()
    }

    /// Mine total minus flags placed, the counter shown to the player.
    pub fn flags_remaining(&self) -> CellCount {
        self.config.mines.saturating_sub(self.flags_used())
    }

    /// The mine that ended the game, if it was lost.
    pub fn exploded_cell(&self) -> Option<Coord2> {
        self.exploded_cell
    }

    /// Opens a cell, planting mines around it first if this is the first open of the game.
    pub fn open(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.phase.is_finished() {
            log::debug!("Game already ended, ignoring open at {:?}", coords);
            return Ok(RevealOutcome::NoChange);
        }
        if !self.board[coords].is_closed() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.phase.is_ready() {
            self.generator
                .plant(&mut self.board, self.config.mines, coords)?;
            self.phase = GamePhase::Playing;
            log::debug!("Game started at {:?}", coords);
            self.emit(GameEvent::Started { first_click: coords });
        }

        if reveal_cell(&mut self.board, coords) {
            self.exploded_cell = Some(coords);
            reveal_all_mines(&mut self.board);
            self.phase = GamePhase::Lost;
            log::debug!("Game lost at {:?}", coords);
            self.emit(GameEvent::Lost { exploded: coords });
            return Ok(RevealOutcome::HitMine);
        }

        let revealed = self.board.revealed_count();
        self.emit(GameEvent::Opened { coords, revealed });

        if check_win(&self.board) {
            self.phase = GamePhase::Won;
            log::debug!("Game won with {} cells revealed", revealed);
            self.emit(GameEvent::Won);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Toggles a flag while the game is ready or in progress.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.phase.is_finished() {
            log::debug!("Game already ended, ignoring flag at {:?}", coords);
            return Ok(FlagOutcome::NoChange);
        }

        let outcome = toggle_flag(&mut self.board, coords, self.config.mines);
        if outcome.has_update() {
            self.emit(GameEvent::Flagged { coords, outcome });
        }
        Ok(outcome)
    }

    /// Discards the board and starts over with the same configuration.
    pub fn restart(&mut self) -> Result<()> {
        self.board = Board::new(self.config.rows, self.config.cols)?;
        self.phase = GamePhase::Ready;
        self.exploded_cell = None;
        log::debug!("Restarted with {:?}", self.config);
        self.emit(GameEvent::Restarted {
            config: self.config,
        });
        Ok(())
    }

    /// Switches to another configuration, which always starts a fresh game.
    pub fn set_difficulty(&mut self, config: impl Into<GameConfig>) -> Result<()> {
        let config = config.into();
        config.validate()?;
        self.config = config;
        self.restart()
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}
