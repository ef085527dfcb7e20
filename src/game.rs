use log::{debug, info};
use web_time::Instant;

use crate::ai::GreedySelector;
use crate::board::{Board, mask_positions};
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::types::{GameResult, GameState, Position, Side};

const BOARD_LEN: usize = 64;

pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, side: Side) -> Option<Position>;
}

/// Turn/terminal state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress(Side),
    GameOver(GameResult),
}

/// Everything derived from one board transition. Replaced as a whole after
/// each move so the board, status and move info never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Turn {
    board: Board,
    status: Status,
    last_move: Option<Position>,
    flipped: u64,
    skipped: Option<Side>,
}

impl Turn {
    fn start(board: Board, side: Side) -> Self {
        let (status, skipped) = resolve(&board, side);
        Self {
            board,
            status,
            last_move: None,
            flipped: 0,
            skipped,
        }
    }
}

/// Decides who moves on `board` when `side` is nominally next.
///
/// `side` keeps the move if it can play; otherwise it is skipped in favour of
/// its opponent; if neither can play the game is over. Returns the skipped
/// side alongside the status.
pub fn resolve(board: &Board, side: Side) -> (Status, Option<Side>) {
    if board.has_any_legal_move(side) {
        return (Status::InProgress(side), None);
    }
    if board.has_any_legal_move(side.opponent()) {
        return (Status::InProgress(side.opponent()), Some(side));
    }

    let (black_count, white_count) = board.count();
    (
        Status::GameOver(GameResult::from_counts(black_count, white_count)),
        None,
    )
}

pub struct Game {
    config: GameConfig,
    turn: Turn,
    selector: Box<dyn MoveSelector>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_selector(config, Box::new(GreedySelector))
    }

    pub fn with_selector(config: GameConfig, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            config,
            turn: Turn::start(Board::new(), Side::Black),
            selector,
        }
    }

    /// Starts a game from an arbitrary board with the default selector.
    pub fn from_position(board: Board, side: Side, config: GameConfig) -> Self {
        Self::new(config).starting_from(board, side)
    }

    /// Replaces the position, applying the turn rule immediately: a blocked
    /// `side` is skipped and a dead position is already over.
    pub fn starting_from(mut self, board: Board, side: Side) -> Self {
        self.turn = Turn::start(board, side);
        self
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.turn.board
    }

    pub fn status(&self) -> Status {
        self.turn.status
    }

    pub fn side_to_move(&self) -> Option<Side> {
        match self.turn.status {
            Status::InProgress(side) => Some(side),
            Status::GameOver(_) => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.turn.status, Status::GameOver(_))
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.turn.status {
            Status::GameOver(result) => Some(result),
            Status::InProgress(_) => None,
        }
    }

    pub fn last_move(&self) -> Option<Position> {
        self.turn.last_move
    }

    /// Side skipped by the most recent transition.
    pub fn skipped(&self) -> Option<Side> {
        self.turn.skipped
    }

    pub fn is_computer_turn(&self) -> bool {
        self.side_to_move()
            .is_some_and(|side| self.config.is_computer(side))
    }

    /// Whether `pos` is a legal target for the side to move.
    pub fn is_legal(&self, pos: Position) -> bool {
        self.side_to_move()
            .is_some_and(|side| self.turn.board.is_legal_move(side, pos))
    }

    /// Legal targets for the side to move, row-major.
    pub fn legal_moves(&self) -> Vec<Position> {
        mask_positions(self.legal_mask()).collect()
    }

    /// Human move for the side to move.
    pub fn play(&mut self, pos: Position) -> Result<(), EngineError> {
        let side = self.side_to_move().ok_or(EngineError::GameOver)?;
        if self.config.is_computer(side) {
            return Err(EngineError::ComputerToMove { side });
        }
        self.apply_move(side, pos)
    }

    /// Lets the selector play for the computer side. Returns the chosen move.
    pub fn play_computer(&mut self) -> Result<Position, EngineError> {
        let side = self.side_to_move().ok_or(EngineError::GameOver)?;
        let computer = self.config.computer.ok_or(EngineError::NoComputerSide)?;
        if side != computer {
            return Err(EngineError::NotYourTurn { side: computer });
        }

        let started = Instant::now();
        let selected = self
            .selector
            .select_move(&self.turn.board, side)
            .ok_or(EngineError::NoLegalMove { side })?;
        debug!("{side} selector chose {selected} in {:?}", started.elapsed());

        self.apply_move(side, selected)?;
        Ok(selected)
    }

    pub fn reset(&mut self) {
        self.turn = Turn::start(Board::new(), Side::Black);
        info!("game reset");
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.turn.board.count();
        let mut hints = vec![false; BOARD_LEN];
        for pos in mask_positions(self.legal_mask()) {
            hints[pos.index()] = true;
        }
        GameState {
            board: self.turn.board.to_array().to_vec(),
            side_to_move: self.side_to_move(),
            black_count,
            white_count,
            is_game_over: self.is_game_over(),
            winner: self.result().and_then(|result| result.winner),
            hints,
            last_move: self.turn.last_move,
            flipped: bitmask_to_indices(self.turn.flipped),
            skipped: self.turn.skipped,
            computer_to_move: self.is_computer_turn(),
        }
    }

    fn legal_mask(&self) -> u64 {
        self.side_to_move()
            .map_or(0, |side| self.turn.board.legal_moves(side))
    }

    fn apply_move(&mut self, side: Side, pos: Position) -> Result<(), EngineError> {
        let board = self.turn.board;
        let next = board.apply_move(side, pos)?;
        let flipped = board.discs(side.opponent()) & next.discs(side);
        let (status, skipped) = resolve(&next, side.opponent());

        self.turn = Turn {
            board: next,
            status,
            last_move: Some(pos),
            flipped,
            skipped,
        };

        debug!("{side} plays {pos}, flipping {}", flipped.count_ones());
        if let Some(blocked) = skipped {
            info!("{blocked} has no legal move, turn passes to {side}");
        }
        if let Status::GameOver(result) = status {
            match result.winner {
                Some(winner) => info!(
                    "game over: {winner} wins {}-{}",
                    result.black_count, result.white_count
                ),
                None => info!("game over: draw {}-{}", result.black_count, result.white_count),
            }
        }

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn bitmask_to_indices(mask: u64) -> Vec<u8> {
    mask_positions(mask).map(|pos| pos.index() as u8).collect()
}
