//! Transition function, terminal/returns evaluation, and the
//! `GameState` capability-set implementation (spec §4.5, §4.6, §6).

use crate::action::{self, Action};
use crate::board::{canonical_pair, neighbor, Board, NUM_CELLS};
use crate::cell::Occupant;
use crate::error::ActionParseError;
use crate::game::{GameState, TERMINAL_PLAYER_ID};
use crate::legal;
use crate::observation;

/// Who, if anyone, has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    None,
    Player0Wins,
    Player1Wins,
}

impl Outcome {
    fn for_winner(player: u8) -> Self {
        if player == 0 {
            Outcome::Player0Wins
        } else {
            Outcome::Player1Wins
        }
    }
}

/// A full Santorini position: board, per-player worker pairs,
/// placement progress, whose turn it is, the outcome (if decided), and
/// a cached legal-action list recomputed after every `apply` (spec §3).
#[derive(Debug, Clone)]
pub struct SantoriniState {
    board: Board,
    worker_positions: [[Option<u8>; 2]; 2],
    num_workers_placed: u8,
    to_move: u8,
    outcome: Outcome,
    legal_actions: Vec<u16>,
    history: Vec<u16>,
}

impl SantoriniState {
    /// A fresh game: empty board, no workers placed, player 0 to move.
    pub fn new() -> Self {
        let mut state = SantoriniState {
            board: Board::new(),
            worker_positions: [[None, None], [None, None]],
            num_workers_placed: 0,
            to_move: 0,
            outcome: Outcome::None,
            legal_actions: Vec::new(),
            history: Vec::new(),
        };
        state.legal_actions = legal::generate(&state);
        state
    }

    /// Build a mid-game position directly, bypassing the placement
    /// phase. Intended for tests and tooling that need to seed the
    /// literal scenarios named in spec §8, not for normal play.
    pub fn from_scenario(
        heights: [u8; NUM_CELLS],
        worker_cells: [[u8; 2]; 2],
        to_move: u8,
    ) -> Self {
        debug_assert!(to_move < 2);
        let mut board = Board::new();
        for (cell, &height) in heights.iter().enumerate() {
            for _ in 0..height {
                board.build(cell as u8);
            }
        }
        let mut positions = [[None; 2]; 2];
        for player in 0..2usize {
            let (a, b) = canonical_pair(worker_cells[player][0], worker_cells[player][1]);
            board.place_worker(a, player as u8);
            board.place_worker(b, player as u8);
            positions[player] = [Some(a), Some(b)];
        }

        let mut state = SantoriniState {
            board,
            worker_positions: positions,
            num_workers_placed: 4,
            to_move,
            outcome: Outcome::None,
            legal_actions: Vec::new(),
            history: Vec::new(),
        };
        state.refresh_outcome_and_actions();
        state
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub(crate) fn num_workers_placed(&self) -> u8 {
        self.num_workers_placed
    }

    pub(crate) fn to_move(&self) -> u8 {
        self.to_move
    }

    pub(crate) fn worker_cell(&self, player: u8, worker: u8) -> u8 {
        self.worker_positions[player as usize][worker as usize]
            .expect("worker must be placed before it can act")
    }

    /// Apply a legal action. Passing an id outside `legal_actions()` is
    /// a programmer error (spec §4.5, §7): asserted in debug builds,
    /// undefined in release.
    pub fn apply(&mut self, action_id: u16) {
        self.apply_internal(action_id);
    }

    fn apply_internal(&mut self, action_id: u16) {
        debug_assert!(
            self.legal_actions.contains(&action_id),
            "action {action_id} is not in the current legal set"
        );
        self.history.push(action_id);
        match action::decode(action_id) {
            Action::Placement { i, j } => self.apply_placement(i, j),
            Action::Play {
                worker,
                move_dir,
                build_dir,
            } => self.apply_play(worker, move_dir, build_dir),
        }
        self.to_move = 1 - self.to_move;
        self.refresh_outcome_and_actions();
    }

    fn apply_placement(&mut self, i: u8, j: u8) {
        let player = self.to_move;
        self.board.place_worker(i, player);
        self.board.place_worker(j, player);
        self.worker_positions[player as usize] = [Some(i), Some(j)];
        self.num_workers_placed += 2;
    }

    fn apply_play(&mut self, worker: u8, move_dir: u8, build_dir: u8) {
        let player = self.to_move;
        let from = self.worker_cell(player, worker);
        let to = neighbor(from, move_dir).expect("legal play must target an in-bounds cell");
        self.board.move_worker(from, to, player);

        let build_cell =
            neighbor(to, build_dir).expect("legal play must target an in-bounds build cell");
        self.board.build(build_cell);

        let other = self.worker_cell(player, 1 - worker);
        let (a, b) = canonical_pair(to, other);
        self.worker_positions[player as usize] = [Some(a), Some(b)];

        if self.board.height(to) == 3 {
            self.outcome = Outcome::for_winner(player);
        }
    }

    /// Recompute `legal_actions` and, per spec §4.4/§9, detect stalemate
    /// at this point rather than inside `apply_play`/`apply_placement`:
    /// if the side now to move has no legal action and no one has
    /// already won by climbing, that side loses immediately.
    fn refresh_outcome_and_actions(&mut self) {
        self.legal_actions = legal::generate(self);
        if self.outcome == Outcome::None && self.legal_actions.is_empty() {
            let winner = 1 - self.to_move;
            log::debug!("player {} has no legal move, player {winner} wins by stalemate", self.to_move);
            self.outcome = Outcome::for_winner(winner);
        }
    }

    fn cell_char(&self, cell: u8) -> char {
        let height = self.board.height(cell);
        match self.board.cells()[cell as usize].occupant() {
            Occupant::None => (b'0' + height) as char,
            Occupant::Player(0) => (b'a' + height) as char,
            Occupant::Player(_) => (b'A' + height) as char,
        }
    }

    /// The player to move, or [`TERMINAL_PLAYER_ID`] once the game has ended.
    pub fn current_player(&self) -> i8 {
        if self.is_terminal() {
            TERMINAL_PLAYER_ID
        } else {
            self.to_move as i8
        }
    }

    /// Actions legal in the current position; empty iff `is_terminal()`.
    pub fn legal_actions(&self) -> &[u16] {
        &self.legal_actions
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::None
    }

    /// Per-player return: `[0.0, 0.0]` while non-terminal, `±1.0` once decided.
    pub fn returns(&self) -> [f64; 2] {
        match self.outcome {
            Outcome::None => [0.0, 0.0],
            Outcome::Player0Wins => [1.0, -1.0],
            Outcome::Player1Wins => [-1.0, 1.0],
        }
    }

    /// Dense `[6, 5, 5]` tensor, channel-major then row-major (spec §4.7).
    pub fn observation_tensor(&self, player: usize) -> Vec<f32> {
        observation::observation_tensor(self, player)
    }

    /// Render an action id as spec §4.2's text form.
    pub fn action_to_string(&self, action_id: u16) -> String {
        action::action_to_string(action::decode(action_id))
    }

    /// Parse spec §4.2's text form back into an action id. Recoverable:
    /// never panics, never mutates `self` (spec §7).
    pub fn string_to_action(&self, text: &str) -> Result<u16, ActionParseError> {
        match action::parse_action(text) {
            Ok(parsed) => Ok(action::encode(parsed)),
            Err(err) => {
                log::trace!("failed to parse action string {text:?}: {err}");
                Err(err)
            }
        }
    }

    /// Canonical action-history string for `player` (identical for both
    /// players here — the game has no hidden information).
    pub fn information_state_string(&self, player: usize) -> String {
        debug_assert!(player < 2);
        self.history
            .iter()
            .map(|&id| self.action_to_string(id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Human-readable 5×5 board rendering (spec §6).
    pub fn observation_string(&self, player: usize) -> String {
        debug_assert!(player < 2);
        let mut out = String::with_capacity(crate::board::BOARD_SIZE * (crate::board::BOARD_SIZE + 1));
        for row in 0..crate::board::BOARD_SIZE {
            for col in 0..crate::board::BOARD_SIZE {
                out.push(self.cell_char((row * crate::board::BOARD_SIZE + col) as u8));
            }
            if row + 1 < crate::board::BOARD_SIZE {
                out.push('\n');
            }
        }
        out
    }
}

impl Default for SantoriniState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for SantoriniState {
    fn current_player(&self) -> i8 {
        SantoriniState::current_player(self)
    }

    fn legal_actions(&self) -> &[u16] {
        SantoriniState::legal_actions(self)
    }

    fn apply(&mut self, action_id: u16) {
        self.apply_internal(action_id);
    }

    fn is_terminal(&self) -> bool {
        SantoriniState::is_terminal(self)
    }

    fn returns(&self) -> [f64; 2] {
        SantoriniState::returns(self)
    }

    fn observation_tensor(&self, player: usize) -> Vec<f32> {
        SantoriniState::observation_tensor(self, player)
    }

    fn action_to_string(&self, action_id: u16) -> String {
        SantoriniState::action_to_string(self, action_id)
    }

    fn string_to_action(&self, text: &str) -> Result<u16, ActionParseError> {
        SantoriniState::string_to_action(self, text)
    }

    fn information_state_string(&self, player: usize) -> String {
        SantoriniState::information_state_string(self, player)
    }

    fn observation_string(&self, player: usize) -> String {
        SantoriniState::observation_string(self, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{encode_placement, encode_play};
    use crate::game::GameState;

    #[test]
    fn new_game_has_player_zero_to_move_and_no_outcome() {
        let state = SantoriniState::new();
        assert_eq!(GameState::current_player(&state), 0);
        assert!(!GameState::is_terminal(&state));
        assert_eq!(GameState::returns(&state), [0.0, 0.0]);
    }

    #[test]
    fn placements_assign_canonical_worker_order() {
        let mut state = SantoriniState::new();
        state.apply(encode_placement(10, 2));
        // action was decoded back from id space where i<j always, so stored order is (2,10)
        assert_eq!(state.worker_cell(0, 0), 2);
        assert_eq!(state.worker_cell(0, 1), 10);
    }

    #[test]
    fn moving_past_lower_indexed_worker_recanonicalizes() {
        let mut state = SantoriniState::new();
        state.apply(encode_placement(0, 1)); // player 0: worker0=0, worker1=1
        state.apply(encode_placement(20, 21)); // player 1

        // Move worker0 (cell 0) to cell 5 (south); this is now the higher index.
        state.apply(encode_play(0, 7, 0));
        assert_eq!(state.worker_cell(0, 0), 1, "cell 1 is now the lower index");
        assert_eq!(state.worker_cell(0, 1), 5);
    }

    #[test]
    fn clone_is_independent() {
        let mut state = SantoriniState::new();
        state.apply(encode_placement(0, 1));
        let mut cloned = state.clone();
        cloned.apply(encode_placement(2, 3));
        assert_ne!(state.legal_actions().len(), cloned.legal_actions().len());
    }

    #[test]
    fn information_state_string_round_trips_action_text() {
        let mut state = SantoriniState::new();
        state.apply(encode_placement(0, 1));
        state.apply(encode_placement(2, 3));
        let history = GameState::information_state_string(&state, 0);
        assert_eq!(history, "P0001 P0203");
    }

    #[test]
    fn observation_string_renders_initial_board_as_zeros() {
        let state = SantoriniState::new();
        let text = GameState::observation_string(&state, 0);
        assert_eq!(text.lines().count(), 5);
        assert!(text.chars().filter(|c| !c.is_whitespace()).all(|c| c == '0'));
    }
}
