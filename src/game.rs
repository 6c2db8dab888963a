//! Game-level metadata and the `GameState` capability-set trait (spec §6).
//!
//! This is the "one abstract capability boundary" spec.md's design
//! notes call out: a general game-playing harness drives any game
//! through this trait without knowing it's Santorini underneath. The
//! harness itself — the thing that would hold a `Box<dyn GameState>`
//! alongside other games — is out of scope; only the shape it expects
//! is implemented here, with a single concrete implementor.

use crate::action::NUM_ACTIONS;
use crate::error::ActionParseError;
use crate::observation::OBSERVATION_SHAPE;

/// Sentinel `current_player()` value once a game has ended, matching
/// the convention used by general game-playing frameworks for a
/// terminal "player to move".
pub const TERMINAL_PLAYER_ID: i8 = -4;

pub const NUM_DISTINCT_ACTIONS: usize = NUM_ACTIONS; // 428
pub const NUM_PLAYERS: usize = 2;
pub const UTILITY_SUM: f64 = 0.0;
pub const MIN_UTILITY: f64 = -1.0;
pub const MAX_UTILITY: f64 = 1.0;
pub const OBSERVATION_TENSOR_SHAPE: [usize; 3] = OBSERVATION_SHAPE;

/// Upper bound on ply count: 2 placement plies plus enough play plies
/// for every one of the 25 cells to go from height 0 to domed (spec §6).
pub const MAX_GAME_LENGTH: usize = 2 * 2 + 25 * (3 + 1); // 104

/// Static classification of the game, mirroring how a general
/// game-playing harness tags each game it hosts.
#[derive(Debug, Clone, Copy)]
pub struct GameType {
    pub sequential: bool,
    pub deterministic: bool,
    pub perfect_information: bool,
    pub zero_sum: bool,
    pub terminal_rewards_only: bool,
}

pub const GAME_TYPE: GameType = GameType {
    sequential: true,
    deterministic: true,
    perfect_information: true,
    zero_sum: true,
    terminal_rewards_only: true,
};

/// The abstract capability set a general game-playing harness drives a
/// state through (spec §6): `current_player`, `legal_actions`,
/// `apply`, `clone` (std `Clone`, not a trait method here), `is_terminal`,
/// `returns`, `observation_tensor`, `action_to_string`,
/// `string_to_action`, `information_state_string`, `observation_string`.
pub trait GameState: Clone {
    /// The player to move, or [`TERMINAL_PLAYER_ID`] once the game has ended.
    fn current_player(&self) -> i8;

    /// Actions legal in the current position; empty iff `is_terminal()`.
    fn legal_actions(&self) -> &[u16];

    /// Apply an action assumed to be in `legal_actions()`. Passing an
    /// illegal action is a programmer error (spec §4.5, §7).
    fn apply(&mut self, action: u16);

    fn is_terminal(&self) -> bool;

    /// Per-player return: `[0.0, 0.0]` while non-terminal, `±1.0`
    /// zero-sum once decided.
    fn returns(&self) -> [f64; 2];

    /// Dense `[6, 5, 5]` tensor, channel-major then row-major (spec §4.7).
    fn observation_tensor(&self, player: usize) -> Vec<f32>;

    /// Render an action id as spec §4.2's text form.
    fn action_to_string(&self, action: u16) -> String;

    /// Parse spec §4.2's text form back into an action id. Recoverable:
    /// never panics, never mutates `self` (spec §7).
    fn string_to_action(&self, text: &str) -> Result<u16, ActionParseError>;

    /// Canonical action-history string for `player` (identical for both
    /// players here — the game has no hidden information).
    fn information_state_string(&self, player: usize) -> String;

    /// Human-readable 5×5 board rendering (spec §6).
    fn observation_string(&self, player: usize) -> String;
}
