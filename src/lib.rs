#![deny(clippy::unwrap_used)]
//! A deterministic, no-gods Santorini rules engine for general
//! game-playing search harnesses (MCTS, AlphaZero-style self-play, or
//! anything else that drives a game through the [`GameState`] capability
//! set).
//!
//! The crate is a pure state machine with no knowledge of search,
//! learning, or I/O — it only packages the hard part: state
//! representation, action encoding, legal-move generation, transitions,
//! terminal scoring, and a dense observation tensor.
//!
//! * [`SantoriniState`] – the 5×5 board, per-player worker tracking,
//!   placement progress, outcome, and cached legal actions. Implements
//!   [`GameState`].
//! * [`GameState`] – the abstract trait a general game-playing harness
//!   drives any game through.
//! * [`cell`], [`board`], [`action`], [`legal`], [`observation`] – the
//!   leaf components each operation is built from.

mod action;
mod board;
mod cell;
mod error;
mod game;
mod legal;
mod observation;
mod state;

pub use action::{Action, NUM_ACTIONS, NUM_PLACEMENT_ACTIONS, NUM_PLAY_ACTIONS};
pub use board::{BOARD_SIZE, NUM_CELLS};
pub use cell::{Cell, Occupant};
pub use error::ActionParseError;
pub use game::{
    GameState, GameType, GAME_TYPE, MAX_GAME_LENGTH, MAX_UTILITY, MIN_UTILITY,
    NUM_DISTINCT_ACTIONS, NUM_PLAYERS, TERMINAL_PLAYER_ID, UTILITY_SUM,
};
pub use observation::{NUM_HEIGHT_CHANNELS, NUM_OCCUPANCY_CHANNELS, OBSERVATION_CHANNELS, OBSERVATION_SHAPE};
pub use state::{Outcome, SantoriniState};
