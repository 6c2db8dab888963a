//! Legal-move generator (spec §4.4).
//!
//! Allocation-free apart from the returned id sequence: placement
//! generation scans at most 300 pairs, play generation checks at most
//! `2 workers × 8 moves × 8 builds = 128` triples.

use crate::action::{encode_placement, encode_play, NUM_PLACEMENT_ACTIONS};
use crate::board::{neighbor, NUM_CELLS};
use crate::cell::Cell;
use crate::state::{Outcome, SantoriniState};

/// Legal actions for the current player in `state`. Empty exactly when
/// `state.is_terminal()` (spec §4.4, §8 invariant 5).
pub fn generate(state: &SantoriniState) -> Vec<u16> {
    if state.outcome() != Outcome::None {
        return Vec::new();
    }
    if state.num_workers_placed() < 4 {
        generate_placements(state)
    } else {
        generate_plays(state)
    }
}

fn generate_placements(state: &SantoriniState) -> Vec<u16> {
    let mut actions = Vec::with_capacity(NUM_PLACEMENT_ACTIONS);
    let board = state.board();
    for i in 0..NUM_CELLS as u8 {
        if board.is_occupied(i) {
            continue;
        }
        for j in (i + 1)..NUM_CELLS as u8 {
            if board.is_occupied(j) {
                continue;
            }
            actions.push(encode_placement(i, j));
        }
    }
    actions
}

fn generate_plays(state: &SantoriniState) -> Vec<u16> {
    let mut actions = Vec::with_capacity(128);
    let board = state.board();
    let player = state.to_move();

    for worker in 0..2u8 {
        let from = state.worker_cell(player, worker);
        let from_height = board.height(from);
        debug_assert!(
            from_height < 3,
            "worker on height 3 while the game is not terminal"
        );

        for move_dir in 0..8u8 {
            let Some(to) = neighbor(from, move_dir) else {
                continue;
            };
            if board.is_occupied(to) {
                continue;
            }
            let to_height = board.height(to);
            if to_height > from_height + 1 {
                continue; // climb rule: at most one floor up; dome (4) rejected here too
            }

            for build_dir in 0..8u8 {
                let Some(build_cell) = neighbor(to, build_dir) else {
                    continue;
                };
                let build_height = board.height(build_cell);
                if build_height >= Cell::MAX_HEIGHT {
                    continue; // can't build on a dome
                }
                let build_occupied = board.is_occupied(build_cell);
                if build_occupied && build_cell != from {
                    continue; // occupied build target only legal when it's the cell just vacated
                }
                actions.push(encode_play(worker, move_dir, build_dir));
            }
        }
    }
    actions
}
