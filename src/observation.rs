//! Dense tensor observation encoder (spec §4.7).
//!
//! Shape `[6, 5, 5]`, channel-major then row-major: four one-hot height
//! channels (`0..=3`; a domed cell at height 4 sets none of them) plus
//! two perspective-relative occupancy channels holding the occupying
//! worker's height.

use crate::board::NUM_CELLS;
use crate::cell::Occupant;
use crate::state::SantoriniState;

pub const NUM_HEIGHT_CHANNELS: usize = 4;
pub const NUM_OCCUPANCY_CHANNELS: usize = 2;
pub const OBSERVATION_CHANNELS: usize = NUM_HEIGHT_CHANNELS + NUM_OCCUPANCY_CHANNELS; // 6
pub const OBSERVATION_SHAPE: [usize; 3] = [OBSERVATION_CHANNELS, 5, 5];
pub const OBSERVATION_SIZE: usize = OBSERVATION_CHANNELS * NUM_CELLS;

/// Encode `state` from `player`'s perspective: channel 4 is always
/// `player`'s own workers, channel 5 the opponent's, regardless of
/// absolute player id.
pub fn observation_tensor(state: &SantoriniState, player: usize) -> Vec<f32> {
    debug_assert!(player < 2);
    let mut tensor = vec![0.0f32; OBSERVATION_SIZE];
    let board = state.board();

    for cell in 0..NUM_CELLS as u8 {
        let height = board.height(cell);
        if height < NUM_HEIGHT_CHANNELS as u8 {
            tensor[height as usize * NUM_CELLS + cell as usize] = 1.0;
        }

        if let Occupant::Player(owner) = board.cells()[cell as usize].occupant() {
            let channel = if owner as usize == player {
                NUM_HEIGHT_CHANNELS
            } else {
                NUM_HEIGHT_CHANNELS + 1
            };
            tensor[channel * NUM_CELLS + cell as usize] = height as f32;
        }
    }

    tensor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SantoriniState;

    #[test]
    fn empty_board_has_only_height_zero_channel_set() {
        let state = SantoriniState::new();
        let tensor = observation_tensor(&state, 0);
        for cell in 0..NUM_CELLS {
            assert_eq!(tensor[0 * NUM_CELLS + cell], 1.0);
            for channel in 1..OBSERVATION_CHANNELS {
                assert_eq!(tensor[channel * NUM_CELLS + cell], 0.0);
            }
        }
    }

    #[test]
    fn occupancy_channel_swaps_with_perspective() {
        // Give the workers nonzero height so occupancy hits are
        // distinguishable from an empty cell (both encode 0.0 at height 0).
        let mut heights = [0u8; NUM_CELLS];
        heights[0] = 2;
        heights[3] = 1;
        let state = SantoriniState::from_scenario(heights, [[0, 1], [2, 3]], 0);

        let own_view = observation_tensor(&state, 0);
        // Channel 4 ("my" workers) covers player 0's cells; channel 5 the opponent's.
        assert_eq!(own_view[4 * NUM_CELLS], 2.0);
        assert_eq!(own_view[4 * NUM_CELLS + 1], 0.0, "player 0's other worker stands at height 0");
        assert_eq!(own_view[5 * NUM_CELLS + 3], 1.0);
        assert_eq!(own_view[5 * NUM_CELLS], 0.0, "cell 0 is player 0's, not the opponent's");

        let opponent_view = observation_tensor(&state, 1);
        // From player 1's perspective, channel 4 now covers their own cells 2,3.
        assert_eq!(opponent_view[4 * NUM_CELLS + 3], 1.0);
        assert_eq!(opponent_view[5 * NUM_CELLS], 2.0);
    }

    #[test]
    fn exactly_one_height_hit_and_at_most_one_occupancy_hit_per_cell() {
        let state = SantoriniState::new();
        let tensor = observation_tensor(&state, 0);
        for cell in 0..NUM_CELLS {
            let height_hits = (0..NUM_HEIGHT_CHANNELS)
                .filter(|&c| tensor[c * NUM_CELLS + cell] == 1.0)
                .count();
            assert_eq!(height_hits, 1);
            let occupancy_hits = (NUM_HEIGHT_CHANNELS..OBSERVATION_CHANNELS)
                .filter(|&c| tensor[c * NUM_CELLS + cell] > 0.0)
                .count();
            assert_eq!(occupancy_hits, 0, "empty board has no occupied cells");
        }
    }
}
