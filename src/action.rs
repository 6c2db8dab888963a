//! Action id space and text codec (spec §4.2).
//!
//! The action space is a single contiguous range `[0, NUM_ACTIONS)`
//! split into a placement subrange (unordered cell pairs) followed by
//! a play subrange (worker × move direction × build direction).

use crate::board::NUM_CELLS;
use crate::error::ActionParseError;

/// First placement phase: one action places both of a player's workers.
pub const NUM_PLACEMENT_ACTIONS: usize = NUM_CELLS * (NUM_CELLS - 1) / 2; // 300

/// Every subsequent ply: worker × 8 move directions × 8 build directions.
pub const NUM_PLAY_ACTIONS: usize = 2 * 8 * 8; // 128

/// Total size of the action id space.
pub const NUM_ACTIONS: usize = NUM_PLACEMENT_ACTIONS + NUM_PLAY_ACTIONS; // 428

/// The decoded, tagged-union form of an action id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    /// Place both workers of the player to move on cells `i` and `j` (`i < j`).
    Placement { i: u8, j: u8 },
    /// Move worker `worker` and build, each as a king-move direction id (`0..8`).
    Play {
        worker: u8,
        move_dir: u8,
        build_dir: u8,
    },
}

const fn build_placement_pairs() -> [(u8, u8); NUM_PLACEMENT_ACTIONS] {
    let mut table = [(0u8, 0u8); NUM_PLACEMENT_ACTIONS];
    let mut i = 0usize;
    let mut idx = 0usize;
    while i < NUM_CELLS {
        let mut j = i + 1;
        while j < NUM_CELLS {
            table[idx] = (i as u8, j as u8);
            idx += 1;
            j += 1;
        }
        i += 1;
    }
    table
}

/// Precomputed index → `(i, j)` table for the placement subrange (spec §4.2).
pub const PLACEMENT_PAIRS: [(u8, u8); NUM_PLACEMENT_ACTIONS] = build_placement_pairs();

/// `(i, j)` with `i < j` → placement action id.
pub fn encode_placement(i: u8, j: u8) -> u16 {
    debug_assert!((i as usize) < NUM_CELLS && (j as usize) < NUM_CELLS);
    debug_assert!(i < j, "placement pair must be ordered: {i} < {j}");
    let n = NUM_CELLS as u16;
    let (i, j) = (i as u16, j as u16);
    i * (n - 1) - i * (i.saturating_sub(1)) / 2 + (j - i - 1)
}

fn decode_placement(action: u16) -> (u8, u8) {
    PLACEMENT_PAIRS[action as usize]
}

/// `(worker, move_dir, build_dir)` → play action id.
pub fn encode_play(worker: u8, move_dir: u8, build_dir: u8) -> u16 {
    debug_assert!(worker < 2 && move_dir < 8 && build_dir < 8);
    NUM_PLACEMENT_ACTIONS as u16 + worker as u16 * 64 + move_dir as u16 * 8 + build_dir as u16
}

fn decode_play(action: u16) -> (u8, u8, u8) {
    let rel = action - NUM_PLACEMENT_ACTIONS as u16;
    let worker = rel / 64;
    let rem = rel % 64;
    (worker as u8, (rem / 8) as u8, (rem % 8) as u8)
}

/// Decode an action id into its tagged-union form.
pub fn decode(action: u16) -> Action {
    debug_assert!((action as usize) < NUM_ACTIONS, "action {action} out of range");
    if (action as usize) < NUM_PLACEMENT_ACTIONS {
        let (i, j) = decode_placement(action);
        Action::Placement { i, j }
    } else {
        let (worker, move_dir, build_dir) = decode_play(action);
        Action::Play {
            worker,
            move_dir,
            build_dir,
        }
    }
}

/// Encode a decoded action back into its id.
pub fn encode(action: Action) -> u16 {
    match action {
        Action::Placement { i, j } => encode_placement(i, j),
        Action::Play {
            worker,
            move_dir,
            build_dir,
        } => encode_play(worker, move_dir, build_dir),
    }
}

fn coordinate_digit(c: char) -> Result<u8, ActionParseError> {
    c.to_digit(10)
        .filter(|&d| (d as usize) < crate::board::BOARD_SIZE)
        .map(|d| d as u8)
        .ok_or(ActionParseError::BadCoordinate(c))
}

fn direction_digit(c: char) -> Result<u8, ActionParseError> {
    c.to_digit(10)
        .filter(|&d| d < 8)
        .map(|d| d as u8)
        .ok_or(ActionParseError::BadDirection(c))
}

fn worker_digit(c: char) -> Result<u8, ActionParseError> {
    c.to_digit(10)
        .filter(|&d| d < 2)
        .map(|d| d as u8)
        .ok_or(ActionParseError::BadWorker(c))
}

/// Render an action as the text form specified in spec §4.2:
/// `"P<r1><c1><r2><c2>"` for placements, `"<w>M<ms>B<bs>"` for plays.
pub fn action_to_string(action: Action) -> String {
    match action {
        Action::Placement { i, j } => {
            let board_size = crate::board::BOARD_SIZE as u8;
            let (r1, c1) = (i / board_size, i % board_size);
            let (r2, c2) = (j / board_size, j % board_size);
            format!("P{r1}{c1}{r2}{c2}")
        }
        Action::Play {
            worker,
            move_dir,
            build_dir,
        } => format!("{worker}M{move_dir}B{build_dir}"),
    }
}

/// Parse the text form back into an action. Never panics; signals
/// failure to the caller without mutating any state (spec §7).
pub fn parse_action(text: &str) -> Result<Action, ActionParseError> {
    let mut chars = text.chars();
    let tag = chars.next().ok_or(ActionParseError::Empty)?;

    if tag == 'P' {
        let rest: Vec<char> = chars.collect();
        if rest.len() != 4 {
            return Err(ActionParseError::WrongLength(text.to_string()));
        }
        let board_size = crate::board::BOARD_SIZE as u8;
        let r1 = coordinate_digit(rest[0])?;
        let c1 = coordinate_digit(rest[1])?;
        let r2 = coordinate_digit(rest[2])?;
        let c2 = coordinate_digit(rest[3])?;
        let cell1 = r1 * board_size + c1;
        let cell2 = r2 * board_size + c2;
        let (i, j) = if cell1 < cell2 {
            (cell1, cell2)
        } else if cell1 > cell2 {
            (cell2, cell1)
        } else {
            return Err(ActionParseError::SameCell(cell1));
        };
        Ok(Action::Placement { i, j })
    } else {
        if !tag.is_ascii_digit() {
            return Err(ActionParseError::UnknownTag(tag));
        }
        let worker = worker_digit(tag)?;
        let m_tag = chars.next().ok_or_else(|| ActionParseError::WrongLength(text.to_string()))?;
        if m_tag != 'M' {
            return Err(ActionParseError::ExpectedMove(m_tag));
        }
        let move_char = chars.next().ok_or_else(|| ActionParseError::WrongLength(text.to_string()))?;
        let move_dir = direction_digit(move_char)?;
        let b_tag = chars.next().ok_or_else(|| ActionParseError::WrongLength(text.to_string()))?;
        if b_tag != 'B' {
            return Err(ActionParseError::ExpectedBuild(b_tag));
        }
        let build_char = chars.next().ok_or_else(|| ActionParseError::WrongLength(text.to_string()))?;
        let build_dir = direction_digit(build_char)?;
        if chars.next().is_some() {
            return Err(ActionParseError::WrongLength(text.to_string()));
        }
        Ok(Action::Play {
            worker,
            move_dir,
            build_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_bijection_holds_for_every_pair() {
        for i in 0..NUM_CELLS as u8 {
            for j in (i + 1)..NUM_CELLS as u8 {
                let id = encode_placement(i, j);
                assert_eq!(decode_placement(id), (i, j));
            }
        }
    }

    #[test]
    fn placement_ids_cover_the_whole_subrange_without_gaps() {
        let mut seen = [false; NUM_PLACEMENT_ACTIONS];
        for i in 0..NUM_CELLS as u8 {
            for j in (i + 1)..NUM_CELLS as u8 {
                let id = encode_placement(i, j) as usize;
                assert!(!seen[id], "duplicate id {id}");
                seen[id] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn play_bijection_holds_for_every_triple() {
        for worker in 0..2u8 {
            for move_dir in 0..8u8 {
                for build_dir in 0..8u8 {
                    let id = encode_play(worker, move_dir, build_dir);
                    assert_eq!(decode_play(id), (worker, move_dir, build_dir));
                }
            }
        }
    }

    #[test]
    fn total_action_space_is_428() {
        assert_eq!(NUM_ACTIONS, 428);
    }

    #[test]
    fn text_round_trips_through_every_legal_action() {
        for action_id in 0..NUM_ACTIONS as u16 {
            let action = decode(action_id);
            let text = action_to_string(action);
            let parsed = parse_action(&text).expect("well-formed text must parse");
            assert_eq!(encode(parsed), action_id);
        }
    }

    #[test]
    fn string_to_action_rejects_malformed_input() {
        assert_eq!(parse_action(""), Err(ActionParseError::Empty));
        assert!(matches!(parse_action("P0000"), Err(ActionParseError::SameCell(0))));
        assert!(matches!(parse_action("Q0M0B0"), Err(ActionParseError::UnknownTag('Q'))));
        assert!(matches!(parse_action("5M0B0"), Err(ActionParseError::BadWorker('5'))));
        assert!(matches!(parse_action("0X0B0"), Err(ActionParseError::ExpectedMove('X'))));
        assert!(matches!(parse_action("0M9B0"), Err(ActionParseError::BadDirection('9'))));
        assert!(matches!(parse_action("0M0X0"), Err(ActionParseError::ExpectedBuild('X'))));
        assert!(matches!(parse_action("P123"), Err(ActionParseError::WrongLength(_))));
    }
}
