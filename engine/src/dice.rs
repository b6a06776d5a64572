//! Dice/round simulator.
//!
//! A player's entire match is precomputed eagerly in one call, so the round
//! state machine can step through a match without a randomness source.
//!
//! Damage rule: a roll deals its face value. A roll that would push the
//! running score past the target is wasted; the face and its damage value are
//! still recorded but the score stays put. The score therefore climbs
//! monotonically and never exceeds the target, and the match is won at the
//! first roll where it lands on the target exactly. Traces that exhaust
//! `max_rounds` without landing keep the sentinel win indexes and are valid
//! loss outcomes.

use daruma_types::{GameConfig, PlayerRoundsData, RollData, RoundData};

use crate::rng::GameRng;

/// Generate a player's full game trace.
///
/// Pure: no side effects, no external state beyond the passed RNG stream.
/// Generation stops at the winning roll; the state machine never walks a
/// trace past its win position.
pub fn complete_game_for_player(rng: &mut GameRng, config: &GameConfig) -> PlayerRoundsData {
    let mut data = PlayerRoundsData::default();
    let mut total: u8 = 0;

    for round_number in 0..config.max_rounds {
        let mut round = RoundData {
            round_number,
            total_damage_so_far: total,
            rolls: Vec::with_capacity(config.rolls_per_round as usize),
        };

        for roll_index in 0..config.rolls_per_round {
            let face = rng.roll_die();
            // Widened compare: the sum may exceed u8 when the target sits
            // near the top of the type's range.
            if u16::from(total) + u16::from(face) <= u16::from(config.score_target) {
                total += face;
            }
            round.rolls.push(RollData {
                roll: Some(face),
                damage: Some(face),
                total_score: total,
            });

            if total == config.score_target {
                data.game_win_round_index = round_number;
                data.game_win_roll_index = roll_index as u32;
                round.total_damage_so_far = total;
                data.rounds.push(round);
                return data;
            }
        }

        round.total_damage_so_far = total;
        data.rounds.push(round);
    }

    data
}
