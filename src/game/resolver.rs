//! Pure combat resolution: one round in, health/mana deltas out.
//!
//! The concrete constants implement the directional contract: attackers
//! spend mana, successful defenders gain mana, and attack damage is reduced
//! against a defending opponent. The exact values are tuning knobs (see
//! DESIGN.md).

use super::types::Move;

/// Mana spent by a player on every attack. Mana is clamped at 0, never gated.
pub const ATTACK_MANA_COST: u32 = 3;
/// Extra defense applied while actively defending.
pub const GUARD_BONUS: u32 = 2;
/// Mana awarded for blocking an incoming attack.
pub const BLOCK_MANA_BONUS: u32 = 3;
/// Passive mana regeneration when both sides hold back.
pub const REGEN_MANA: u32 = 1;

/// Everything the resolver needs to know about one side of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatantSnapshot {
    pub attack_strength: u32,
    pub defense_strength: u32,
    pub mana: u32,
    pub health: u32,
    pub chosen_move: Move,
}

/// Post-round stats for one side, already clamped at the 0 floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideOutcome {
    pub mana: u32,
    pub health: u32,
}

/// The computed result of one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub sides: [SideOutcome; 2],
    /// Winning seat if the round was terminal, i.e. at least one side's
    /// health reached 0.
    pub winner: Option<usize>,
}

/// Resolve one round of combat between seat 0 and seat 1. Pure function of
/// its inputs; applying the outcome to the store is the arena's job.
pub fn resolve_round(sides: [CombatantSnapshot; 2]) -> RoundOutcome {
    let damage_to = |defender: &CombatantSnapshot, attacker: &CombatantSnapshot| -> u32 {
        let guard = match defender.chosen_move {
            Move::Defend => defender.defense_strength + GUARD_BONUS,
            Move::Attack => defender.defense_strength,
        };
        attacker.attack_strength.saturating_sub(guard)
    };

    let mana_after = |side: &CombatantSnapshot, opponent: &CombatantSnapshot| -> u32 {
        match (side.chosen_move, opponent.chosen_move) {
            (Move::Attack, _) => side.mana.saturating_sub(ATTACK_MANA_COST),
            (Move::Defend, Move::Attack) => side.mana + BLOCK_MANA_BONUS,
            (Move::Defend, Move::Defend) => side.mana + REGEN_MANA,
        }
    };

    let health = [
        match sides[1].chosen_move {
            Move::Attack => sides[0].health.saturating_sub(damage_to(&sides[0], &sides[1])),
            Move::Defend => sides[0].health,
        },
        match sides[0].chosen_move {
            Move::Attack => sides[1].health.saturating_sub(damage_to(&sides[1], &sides[0])),
            Move::Defend => sides[1].health,
        },
    ];

    let outcome = [
        SideOutcome {
            mana: mana_after(&sides[0], &sides[1]),
            health: health[0],
        },
        SideOutcome {
            mana: mana_after(&sides[1], &sides[0]),
            health: health[1],
        },
    ];

    RoundOutcome {
        sides: outcome,
        winner: decide_winner(&sides, &outcome),
    }
}

/// Winning seat once somebody's health hit the floor. A simultaneous double
/// zero is broken deterministically: higher attack strength wins, the
/// creator's seat on a perfect mirror.
fn decide_winner(before: &[CombatantSnapshot; 2], after: &[SideOutcome; 2]) -> Option<usize> {
    match (after[0].health == 0, after[1].health == 0) {
        (false, false) => None,
        (true, false) => Some(1),
        (false, true) => Some(0),
        (true, true) => {
            if before[1].attack_strength > before[0].attack_strength {
                Some(1)
            } else {
                Some(0)
            }
        }
    }
}
