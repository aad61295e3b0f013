use super::error::GameError;
use super::minting::TokenMintingEngine;
use super::registry::PlayerRegistry;
use super::resolver::{self, CombatantSnapshot};
use super::types::{Address, Battle, BattleId, BattleStatus, Move};
use std::collections::HashMap;

/// Append-only store of battles plus the PENDING → STARTED → {ENDED | QUIT}
/// state machine. Battles are keyed by case-sensitive name (the empty string
/// is a valid name) and never deleted; terminal battles stay queryable.
#[derive(Debug, Clone)]
pub struct BattleArena {
    battles: Vec<Battle>,
    index: HashMap<String, BattleId>,
}

impl BattleArena {
    pub fn new() -> Self {
        BattleArena {
            battles: vec![Battle::sentinel()],
            index: HashMap::new(),
        }
    }

    /// Id for a battle name, or 0 if unknown.
    pub fn id_of(&self, name: &str) -> BattleId {
        self.index.get(name).copied().unwrap_or(0)
    }

    pub fn is_battle(&self, name: &str) -> bool {
        self.id_of(name) != 0
    }

    pub fn get(&self, name: &str) -> Result<&Battle, GameError> {
        let id = self.id_of(name);
        if id == 0 {
            return Err(GameError::NotFound);
        }
        Ok(&self.battles[id])
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Battle, GameError> {
        let id = self.id_of(name);
        if id == 0 {
            return Err(GameError::NotFound);
        }
        Ok(&mut self.battles[id])
    }

    /// The full list, sentinel first.
    pub fn all(&self) -> &[Battle] {
        &self.battles
    }

    /// PENDING: open a named battle with the caller in the creator seat.
    pub fn create(
        &mut self,
        registry: &PlayerRegistry,
        caller: &Address,
        name: &str,
    ) -> Result<Battle, GameError> {
        if !registry.is_player(caller) {
            return Err(GameError::Unregistered);
        }
        if self.is_battle(name) {
            return Err(GameError::DuplicateBattle);
        }
        let battle = Battle {
            status: BattleStatus::Pending,
            name: name.to_string(),
            players: [caller.clone(), Address::zero()],
            moves: [0, 0],
            winner: Address::zero(),
        };
        let id = self.battles.len();
        self.index.insert(name.to_string(), id);
        self.battles.push(battle.clone());
        Ok(battle)
    }

    /// PENDING → STARTED: fill the joiner seat and engage both players.
    pub fn join(
        &mut self,
        registry: &mut PlayerRegistry,
        caller: &Address,
        name: &str,
    ) -> Result<Battle, GameError> {
        {
            let battle = self.get(name)?;
            if battle.status != BattleStatus::Pending {
                return Err(GameError::InvalidState);
            }
            if !registry.is_player(caller) {
                return Err(GameError::Unregistered);
            }
            if battle.players[0] == *caller {
                return Err(GameError::SelfJoin);
            }
            if registry.get(caller)?.in_battle {
                return Err(GameError::ActiveBattleConflict);
            }
        }
        // All guards passed; commit.
        let battle = self.get_mut(name)?;
        battle.players[1] = caller.clone();
        battle.status = BattleStatus::Started;
        let creator = battle.players[0].clone();
        let snapshot = battle.clone();
        registry.get_mut(&creator)?.in_battle = true;
        registry.get_mut(caller)?.in_battle = true;
        Ok(snapshot)
    }

    /// Record a move into the caller's seat for the current round.
    pub fn submit_move(
        &mut self,
        caller: &Address,
        name: &str,
        move_code: u8,
    ) -> Result<Battle, GameError> {
        let chosen = Move::from_code(move_code).ok_or(GameError::InvalidMove)?;
        let battle = self.get(name)?;
        if battle.status != BattleStatus::Started {
            return Err(GameError::InvalidState);
        }
        let seat = battle.seat_of(caller).ok_or(GameError::NotParticipant)?;
        if battle.moves[seat] != 0 {
            return Err(GameError::DuplicateMove);
        }
        let battle = self.get_mut(name)?;
        battle.moves[seat] = chosen.code();
        Ok(battle.clone())
    }

    /// Resolve the round once both seats moved. Any registered player may
    /// trigger resolution; callers polling before both moves are in get
    /// `MovesIncomplete` and must retry.
    pub fn resolve(
        &mut self,
        registry: &mut PlayerRegistry,
        minting: &TokenMintingEngine,
        caller: &Address,
        name: &str,
    ) -> Result<Battle, GameError> {
        if !registry.is_player(caller) {
            return Err(GameError::Unregistered);
        }
        let (participants, moves) = {
            let battle = self.get(name)?;
            if battle.status != BattleStatus::Started {
                return Err(GameError::InvalidState);
            }
            if battle.moves[0] == 0 || battle.moves[1] == 0 {
                return Err(GameError::MovesIncomplete);
            }
            (battle.players.clone(), battle.moves)
        };

        let snapshot_of = |seat: usize| -> Result<CombatantSnapshot, GameError> {
            let player = registry.get(&participants[seat])?;
            let token = minting
                .active_token(&participants[seat])
                .ok_or(GameError::NotFound)?;
            // moves were validated on submission
            let chosen_move = Move::from_code(moves[seat]).ok_or(GameError::InvalidMove)?;
            Ok(CombatantSnapshot {
                attack_strength: token.attack_strength,
                defense_strength: token.defense_strength,
                mana: player.mana,
                health: player.health,
                chosen_move,
            })
        };
        let outcome = resolver::resolve_round([snapshot_of(0)?, snapshot_of(1)?]);

        for seat in 0..2 {
            let player = registry.get_mut(&participants[seat])?;
            player.mana = outcome.sides[seat].mana;
            player.health = outcome.sides[seat].health;
        }

        let battle = self.get_mut(name)?;
        match outcome.winner {
            Some(seat) => {
                // Terminal: keep the final moves on record, release both players.
                battle.status = BattleStatus::Ended;
                battle.winner = participants[seat].clone();
                let snapshot = battle.clone();
                registry.get_mut(&participants[0])?.in_battle = false;
                registry.get_mut(&participants[1])?.in_battle = false;
                Ok(snapshot)
            }
            None => {
                battle.moves = [0, 0];
                Ok(battle.clone())
            }
        }
    }

    /// STARTED → QUIT: a participant forfeits; the opponent wins.
    pub fn quit(
        &mut self,
        registry: &mut PlayerRegistry,
        caller: &Address,
        name: &str,
    ) -> Result<Battle, GameError> {
        let seat = {
            let battle = self.get(name)?;
            if battle.status != BattleStatus::Started {
                return Err(GameError::InvalidState);
            }
            battle.seat_of(caller).ok_or(GameError::NotParticipant)?
        };
        let battle = self.get_mut(name)?;
        battle.status = BattleStatus::Quit;
        battle.winner = battle.players[1 - seat].clone();
        let participants = battle.players.clone();
        let snapshot = battle.clone();
        registry.get_mut(&participants[0])?.in_battle = false;
        registry.get_mut(&participants[1])?.in_battle = false;
        Ok(snapshot)
    }
}

impl Default for BattleArena {
    fn default() -> Self {
        Self::new()
    }
}
