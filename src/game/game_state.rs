use super::arena::BattleArena;
use super::error::GameError;
use super::minting::{TokenMintingEngine, STAT_BUDGET};
use super::registry::PlayerRegistry;
use super::types::{Address, Battle, BattleId, BattleStatus, GameToken, Player, PlayerId, TokenId};
use rand::{RngCore, SeedableRng};
use rand_pcg::Lcg64Xsh32;

/// Starting mana for every freshly registered player.
pub const INITIAL_MANA: u32 = 25;
/// Starting health for every freshly registered player.
pub const INITIAL_HEALTH: u32 = 10;

/// The single process-wide game store: players, tokens, battles, the stat
/// RNG and the admin surface. All mutating calls go through `&mut self`
/// methods that validate every precondition before committing anything, so
/// a rejected call leaves the store untouched.
#[derive(Debug, Clone)]
pub struct GameState {
    registry: PlayerRegistry,
    minting: TokenMintingEngine,
    arena: BattleArena,
    rng: Lcg64Xsh32,
    owner: Address,
    base_uri: String,
}

impl GameState {
    /// Production construction: RNG seeded from OS entropy so stat rolls are
    /// unpredictable to callers.
    pub fn new(owner: Address, base_uri: String) -> Self {
        Self::with_rng(owner, base_uri, Lcg64Xsh32::from_entropy())
    }

    /// Deterministic construction for tests and replay.
    pub fn with_seed(owner: Address, base_uri: String, seed: u64) -> Self {
        let mut seed_bytes = [0u8; 16];
        seed_bytes[0..8].copy_from_slice(&seed.to_le_bytes());
        seed_bytes[8..16].copy_from_slice(&seed.to_le_bytes());
        Self::with_rng(owner, base_uri, Lcg64Xsh32::from_seed(seed_bytes))
    }

    fn with_rng(owner: Address, base_uri: String, rng: Lcg64Xsh32) -> Self {
        GameState {
            registry: PlayerRegistry::new(),
            minting: TokenMintingEngine::new(),
            arena: BattleArena::new(),
            rng,
            owner,
            base_uri,
        }
    }

    // ---- PlayerRegistry operations ----

    /// One-shot registration: create the player record, then mint their
    /// first token. Registration and the first mint commit together.
    pub fn register_player(
        &mut self,
        caller: &Address,
        player_name: &str,
        token_name: &str,
    ) -> Result<PlayerId, GameError> {
        if self.registry.is_player(caller) {
            return Err(GameError::DuplicateRegistration);
        }
        let id = self.registry.append(Player {
            address: caller.clone(),
            name: player_name.to_string(),
            mana: INITIAL_MANA,
            health: INITIAL_HEALTH,
            in_battle: false,
        });
        // Cannot fail now: the caller is registered and not in battle.
        self.mint_token(caller, token_name)?;
        log::info!("registered player {caller} as id {id}");
        Ok(id)
    }

    pub fn get_player(&self, address: &Address) -> Result<Player, GameError> {
        self.registry.get(address).cloned()
    }

    pub fn is_player(&self, address: &Address) -> bool {
        self.registry.is_player(address)
    }

    pub fn player_id(&self, address: &Address) -> PlayerId {
        self.registry.id_of(address)
    }

    pub fn player_by_id(&self, id: PlayerId) -> Option<Player> {
        self.registry.by_id(id).cloned()
    }

    /// Full append-only list, sentinel first.
    pub fn all_players(&self) -> Vec<Player> {
        self.registry.all().to_vec()
    }

    // ---- TokenMintingEngine operations ----

    /// Mint a fresh token with a uniform attack roll in [0, 10] and make it
    /// the caller's active token.
    pub fn mint_token(&mut self, caller: &Address, token_name: &str) -> Result<TokenId, GameError> {
        if !self.registry.is_player(caller) {
            return Err(GameError::Unregistered);
        }
        if self.registry.get(caller)?.in_battle {
            return Err(GameError::ActiveBattleConflict);
        }
        let roll = self.rng.next_u32() % (STAT_BUDGET + 1);
        let id = self.minting.mint(caller, token_name.to_string(), roll);
        log::info!("minted token {id} ({token_name}) for {caller}");
        Ok(id)
    }

    pub fn get_player_token(&self, address: &Address) -> Result<GameToken, GameError> {
        self.minting
            .active_token(address)
            .cloned()
            .ok_or(GameError::NotFound)
    }

    pub fn is_player_token(&self, address: &Address) -> bool {
        self.minting.has_token(address)
    }

    /// Full mint history, sentinel first.
    pub fn all_tokens(&self) -> Vec<GameToken> {
        self.minting.all().to_vec()
    }

    pub fn total_supply(&self) -> u64 {
        self.minting.total_supply()
    }

    /// Test support: force a player's active token to a chosen attack value
    /// (defense stays `10 - attack`).
    pub fn override_token_stats(&mut self, address: &Address, attack: u32) -> Result<(), GameError> {
        if self.minting.override_stats(address, attack) {
            Ok(())
        } else {
            Err(GameError::NotFound)
        }
    }

    // ---- BattleArena operations ----

    pub fn create_battle(&mut self, caller: &Address, name: &str) -> Result<Battle, GameError> {
        let battle = self.arena.create(&self.registry, caller, name)?;
        log::info!("battle {name:?} created by {caller}");
        Ok(battle)
    }

    pub fn join_battle(&mut self, caller: &Address, name: &str) -> Result<Battle, GameError> {
        let battle = self.arena.join(&mut self.registry, caller, name)?;
        log::info!("battle {name:?} started, {caller} joined");
        Ok(battle)
    }

    pub fn submit_move(
        &mut self,
        caller: &Address,
        name: &str,
        move_code: u8,
    ) -> Result<Battle, GameError> {
        self.arena.submit_move(caller, name, move_code)
    }

    pub fn resolve_battle(&mut self, caller: &Address, name: &str) -> Result<Battle, GameError> {
        let battle = self
            .arena
            .resolve(&mut self.registry, &self.minting, caller, name)?;
        if battle.status == BattleStatus::Ended {
            log::info!("battle {name:?} ended, winner {}", battle.winner);
        }
        Ok(battle)
    }

    pub fn quit_battle(&mut self, caller: &Address, name: &str) -> Result<Battle, GameError> {
        let battle = self.arena.quit(&mut self.registry, caller, name)?;
        log::info!("battle {name:?} forfeited by {caller}");
        Ok(battle)
    }

    pub fn get_battle(&self, name: &str) -> Result<Battle, GameError> {
        self.arena.get(name).cloned()
    }

    pub fn is_battle(&self, name: &str) -> bool {
        self.arena.is_battle(name)
    }

    pub fn battle_id(&self, name: &str) -> BattleId {
        self.arena.id_of(name)
    }

    pub fn battle_moves(&self, name: &str) -> Result<(u8, u8), GameError> {
        let battle = self.arena.get(name)?;
        Ok((battle.moves[0], battle.moves[1]))
    }

    pub fn battle_state(&self, name: &str) -> Result<BattleStatus, GameError> {
        Ok(self.arena.get(name)?.status)
    }

    /// Full append-only list, sentinel first.
    pub fn all_battles(&self) -> Vec<Battle> {
        self.arena.all().to_vec()
    }

    // ---- Administrative surface ----

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Owner-only; the empty string and arbitrary lengths are accepted.
    pub fn set_base_uri(&mut self, caller: &Address, uri: &str) -> Result<(), GameError> {
        if *caller != self.owner {
            return Err(GameError::AuthorizationError);
        }
        self.base_uri = uri.to_string();
        Ok(())
    }
}
