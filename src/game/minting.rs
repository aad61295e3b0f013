use super::types::{Address, GameToken, TokenId};
use std::collections::HashMap;

/// The conserved stat budget of every minted token.
pub const STAT_BUDGET: u32 = 10;

/// Append-only store of minted combat tokens plus the "active token" pointer
/// per player. Minting never removes earlier tokens from the history; it only
/// repoints the owner's active-token entry.
#[derive(Debug, Clone)]
pub struct TokenMintingEngine {
    tokens: Vec<GameToken>,
    active: HashMap<Address, TokenId>,
    total_supply: u64,
}

impl TokenMintingEngine {
    pub fn new() -> Self {
        TokenMintingEngine {
            tokens: vec![GameToken::sentinel()],
            active: HashMap::new(),
            total_supply: 0,
        }
    }

    /// Commit a mint with a pre-drawn attack roll. Preconditions (registered
    /// owner, not in battle) are the caller's responsibility; the roll is
    /// clamped into the stat budget so the conservation invariant holds for
    /// any input.
    pub fn mint(&mut self, owner: &Address, name: String, attack_roll: u32) -> TokenId {
        let attack = attack_roll.min(STAT_BUDGET);
        let id = self.tokens.len();
        self.tokens.push(GameToken {
            name,
            id,
            attack_strength: attack,
            defense_strength: STAT_BUDGET - attack,
        });
        self.active.insert(owner.clone(), id);
        self.total_supply += 1;
        id
    }

    /// Active token id for an address, or 0 if it never minted.
    pub fn active_id(&self, address: &Address) -> TokenId {
        self.active.get(address).copied().unwrap_or(0)
    }

    pub fn has_token(&self, address: &Address) -> bool {
        self.active_id(address) != 0
    }

    /// The owner's active token, if any. Historical tokens are reachable
    /// only through [`TokenMintingEngine::all`].
    pub fn active_token(&self, address: &Address) -> Option<&GameToken> {
        let id = self.active_id(address);
        if id == 0 {
            return None;
        }
        self.tokens.get(id)
    }

    /// Rewrite the stats on an address's active token in place, preserving
    /// the conservation invariant. Test support for scripting deterministic
    /// battles; not reachable through a normal mint.
    pub fn override_stats(&mut self, address: &Address, attack: u32) -> bool {
        let id = self.active_id(address);
        if id == 0 {
            return false;
        }
        let attack = attack.min(STAT_BUDGET);
        let token = &mut self.tokens[id];
        token.attack_strength = attack;
        token.defense_strength = STAT_BUDGET - attack;
        true
    }

    /// The full mint history, sentinel first.
    pub fn all(&self) -> &[GameToken] {
        &self.tokens
    }

    /// Count of real mints; the sentinel is excluded.
    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }
}

impl Default for TokenMintingEngine {
    fn default() -> Self {
        Self::new()
    }
}
