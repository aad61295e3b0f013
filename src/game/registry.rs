use super::error::GameError;
use super::types::{Address, Player, PlayerId};
use std::collections::HashMap;

/// Append-only store of registered players. Index 0 is a permanent sentinel
/// so that real ids start at 1 and id 0 can mean "not found".
#[derive(Debug, Clone)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    index: HashMap<Address, PlayerId>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        PlayerRegistry {
            players: vec![Player::sentinel()],
            index: HashMap::new(),
        }
    }

    /// Id for an address, or 0 if unregistered.
    pub fn id_of(&self, address: &Address) -> PlayerId {
        self.index.get(address).copied().unwrap_or(0)
    }

    pub fn is_player(&self, address: &Address) -> bool {
        self.id_of(address) != 0
    }

    /// Append a new player record. The caller must have checked for
    /// duplicates already; this is the commit step.
    pub fn append(&mut self, player: Player) -> PlayerId {
        let id = self.players.len();
        self.index.insert(player.address.clone(), id);
        self.players.push(player);
        id
    }

    pub fn get(&self, address: &Address) -> Result<&Player, GameError> {
        let id = self.id_of(address);
        if id == 0 {
            return Err(GameError::NotFound);
        }
        Ok(&self.players[id])
    }

    pub fn get_mut(&mut self, address: &Address) -> Result<&mut Player, GameError> {
        let id = self.id_of(address);
        if id == 0 {
            return Err(GameError::NotFound);
        }
        Ok(&mut self.players[id])
    }

    pub fn by_id(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// The full list, sentinel first.
    pub fn all(&self) -> &[Player] {
        &self.players
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
