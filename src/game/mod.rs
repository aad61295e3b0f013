//! The battle-game rule engine: registry, minting, arena and combat
//! resolution over one owned store.
//!
//! Nothing in here knows about HTTP; the endpoints in the crate root lock the
//! shared [`GameState`] and call straight into these methods.

pub mod arena;
pub mod error;
pub mod game_state;
pub mod minting;
pub mod registry;
pub mod resolver;
pub mod types;

pub use error::GameError;
pub use game_state::{GameState, INITIAL_HEALTH, INITIAL_MANA};
pub use types::{Address, Battle, BattleStatus, GameToken, Move, Player};
