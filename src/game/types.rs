use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

/// Opaque, pre-authenticated caller identity. The empty string is the
/// reserved "absent" address used for sentinel records and undecided winners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", transparent)]
pub struct Address(pub String);

impl Address {
    pub fn zero() -> Self {
        Address(String::new())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Address(s.to_string())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1-based ids into the append-only stores; 0 is the sentinel / "not found".
pub type PlayerId = usize;
pub type TokenId = usize;
pub type BattleId = usize;

/// A registered participant. Records are append-only and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct Player {
    pub address: Address,
    pub name: String,
    pub mana: u32,
    pub health: u32,
    pub in_battle: bool,
}

impl Player {
    /// The permanent placeholder record at index 0.
    pub fn sentinel() -> Self {
        Player {
            address: Address::zero(),
            name: String::new(),
            mana: 0,
            health: 0,
            in_battle: false,
        }
    }
}

/// A minted combat loadout. Invariant: `attack_strength + defense_strength == 10`,
/// both in [0, 10]. Historical tokens stay in the list; only the latest per
/// player is addressable as "active".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct GameToken {
    pub name: String,
    pub id: TokenId,
    pub attack_strength: u32,
    pub defense_strength: u32,
}

impl GameToken {
    pub fn sentinel() -> Self {
        GameToken {
            name: String::new(),
            id: 0,
            attack_strength: 0,
            defense_strength: 0,
        }
    }
}

/// Battle lifecycle. Statuses serialize by name; the bit-flag wire codes
/// are exposed through [`BattleStatus::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum BattleStatus {
    Pending,
    Started,
    Ended,
    Quit,
}

impl BattleStatus {
    pub fn code(self) -> u8 {
        match self {
            BattleStatus::Pending => 1,
            BattleStatus::Started => 2,
            BattleStatus::Ended => 4,
            BattleStatus::Quit => 8,
        }
    }

    /// ENDED and QUIT admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, BattleStatus::Ended | BattleStatus::Quit)
    }
}

/// A combat move. On the wire attack is 1 and defend is 2; 0 in a move slot
/// means "no move submitted this round".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub enum Move {
    Attack,
    Defend,
}

impl Move {
    pub fn code(self) -> u8 {
        match self {
            Move::Attack => 1,
            Move::Defend => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Move> {
        match code {
            1 => Some(Move::Attack),
            2 => Some(Move::Defend),
            _ => None,
        }
    }
}

/// A named contest between two registered players.
/// Seat 0 is the creator, seat 1 the joiner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct Battle {
    pub status: BattleStatus,
    pub name: String,
    pub players: [Address; 2],
    /// 0 = no move yet, otherwise a [`Move`] code.
    pub moves: [u8; 2],
    pub winner: Address,
}

impl Battle {
    pub fn sentinel() -> Self {
        Battle {
            status: BattleStatus::Pending,
            name: String::new(),
            players: [Address::zero(), Address::zero()],
            moves: [0, 0],
            winner: Address::zero(),
        }
    }

    /// Seat of `address` in this battle, if it is a participant.
    pub fn seat_of(&self, address: &Address) -> Option<usize> {
        self.players.iter().position(|p| p == address)
    }
}
