use rocket::response::status::NotFound;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::game::types::{Address, GameToken};
use crate::status_messages::{new_status, Status};
use crate::SharedGameState;

/// Full mint history including the leading sentinel token.
#[openapi]
#[get("/tokens")]
pub async fn list_tokens(game_state: &State<SharedGameState>) -> Json<Vec<GameToken>> {
    Json(game_state.lock().await.all_tokens())
}

/// A player's *active* token: the most recent mint, not history.
#[openapi]
#[get("/tokens/active?<address>")]
pub async fn get_player_token(
    address: String,
    game_state: &State<SharedGameState>,
) -> Result<Json<GameToken>, NotFound<Json<Status>>> {
    let gs = game_state.lock().await;
    gs.get_player_token(&Address(address.clone()))
        .map(Json)
        .map_err(|_| NotFound(new_status("NotFound", format!("no token for {address:?}"))))
}

#[openapi]
#[get("/tokens/exists?<address>")]
pub async fn is_player_token(address: String, game_state: &State<SharedGameState>) -> Json<bool> {
    Json(game_state.lock().await.is_player_token(&Address(address)))
}

/// Count of real mints; the sentinel is never counted.
#[openapi]
#[get("/tokens/supply")]
pub async fn total_supply(game_state: &State<SharedGameState>) -> Json<u64> {
    Json(game_state.lock().await.total_supply())
}

/// Payload for the test-only stat override below.
#[derive(
    Debug, Clone, rocket::serde::Serialize, rocket::serde::Deserialize, rocket_okapi::JsonSchema,
)]
#[serde(crate = "rocket::serde")]
pub struct StatOverride {
    pub address: Address,
    pub attack: u32,
}

/// Test endpoint: pin a player's active token to known stats so integration
/// tests can script deterministic battles.
#[post("/tests/tokens/stats", format = "json", data = "<body>")]
pub async fn override_token_stats(
    body: Json<StatOverride>,
    game_state: &State<SharedGameState>,
) -> Result<Json<GameToken>, NotFound<Json<Status>>> {
    let mut gs = game_state.lock().await;
    gs.override_token_stats(&body.address, body.attack)
        .map_err(|_| NotFound(new_status("NotFound", format!("no token for {}", body.address))))?;
    gs.get_player_token(&body.address)
        .map(Json)
        .map_err(|_| NotFound(new_status("NotFound", format!("no token for {}", body.address))))
}
