use rocket::response::status::NotFound;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::game::types::{Battle, BattleStatus};
use crate::status_messages::{new_status, Status};
use crate::SharedGameState;

fn missing(name: &str) -> NotFound<Json<Status>> {
    NotFound(new_status("NotFound", format!("no battle named {name:?}")))
}

/// Full battle list including the leading sentinel record. Terminal battles
/// stay listed forever.
#[openapi]
#[get("/battles")]
pub async fn list_battles(game_state: &State<SharedGameState>) -> Json<Vec<Battle>> {
    Json(game_state.lock().await.all_battles())
}

/// Battle names are case-sensitive; the empty string is a valid name.
#[openapi]
#[get("/battles/info?<name>")]
pub async fn get_battle(
    name: String,
    game_state: &State<SharedGameState>,
) -> Result<Json<Battle>, NotFound<Json<Status>>> {
    let gs = game_state.lock().await;
    gs.get_battle(&name).map(Json).map_err(|_| missing(&name))
}

#[openapi]
#[get("/battles/exists?<name>")]
pub async fn is_battle(name: String, game_state: &State<SharedGameState>) -> Json<bool> {
    Json(game_state.lock().await.is_battle(&name))
}

/// 1-based id for a battle name; 0 means unknown.
#[openapi]
#[get("/battles/id?<name>")]
pub async fn battle_id(name: String, game_state: &State<SharedGameState>) -> Json<usize> {
    Json(game_state.lock().await.battle_id(&name))
}

/// The current round's move slots as raw codes; 0 means "no move yet".
#[openapi]
#[get("/battles/moves?<name>")]
pub async fn battle_moves(
    name: String,
    game_state: &State<SharedGameState>,
) -> Result<Json<(u8, u8)>, NotFound<Json<Status>>> {
    let gs = game_state.lock().await;
    gs.battle_moves(&name).map(Json).map_err(|_| missing(&name))
}

#[openapi]
#[get("/battles/state?<name>")]
pub async fn battle_state(
    name: String,
    game_state: &State<SharedGameState>,
) -> Result<Json<BattleStatus>, NotFound<Json<Status>>> {
    let gs = game_state.lock().await;
    gs.battle_state(&name).map(Json).map_err(|_| missing(&name))
}
