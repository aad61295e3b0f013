use rocket::response::status::NotFound;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::game::types::{Address, Player};
use crate::status_messages::{new_status, Status};
use crate::SharedGameState;

/// Full player list including the leading sentinel record; grows by exactly
/// one per successful registration.
#[openapi]
#[get("/players")]
pub async fn list_players(game_state: &State<SharedGameState>) -> Json<Vec<Player>> {
    Json(game_state.lock().await.all_players())
}

#[openapi]
#[get("/players/info?<address>")]
pub async fn get_player(
    address: String,
    game_state: &State<SharedGameState>,
) -> Result<Json<Player>, NotFound<Json<Status>>> {
    let gs = game_state.lock().await;
    gs.get_player(&Address(address.clone()))
        .map(Json)
        .map_err(|_| NotFound(new_status("NotFound", format!("no player at {address:?}"))))
}

#[openapi]
#[get("/players/exists?<address>")]
pub async fn is_player(address: String, game_state: &State<SharedGameState>) -> Json<bool> {
    Json(game_state.lock().await.is_player(&Address(address)))
}

/// 1-based id for an address; 0 means unregistered.
#[openapi]
#[get("/players/id?<address>")]
pub async fn player_id(address: String, game_state: &State<SharedGameState>) -> Json<usize> {
    Json(game_state.lock().await.player_id(&Address(address)))
}
