use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::game::types::Address;
use crate::SharedGameState;

/// The metadata base URI set at construction (updatable by the owner through
/// the `SetBaseUri` action).
#[openapi]
#[get("/metadata/base-uri")]
pub async fn base_uri(game_state: &State<SharedGameState>) -> Json<String> {
    Json(game_state.lock().await.base_uri().to_string())
}

#[openapi]
#[get("/metadata/owner")]
pub async fn owner(game_state: &State<SharedGameState>) -> Json<Address> {
    Json(game_state.lock().await.owner().clone())
}
