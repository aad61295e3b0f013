//! # Titan Arena
//!
//! A turn-based battle-game rule engine served over HTTP.
//!
//! ## Overview
//!
//! Players register once (which mints their first combat token), mint
//! replacement tokens between battles, and fight through named battles that
//! move PENDING → STARTED → (ENDED | QUIT). Combat resolves one round at a
//! time from both players' submitted moves and their token stats.
//!
//! ## Architecture
//!
//! The API is built on the Rocket web framework with OpenAPI documentation.
//! All game state lives in one [`game::GameState`] behind an `Arc<Mutex<_>>`:
//! every mutating request holds the lock across its whole read-modify-write,
//! so calls apply atomically in a single total order, and a rejected call
//! commits nothing.

// Rocket makes this a bit tricky to support
#![allow(clippy::module_name_repetitions)]
#[macro_use]
extern crate rocket;

use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

pub mod action;
pub mod admin;
pub mod battles;
pub mod game;
pub mod players;
pub mod status_messages;
pub mod tokens;

use game::types::Address;
use game::GameState;

/// The single shared game store; one lock serializes all mutating calls.
pub type SharedGameState = std::sync::Arc<rocket::futures::lock::Mutex<GameState>>;

/// Initializes the Rocket web server around an already-constructed game
/// state. Tests use this with a seeded [`GameState`] and a known owner.
pub fn rocket_initialize_with(game_state: GameState) -> rocket::Rocket<rocket::Build> {
    use crate::action::{okapi_add_operation_for_play_, play};
    use crate::admin::{base_uri, okapi_add_operation_for_base_uri_};
    use crate::admin::{okapi_add_operation_for_owner_, owner};
    use crate::battles::{
        battle_id, battle_moves, battle_state, get_battle, is_battle, list_battles,
        okapi_add_operation_for_battle_id_, okapi_add_operation_for_battle_moves_,
        okapi_add_operation_for_battle_state_, okapi_add_operation_for_get_battle_,
        okapi_add_operation_for_is_battle_, okapi_add_operation_for_list_battles_,
    };
    use crate::players::{
        get_player, is_player, list_players, okapi_add_operation_for_get_player_,
        okapi_add_operation_for_is_player_, okapi_add_operation_for_list_players_,
        okapi_add_operation_for_player_id_, player_id,
    };
    use crate::tokens::{
        get_player_token, is_player_token, list_tokens,
        okapi_add_operation_for_get_player_token_, okapi_add_operation_for_is_player_token_,
        okapi_add_operation_for_list_tokens_, okapi_add_operation_for_total_supply_, total_supply,
    };

    #[allow(clippy::no_effect_underscore_binding)]
    let _ = env_logger::try_init();

    let gs: SharedGameState = std::sync::Arc::new(rocket::futures::lock::Mutex::new(game_state));

    rocket::build()
        .mount(
            "/",
            openapi_get_routes![
                play,
                list_players,
                get_player,
                is_player,
                player_id,
                list_tokens,
                get_player_token,
                is_player_token,
                total_supply,
                list_battles,
                get_battle,
                is_battle,
                battle_id,
                battle_moves,
                battle_state,
                base_uri,
                owner,
            ],
        )
        .mount("/swagger", make_swagger_ui(&get_docs()))
        .mount("/", rocket::routes![crate::tokens::override_token_stats])
        .manage(gs)
}

/// Initializes the Rocket web server with a production game state. The owner
/// identity and initial metadata URI come from `ARENA_OWNER` and
/// `ARENA_BASE_URI` (the deployment constructor parameters).
///
/// # Example
///
/// ```no_run
/// use titan_arena::rocket_initialize;
///
/// #[rocket::main]
/// async fn main() {
///     rocket_initialize().launch().await.expect("Failed to launch rocket");
/// }
/// ```
pub fn rocket_initialize() -> rocket::Rocket<rocket::Build> {
    let owner = std::env::var("ARENA_OWNER").unwrap_or_else(|_| "0xowner".to_string());
    let base_uri = std::env::var("ARENA_BASE_URI")
        .unwrap_or_else(|_| "https://titan-arena.example/metadata/".to_string());
    rocket_initialize_with(GameState::new(Address(owner), base_uri))
}

fn get_docs() -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: "/openapi.json".to_string(),
        ..Default::default()
    }
}
