use either::Either;
use rocket::response::status::{BadRequest, NotFound};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::State;
use rocket_okapi::{openapi, JsonSchema};

use crate::game::types::{Address, Battle};
use crate::game::GameState;
use crate::status_messages::{reject, Status};
use crate::SharedGameState;

/// Every state-mutating call, with the caller identity carried explicitly
/// per action (callers are pre-authenticated opaque addresses).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", tag = "action_type")]
pub enum ArenaAction {
    RegisterPlayer {
        caller: Address,
        player_name: String,
        token_name: String,
    },
    MintToken {
        caller: Address,
        token_name: String,
    },
    CreateBattle {
        caller: Address,
        name: String,
    },
    JoinBattle {
        caller: Address,
        name: String,
    },
    /// `move_code` is the raw wire value; anything but 1 (attack) or
    /// 2 (defend) is rejected as `InvalidMove`.
    SubmitMove {
        caller: Address,
        name: String,
        move_code: u8,
    },
    ResolveBattle {
        caller: Address,
        name: String,
    },
    QuitBattle {
        caller: Address,
        name: String,
    },
    SetBaseUri {
        caller: Address,
        uri: String,
    },
}

/// What a successful action produced.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", tag = "outcome")]
pub enum ActionOutcome {
    PlayerRegistered { player_id: usize },
    TokenMinted { token_id: usize },
    BattleUpdated { battle: Battle },
    BaseUriSet { uri: String },
}

/// The single mutating entrypoint. The game state lock is held across the
/// whole read-modify-write, so actions apply atomically in a total order.
#[openapi]
#[post("/action", format = "json", data = "<action>")]
pub async fn play(
    game_state: &State<SharedGameState>,
    action: Json<ArenaAction>,
) -> Result<
    (rocket::http::Status, Json<ActionOutcome>),
    Either<NotFound<Json<Status>>, BadRequest<Json<Status>>>,
> {
    let mut gs = game_state.lock().await;
    let outcome = apply(&mut gs, action.0).map_err(reject)?;
    Ok((rocket::http::Status::Created, Json(outcome)))
}

fn apply(gs: &mut GameState, action: ArenaAction) -> Result<ActionOutcome, crate::game::GameError> {
    match action {
        ArenaAction::RegisterPlayer {
            caller,
            player_name,
            token_name,
        } => {
            let player_id = gs.register_player(&caller, &player_name, &token_name)?;
            Ok(ActionOutcome::PlayerRegistered { player_id })
        }
        ArenaAction::MintToken { caller, token_name } => {
            let token_id = gs.mint_token(&caller, &token_name)?;
            Ok(ActionOutcome::TokenMinted { token_id })
        }
        ArenaAction::CreateBattle { caller, name } => {
            let battle = gs.create_battle(&caller, &name)?;
            Ok(ActionOutcome::BattleUpdated { battle })
        }
        ArenaAction::JoinBattle { caller, name } => {
            let battle = gs.join_battle(&caller, &name)?;
            Ok(ActionOutcome::BattleUpdated { battle })
        }
        ArenaAction::SubmitMove {
            caller,
            name,
            move_code,
        } => {
            let battle = gs.submit_move(&caller, &name, move_code)?;
            Ok(ActionOutcome::BattleUpdated { battle })
        }
        ArenaAction::ResolveBattle { caller, name } => {
            let battle = gs.resolve_battle(&caller, &name)?;
            Ok(ActionOutcome::BattleUpdated { battle })
        }
        ArenaAction::QuitBattle { caller, name } => {
            let battle = gs.quit_battle(&caller, &name)?;
            Ok(ActionOutcome::BattleUpdated { battle })
        }
        ArenaAction::SetBaseUri { caller, uri } => {
            gs.set_base_uri(&caller, &uri)?;
            Ok(ActionOutcome::BaseUriSet { uri })
        }
    }
}
