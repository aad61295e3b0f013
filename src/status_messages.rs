use either::{Either, Left, Right};
use rocket::response::status::{BadRequest, NotFound};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::JsonSchema;

use crate::game::GameError;

/// JSON payload carried by every rejected call.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct Status {
    pub error: String,
    pub message: String,
}

pub fn new_status(error: &str, message: impl Into<String>) -> Json<Status> {
    Json(Status {
        error: error.to_string(),
        message: message.into(),
    })
}

/// Stable machine-readable name for each rejection.
pub fn error_name(error: &GameError) -> &'static str {
    match error {
        GameError::NotFound => "NotFound",
        GameError::DuplicateRegistration => "DuplicateRegistration",
        GameError::DuplicateBattle => "DuplicateBattle",
        GameError::Unregistered => "Unregistered",
        GameError::SelfJoin => "SelfJoin",
        GameError::ActiveBattleConflict => "ActiveBattleConflict",
        GameError::InvalidState => "InvalidState",
        GameError::InvalidMove => "InvalidMove",
        GameError::DuplicateMove => "DuplicateMove",
        GameError::MovesIncomplete => "MovesIncomplete",
        GameError::NotParticipant => "NotParticipant",
        GameError::AuthorizationError => "AuthorizationError",
    }
}

/// Map an engine rejection onto the HTTP surface: missing keys are 404,
/// everything else is a 400 with the typed error name in the body.
pub fn reject(error: GameError) -> Either<NotFound<Json<Status>>, BadRequest<Json<Status>>> {
    let body = new_status(error_name(&error), error.to_string());
    match error {
        GameError::NotFound => Left(NotFound(body)),
        _ => Right(BadRequest(body)),
    }
}
