use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{BetRejection, EngineError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    /// Ставка не прошла проверку, состояние не изменилось.
    #[error("Недопустимая ставка: {0}")]
    InvalidBet(BetRejection),

    /// Прочие ошибки движка (исчерпанная колода и т.п.).
    #[error("Ошибка движка: {0}")]
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidBet(rejection) => ApiError::InvalidBet(rejection),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
