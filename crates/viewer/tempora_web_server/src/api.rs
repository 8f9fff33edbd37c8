//! The JSON API under `/api/`.
//!
//! | method | path                        | body                                |
//! |--------|-----------------------------|-------------------------------------|
//! | POST   | `sync`                      | `{"reference": "15:00", "clocks": ["14:45"]}` |
//! | GET    | `board`                     |                                     |
//! | POST   | `board/clocks`              | `{"name": "Mill Clock", "time": "9:30"}` |
//! | POST   | `board/random`              |                                     |
//! | POST   | `board/reference`           | `{"time": "12:00"}`                 |
//! | POST   | `board/synchronize`         |                                     |
//! | POST   | `board/synchronize-next`    |                                     |
//! | POST   | `board/reset`               |                                     |
//! | DELETE | `board/clocks/{id}`         |                                     |
//!
//! Every `board` endpoint answers with the updated board.

use parking_lot::Mutex;
use tempora_clock::{
    ClockBoard, ClockError, ClockStatus, SyncSummary, TimeOfDay, differences_from,
};
use tiny_http::Method;

use crate::reply::Reply;

#[derive(thiserror::Error, Debug)]
enum ApiError {
    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error("Malformed request body: {0}")]
    BadJson(#[from] serde_json::Error),

    #[error("No such endpoint: /api/{0}")]
    NotFound(String),

    #[error("No clock with id {0}")]
    NoSuchClock(u32),

    #[error("{method} is not allowed on /api/{endpoint}")]
    MethodNotAllowed { method: Method, endpoint: String },
}

impl ApiError {
    fn status(&self) -> u16 {
        match self {
            Self::Clock(ClockError::InvalidTimeFormat { .. }) | Self::BadJson(_) => 400,
            Self::Clock(ClockError::NoClockNamesLeft) => 409,
            Self::NotFound(_) | Self::NoSuchClock(_) => 404,
            Self::MethodNotAllowed { .. } => 405,
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

/// Times arrive as raw JSON so that non-string values get the same
/// [`ClockError::InvalidTimeFormat`] as malformed strings.
#[derive(serde::Deserialize)]
struct SyncRequest {
    reference: serde_json::Value,
    clocks: Vec<serde_json::Value>,
}

#[derive(serde::Serialize)]
struct SyncResponse {
    reference: TimeOfDay,
    differences: Vec<i32>,
    statuses: Vec<ClockStatus>,
    summary: SyncSummary,
}

#[derive(serde::Deserialize)]
struct AddClockRequest {
    name: String,
    time: serde_json::Value,
}

#[derive(serde::Deserialize)]
struct ReferenceRequest {
    time: serde_json::Value,
}

pub(crate) fn handle(
    board: &Mutex<ClockBoard>,
    method: &Method,
    endpoint: &str,
    body: &[u8],
) -> Reply {
    match route(board, method, endpoint, body) {
        Ok(reply) => reply,
        Err(err) => {
            tempora_log::debug!("API error: {err}");
            Reply::json(
                err.status(),
                &ErrorBody {
                    error: err.to_string(),
                },
            )
        }
    }
}

fn route(
    board: &Mutex<ClockBoard>,
    method: &Method,
    endpoint: &str,
    body: &[u8],
) -> Result<Reply, ApiError> {
    let endpoint = endpoint.trim_end_matches('/');

    let expected_method = match endpoint {
        "board" => Method::Get,
        "sync" | "board/clocks" | "board/random" | "board/reference" | "board/synchronize"
        | "board/synchronize-next" | "board/reset" => Method::Post,
        _ if endpoint.starts_with("board/clocks/") => Method::Delete,
        _ => return Err(ApiError::NotFound(endpoint.to_owned())),
    };
    if *method != expected_method {
        return Err(ApiError::MethodNotAllowed {
            method: method.clone(),
            endpoint: endpoint.to_owned(),
        });
    }

    if endpoint == "sync" {
        let request: SyncRequest = serde_json::from_slice(body)?;
        return Ok(Reply::json(200, &sync(&request)?));
    }

    let mut board = board.lock();
    match endpoint {
        "board/clocks" => {
            let request: AddClockRequest = serde_json::from_slice(body)?;
            let time = time_from_json(&request.time)?;
            let clock = board.add_clock(request.name, time);
            tempora_log::info!("Added {} at {}", clock.name, clock.time);
        }
        "board/random" => {
            let clock = board.add_random_clock(&mut rand::rng())?;
            tempora_log::info!("Added {} at {}", clock.name, clock.time);
        }
        "board/reference" => {
            let request: ReferenceRequest = serde_json::from_slice(body)?;
            board.set_reference(time_from_json(&request.time)?);
        }
        "board/synchronize" => board.synchronize_all(),
        "board/synchronize-next" => {
            board.synchronize_next();
        }
        "board/reset" => board.reset(),
        "board" => {}
        _ => {
            let id = endpoint
                .strip_prefix("board/clocks/")
                .and_then(|id| id.parse::<u32>().ok())
                .ok_or_else(|| ApiError::NotFound(endpoint.to_owned()))?;
            let clock = board.remove_clock(id).ok_or(ApiError::NoSuchClock(id))?;
            tempora_log::info!("Removed {}", clock.name);
        }
    }

    Ok(Reply::json(200, &board.view()))
}

/// The reference is checked first, then each clock in order; the first bad one is reported.
fn sync(request: &SyncRequest) -> Result<SyncResponse, ClockError> {
    let reference = time_from_json(&request.reference)?;
    let clocks = request
        .clocks
        .iter()
        .map(time_from_json)
        .collect::<Result<Vec<_>, _>>()?;

    let differences = differences_from(reference, clocks);

    Ok(SyncResponse {
        reference,
        statuses: differences.iter().copied().map(ClockStatus::classify).collect(),
        summary: SyncSummary::from_differences(&differences),
        differences,
    })
}

fn time_str(value: &serde_json::Value) -> Result<&str, ClockError> {
    value
        .as_str()
        .ok_or_else(|| ClockError::invalid_time(value.to_string()))
}

fn time_from_json(value: &serde_json::Value) -> Result<TimeOfDay, ClockError> {
    TimeOfDay::parse(time_str(value)?)
}
