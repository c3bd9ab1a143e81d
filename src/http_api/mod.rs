use std::{collections::BTreeMap, net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{Day, Event, ScheduleError, SharedWeekSchedule};

#[derive(Clone)]
pub struct AppState {
    schedule: Arc<SharedWeekSchedule>,
}

impl AppState {
    pub fn new(schedule: SharedWeekSchedule) -> Self {
        Self {
            schedule: Arc::new(schedule),
        }
    }

    pub fn with_shared(schedule: Arc<SharedWeekSchedule>) -> Self {
        Self { schedule }
    }

    fn schedule(&self) -> &SharedWeekSchedule {
        &self.schedule
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Conflict(String),
    Invalid(String),
}

impl From<ScheduleError> for ApiError {
    fn from(value: ScheduleError) -> Self {
        let message = value.to_string();
        match value {
            ScheduleError::Conflict(_) => ApiError::Conflict(message),
            ScheduleError::Index(_) => ApiError::NotFound(message),
            ScheduleError::Event(_) | ScheduleError::Day(_) | ScheduleError::Position { .. } => {
                ApiError::Invalid(message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, "conflict", message),
            ApiError::Invalid(message) => (StatusCode::BAD_REQUEST, "invalid_request", message),
        };
        (status, Json(ErrorBody { error, message })).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct NewEvent {
    title: String,
    time: String,
}

fn parse_day(raw: &str) -> Result<Day, ApiError> {
    raw.parse::<Day>()
        .map_err(|err| ApiError::from(ScheduleError::from(err)))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/week", get(get_week))
        .route("/days/:day/events", get(list_events).post(create_event))
        .route("/days/:day/events/:position", delete(delete_event))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, schedule: SharedWeekSchedule) -> std::io::Result<()> {
    let app = router(AppState::new(schedule));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "week scheduler HTTP API listening");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn get_week(State(state): State<AppState>) -> Json<BTreeMap<Day, Vec<Event>>> {
    Json(state.schedule().snapshot().into_iter().collect())
}

async fn list_events(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let day = parse_day(&day)?;
    Ok(Json(state.schedule().list(day)))
}

async fn create_event(
    State(state): State<AppState>,
    Path(day): Path<String>,
    Json(payload): Json<NewEvent>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let day = parse_day(&day)?;
    let event = Event::try_new(payload.title, payload.time)
        .map_err(|err| ApiError::from(ScheduleError::from(err)))?;
    state
        .schedule()
        .add(day, event.clone())
        .map_err(|err| ApiError::from(ScheduleError::from(err)))?;
    Ok((StatusCode::CREATED, Json(event)))
}

async fn delete_event(
    State(state): State<AppState>,
    Path((day, position)): Path<(String, usize)>,
) -> Result<Json<Event>, ApiError> {
    let day = parse_day(&day)?;
    let removed = state
        .schedule()
        .remove(day, position)
        .map_err(|err| ApiError::from(ScheduleError::from(err)))?;
    Ok(Json(removed))
}
