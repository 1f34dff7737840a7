use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::{Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::class::format_class_time;
use crate::models::{ClassUpdate, FitnessClass, NewClass};
use crate::services::studio::{self, StudioClock};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ClassResponse {
    id: String,
    name: String,
    instructor: String,
    date_time: String,
    total_slots: i32,
    available_slots: i32,
    duration_minutes: i32,
    timezone: String,
}

impl ClassResponse {
    fn new(class: FitnessClass, offset: FixedOffset) -> Self {
        Self {
            date_time: format_class_time(&class.date_time, offset),
            id: class.id,
            name: class.name,
            instructor: class.instructor,
            total_slots: class.total_slots,
            available_slots: class.available_slots,
            duration_minutes: class.duration_minutes,
            timezone: class.timezone,
        }
    }
}

const MAX_UPCOMING_DAYS: i64 = 3650;

// GET /classes
#[derive(Deserialize)]
pub struct ClassesQuery {
    pub instructor: Option<String>,
    pub upcoming_days: Option<i64>,
}

pub async fn list_classes(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<ClassesQuery>,
) -> Result<Json<Vec<ClassResponse>>, AppError> {
    let instructor = query
        .instructor
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let now = Utc::now().naive_utc();
    let until = match query.upcoming_days {
        Some(days) if days < 0 => {
            return Err(AppError::BadRequest(
                "upcoming_days cannot be negative".to_string(),
            ))
        }
        Some(days) => Some(now + Duration::days(days.min(MAX_UPCOMING_DAYS))),
        None => None,
    };

    let classes = {
        let db = state.db()?;
        queries::list_classes(&db, instructor, until.as_ref().map(|u| (&now, u)))?
    };
    tracing::info!(count = classes.len(), "retrieved classes");

    let offset = state.config.studio_offset();
    Ok(Json(
        classes
            .into_iter()
            .map(|c| ClassResponse::new(c, offset))
            .collect(),
    ))
}

// POST /classes
pub async fn create_class(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<NewClass>,
) -> Result<Json<ClassResponse>, AppError> {
    let clock = StudioClock {
        now: Utc::now().naive_utc(),
        offset: state.config.studio_offset(),
        default_timezone: state.config.studio_timezone.clone(),
    };

    let class = {
        let db = state.db()?;
        studio::create_class(&db, body, &clock)?
    };

    Ok(Json(ClassResponse::new(class, clock.offset)))
}

// PUT /classes/:id
pub async fn update_class(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    AppJson(body): AppJson<ClassUpdate>,
) -> Result<Json<ClassResponse>, AppError> {
    let class = {
        let db = state.db()?;
        studio::update_class(&db, &id, body)?
    };

    Ok(Json(ClassResponse::new(class, state.config.studio_offset())))
}

// DELETE /classes/:id
pub async fn delete_class(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    {
        let db = state.db()?;
        studio::delete_class(&db, &id)?;
    }

    Ok(Json(
        serde_json::json!({"message": "Class deleted successfully"}),
    ))
}
