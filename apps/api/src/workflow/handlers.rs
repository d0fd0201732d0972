//! Axum route handlers for the optimization workflow.
//!
//! Every handler answers with the session snapshot so the client can redraw
//! the current step from one payload.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::accept_resume;
use crate::optimization::client::OptimizationError;
use crate::state::AppState;
use crate::workflow::editing::ResumeEdit;
use crate::workflow::machine::{Phase, OPTIMIZATION_FAILED_NOTICE};
use crate::workflow::review::SessionSnapshot;
use crate::workflow::sessions::Session;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub text: String,
}

async fn load_session(state: &AppState, id: Uuid) -> Result<Session, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let session = state.sessions.create().await;
    let workflow = session.workflow.lock().await;
    (
        StatusCode::CREATED,
        Json(SessionSnapshot::capture(&session, &workflow)),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = load_session(&state, id).await?;
    let workflow = session.workflow.lock().await;
    Ok(Json(SessionSnapshot::capture(&session, &workflow)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// POST /api/v1/sessions/:id/resume
///
/// Multipart upload with one `resume` field. A rejected file leaves the
/// previously captured résumé (if any) in place.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = load_session(&state, id).await?;

    let mut document = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?;

        document = Some(accept_resume(
            content_type.as_deref(),
            file_name.as_deref(),
            &bytes,
            state.config.max_upload_bytes,
        )?);
        break;
    }

    let document = document.ok_or_else(|| {
        AppError::Validation(format!("Missing multipart field '{RESUME_FIELD}'"))
    })?;

    let mut workflow = session.workflow.lock().await;
    workflow.attach_resume(document)?;
    Ok(Json(SessionSnapshot::capture(&session, &workflow)))
}

/// PUT /api/v1/sessions/:id/job-description
pub async fn handle_set_job_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = load_session(&state, id).await?;
    let mut workflow = session.workflow.lock().await;
    workflow.set_job_description(request.text)?;
    Ok(Json(SessionSnapshot::capture(&session, &workflow)))
}

/// POST /api/v1/sessions/:id/optimize
///
/// Upload → Optimizing → (Review | Upload). The model call runs in its own
/// task without the session lock, so a dropped connection cannot strand the
/// session in `Optimizing`. A panicking client counts as a failed attempt.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = load_session(&state, id).await?;
    let request = session.workflow.lock().await.begin_optimization()?;
    info!(
        "Session {id} optimizing: {} with {} chars of job description",
        request.document.file_name(),
        request.job_description.chars().count()
    );

    let optimizer = state.optimizer.clone();
    let workflow = session.workflow.clone();
    let task = tokio::spawn(async move {
        let call = tokio::spawn(async move {
            optimizer
                .optimize(&request.document, &request.job_description)
                .await
        });
        let outcome = call
            .await
            .unwrap_or_else(|e| Err(OptimizationError::Aborted(e.to_string())));
        workflow.lock().await.complete_optimization(outcome)
    });

    let phase = task
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("optimization task failed: {e}")))??;

    if phase == Phase::Upload {
        return Err(AppError::OptimizationFailed(
            OPTIMIZATION_FAILED_NOTICE.to_string(),
        ));
    }

    info!("Session {id} ready for review");
    let workflow = session.workflow.lock().await;
    Ok(Json(SessionSnapshot::capture(&session, &workflow)))
}

/// PATCH /api/v1/sessions/:id/resume-data
pub async fn handle_edit_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(edit): Json<ResumeEdit>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = load_session(&state, id).await?;
    let mut workflow = session.workflow.lock().await;
    workflow.apply_edit(&edit)?;
    Ok(Json(SessionSnapshot::capture(&session, &workflow)))
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = load_session(&state, id).await?;
    let mut workflow = session.workflow.lock().await;
    workflow.reset()?;
    Ok(Json(SessionSnapshot::capture(&session, &workflow)))
}

/// DELETE /api/v1/sessions/:id/notice
pub async fn handle_dismiss_notice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = load_session(&state, id).await?;
    let mut workflow = session.workflow.lock().await;
    workflow.dismiss_notice();
    Ok(Json(SessionSnapshot::capture(&session, &workflow)))
}
