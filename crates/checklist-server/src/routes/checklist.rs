use axum::Json;
use checklist_core::{ensure_checklist, EnsureOptions, EnsureOutcome};

use super::RepoRequest;
use crate::error::AppError;

/// Recorded as `metadata.default_language` when the request names none.
const DEFAULT_LANGUAGE: &str = "python";

/// POST /ensure-checklist — report existing checklists or generate one.
pub async fn ensure(Json(body): Json<RepoRequest>) -> Result<Json<serde_json::Value>, AppError> {
    let root = body.root()?;
    let opts = EnsureOptions {
        dry_run: body.dry_run.unwrap_or(false),
        language: Some(body.language().unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())),
    };
    let outcome = tokio::task::spawn_blocking(move || ensure_checklist(&root, &opts))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    let value = match outcome {
        EnsureOutcome::Found { paths } => serde_json::json!({
            "created": false,
            "message": format!("Found {} checklist(s)", paths.len()),
            "path": paths,
        }),
        EnsureOutcome::Preview { path, content } => serde_json::json!({
            "created": true,
            "path": path,
            "dryRun": true,
            "content": content,
        }),
        EnsureOutcome::Written { path } => serde_json::json!({
            "created": true,
            "path": path,
            "dryRun": false,
        }),
    };
    Ok(Json(value))
}
