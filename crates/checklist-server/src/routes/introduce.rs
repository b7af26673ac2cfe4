use axum::Json;
use checklist_core::locate::find_checklists;

use super::RepoRequest;
use crate::error::AppError;

/// POST /introduce — describe the server and list the repository's checklists.
pub async fn introduce(Json(body): Json<RepoRequest>) -> Result<Json<serde_json::Value>, AppError> {
    let root = body.root()?;
    let scan_root = root.clone();
    let found = tokio::task::spawn_blocking(move || find_checklists(&scan_root))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({
        "message": "Hello from the MCP checklist server. I can manage checklists and kick off TDD.",
        "repo": root,
        "checklists": found,
        "hasChecklist": !found.is_empty(),
        "instructions": "Use /ensure-checklist to create one if missing, or /tdd/start to begin.",
    })))
}
