use axum::Json;
use checklist_core::bootstrap::{bootstrap_and_test, BootstrapReport, Language};

use super::RepoRequest;
use crate::error::AppError;

/// POST /tdd/start — install dependencies and run the test suite.
///
/// Runs to completion before responding; command failures are reported in the
/// body (`ok: false`), not as HTTP errors.
pub async fn start(Json(body): Json<RepoRequest>) -> Result<Json<BootstrapReport>, AppError> {
    let root = body.root()?;
    let language = body.language().and_then(|l| Language::parse(&l));
    let report = tokio::task::spawn_blocking(move || bootstrap_and_test(&root, language))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;
    Ok(Json(report))
}
