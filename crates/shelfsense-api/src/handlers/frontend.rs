//! Static frontend handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use tracing::warn;

use crate::state::AppState;

/// Fallback page shown when the frontend bundle is missing.
const MISSING_PAGE: &str = r#"
<h1 style="color:#e74c3c; text-align:center; margin-top:120px; font-family:sans-serif;">
    index.html not found
</h1>
<p style="text-align:center; color:#7f8c8d;">
    Make sure <strong>index.html</strong> is in the configured frontend directory.
</p>
"#;

/// Serve the frontend page at the root path.
pub async fn serve_frontend(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let path = state.config.frontend_dir.join("index.html");

    match tokio::fs::read_to_string(&path).await {
        Ok(html) => (StatusCode::OK, Html(html)),
        Err(e) => {
            warn!(path = %path.display(), "Failed to read index.html: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(MISSING_PAGE.to_string()))
        }
    }
}
