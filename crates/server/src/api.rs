use dioxus::prelude::*;
use shared_types::{AdminOutcome, ContributorLists, ModelSummary};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use shared_types::{CollectionSearchRequest, SuggestionRequest};

/// Directory handle for server functions, with errors already converted.
#[cfg(feature = "server")]
async fn directory() -> Result<std::sync::Arc<dyn crate::repo::Directory>, ServerFnError> {
    crate::db::directory()
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Where the current visitor lands in the admin area.
///
/// Never errors on authorization grounds: a missing session, an unknown
/// email or an unusable directory all come back as `Unauthorized`.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn resolve_admin_destination() -> Result<AdminOutcome, ServerFnError> {
    let session = crate::auth::current_session();
    let dir = match crate::db::directory().await {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(error = %e, "Directory unavailable during admin dispatch");
            return Ok(AdminOutcome::Unauthorized);
        }
    };
    Ok(crate::dispatch::dispatch(session.as_ref(), dir.as_ref()).await)
}

/// Specimen names for the header autocomplete.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn search_suggestions(prefix: String) -> Result<Vec<String>, ServerFnError> {
    let req = SuggestionRequest { q: prefix };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    if req.q.trim().is_empty() {
        return Ok(Vec::new());
    }

    let limit = crate::config::catalog().suggestion_limit;
    directory()
        .await?
        .suggestions(&req.q, limit)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Modeler and annotator names for the sub-header selects.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_contributors() -> Result<ContributorLists, ServerFnError> {
    directory()
        .await?
        .contributors()
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Models shown in the collection view.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn search_collection(
    query: String,
    modeler: Option<String>,
    annotator: Option<String>,
) -> Result<Vec<ModelSummary>, ServerFnError> {
    let req = CollectionSearchRequest {
        q: query,
        modeler,
        annotator,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    directory()
        .await?
        .search_models(&req)
        .await
        .map_err(|e| e.into_server_fn_error())
}
