use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Path of the model contribution page.
pub const MODEL_SUBMIT_PATH: &str = "/modelSubmit";

/// Path of the collection results view for a search term.
///
/// The term becomes a single path segment, so it is percent-encoded.
pub fn collection_path(query: &str) -> String {
    format!("/collections/{}", urlencoding::encode(query))
}

/// One 3D model entry in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct ModelSummary {
    pub uid: String,
    pub specimen_name: String,
    pub modeled_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated_by: Option<String>,
}

/// Distinct contributor names feeding the sub-header selects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContributorLists {
    pub modeled_by: Vec<String>,
    pub annotated_by: Vec<String>,
}

/// Query for header autocomplete suggestions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SuggestionRequest {
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 100, message = "Search term must be at most 100 characters"))
    )]
    pub q: String,
}

/// Query for the collection view.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CollectionSearchRequest {
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 100, message = "Search term must be at most 100 characters"))
    )]
    pub q: String,
    #[serde(default)]
    pub modeler: Option<String>,
    #[serde(default)]
    pub annotator: Option<String>,
}

impl CollectionSearchRequest {
    /// Modeler filter; an empty value means no filter.
    pub fn modeler_filter(&self) -> Option<&str> {
        self.modeler.as_deref().filter(|s| !s.is_empty())
    }

    /// Annotator filter; an empty value means no filter.
    pub fn annotator_filter(&self) -> Option<&str> {
        self.annotator.as_deref().filter(|s| !s.is_empty())
    }

    /// True when a model satisfies the search term and both filters.
    /// The term is a case-insensitive substring; filters match exactly.
    pub fn matches(&self, model: &ModelSummary) -> bool {
        let term = self.q.trim().to_lowercase();
        if !term.is_empty() && !model.specimen_name.to_lowercase().contains(&term) {
            return false;
        }
        if let Some(modeler) = self.modeler_filter() {
            if model.modeled_by != modeler {
                return false;
            }
        }
        if let Some(annotator) = self.annotator_filter() {
            if model.annotated_by.as_deref() != Some(annotator) {
                return false;
            }
        }
        true
    }
}
