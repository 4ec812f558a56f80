use serde::Deserialize;

/// Request body for creating or replacing a category.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
