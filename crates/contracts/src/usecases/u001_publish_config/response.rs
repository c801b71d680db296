use serde::{Deserialize, Serialize};

/// Error body returned by the document store on a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
