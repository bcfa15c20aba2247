use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account record returned by the connection's read operation.
///
/// Only `email` means anything to the form. Servers are free to include
/// further profile fields; they ride along in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
