use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, Serializer};

/// Payload for the connection's write operation.
///
/// The confirmation field is client-only and has no counterpart here, so
/// it can never reach the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub email: String,
    #[serde(serialize_with = "expose_secret_string")]
    pub existing_password: Secret<String>,
    #[serde(serialize_with = "expose_secret_string")]
    pub new_password: Secret<String>,
}

fn expose_secret_string<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}
