use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Réponse renvoyée pour chaque requête, recréée à chaque appel
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub ok: bool,
    pub msg: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub time: DateTime<Utc>,
}

impl StatusResponse {
    pub fn now(msg: impl Into<String>) -> Self {
        Self::at(msg, Utc::now())
    }

    pub fn at(msg: impl Into<String>, time: DateTime<Utc>) -> Self {
        StatusResponse {
            ok: true,
            msg: msg.into(),
            time,
        }
    }
}

// Format ISO-8601 UTC en millisecondes avec suffixe Z (ex: 2026-10-18T09:15:02.417Z)
fn serialize_iso_millis<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true))
}
