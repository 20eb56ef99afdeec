use std::env;
use std::ffi::OsString;

use crate::error::AppError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MESSAGE: &str = "Hello from Kode-Soul DevOps Tools!";

/// Configuration lue une seule fois au démarrage, partagée en lecture seule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub message: String,
}

impl Config {
    /// Lit PORT et APP_MESSAGE depuis l'environnement du process.
    /// Les octets non UTF-8 sont remplacés par U+FFFD au lieu d'être ignorés.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var_os(key).map(decode_lossy))
    }

    /// Construit la config à partir d'une source de variables quelconque.
    /// Une variable vide est traitée comme absente.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match read("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| AppError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let message = read("APP_MESSAGE").unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

        Ok(Config { port, message })
    }
}

fn decode_lossy(value: OsString) -> String {
    value
        .into_string()
        .unwrap_or_else(|raw| raw.to_string_lossy().into_owned())
}
