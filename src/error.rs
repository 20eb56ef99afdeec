use std::num::ParseIntError;

use thiserror::Error;

/// Erreurs possibles au démarrage du serveur.
/// Le handler lui-même ne peut pas échouer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Bind du socket (port déjà utilisé, etc.) ou arrêt du serveur
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_port_message() {
        let source = "abc".parse::<u16>().unwrap_err();
        let err = AppError::InvalidPort {
            value: "abc".to_string(),
            source,
        };

        assert!(err.to_string().starts_with("invalid PORT value \"abc\""));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: AppError = io.into();

        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("address in use"));
    }
}
