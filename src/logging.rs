use tracing_subscriber::EnvFilter;

/// Installe le subscriber tracing (niveau via RUST_LOG, `info` par défaut).
/// Les logs partent sur stderr : stdout ne porte que la ligne "Listening on".
/// Les records `log` (middleware Logger d'actix) sont redirigés ici.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Ignoré si un subscriber est déjà installé
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
