use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Instala o subscriber `fmt` com filtro via `RUST_LOG` (padrão `info`)
///
/// Usa `try_init`: se o host já tiver um subscriber, nada acontece.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

pub fn log_config_loaded(endpoint: &str, url: &str) {
    info!("Endpoint Octopus carregado: {} -> {}", endpoint, url);
}

pub fn log_config_error(message: &str) {
    error!("Configuration error: {}", message);
}

pub fn log_ignore_ssl(ignore_ssl_errors: bool) {
    info!("Ignore SSL: {}", ignore_ssl_errors);
}

pub fn log_fetch_started(url: &str) {
    debug!("GET {}", url);
}

pub fn log_name_resolved(id: &str, name: &str) {
    info!("Nome resolvido: {} -> {}", id, name);
}

pub fn log_resolution_failed(id: &str, message: &str) {
    warn!("Falha ao resolver {}: {}", id, message);
}
