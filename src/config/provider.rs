use crate::config::{ConnectionDetails, TaskConfiguration};
use crate::utils::logging::{log_config_error, log_config_loaded};
use crate::utils::{AppError, AppResult};

/// Input da task que aponta para o endpoint Octopus padrão
pub const DEFAULT_CONNECTION_INPUT: &str = "OctoConnectedServiceName";

const API_KEY_PARAMETER: &str = "apitoken";
const IGNORE_SSL_PARAMETER: &str = "ignoreSslErrors";

/// Monta os dados de conexão a partir de um endpoint configurado na task
///
/// Falha com [`AppError::Configuration`] se a URL, a autorização ou a API key
/// do endpoint estiverem ausentes.
pub fn get_connection_details<C>(config: &C, endpoint: &str) -> AppResult<ConnectionDetails>
where
    C: TaskConfiguration + ?Sized,
{
    let url = config
        .endpoint_url(endpoint)
        .ok_or_else(|| AppError::config(format!("Endpoint not present: {}", endpoint)))?;

    let authorization = config
        .endpoint_authorization(endpoint)
        .ok_or_else(|| AppError::config(format!("Endpoint auth data not present: {}", endpoint)))?;

    let api_key = authorization
        .parameter(API_KEY_PARAMETER)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| AppError::config(format!("Endpoint API key not present: {}", endpoint)))?
        .to_string();

    let ignore_ssl_errors = config
        .endpoint_data_parameter(endpoint, IGNORE_SSL_PARAMETER)
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    log_config_loaded(endpoint, &url);

    Ok(ConnectionDetails {
        url,
        api_key,
        ignore_ssl_errors,
    })
}

/// Resolve o endpoint indicado pelo input [`DEFAULT_CONNECTION_INPUT`]
///
/// Input ausente/vazio resulta na mensagem fixa; endpoint incompleto
/// propaga o erro específico de [`get_connection_details`]. Nunca faz
/// chamadas de rede.
pub fn get_default_connection_details_or_fail<C>(config: &C) -> AppResult<ConnectionDetails>
where
    C: TaskConfiguration + ?Sized,
{
    let endpoint = config.input(DEFAULT_CONNECTION_INPUT).ok_or_else(|| {
        let err = AppError::config("Could not retrieve default connection information.");
        log_config_error(&err.to_string());
        err
    })?;

    get_connection_details(config, &endpoint).map_err(|e| {
        log_config_error(&e.to_string());
        e
    })
}
