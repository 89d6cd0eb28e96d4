//! Cliente HTTP para a API do Octopus
//!
//! Um cliente por chamada: sem pool compartilhado, sem retry, sem timeout.
//! Quem precisar de latência limitada deve envolver a chamada externamente.

use crate::config::ConnectionDetails;
use crate::utils::logging::log_fetch_started;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

pub const USER_AGENT: &str = "OctoTFS";
/// `X-Octopus-ApiKey`; minúsculo porque `HeaderName::from_static` exige
pub const API_KEY_HEADER: &str = "x-octopus-apikey";

/// Erros do cliente Octopus
#[derive(Debug, Error)]
pub enum OctopusError {
    /// Falha de transporte (rede, TLS, conexão recusada); mensagem original
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Dados de conexão inutilizáveis
    #[error("{0}")]
    Config(String),
}

pub type OctopusResult<T> = std::result::Result<T, OctopusError>;

/// Resposta de um GET: status sempre presente, corpo só quando utilizável
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub result: Option<T>,
}

/// Qualquer recurso do Octopus que tenha `Name`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

/// Cliente de uso único para um servidor Octopus
pub struct OctopusClient {
    http_client: HttpClient,
    base_url: String,
}

impl OctopusClient {
    /// Cria o cliente a partir dos dados de conexão
    ///
    /// A API key vai como header `X-Octopus-ApiKey` em toda requisição.
    /// Com `ignore_ssl_errors`, certificados inválidos são aceitos.
    pub fn new(details: &ConnectionDetails) -> OctopusResult<Self> {
        if details.url.trim().is_empty() {
            return Err(OctopusError::Config("Octopus server URL is empty".to_string()));
        }
        if details.api_key.is_empty() {
            return Err(OctopusError::Config("Octopus API key is empty".to_string()));
        }

        let mut api_key = HeaderValue::from_str(&details.api_key)
            .map_err(|e| OctopusError::Config(format!("Invalid API key: {}", e)))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .danger_accept_invalid_certs(details.ignore_ssl_errors)
            .build()?;

        Ok(Self {
            http_client,
            base_url: details.url.trim_end_matches('/').to_string(),
        })
    }

    /// URL absoluta para um caminho relativo (`api/projects/...`)
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Executa um GET e desserializa o corpo JSON
    ///
    /// Status não-2xx, corpo vazio e corpo que não desserializa em `T`
    /// resultam em `result: None`; só falhas de transporte viram erro.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> OctopusResult<ApiResponse<T>> {
        let url = self.url(path);
        log_fetch_started(&url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let status_code = status.as_u16();

        if !status.is_success() {
            return Ok(ApiResponse {
                status_code,
                result: None,
            });
        }

        let body = response.bytes().await?;
        let result = if body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            match serde_json::from_slice(&body) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::debug!("Corpo de {} ignorado: {}", url, e);
                    None
                }
            }
        };

        Ok(ApiResponse { status_code, result })
    }

    pub async fn get_named(&self, path: &str) -> OctopusResult<ApiResponse<NamedResource>> {
        self.get_json(path).await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
