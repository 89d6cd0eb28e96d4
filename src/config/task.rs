//! Acesso à configuração da task exposta pelo agente de pipeline
//!
//! O agente publica endpoints e inputs como variáveis de ambiente:
//!
//! - `ENDPOINT_URL_<id>`: URL do endpoint
//! - `ENDPOINT_AUTH_<id>`: JSON `{"scheme": "...", "parameters": {...}}`
//! - `ENDPOINT_DATA_<id>_<KEY>`: parâmetros extras do endpoint
//! - `INPUT_<NOME>`: inputs da task
//!
//! [`TaskConfiguration`] abstrai essa leitura para que testes (ou outros hosts)
//! possam fornecer valores fixos sem um agente real.

use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;

/// Dados de autorização de um endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EndpointAuthorization {
    #[serde(default)]
    pub scheme: String,
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

impl EndpointAuthorization {
    /// Busca um parâmetro pelo nome; se não houver match exato, compara sem case
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .get(key)
            .or_else(|| {
                self.parameters
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(key))
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
    }
}

/// Fonte de configuração da task, um método por tipo de valor
pub trait TaskConfiguration {
    fn endpoint_url(&self, endpoint: &str) -> Option<String>;

    fn endpoint_authorization(&self, endpoint: &str) -> Option<EndpointAuthorization>;

    fn endpoint_data_parameter(&self, endpoint: &str, key: &str) -> Option<String>;

    /// Input da task; valores vazios contam como ausentes
    fn input(&self, name: &str) -> Option<String>;
}

/// Lê a configuração das variáveis de ambiente do agente
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentEnvironment;

impl AgentEnvironment {
    pub fn new() -> Self {
        Self
    }

    /// Igual a [`AgentEnvironment::new`], mas carrega um `.env` local se existir
    ///
    /// Variáveis já definidas no processo não são sobrescritas.
    pub fn load() -> Self {
        if cfg!(not(test)) && Path::new(".env").exists() {
            if let Err(e) = dotenvy::dotenv() {
                tracing::warn!("Erro ao carregar .env: {}", e);
            }
        }
        Self
    }

    fn input_variable(name: &str) -> String {
        format!("INPUT_{}", name.replace([' ', '.'], "_").to_uppercase())
    }

    fn non_empty_var(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.trim().is_empty())
    }
}

impl TaskConfiguration for AgentEnvironment {
    fn endpoint_url(&self, endpoint: &str) -> Option<String> {
        Self::non_empty_var(&format!("ENDPOINT_URL_{}", endpoint))
    }

    fn endpoint_authorization(&self, endpoint: &str) -> Option<EndpointAuthorization> {
        let raw = Self::non_empty_var(&format!("ENDPOINT_AUTH_{}", endpoint))?;
        match serde_json::from_str(&raw) {
            Ok(auth) => Some(auth),
            Err(e) => {
                tracing::warn!("ENDPOINT_AUTH_{} não é um JSON válido: {}", endpoint, e);
                None
            }
        }
    }

    fn endpoint_data_parameter(&self, endpoint: &str, key: &str) -> Option<String> {
        env::var(format!("ENDPOINT_DATA_{}_{}", endpoint, key.to_uppercase())).ok()
    }

    fn input(&self, name: &str) -> Option<String> {
        Self::non_empty_var(&Self::input_variable(name)).map(|value| value.trim().to_string())
    }
}

/// Configuração em memória, para testes e hosts embarcados
#[derive(Debug, Clone, Default)]
pub struct StaticTaskConfiguration {
    urls: HashMap<String, String>,
    authorizations: HashMap<String, EndpointAuthorization>,
    data: HashMap<(String, String), String>,
    inputs: HashMap<String, String>,
}

impl StaticTaskConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint_url(mut self, endpoint: &str, url: &str) -> Self {
        self.urls.insert(endpoint.to_string(), url.to_string());
        self
    }

    pub fn with_api_key(mut self, endpoint: &str, api_key: &str) -> Self {
        let mut parameters = HashMap::new();
        parameters.insert("apitoken".to_string(), api_key.to_string());
        self.authorizations.insert(
            endpoint.to_string(),
            EndpointAuthorization {
                scheme: "None".to_string(),
                parameters,
            },
        );
        self
    }

    pub fn with_authorization(mut self, endpoint: &str, authorization: EndpointAuthorization) -> Self {
        self.authorizations.insert(endpoint.to_string(), authorization);
        self
    }

    pub fn with_data_parameter(mut self, endpoint: &str, key: &str, value: &str) -> Self {
        self.data
            .insert((endpoint.to_string(), key.to_lowercase()), value.to_string());
        self
    }

    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.inputs.insert(name.to_lowercase(), value.to_string());
        self
    }
}

impl TaskConfiguration for StaticTaskConfiguration {
    fn endpoint_url(&self, endpoint: &str) -> Option<String> {
        self.urls.get(endpoint).filter(|url| !url.is_empty()).cloned()
    }

    fn endpoint_authorization(&self, endpoint: &str) -> Option<EndpointAuthorization> {
        self.authorizations.get(endpoint).cloned()
    }

    fn endpoint_data_parameter(&self, endpoint: &str, key: &str) -> Option<String> {
        self.data
            .get(&(endpoint.to_string(), key.to_lowercase()))
            .cloned()
    }

    fn input(&self, name: &str) -> Option<String> {
        self.inputs
            .get(&name.to_lowercase())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
