use std::fmt;

/// Dados de conexão com um servidor Octopus
///
/// Montado uma vez por invocação a partir da configuração da task e descartado
/// após o uso. A API key nunca aparece na saída de `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionDetails {
    pub url: String,
    pub api_key: String,
    pub ignore_ssl_errors: bool,
}

impl ConnectionDetails {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>, ignore_ssl_errors: bool) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            ignore_ssl_errors,
        }
    }
}

impl fmt::Debug for ConnectionDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDetails")
            .field("url", &self.url)
            .field("api_key", &"***")
            .field("ignore_ssl_errors", &self.ignore_ssl_errors)
            .finish()
    }
}
