//! Tipos de erro do crate

use thiserror::Error;

/// Erros que interrompem quem chamou
///
/// Falhas de resolução de nomes não passam por aqui: elas voltam como valor
/// em [`crate::services::Resolution`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Endpoint ou input obrigatório ausente/vazio
    #[error("{0}")]
    Configuration(String),
}

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
