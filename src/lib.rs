//! Helpers de conexão com o Octopus Deploy para tasks de pipeline
//!
//! Este crate cobre o caminho entre a configuração da task (endpoints e inputs
//! expostos pelo agente) e a API REST do Octopus:
//!
//! - [`config`]: leitura de endpoints/inputs e montagem de [`ConnectionDetails`]
//! - [`services::octopus`]: cliente HTTP de uso único com o header de API key
//! - [`services::name_resolver`]: resolução de nomes de projects e spaces
//! - [`utils::identifiers`]: classificação de IDs (`Projects-123`, `Spaces-1`)
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use octopus_task_utils::config::{get_default_connection_details_or_fail, AgentEnvironment};
//! use octopus_task_utils::services::resolve_project_name;
//! use octopus_task_utils::utils::logging::init_tracing;
//!
//! #[tokio::main]
//! async fn main() -> octopus_task_utils::utils::AppResult<()> {
//!     init_tracing();
//!
//!     let agent = AgentEnvironment::load();
//!     let connection = get_default_connection_details_or_fail(&agent)?;
//!
//!     match resolve_project_name(&connection, "Projects-42").await {
//!         Ok(name) => println!("Project: {}", name),
//!         Err(message) => eprintln!("{}", message),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod services;
pub mod utils;

// Re-exports principais
pub use config::ConnectionDetails;
pub use services::Resolution;
pub use utils::{AppError, AppResult};
