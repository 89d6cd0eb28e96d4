//! Resolução de nomes de projects e spaces do Octopus
//!
//! Cada operação recebe um nome ou um ID. Nomes voltam sem chamada de rede;
//! IDs viram um único GET e o campo `Name` do corpo é devolvido.
//!
//! As operações nunca falham com erro: o resultado é sempre um [`Resolution`],
//! para que quem resolve vários IDs possa seguir com os demais.

use crate::config::ConnectionDetails;
use crate::services::octopus::{ApiResponse, NamedResource, OctopusClient};
use crate::utils::identifiers::{is_project_id, is_space_id};
use crate::utils::logging::{log_ignore_ssl, log_name_resolved, log_resolution_failed};

/// `Ok(nome)` ou `Err(mensagem)`
pub type Resolution = Result<String, String>;

#[derive(Debug, Clone, Copy)]
enum ResourceKind {
    Project,
    Space,
}

impl ResourceKind {
    fn label(self) -> &'static str {
        match self {
            ResourceKind::Project => "project",
            ResourceKind::Space => "space",
        }
    }
}

/// Resolve o nome de um project; IDs são buscados em `api/projects/<id>`
pub async fn resolve_project_name(connection: &ConnectionDetails, project_name_or_id: &str) -> Resolution {
    if !is_project_id(project_name_or_id) {
        return Ok(project_name_or_id.to_string());
    }

    let path = format!("api/projects/{}", project_name_or_id);
    fetch_name(connection, ResourceKind::Project, project_name_or_id, &path).await
}

/// Igual a [`resolve_project_name`], mas dentro de um space: `api/<space_id>/projects/<id>`
///
/// O `space_id` entra no caminho sem escape.
pub async fn resolve_project_name_in_space(
    connection: &ConnectionDetails,
    space_id: &str,
    project_name_or_id: &str,
) -> Resolution {
    if !is_project_id(project_name_or_id) {
        return Ok(project_name_or_id.to_string());
    }

    let path = format!("api/{}/projects/{}", space_id, project_name_or_id);
    fetch_name(connection, ResourceKind::Project, project_name_or_id, &path).await
}

/// Resolve o nome de um space; IDs são buscados em `api/spaces/<id>`
pub async fn resolve_space_name(connection: &ConnectionDetails, space_name_or_id: &str) -> Resolution {
    if !is_space_id(space_name_or_id) {
        return Ok(space_name_or_id.to_string());
    }

    let path = format!("api/spaces/{}", space_name_or_id);
    fetch_name(connection, ResourceKind::Space, space_name_or_id, &path).await
}

async fn fetch_name(connection: &ConnectionDetails, kind: ResourceKind, id: &str, path: &str) -> Resolution {
    log_ignore_ssl(connection.ignore_ssl_errors);

    let outcome = match OctopusClient::new(connection) {
        Ok(client) => client.get_named(path).await,
        Err(e) => Err(e),
    };

    let resolution = match outcome {
        Ok(response) => map_response(kind, id, response),
        Err(e) => Err(e.to_string()),
    };

    match &resolution {
        Ok(name) => log_name_resolved(id, name),
        Err(message) => log_resolution_failed(id, message),
    }

    resolution
}

fn map_response(kind: ResourceKind, id: &str, response: ApiResponse<NamedResource>) -> Resolution {
    match response.result.and_then(|resource| resource.name) {
        Some(name) => Ok(name),
        None => Err(format!(
            "Could not resolve {} name given id \"{}\". Server returned status code: {}",
            kind.label(),
            id,
            response.status_code
        )),
    }
}
