//! Classificação de IDs do Octopus pelo formato do texto
//!
//! O match não é ancorado e aceita zero dígitos: `"Projects-"` e
//! `"MyProjects-App"` contam como IDs de project.

use once_cell::sync::Lazy;
use regex::Regex;

static PROJECT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"Projects-\d*").unwrap());
static SPACE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"Spaces-\d*").unwrap());

pub fn is_project_id(project_name_or_id: &str) -> bool {
    PROJECT_ID.is_match(project_name_or_id)
}

pub fn is_space_id(space_name_or_id: &str) -> bool {
    SPACE_ID.is_match(space_name_or_id)
}
