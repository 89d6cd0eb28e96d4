pub mod name_resolver;
pub mod octopus;

pub use name_resolver::{
    resolve_project_name, resolve_project_name_in_space, resolve_space_name, Resolution,
};
pub use octopus::{ApiResponse, NamedResource, OctopusClient, OctopusError, OctopusResult};
