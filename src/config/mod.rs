pub mod endpoint;
pub mod provider;
pub mod task;

pub use endpoint::ConnectionDetails;
pub use provider::{
    get_connection_details, get_default_connection_details_or_fail, DEFAULT_CONNECTION_INPUT,
};
pub use task::{AgentEnvironment, EndpointAuthorization, StaticTaskConfiguration, TaskConfiguration};
