use httpmock::prelude::*;
use octopus_task_utils::config::{
    get_connection_details, get_default_connection_details_or_fail, StaticTaskConfiguration,
    DEFAULT_CONNECTION_INPUT,
};
use octopus_task_utils::services::{
    resolve_project_name, resolve_project_name_in_space, resolve_space_name, OctopusClient,
};
use octopus_task_utils::{AppError, ConnectionDetails};
use serde_json::json;
use std::net::TcpListener;

const API_KEY: &str = "API-INTEGRATION";

fn connection(server: &MockServer) -> ConnectionDetails {
    ConnectionDetails::new(server.base_url(), API_KEY, false)
}

/// URL para uma porta local sem ninguém escutando
fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn test_project_id_is_resolved_from_server() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/projects/Projects-42")
                .header("x-octopus-apikey", API_KEY);
            then.status(200)
                .json_body(json!({ "Id": "Projects-42", "Name": "Widgets", "SpaceId": "Spaces-1" }));
        })
        .await;

    let result = resolve_project_name(&connection(&server), "Projects-42").await;

    assert_eq!(result, Ok("Widgets".to_string()));
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_project_name_passes_through_without_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).json_body(json!({ "Name": "Unexpected" }));
        })
        .await;

    let conn = connection(&server);

    assert_eq!(resolve_project_name(&conn, "Widgets").await, Ok("Widgets".to_string()));
    assert_eq!(
        resolve_project_name_in_space(&conn, "Spaces-2", "Gadgets").await,
        Ok("Gadgets".to_string())
    );
    assert_eq!(resolve_space_name(&conn, "Default").await, Ok("Default".to_string()));

    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_project_in_space_uses_scoped_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/Spaces-2/projects/Projects-5");
            then.status(200).json_body(json!({ "Name": "Scoped Widgets" }));
        })
        .await;

    let result = resolve_project_name_in_space(&connection(&server), "Spaces-2", "Projects-5").await;

    assert_eq!(result, Ok("Scoped Widgets".to_string()));
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_space_not_found_is_templated_failure() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/spaces/Spaces-7");
            then.status(404);
        })
        .await;

    let result = resolve_space_name(&connection(&server), "Spaces-7").await;

    assert_eq!(
        result,
        Err("Could not resolve space name given id \"Spaces-7\". Server returned status code: 404".to_string())
    );
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_project_server_error_is_templated_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/projects/Projects-9");
            then.status(401).json_body(json!({ "ErrorMessage": "You must be logged in" }));
        })
        .await;

    let result = resolve_project_name(&connection(&server), "Projects-9").await;

    assert_eq!(
        result,
        Err("Could not resolve project name given id \"Projects-9\". Server returned status code: 401".to_string())
    );
}

#[tokio::test]
async fn test_space_id_is_resolved_with_trailing_slash_url() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/spaces/Spaces-1");
            then.status(200).json_body(json!({ "Name": "Default" }));
        })
        .await;

    let conn = ConnectionDetails::new(format!("{}/", server.base_url()), API_KEY, true);

    assert_eq!(resolve_space_name(&conn, "Spaces-1").await, Ok("Default".to_string()));
}

#[tokio::test]
async fn test_transport_fault_becomes_failure_message() {
    let conn = ConnectionDetails::new(refused_url(), API_KEY, false);

    let project = resolve_project_name(&conn, "Projects-1").await;
    let space = resolve_space_name(&conn, "Spaces-1").await;

    for result in [&project, &space] {
        let message = result.as_ref().unwrap_err();
        assert!(message.contains("error sending request"), "unexpected message: {}", message);
        assert!(!message.starts_with("Could not resolve"), "unexpected message: {}", message);
    }

    let fault = OctopusClient::new(&conn)
        .unwrap()
        .get_named("api/projects/Projects-1")
        .await
        .unwrap_err();
    assert_eq!(project, Err(fault.to_string()));
}

#[tokio::test]
async fn test_undecodable_success_bodies_are_templated_failures() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/projects/Projects-10");
            then.status(200).body("<html><body>Octopus</body></html>");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/projects/Projects-11");
            then.status(200).body("null");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/spaces/Spaces-12");
            then.status(200).json_body(json!({ "Name": 5 }));
        })
        .await;

    let conn = connection(&server);

    assert_eq!(
        resolve_project_name(&conn, "Projects-10").await,
        Err("Could not resolve project name given id \"Projects-10\". Server returned status code: 200".to_string())
    );
    assert_eq!(
        resolve_project_name(&conn, "Projects-11").await,
        Err("Could not resolve project name given id \"Projects-11\". Server returned status code: 200".to_string())
    );
    assert_eq!(
        resolve_space_name(&conn, "Spaces-12").await,
        Err("Could not resolve space name given id \"Spaces-12\". Server returned status code: 200".to_string())
    );
}

#[tokio::test]
async fn test_zero_digit_ids_are_fetched() {
    let server = MockServer::start_async().await;
    let project = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/projects/Projects-");
            then.status(200).json_body(json!({ "Name": "Bare Project" }));
        })
        .await;
    let space = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/spaces/Spaces-");
            then.status(200).json_body(json!({ "Name": "Bare Space" }));
        })
        .await;

    let conn = connection(&server);

    assert_eq!(resolve_project_name(&conn, "Projects-").await, Ok("Bare Project".to_string()));
    assert_eq!(resolve_space_name(&conn, "Spaces-").await, Ok("Bare Space".to_string()));

    project.assert_hits_async(1).await;
    space.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_concurrent_resolutions_are_independent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/projects/Projects-1");
            then.status(200).json_body(json!({ "Name": "Alpha" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/projects/Projects-2");
            then.status(404);
        })
        .await;

    let conn = connection(&server);
    let (alpha, missing, passthrough) = tokio::join!(
        resolve_project_name(&conn, "Projects-1"),
        resolve_project_name(&conn, "Projects-2"),
        resolve_project_name(&conn, "Beta"),
    );

    assert_eq!(alpha, Ok("Alpha".to_string()));
    assert!(missing.unwrap_err().ends_with("status code: 404"));
    assert_eq!(passthrough, Ok("Beta".to_string()));
}

#[tokio::test]
async fn test_configured_endpoint_end_to_end() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/projects/Projects-3")
                .header("x-octopus-apikey", "API-FROM-ENDPOINT");
            then.status(200).json_body(json!({ "Name": "Configured" }));
        })
        .await;

    let config = StaticTaskConfiguration::new()
        .with_input(DEFAULT_CONNECTION_INPUT, "octo")
        .with_endpoint_url("octo", &server.base_url())
        .with_api_key("octo", "API-FROM-ENDPOINT")
        .with_data_parameter("octo", "ignoreSslErrors", "TRUE");

    let conn = get_default_connection_details_or_fail(&config).unwrap();
    assert!(conn.ignore_ssl_errors);
    assert_eq!(conn, get_connection_details(&config, "octo").unwrap());

    assert_eq!(resolve_project_name(&conn, "Projects-3").await, Ok("Configured".to_string()));
    mock.assert_async().await;
}

#[test]
fn test_missing_default_endpoint_fails_fast() {
    let err = get_default_connection_details_or_fail(&StaticTaskConfiguration::new()).unwrap_err();

    assert!(matches!(err, AppError::Configuration(_)));
    assert_eq!(err.to_string(), "Could not retrieve default connection information.");
}
