//! Drives every catalog endpoint against a mock SendGrid server.

use sendgrid_tools::error::DispatchError;
use sendgrid_tools::sendgrid::SendgridClient;
use sendgrid_tools::tools::{catalog, Dispatcher};
use sendgrid_tools::types::{EndpointDescriptor, ParamKind, ParamLocation};
use serde_json::{json, Map, Value};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample(kind: ParamKind) -> Value {
    match kind {
        ParamKind::String => json!("sample"),
        ParamKind::Integer => json!(1),
        ParamKind::Number => json!(1.5),
        ParamKind::Boolean => json!(true),
        ParamKind::Array => json!(["sample"]),
        ParamKind::Object => json!({"key": "value"}),
    }
}

/// Arguments filling every required parameter.
fn required_args(descriptor: &EndpointDescriptor) -> Value {
    let args: Map<String, Value> = descriptor
        .required_params()
        .map(|p| (p.name.to_string(), sample(p.kind)))
        .collect();
    Value::Object(args)
}

fn expected_path(descriptor: &EndpointDescriptor) -> String {
    descriptor
        .placeholders()
        .into_iter()
        .fold(descriptor.path.to_string(), |acc, name| {
            acc.replace(&format!("{{{}}}", name), "sample")
        })
}

fn dispatcher_for(server: &MockServer) -> Dispatcher {
    Dispatcher::new(SendgridClient::new(&server.uri(), "SG.integration").unwrap())
}

#[tokio::test]
async fn every_endpoint_dispatches_with_required_args() {
    let server = MockServer::start().await;
    let reply = json!({"result": "ok"});
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server);
    let descriptors: Vec<&EndpointDescriptor> = catalog::all().collect();

    for descriptor in &descriptors {
        let output = dispatcher
            .invoke(descriptor.name, &required_args(descriptor))
            .await
            .unwrap_or_else(|e| panic!("{} failed: {e}", descriptor.name));
        assert_eq!(output, reply, "{}", descriptor.name);
    }

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), descriptors.len());

    for (descriptor, request) in descriptors.iter().zip(&requests) {
        assert_eq!(
            request.method.as_str(),
            descriptor.method.to_string(),
            "{}",
            descriptor.name
        );
        assert_eq!(request.url.path(), expected_path(descriptor), "{}", descriptor.name);
        assert!(!request.url.path().contains('{'), "{}", descriptor.name);

        let auth = request
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok());
        assert_eq!(auth, Some("Bearer SG.integration"));

        let required_body: Vec<_> = descriptor
            .required_params()
            .filter(|p| p.location == ParamLocation::Body)
            .collect();
        if !required_body.is_empty() {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            for param in required_body {
                assert_eq!(body[param.name], sample(param.kind), "{}", descriptor.name);
            }
        }
    }
}

#[tokio::test]
async fn missing_required_params_never_reach_the_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server);
    let mut checked = 0;
    for descriptor in catalog::all().filter(|d| d.required_params().next().is_some()) {
        let err = dispatcher.invoke(descriptor.name, &json!({})).await.unwrap_err();
        assert!(
            matches!(err, DispatchError::MissingParameter { .. }),
            "{}: {err}",
            descriptor.name
        );
        checked += 1;
    }
    assert!(checked > 0);
}

#[tokio::test]
async fn api_errors_surface_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/api_keys/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(
            json!({"errors": [{"field": null, "message": "resource not found"}]}),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/scopes"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v3/templates/tpl-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server);

    let err = dispatcher
        .invoke("get_api_key", &json!({"api_key_id": "gone"}))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "SendGrid API error (404): resource not found");

    let err = dispatcher.invoke("list_scopes", &json!({})).await.unwrap_err();
    assert_eq!(err.status(), Some(401));

    let err = dispatcher
        .invoke("delete_template", &json!({"template_id": "tpl-1"}))
        .await
        .unwrap_err();
    match err {
        DispatchError::Http { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
