// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    body::Bytes,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use qualification::{
    InMemoryCommandHistory, InMemoryPeriodRepository, InMemoryQualificationRepository,
    PeriodService, QualificationService, StaticStateRules,
};
use qualification_api::{ApiResponse, CommandDispatcher, ServiceInfo};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Qualification Server - HTTP endpoint for qualification commands
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Service id appended to every error code.
    #[arg(long, default_value = "19")]
    service_id: String,

    /// JSON file with the allowed qualification states. Uses the built-in table if omitted.
    #[arg(long)]
    state_rules: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

type ServerDispatcher = CommandDispatcher<
    InMemoryQualificationRepository,
    StaticStateRules,
    InMemoryCommandHistory,
    InMemoryPeriodRepository,
>;

/// Application state shared across handlers.
///
/// Commands are executed one at a time behind the mutex.
#[derive(Clone)]
struct AppState {
    dispatcher: Arc<Mutex<ServerDispatcher>>,
}

impl AppState {
    fn new(state_rules: StaticStateRules, service_info: ServiceInfo) -> Self {
        let service: QualificationService<InMemoryQualificationRepository, StaticStateRules> =
            QualificationService::new(InMemoryQualificationRepository::new(), state_rules);
        Self {
            dispatcher: Arc::new(Mutex::new(CommandDispatcher::new(
                service,
                PeriodService::new(InMemoryPeriodRepository::new()),
                InMemoryCommandHistory::new(),
                service_info,
            ))),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: ServiceInfo,
}

/// Response envelope with the HTTP status derived from its outcome.
struct CommandResponse(ApiResponse);

impl IntoResponse for CommandResponse {
    fn into_response(self) -> Response {
        let status: StatusCode = if self.0.is_incident() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        };
        (status, Json(self.0)).into_response()
    }
}

/// Handler for POST /command endpoint.
///
/// A body that is not JSON is handed on as `null` so that the envelope
/// parser reports it like any other malformed envelope.
async fn handle_command(
    AxumState(app_state): AxumState<AppState>,
    body: Bytes,
) -> CommandResponse {
    let envelope: Value = serde_json::from_slice(&body).unwrap_or_else(|err| {
        warn!(error = %err, "Command body is not JSON");
        Value::Null
    });

    let mut dispatcher = app_state.dispatcher.lock().await;
    let response: ApiResponse = dispatcher.execute(&envelope);
    drop(dispatcher);

    CommandResponse(response)
}

/// Handler for GET /health endpoint.
async fn handle_health(AxumState(app_state): AxumState<AppState>) -> Json<HealthResponse> {
    let dispatcher = app_state.dispatcher.lock().await;
    let service: ServiceInfo = dispatcher.service_info().clone();
    drop(dispatcher);

    Json(HealthResponse {
        status: "ok",
        service,
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/command", post(handle_command))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("Initializing Qualification Server");

    let state_rules: StaticStateRules = if let Some(path) = &args.state_rules {
        info!(path = %path.display(), "Loading state rules");
        StaticStateRules::load(path)?
    } else {
        info!("Using built-in state rules");
        StaticStateRules::default()
    };
    info!(rules = state_rules.rules().len(), "State rules ready");

    let service_info: ServiceInfo = ServiceInfo {
        id: args.service_id.clone(),
        ..ServiceInfo::default()
    };
    let app: Router = build_router(AppState::new(state_rules, service_info));

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    const CPID: &str = "ocds-b3wdp1-MD-1580458690892";
    const OCID: &str = "ocds-b3wdp1-MD-1580458690892-EV-1580458791896";
    const OWNER: &str = "d0da4c24-1a2a-4b39-a1fd-034cb887c93b";

    fn create_test_app_state() -> AppState {
        AppState::new(StaticStateRules::default(), ServiceInfo::default())
    }

    fn command_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/command")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn command(id: &str, action: &str, params: &Value) -> String {
        json!({ "version": "2.0.0", "id": id, "action": action, "params": params }).to_string()
    }

    async fn send(app: Router, request: Request<Body>) -> (HttpStatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status: HttpStatusCode = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_service() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(
            app,
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["status"], json!("ok"));
        assert_eq!(body["service"]["id"], json!("19"));
    }

    #[tokio::test]
    async fn test_create_then_check_protocol() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let create: String = command(
            "0b7f6a52-3c1d-4e2f-8a9b-1c2d3e4f5a6b",
            "createQualifications",
            &json!({
                "cpid": CPID,
                "ocid": OCID,
                "date": "2020-02-10T08:49:55Z",
                "owner": OWNER,
                "submissions": [{ "id": "3a5b7c9d-1e2f-4a6b-8c0d-2e4f6a8b0c1d" }]
            }),
        );
        let (status, body) = send(app.clone(), command_request(&create)).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["status"], json!("success"));
        assert_eq!(body["result"][0]["status"], json!("pending"));

        let protocol: String = command(
            "5d2e8f41-6a7b-4c3d-9e0f-a1b2c3d4e5f6",
            "checkQualificationsForProtocol",
            &json!({ "cpid": CPID, "ocid": OCID }),
        );
        let (status, body) = send(app, command_request(&protocol)).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["status"], json!("error"));
        assert_eq!(body["result"][0]["code"], json!("VR.COM-7.24.2/19"));
    }

    #[tokio::test]
    async fn test_qualification_period_is_opened_and_closed() {
        let app: Router = build_router(create_test_app_state());

        let start: String = command(
            "7c1d2e3f-4a5b-4c6d-8e7f-9a0b1c2d3e4f",
            "startQualificationPeriod",
            &json!({ "cpid": CPID, "ocid": OCID, "date": "2020-02-10T08:49:55Z" }),
        );
        let (status, body) = send(app.clone(), command_request(&start)).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(
            body["result"]["qualificationPeriod"]["startDate"],
            json!("2020-02-10T08:49:55Z")
        );

        let end: String = command(
            "9e8d7c6b-5a4f-4e3d-8c2b-1a0f9e8d7c6b",
            "setQualificationPeriodEnd",
            &json!({ "cpid": CPID, "ocid": OCID, "date": "2020-03-01T00:00:00Z" }),
        );
        let (status, body) = send(app, command_request(&end)).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(
            body["result"]["preQualification"]["period"]["endDate"],
            json!("2020-03-01T00:00:00Z")
        );
    }

    #[tokio::test]
    async fn test_invalid_params_is_error_envelope() {
        let app: Router = build_router(create_test_app_state());
        let body: String = command(
            "5d2e8f41-6a7b-4c3d-9e0f-a1b2c3d4e5f6",
            "checkQualificationsForProtocol",
            &json!({ "cpid": "not-a-cpid", "ocid": OCID }),
        );

        let (status, body) = send(app, command_request(&body)).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["result"][0]["code"], json!("DR-5/19"));
        assert_eq!(body["result"][0]["details"], json!([{ "name": "cpid" }]));
    }

    #[tokio::test]
    async fn test_body_that_is_not_json() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(app, command_request("{ not json")).await;

        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["status"], json!("error"));
        assert_eq!(body["id"], json!("00000000-0000-0000-0000-000000000000"));
        assert_eq!(body["result"][0]["code"], json!("DR-1/19"));
    }

    #[tokio::test]
    async fn test_custom_service_id_in_codes() {
        let service_info: ServiceInfo = ServiceInfo {
            id: String::from("42"),
            ..ServiceInfo::default()
        };
        let app: Router = build_router(AppState::new(StaticStateRules::default(), service_info));
        let body: String = command(
            "5d2e8f41-6a7b-4c3d-9e0f-a1b2c3d4e5f6",
            "rankQualifications",
            &json!({
                "cpid": CPID,
                "ocid": OCID,
                "submissions": [],
                "tender": {
                    "otherCriteria": {
                        "qualificationSystemMethods": ["manual"],
                        "reductionCriteria": "none"
                    }
                }
            }),
        );

        let (_, body) = send(app, command_request(&body)).await;

        assert_eq!(body["result"][0]["code"], json!("VR.COM-7.13.1/42"));
    }
}
