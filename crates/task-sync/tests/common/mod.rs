//! Common test utilities for task-sync tests

use chrono::NaiveDate;
use serde_json::{json, Value};
use task_sync::{HttpTaskService, ServiceConfig};
use wiremock::MockServer;

/// Collection path served by the mock backend
pub const COLLECTION_PATH: &str = "/api/todos";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// HTTP service pointed at the mock server's collection
pub fn service_for(server: &MockServer) -> HttpTaskService {
    let config = ServiceConfig::new(format!("{}{}", server.uri(), COLLECTION_PATH));
    HttpTaskService::new(config).expect("client should build")
}

/// Fixed "today" for create requests
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
}

/// Task record as a document-store backend returns it
pub fn task_json(id: &str, text: &str, date: Option<&str>, completed: bool) -> Value {
    json!({
        "_id": id,
        "text": text,
        "date": date,
        "completed": completed,
        "__v": 0,
    })
}
