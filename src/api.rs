use crate::{
    config::ApiConfig,
    data::student::{Student, StudentId, StudentPayload},
    error::{BuildClientSnafu, DecodeSnafu, RollcallResult, TransportSnafu, UnexpectedStatusSnafu},
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use snafu::ResultExt;

/// The students service, as seen by the view controller.
#[async_trait]
pub trait StudentsApi: Send + Sync {
    async fn list(&self) -> RollcallResult<Vec<Student>>;
    async fn search(&self, query: &str) -> RollcallResult<Vec<Student>>;
    async fn get(&self, id: StudentId) -> RollcallResult<Student>;
    async fn create(&self, payload: &StudentPayload) -> RollcallResult<Student>;
    async fn update(&self, id: StudentId, payload: &StudentPayload) -> RollcallResult<Student>;
    async fn delete(&self, id: StudentId) -> RollcallResult<()>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct HttpStudentsApi {
    client: Client,
    collection: String,
}

impl HttpStudentsApi {
    pub fn new(config: &ApiConfig) -> RollcallResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context(BuildClientSnafu)?;

        Ok(Self {
            client,
            collection: config.collection_url().trim_end_matches('/').to_string(),
        })
    }

    fn item_url(&self, id: StudentId) -> String {
        format!("{}/{id}", self.collection)
    }

    async fn send(request: RequestBuilder) -> RollcallResult<Response> {
        let response = request.send().await.context(TransportSnafu)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        //a body that isn't `{"error": ".."}` just means there's no message to show
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        UnexpectedStatusSnafu { status, message }.fail()
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> RollcallResult<T> {
        Self::send(request)
            .await?
            .json()
            .await
            .context(DecodeSnafu)
    }
}

#[async_trait]
impl StudentsApi for HttpStudentsApi {
    async fn list(&self) -> RollcallResult<Vec<Student>> {
        Self::send_json(self.client.get(&self.collection)).await
    }

    async fn search(&self, query: &str) -> RollcallResult<Vec<Student>> {
        let url = format!("{}/search", self.collection);
        Self::send_json(self.client.get(url).query(&[("q", query)])).await
    }

    async fn get(&self, id: StudentId) -> RollcallResult<Student> {
        Self::send_json(self.client.get(self.item_url(id))).await
    }

    async fn create(&self, payload: &StudentPayload) -> RollcallResult<Student> {
        Self::send_json(self.client.post(&self.collection).json(payload)).await
    }

    async fn update(&self, id: StudentId, payload: &StudentPayload) -> RollcallResult<Student> {
        Self::send_json(self.client.put(self.item_url(id)).json(payload)).await
    }

    async fn delete(&self, id: StudentId) -> RollcallResult<()> {
        Self::send(self.client.delete(self.item_url(id))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollcallError;
    use axum::{
        Json, Router,
        extract::{Path, Query},
        http::StatusCode,
        response::IntoResponse,
        routing::get,
    };
    use serde_json::json;
    use std::{collections::HashMap, time::Duration};
    use tokio::net::TcpListener;

    fn grace(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "rollNumber": "CS-002",
            "department": "Computer Science",
            "year": 3
        })
    }

    async fn list_students() -> impl IntoResponse {
        Json(json!([grace(1), grace(2)]))
    }

    async fn search_students(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
        match params.get("q").map(String::as_str) {
            Some("grace hopper") => Json(json!([grace(1)])),
            _ => Json(json!([])),
        }
    }

    async fn get_student(Path(id): Path<i64>) -> impl IntoResponse {
        match id {
            1 => Json(grace(1)).into_response(),
            2 => (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>").into_response(),
            _ => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Student not found with id: {id}") })),
            )
                .into_response(),
        }
    }

    async fn create_student(Json(body): Json<serde_json::Value>) -> impl IntoResponse {
        if body["rollNumber"] == "CS-002" {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Roll number already exists: CS-002" })),
            )
                .into_response();
        }
        let mut created = body;
        created["id"] = json!(99);
        (StatusCode::CREATED, Json(created)).into_response()
    }

    async fn update_student(
        Path(id): Path<i64>,
        Json(body): Json<serde_json::Value>,
    ) -> impl IntoResponse {
        let mut updated = body;
        updated["id"] = json!(id);
        Json(updated)
    }

    async fn delete_student(Path(id): Path<i64>) -> impl IntoResponse {
        if id == 1 {
            Json(json!({ "message": "Student deleted successfully" })).into_response()
        } else {
            StatusCode::NOT_FOUND.into_response()
        }
    }

    async fn spawn_backend() -> HttpStudentsApi {
        let app = Router::new()
            .route("/api/students", get(list_students).post(create_student))
            .route("/api/students/search", get(search_students))
            .route(
                "/api/students/{id}",
                get(get_student).put(update_student).delete(delete_student),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        HttpStudentsApi::new(&ApiConfig::new(
            format!("http://{addr}/api/students/"),
            Duration::from_secs(5),
        ))
        .unwrap()
    }

    fn payload(roll_number: &str) -> StudentPayload {
        StudentPayload {
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            email: "alan@example.com".into(),
            roll_number: roll_number.into(),
            department: "Computer Science".into(),
            year: 4,
        }
    }

    #[tokio::test]
    async fn lists_students() {
        let api = spawn_backend().await;
        let students = api.list().await.unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].roll_number, "CS-002");
    }

    #[tokio::test]
    async fn search_encodes_query() {
        let api = spawn_backend().await;
        let students = api.search("grace hopper").await.unwrap();
        assert_eq!(students.len(), 1);
        assert!(api.search("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_maps_error_body_to_message() {
        let api = spawn_backend().await;
        assert_eq!(api.get(StudentId(1)).await.unwrap().id, StudentId(1));

        let err = api.get(StudentId(5)).await.unwrap_err();
        assert!(matches!(
            err,
            RollcallError::UnexpectedStatus { status, message: Some(ref m) }
                if status == reqwest::StatusCode::NOT_FOUND && m == "Student not found with id: 5"
        ));
    }

    #[tokio::test]
    async fn get_without_json_body_has_no_message() {
        let api = spawn_backend().await;
        let err = api.get(StudentId(2)).await.unwrap_err();
        assert!(matches!(
            err,
            RollcallError::UnexpectedStatus { message: None, .. }
        ));
    }

    #[tokio::test]
    async fn create_returns_created_student() {
        let api = spawn_backend().await;
        let created = api.create(&payload("CS-100")).await.unwrap();
        assert_eq!(created.id, StudentId(99));
        assert_eq!(created.first_name, "Alan");

        let err = api.create(&payload("CS-002")).await.unwrap_err();
        assert_eq!(
            err.user_message("Failed to save student"),
            "Roll number already exists: CS-002"
        );
    }

    #[tokio::test]
    async fn update_puts_to_item_url() {
        let api = spawn_backend().await;
        let updated = api.update(StudentId(12), &payload("CS-012")).await.unwrap();
        assert_eq!(updated.id, StudentId(12));
        assert_eq!(updated.roll_number, "CS-012");
    }

    #[tokio::test]
    async fn delete_checks_status() {
        let api = spawn_backend().await;
        api.delete(StudentId(1)).await.unwrap();
        assert!(api.delete(StudentId(3)).await.is_err());
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpStudentsApi::new(&ApiConfig::new(
            format!("http://{addr}/api/students"),
            Duration::from_secs(5),
        ))
        .unwrap();
        assert!(matches!(
            api.list().await.unwrap_err(),
            RollcallError::Transport { .. }
        ));
    }
}
