//! Users API handlers.
//!
//! ```text
//! GET  /api/v1/users?firstname=Jo&lastname=Sm&take=5
//! POST /api/v1/users?take=3
//! ```

use actix_web::{route, web};

use crate::domain::{QueryParams, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query the user directory.
///
/// Accepts GET and POST with identical query-string semantics. Invalid
/// `take` values are normalised, not rejected, so this endpoint only
/// produces 200 for well-formed transport requests.
#[utoipa::path(
    method(get, post),
    path = "/api/v1/users",
    params(QueryParams),
    responses(
        (status = 200, description = "Filtered, sorted, truncated records", body = [User]),
        (status = 500, description = "Internal server error", body = crate::domain::DomainError)
    ),
    tags = ["users"],
    operation_id = "queryUsers"
)]
#[route("/users", method = "GET", method = "POST")]
pub async fn query_users(
    state: web::Data<HttpState>,
    params: web::Query<QueryParams>,
) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.directory.query(&params)?;
    Ok(web::Json(users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::Value;

    use crate::domain::ports::FixtureDirectoryQuery;

    fn user(id: i64, first_name: &str, last_name: &str) -> User {
        User {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: "user@example.com".into(),
            department: "Support".into(),
            city: "Lyon".into(),
            state: "ARA".into(),
            zip: "69001".into(),
            uuid: uuid::Uuid::new_v4().to_string(),
        }
    }

    fn test_app_records() -> Vec<User> {
        vec![
            user(1, "John", "Smith"),
            user(2, "jolene", "Adams"),
            user(3, "Mary", "Jones"),
        ]
    }

    async fn query_ids(uri: &str) -> (StatusCode, Vec<i64>) {
        let state = HttpState::new(Arc::new(FixtureDirectoryQuery::new(test_app_records())));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(query_users)),
        )
        .await;

        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("json array body");
        let ids = value
            .as_array()
            .expect("array payload")
            .iter()
            .map(|item| item.get("id").and_then(Value::as_i64).expect("numeric id"))
            .collect();
        (status, ids)
    }

    #[actix_rt::test]
    async fn returns_full_sorted_directory_by_default() {
        let (status, ids) = query_ids("/api/v1/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[actix_rt::test]
    async fn applies_prefix_filter_from_query_string() {
        let (status, ids) = query_ids("/api/v1/users?firstname=jo").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids, vec![1, 2]);
    }

    #[actix_rt::test]
    async fn invalid_take_is_normalised_not_rejected() {
        let (status, ids) = query_ids("/api/v1/users?take=abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids.len(), 3);
    }

    #[actix_rt::test]
    async fn post_is_accepted_with_identical_semantics() {
        let state = HttpState::new(Arc::new(FixtureDirectoryQuery::new(test_app_records())));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(query_users)),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/users?firstname=jo&take=1")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.as_array().map(Vec::len),
            Some(1),
            "take must cap the result"
        );
    }

    #[actix_rt::test]
    async fn serializes_the_full_field_set() {
        let state = HttpState::new(Arc::new(FixtureDirectoryQuery::new(test_app_records())));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(query_users)),
        )
        .await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/users?take=1")
            .to_request();
        let body: Value = actix_test::read_body_json(
            actix_test::call_service(&app, request).await,
        )
        .await;
        let first = body.get(0).expect("one record");
        for field in [
            "first_name",
            "last_name",
            "email",
            "department",
            "city",
            "state",
            "zip",
            "uuid",
        ] {
            assert!(first.get(field).is_some_and(Value::is_string), "{field}");
        }
        assert!(first.get("id").is_some_and(Value::is_i64));
    }
}
