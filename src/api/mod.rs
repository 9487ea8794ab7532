//! Remote users API layer.
//!
//! Wraps the collection endpoint: derives the query from the current
//! [`QueryState`], issues one blocking GET per fetch and decodes the
//! paginated response. Fetches run on background threads and report back
//! through an mpsc channel, tagged with the generation that started them so
//! the event loop can drop responses from superseded queries.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use serde::Deserialize;

use crate::app::query::QueryState;
use crate::error::ApiError;

/// Response header carrying the total record count across all pages.
pub const TOTAL_HEADER: &str = "x-pagination-total";

/// Header carrying the API key expected by the endpoint.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Active => write!(f, "active"),
            Status::Inactive => write!(f, "inactive"),
        }
    }
}

/// One user record as served by the collection endpoint. Read-only on the
/// client side; the server owns identity and assignment.
#[derive(Clone, Debug, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub status: Status,
}

/// One decoded page of the remote collection.
///
/// `total` is the record count from the pagination header; `None` when the
/// server did not send it, in which case the previously known page count
/// stays in effect.
#[derive(Clone, Debug)]
pub struct UsersPage {
    pub users: Vec<UserRecord>,
    pub total: Option<u64>,
}

/// Total pages for a record count, rounded up.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    total.div_ceil(per_page.max(1))
}

/// Blocking HTTP client for the users collection endpoint.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch the page of users described by `query`.
    ///
    /// Non-success statuses and undecodable bodies are errors; the result is
    /// all-or-nothing, there is no partial page.
    pub fn fetch_users(&self, query: &QueryState) -> Result<UsersPage, ApiError> {
        let resp = self
            .http
            .get(&self.base_url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&query.params())
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let total = resp
            .headers()
            .get(TOTAL_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = resp.text()?;
        let users: Vec<UserRecord> = serde_json::from_str(&body).map_err(ApiError::Decode)?;
        Ok(UsersPage { users, total })
    }
}

/// Result of one background fetch, tagged with the generation that started
/// it. Applied to the application state only if that generation is still the
/// current one.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<UsersPage, ApiError>,
}

/// Run one fetch on a background thread and deliver the outcome on `tx`.
///
/// The receiver may be gone by the time the fetch resolves (the UI exited);
/// a closed channel is not an error here.
pub fn spawn_fetch(
    client: Arc<ApiClient>,
    query: QueryState,
    generation: u64,
    tx: Sender<FetchOutcome>,
) {
    std::thread::spawn(move || {
        tracing::debug!(generation, page = query.page, "fetching users");
        let result = client.fetch_users(&query);
        if let Err(err) = &result {
            tracing::error!(generation, %err, "fetch failed");
        }
        let _ = tx.send(FetchOutcome { generation, result });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(0, 5), 0);
    }

    #[test]
    fn user_record_decodes_from_endpoint_json() {
        let json = r#"{
            "id": 7362999,
            "name": "Anand Iyer",
            "email": "anand.iyer@example.org",
            "gender": "male",
            "status": "inactive"
        }"#;
        let u: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(u.id, 7362999);
        assert_eq!(u.gender, Gender::Male);
        assert_eq!(u.status, Status::Inactive);
    }

    #[test]
    fn enums_display_lowercase() {
        assert_eq!(Gender::Female.to_string(), "female");
        assert_eq!(Status::Active.to_string(), "active");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = serde_json::from_str::<Vec<UserRecord>>("{\"oops\":1}").unwrap_err();
        let err = ApiError::Decode(err);
        assert!(err.to_string().starts_with("invalid response body"));
    }
}
