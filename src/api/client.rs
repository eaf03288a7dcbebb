//! Thin ureq wrappers around the administration REST API
//!
//! One method per endpoint. Non-2xx responses are mapped to
//! `ApiError::Status` carrying the server's `detail` message when one can
//! be decoded.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use ureq::http::Response;
use ureq::{Agent, Body};

use crate::error::ApiError;

use super::types::{
    AuthResult, MessageResponse, PasswordReset, Role, RoleCreate, RoleList, RoleListParams,
    RoleUpdate, RoleUser, User, UserCreate, UserList, UserListParams, UserRoleAssign, UserUpdate,
};

pub(crate) const DEFAULT_SERVER: &str = "http://localhost:8000";

#[derive(Debug, Clone, serde::Deserialize)]
struct ErrorDetail {
    detail: String,
}

pub(crate) struct ApiClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub(crate) fn new(base_url: &str) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(Duration::from_secs(30)))
            .build();
        ApiClient {
            agent: config.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub(crate) fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut request = self.agent.get(self.url(path).as_str());
        for (key, value) in query {
            request = request.query(*key, value);
        }
        if let Some(auth) = self.bearer() {
            request = request.header("Authorization", auth);
        }
        decode(request.call()?)
    }

    fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let mut request = self.agent.post(self.url(path).as_str());
        if let Some(auth) = self.bearer() {
            request = request.header("Authorization", auth);
        }
        decode(request.send_json(body)?)
    }

    fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let mut request = self.agent.post(self.url(path).as_str());
        if let Some(auth) = self.bearer() {
            request = request.header("Authorization", auth);
        }
        decode(request.send_empty()?)
    }

    fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let mut request = self.agent.put(self.url(path).as_str());
        if let Some(auth) = self.bearer() {
            request = request.header("Authorization", auth);
        }
        decode(request.send_json(body)?)
    }

    fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let mut request = self.agent.delete(self.url(path).as_str());
        if let Some(auth) = self.bearer() {
            request = request.header("Authorization", auth);
        }
        decode(request.call()?)
    }

    pub(crate) fn login(&self, username: &str, password: &str) -> Result<AuthResult, ApiError> {
        self.post_json(
            "/auth/sessions",
            &serde_json::json!({ "username": username, "password": password }),
        )
    }

    pub(crate) fn refresh(&self, refresh_token: &str) -> Result<AuthResult, ApiError> {
        self.post_json(
            "/auth/refresh-token",
            &serde_json::json!({ "refresh_token": refresh_token }),
        )
    }

    pub(crate) fn me(&self) -> Result<User, ApiError> {
        self.get_json("/users/me", &[])
    }

    pub(crate) fn list_users(&self, params: &UserListParams) -> Result<UserList, ApiError> {
        let mut query = Vec::new();
        push_opt(&mut query, "skip", params.skip);
        push_opt(&mut query, "limit", params.limit);
        push_opt(&mut query, "search", params.search.clone());
        push_opt(&mut query, "is_active", params.is_active);
        push_opt(&mut query, "role_name", params.role_name.clone());
        self.get_json("/users/", &query)
    }

    pub(crate) fn create_user(&self, user: &UserCreate) -> Result<User, ApiError> {
        self.post_json("/users/", user)
    }

    pub(crate) fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.get_json(&format!("/users/{id}"), &[])
    }

    pub(crate) fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        self.put_json(&format!("/users/{id}"), update)
    }

    pub(crate) fn delete_user(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.delete_json(&format!("/users/{id}"))
    }

    pub(crate) fn reset_password(&self, id: i64) -> Result<PasswordReset, ApiError> {
        self.post_empty(&format!("/users/{id}/reset-password"))
    }

    pub(crate) fn list_roles(&self, params: &RoleListParams) -> Result<RoleList, ApiError> {
        let mut query = Vec::new();
        push_opt(&mut query, "skip", params.skip);
        push_opt(&mut query, "limit", params.limit);
        push_opt(&mut query, "search", params.search.clone());
        push_opt(&mut query, "is_active", params.is_active);
        self.get_json("/roles/", &query)
    }

    pub(crate) fn create_role(&self, role: &RoleCreate) -> Result<Role, ApiError> {
        self.post_json("/roles/", role)
    }

    pub(crate) fn get_role(&self, id: i64) -> Result<Role, ApiError> {
        self.get_json(&format!("/roles/{id}"), &[])
    }

    pub(crate) fn update_role(&self, id: i64, update: &RoleUpdate) -> Result<Role, ApiError> {
        self.put_json(&format!("/roles/{id}"), update)
    }

    pub(crate) fn delete_role(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.delete_json(&format!("/roles/{id}"))
    }

    pub(crate) fn assign_roles(
        &self,
        assignment: &UserRoleAssign,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json("/roles/assign", assignment)
    }

    pub(crate) fn role_users(
        &self,
        id: i64,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<RoleUser>, ApiError> {
        let mut query = Vec::new();
        push_opt(&mut query, "skip", skip);
        push_opt(&mut query, "limit", limit);
        self.get_json(&format!("/roles/{id}/users"), &query)
    }
}

fn push_opt<'a>(
    query: &mut Vec<(&'a str, String)>,
    key: &'a str,
    value: Option<impl ToString>,
) {
    if let Some(v) = value {
        query.push((key, v.to_string()));
    }
}

fn decode<T: DeserializeOwned>(mut response: Response<Body>) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let detail = response
            .body_mut()
            .read_json::<ErrorDetail>()
            .map(|body| body.detail)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        });
    }
    response
        .body_mut()
        .read_json::<T>()
        .map_err(|e| ApiError::Decode(e.to_string()))
}
