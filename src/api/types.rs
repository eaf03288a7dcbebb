//! Wire types for the administration API
//!
//! Field names match the server payloads; the auth envelope uses camelCase
//! token fields, everything else is snake_case. Timestamps arrive as naive
//! ISO text and are kept as strings until display time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) full_name: Option<String>,
    pub(crate) is_active: bool,
    pub(crate) is_superuser: bool,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
    #[serde(default)]
    pub(crate) role_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct UserCreate {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) full_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) role_ids: Option<Vec<i64>>,
}

impl UserUpdate {
    pub(crate) fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.full_name.is_none()
            && self.password.is_none()
            && self.is_active.is_none()
            && self.role_ids.is_none()
    }
}

/// Query parameters for `GET /users/`.
#[derive(Debug, Clone, Default)]
pub(crate) struct UserListParams {
    pub(crate) skip: Option<u32>,
    pub(crate) limit: Option<u32>,
    pub(crate) search: Option<String>,
    pub(crate) is_active: Option<bool>,
    pub(crate) role_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UserList {
    pub(crate) data: Vec<User>,
    pub(crate) total: i64,
    pub(crate) skip: i64,
    pub(crate) limit: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Role {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) is_active: bool,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RoleCreate {
    pub(crate) name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct RoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) is_active: Option<bool>,
}

impl RoleUpdate {
    pub(crate) fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.is_active.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RoleListParams {
    pub(crate) skip: Option<u32>,
    pub(crate) limit: Option<u32>,
    pub(crate) search: Option<String>,
    pub(crate) is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RoleList {
    pub(crate) data: Vec<Role>,
    pub(crate) total: i64,
    pub(crate) skip: i64,
    pub(crate) limit: i64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct UserRoleAssign {
    pub(crate) user_id: i64,
    pub(crate) role_ids: Vec<i64>,
}

/// Entry of `GET /roles/{id}/users` — a trimmed user projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RoleUser {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) full_name: Option<String>,
    pub(crate) is_active: bool,
    pub(crate) created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AuthData {
    #[serde(default)]
    pub(crate) avatar: String,
    pub(crate) username: String,
    pub(crate) nickname: String,
    pub(crate) roles: Vec<String>,
    pub(crate) permissions: Vec<String>,
    #[serde(rename = "accessToken")]
    pub(crate) access_token: String,
    #[serde(rename = "refreshToken")]
    pub(crate) refresh_token: String,
    pub(crate) expires: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AuthResult {
    pub(crate) success: bool,
    pub(crate) data: AuthData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct MessageResponse {
    pub(crate) message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PasswordReset {
    pub(crate) message: String,
    pub(crate) new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_server_payload() {
        let raw = r#"{
            "id": 7,
            "username": "alice",
            "email": "alice@example.com",
            "full_name": null,
            "is_active": true,
            "is_superuser": false,
            "created_at": "2024-03-05T09:07:03.123456",
            "updated_at": "2024-03-05T09:07:03.123456",
            "role_names": ["admin"]
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.full_name, None);
        assert_eq!(user.role_names, vec!["admin"]);
    }

    #[test]
    fn user_list_decodes_envelope() {
        let raw = r#"{"data": [], "total": 0, "skip": 0, "limit": 100}"#;
        let list: UserList = serde_json::from_str(raw).unwrap();
        assert!(list.data.is_empty());
        assert_eq!(list.limit, 100);
    }

    #[test]
    fn auth_result_decodes_camel_case_tokens() {
        let raw = r#"{
            "success": true,
            "data": {
                "avatar": "",
                "username": "admin",
                "nickname": "Administrator",
                "roles": ["admin"],
                "permissions": ["*:*:*"],
                "accessToken": "aaa",
                "refreshToken": "rrr",
                "expires": "2024/03/05 10:07:03"
            }
        }"#;
        let auth: AuthResult = serde_json::from_str(raw).unwrap();
        assert!(auth.success);
        assert_eq!(auth.data.access_token, "aaa");
        assert_eq!(auth.data.refresh_token, "rrr");
    }

    #[test]
    fn user_update_skips_unset_fields() {
        let update = UserUpdate {
            email: Some("new@example.com".to_string()),
            ..UserUpdate::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"email":"new@example.com"}"#);
        assert!(!update.is_empty());
        assert!(UserUpdate::default().is_empty());
    }

    #[test]
    fn role_create_omits_missing_description() {
        let create = RoleCreate {
            name: "ops".to_string(),
            description: None,
            is_active: None,
        };
        assert_eq!(serde_json::to_string(&create).unwrap(), r#"{"name":"ops"}"#);
    }
}
