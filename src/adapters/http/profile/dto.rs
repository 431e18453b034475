//! Request and response bodies for the profile endpoints.

use serde::{Deserialize, Serialize};

use crate::application::UpdateProfileResult;
use crate::domain::user::User;

/// Body of `PUT /api/profile`.
///
/// `login` names the profile owner. The other fields are applied only when
/// present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub login: String,
    #[serde(default)]
    pub tel: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// The acting user's full profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i64,
    pub login: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_i64(),
            login: user.login().as_str().to_string(),
            display_name: user.display_name().as_str().to_string(),
            tel: user.tel().map(|t| t.as_str().to_string()),
            email: user.email().map(|e| e.as_str().to_string()),
            date_of_birth: user.date_of_birth().map(|d| d.to_utc_midnight_string()),
        }
    }
}

/// The accepted fields, echoed as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl From<UpdateProfileResult> for UpdateProfileResponse {
    fn from(result: UpdateProfileResult) -> Self {
        Self {
            tel: result.tel,
            date_of_birth: result.date_of_birth,
            display_name: result.display_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_accepts_partial_body() {
        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"login":"ivanov","tel":"+79991234567"}"#).unwrap();

        assert_eq!(req.login, "ivanov");
        assert_eq!(req.tel.as_deref(), Some("+79991234567"));
        assert!(req.date_of_birth.is_none());
        assert!(req.display_name.is_none());
    }

    #[test]
    fn update_request_requires_login() {
        let result = serde_json::from_str::<UpdateProfileRequest>(r#"{"tel":"+79991234567"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_update_response_serializes_to_empty_object() {
        let json = serde_json::to_string(&UpdateProfileResponse::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn update_response_uses_camel_case() {
        let response = UpdateProfileResponse {
            date_of_birth: Some("01.01.2003".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json, serde_json::json!({ "dateOfBirth": "01.01.2003" }));
    }
}
