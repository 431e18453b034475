//! Request and response bodies for the contacts endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::contacts::ContactInfo;

/// Body of `POST` and `DELETE /api/contacts`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub user_login: String,
}

/// One entry of the contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub login: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Midnight UTC, e.g. `2003-05-02T00:00:00.000Z`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl From<ContactInfo> for ContactResponse {
    fn from(info: ContactInfo) -> Self {
        Self {
            login: info.login.as_str().to_string(),
            display_name: info.display_name.as_str().to_string(),
            tel: info.tel.map(|t| t.as_str().to_string()),
            email: info.email.map(|e| e.as_str().to_string()),
            date_of_birth: info.date_of_birth.map(|d| d.to_utc_midnight_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsListResponse {
    pub contacts: Vec<ContactResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddContactResponse {
    /// `false` when the contact was already in the list
    pub added: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteContactResponse {
    /// `false` when there was nothing to remove
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{DateOfBirth, DisplayName, Login, Telephone};

    #[test]
    fn contact_request_uses_camel_case() {
        let req: ContactRequest = serde_json::from_str(r#"{"userLogin":"adminVasya"}"#).unwrap();
        assert_eq!(req.user_login, "adminVasya");
    }

    #[test]
    fn contact_response_omits_missing_fields() {
        let info = ContactInfo {
            login: Login::new("adminVasya").unwrap(),
            display_name: DisplayName::new("admin Vasya").unwrap(),
            tel: Some(Telephone::new("+79991234567").unwrap()),
            email: None,
            date_of_birth: Some(DateOfBirth::parse("02.05.2003").unwrap()),
        };

        let json = serde_json::to_value(ContactResponse::from(info)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "login": "adminVasya",
                "displayName": "admin Vasya",
                "tel": "+79991234567",
                "dateOfBirth": "2003-05-02T00:00:00.000Z"
            })
        );
    }
}
