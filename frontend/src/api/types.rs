use leptos::*;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Approved,
    Pending,
    Rejected,
    #[default]
    Unknown,
}

impl RecordStatus {
    pub const ACTIONABLE: [RecordStatus; 3] = [
        RecordStatus::Approved,
        RecordStatus::Rejected,
        RecordStatus::Pending,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "approved" => Self::Approved,
            "pending" => Self::Pending,
            "rejected" => Self::Rejected,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Approved => "Approve",
            Self::Pending => "Pending",
            Self::Rejected => "Reject",
            Self::Unknown => "Unknown",
        }
    }

    /// Pill colour: anything that is not rejected or pending reads as approved.
    pub fn pill_class(&self) -> &'static str {
        match self {
            Self::Rejected => "bg-status-error-bg text-status-error-text",
            Self::Pending => "bg-status-warning-bg text-status-warning-text",
            Self::Approved | Self::Unknown => "bg-status-success-bg text-status-success-text",
        }
    }

    pub fn requires_reason(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

fn reference_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "reference_number must be a string or number, got {}",
            other
        ))),
    }
}

/// Scalars become text; `null`, arrays and objects become `None`.
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "reference_from_string_or_number")]
    pub reference_number: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub patient_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub passport_no: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default, deserialize_with = "optional_text")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub primary_doctor: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email_address: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub country: Option<String>,
    #[serde(rename = "rejectReason", default, deserialize_with = "optional_text")]
    pub reject_reason: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub authorization_letter: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub medical_doc: Option<String>,
}

impl UserRecord {
    pub fn new(reference_number: impl Into<String>, status: RecordStatus) -> Self {
        Self {
            reference_number: reference_number.into(),
            patient_name: None,
            passport_no: None,
            status,
            phone_number: None,
            primary_doctor: None,
            email_address: None,
            country: None,
            reject_reason: None,
            authorization_letter: None,
            medical_doc: None,
        }
    }

    /// Patient name, or the passport number when the name is blank.
    pub fn display_name(&self) -> String {
        self.patient_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.passport_no.as_deref())
            .unwrap_or_default()
            .to_string()
    }

    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.reference_number.to_lowercase().contains(needle)
            || self
                .patient_name
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(needle)
    }
}

/// Collapses the list endpoint's two response shapes into one sequence.
///
/// A bare array and `{ "users": [...] }` decode identically; any other shape
/// is an empty list. Records without a usable reference number are skipped.
pub fn normalize_users(data: Value) -> Vec<UserRecord> {
    let items = match data {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("users") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("skipping malformed user record #{}: {}", index, err);
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdateRequest {
    pub status: RecordStatus,
    #[serde(rename = "rejectReason", skip_serializing_if = "Option::is_none")]
    pub reject_reason: Option<String>,
}

impl StatusUpdateRequest {
    pub fn new(status: RecordStatus, reason: Option<&str>) -> Self {
        Self {
            status,
            reject_reason: reason
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
        }
    }
}

/// Editable scalar fields of the detail form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsForm {
    pub patient_name: String,
    pub phone_number: String,
    pub primary_doctor: String,
    pub email_address: String,
    pub country: String,
    pub reject_reason: String,
}

impl DetailsForm {
    pub fn from_record(record: &UserRecord) -> Self {
        fn or_na(value: &Option<String>) -> String {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or("N/A")
                .to_string()
        }
        Self {
            patient_name: or_na(&record.patient_name),
            phone_number: or_na(&record.phone_number),
            primary_doctor: or_na(&record.primary_doctor),
            email_address: or_na(&record.email_address),
            country: or_na(&record.country),
            reject_reason: record.reject_reason.clone().unwrap_or_default(),
        }
    }

    /// Multipart field names expected by `PUT /updateData/{ref}`.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("patientName", self.patient_name.as_str()),
            ("phoneNumber", self.phone_number.as_str()),
            ("primaryDoctor", self.primary_doctor.as_str()),
            ("emailAddress", self.email_address.as_str()),
            ("country", self.country.as_str()),
            ("rejectReason", self.reject_reason.as_str()),
        ]
    }

    /// Updates the field named like its multipart part. Unknown names are
    /// ignored and reported as `false`.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "patientName" => &mut self.patient_name,
            "phoneNumber" => &mut self.phone_number,
            "primaryDoctor" => &mut self.primary_doctor,
            "emailAddress" => &mut self.email_address,
            "country" => &mut self.country,
            "rejectReason" => &mut self.reject_reason,
            _ => return false,
        };
        *slot = value;
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Outcome of an authenticated call that got past the auth check.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub ok: bool,
    pub status: u16,
    pub data: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

pub const AUTH_EXPIRED_CODE: &str = "AUTH_EXPIRED";

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "INVALID_RESPONSE")
    }

    pub fn auth_expired(status: u16) -> Self {
        Self {
            error: format!("Auth error: {}", status),
            code: AUTH_EXPIRED_CODE.to_string(),
            details: Some(serde_json::json!({ "status": status })),
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        self.code == AUTH_EXPIRED_CODE
    }
}
