use serde::Deserialize;

/// Entry of the doctors-by-department lookup; the backend only returns
/// doctors that are currently available.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
}
