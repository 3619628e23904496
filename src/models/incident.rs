//! Equipment incident model matching the incidencias collection.
//!
//! Incidents are an independent feed with a status workflow; they have no
//! relation to posts.

use serde::{Deserialize, Serialize};

/// Workflow status of an incident. Wire values are the API's Spanish labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncidentStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "En trámite")]
    InProgress,
    #[serde(rename = "Solucionado")]
    Resolved,
    #[serde(rename = "Denegado")]
    Denied,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Pending => "Pendiente",
            IncidentStatus::InProgress => "En trámite",
            IncidentStatus::Resolved => "Solucionado",
            IncidentStatus::Denied => "Denegado",
        }
    }
}

/// An equipment-issue report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    #[serde(rename = "numeroEquipo")]
    pub equipment_number: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "estado")]
    pub status: IncidentStatus,
    #[serde(rename = "fecha", default)]
    pub created_at: String,
}

/// Request body for filing a new incident. Status and timestamp are filled
/// in by the client at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIncident {
    #[serde(rename = "numeroEquipo")]
    pub equipment_number: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "estado")]
    pub status: IncidentStatus,
    #[serde(rename = "fecha")]
    pub created_at: String,
}
