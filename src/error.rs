use thiserror::Error;

/// Failures surfaced by the directory store, the reporting resolver and the
/// service facade.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("employee '{manager_id}' lists direct report '{report_id}' which does not exist")]
    DanglingReference {
        manager_id: String,
        report_id: String,
    },

    #[error("employee '{employee_id}' appears in their own reporting chain")]
    ReportingCycle { employee_id: String },

    #[error("storage error: {0}")]
    Storage(String),
}

impl DirectoryError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        DirectoryError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            DirectoryError::NotFound { .. } => 404,
            DirectoryError::ReportingCycle { .. } => 409,
            DirectoryError::DanglingReference { .. } | DirectoryError::Storage(_) => 500,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DirectoryError::NotFound { .. } => "not_found",
            DirectoryError::DanglingReference { .. } => "dangling_reference",
            DirectoryError::ReportingCycle { .. } => "reporting_cycle",
            DirectoryError::Storage(_) => "storage",
        }
    }
}

impl From<worker::Error> for DirectoryError {
    fn from(err: worker::Error) -> Self {
        DirectoryError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::Storage(err.to_string())
    }
}
