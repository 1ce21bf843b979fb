use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ── Employee ────────────────────────────────────────────────────

/// An employee record with its direct reports populated (possibly empty).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub direct_reports: Vec<DirectReport>,
}

impl Employee {
    pub fn report_ids(&self) -> impl Iterator<Item = &str> {
        self.direct_reports.iter().map(DirectReport::employee_id)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DirectReport>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DirectReport>>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Direct reports ──────────────────────────────────────────────

/// A reference from a manager to one of their direct reports.
///
/// `Stub` carries only the identifier; its subordinates have not been loaded
/// and must be fetched from the directory before they can be inspected.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectReport {
    Expanded(Employee),
    Stub(String),
}

impl DirectReport {
    pub fn stub(employee_id: impl Into<String>) -> Self {
        DirectReport::Stub(employee_id.into())
    }

    pub fn employee_id(&self) -> &str {
        match self {
            DirectReport::Expanded(employee) => &employee.employee_id,
            DirectReport::Stub(id) => id,
        }
    }

    #[cfg(test)]
    pub fn is_stub(&self) -> bool {
        matches!(self, DirectReport::Stub(_))
    }
}

/// Wire shape accepted for a direct report. A missing or null
/// `directReports` field marks the entry as a stub.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportRef {
    employee_id: String,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    department: Option<String>,
    #[serde(default)]
    direct_reports: Option<Vec<DirectReport>>,
}

impl From<ReportRef> for DirectReport {
    fn from(r: ReportRef) -> Self {
        match r.direct_reports {
            Some(direct_reports) => DirectReport::Expanded(Employee {
                employee_id: r.employee_id,
                first_name: r.first_name,
                last_name: r.last_name,
                position: r.position,
                department: r.department,
                direct_reports,
            }),
            None => DirectReport::Stub(r.employee_id),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StubRef<'a> {
    employee_id: &'a str,
}

impl Serialize for DirectReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DirectReport::Expanded(employee) => employee.serialize(serializer),
            DirectReport::Stub(id) => StubRef { employee_id: id }.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for DirectReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ReportRef::deserialize(deserializer).map(DirectReport::from)
    }
}

// ── Reporting structure ─────────────────────────────────────────

/// An employee paired with the number of people in their reporting chain.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportingStructure {
    pub employee: Employee,
    pub number_of_reports: u32,
}
