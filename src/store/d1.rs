use super::{generate_id, DirectoryStore, StoreResult};
use crate::error::DirectoryError;
use crate::models::{Compensation, DirectReport, Employee};
use futures_util::future::try_join;
use rust_decimal::Decimal;
use wasm_bindgen::JsValue;
use worker::*;

fn opt_str(s: &Option<String>) -> JsValue {
    match s {
        Some(s) => JsValue::from_str(s),
        None => JsValue::NULL,
    }
}

/// Directory backed by a D1 database (see `migrations/`).
///
/// Direct-report links are stored by id in `direct_reports`; nested expanded
/// reports in a payload are linked, not inserted.
pub struct D1Directory {
    db: D1Database,
}

impl D1Directory {
    pub fn new(db: D1Database) -> Self {
        Self { db }
    }

    pub fn from_env(env: &Env, binding: &str) -> Result<Self> {
        Ok(Self::new(env.d1(binding)?))
    }

    fn insert_statements(&self, employee: &Employee) -> Result<Vec<D1PreparedStatement>> {
        let mut statements = Vec::with_capacity(employee.direct_reports.len() + 1);
        statements.push(
            self.db
                .prepare(
                    "INSERT INTO employees (employee_id, first_name, last_name, position, department)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .bind(&[
                    JsValue::from_str(&employee.employee_id),
                    opt_str(&employee.first_name),
                    opt_str(&employee.last_name),
                    opt_str(&employee.position),
                    opt_str(&employee.department),
                ])?,
        );
        for (ordinal, report_id) in employee.report_ids().enumerate() {
            statements.push(
                self.db
                    .prepare(
                        "INSERT INTO direct_reports (manager_id, report_id, ordinal) VALUES (?1, ?2, ?3)",
                    )
                    .bind(&[
                        JsValue::from_str(&employee.employee_id),
                        JsValue::from_str(report_id),
                        JsValue::from(ordinal as u32),
                    ])?,
            );
        }
        Ok(statements)
    }
}

impl DirectoryStore for D1Directory {
    async fn get_employee(&self, id: &str) -> StoreResult<Option<Employee>> {
        let row_query = self
            .db
            .prepare(
                "SELECT employee_id, first_name, last_name, position, department
                 FROM employees WHERE employee_id = ?1",
            )
            .bind(&[JsValue::from_str(id)])?;
        let links_query = self
            .db
            .prepare("SELECT report_id FROM direct_reports WHERE manager_id = ?1 ORDER BY ordinal")
            .bind(&[JsValue::from_str(id)])?;

        let (row, links) = try_join(row_query.first::<EmployeeRow>(None), links_query.all()).await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let links: Vec<ReportLinkRow> = links.results()?;
        Ok(Some(row.into_employee(links)))
    }

    async fn create_employee(&self, mut employee: Employee) -> StoreResult<Employee> {
        employee.employee_id = generate_id()?;
        self.db.batch(self.insert_statements(&employee)?).await?;
        Ok(employee)
    }

    async fn replace_employee(
        &self,
        original_id: &str,
        replacement: Employee,
    ) -> StoreResult<Employee> {
        // D1 runs a batch as one transaction, in statement order.
        let mut statements = vec![
            self.db
                .prepare("DELETE FROM direct_reports WHERE manager_id = ?1")
                .bind(&[JsValue::from_str(original_id)])?,
            self.db
                .prepare("DELETE FROM employees WHERE employee_id = ?1")
                .bind(&[JsValue::from_str(original_id)])?,
        ];
        statements.extend(self.insert_statements(&replacement)?);
        self.db.batch(statements).await?;
        Ok(replacement)
    }

    async fn put_compensation(&self, compensation: Compensation) -> StoreResult<Compensation> {
        self.db
            .prepare(
                "INSERT INTO compensations (employee_id, salary, effective_date) VALUES (?1, ?2, ?3)
                 ON CONFLICT(employee_id) DO UPDATE SET salary = excluded.salary, effective_date = excluded.effective_date",
            )
            .bind(&[
                JsValue::from_str(&compensation.employee_id),
                JsValue::from_str(&compensation.salary.to_string()),
                JsValue::from_str(&compensation.effective_date),
            ])?
            .run()
            .await?;
        Ok(compensation)
    }

    async fn get_compensation(&self, employee_id: &str) -> StoreResult<Option<Compensation>> {
        let row: Option<CompensationRow> = self
            .db
            .prepare(
                "SELECT employee_id, salary, effective_date FROM compensations WHERE employee_id = ?1",
            )
            .bind(&[JsValue::from_str(employee_id)])?
            .first(None)
            .await?;
        row.map(CompensationRow::into_compensation).transpose()
    }
}

// ── Row types ───────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
pub struct EmployeeRow {
    pub employee_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
}

impl EmployeeRow {
    pub fn into_employee(self, links: Vec<ReportLinkRow>) -> Employee {
        Employee {
            employee_id: self.employee_id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            department: self.department,
            direct_reports: links
                .into_iter()
                .map(|l| DirectReport::Stub(l.report_id))
                .collect(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ReportLinkRow {
    pub report_id: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct CompensationRow {
    pub employee_id: String,
    pub salary: String,
    pub effective_date: String,
}

impl CompensationRow {
    pub fn into_compensation(self) -> StoreResult<Compensation> {
        let salary = self.salary.parse::<Decimal>().map_err(|err| {
            DirectoryError::Storage(format!(
                "invalid salary '{}' for '{}': {err}",
                self.salary, self.employee_id
            ))
        })?;
        Ok(Compensation {
            employee_id: self.employee_id,
            salary,
            effective_date: self.effective_date,
        })
    }
}
