use crate::error::DirectoryError;
use crate::models::{Compensation, Employee, ReportingStructure};
use crate::reporting::count_transitive_reports;
use crate::store::DirectoryStore;

pub type ServiceResult<T> = std::result::Result<T, DirectoryError>;

/// Employee operations on top of a directory store.
pub struct EmployeeService<S> {
    store: S,
}

impl<S: DirectoryStore> EmployeeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist `employee` under a new store-assigned id.
    pub async fn create(&self, employee: Employee) -> ServiceResult<Employee> {
        self.store.create_employee(employee).await
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Option<Employee>> {
        if id.is_empty() {
            return Ok(None);
        }
        self.store.get_employee(id).await
    }

    /// Swap `original` for `replacement`, keeping `original`'s id.
    pub async fn replace(
        &self,
        original: &Employee,
        mut replacement: Employee,
    ) -> ServiceResult<Employee> {
        replacement.employee_id = original.employee_id.clone();
        self.store
            .replace_employee(&original.employee_id, replacement)
            .await
    }

    /// Replace the employee stored under `id`; `NotFound` if there is none.
    pub async fn replace_by_id(&self, id: &str, replacement: Employee) -> ServiceResult<Employee> {
        let existing = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found("employee", id))?;
        self.replace(&existing, replacement).await
    }

    pub async fn reporting_structure_by_id(&self, id: &str) -> ServiceResult<ReportingStructure> {
        let employee = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found("employee", id))?;
        self.get_reporting_structure(employee).await
    }

    pub async fn get_reporting_structure(
        &self,
        employee: Employee,
    ) -> ServiceResult<ReportingStructure> {
        let number_of_reports = count_transitive_reports(&self.store, &employee).await?;
        Ok(ReportingStructure {
            employee,
            number_of_reports,
        })
    }

    pub async fn add_compensation(&self, compensation: Compensation) -> ServiceResult<Compensation> {
        self.store.put_compensation(compensation).await
    }

    pub async fn get_compensation(&self, employee_id: &str) -> ServiceResult<Option<Compensation>> {
        if employee_id.is_empty() {
            return Ok(None);
        }
        self.store.get_compensation(employee_id).await
    }
}
