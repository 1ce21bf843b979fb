//! In-memory directory used as the per-suite test fixture.

use super::{generate_id, DirectoryStore, StoreResult};
use crate::models::{Compensation, DirectReport, Employee};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub const JOHN_LENNON: &str = "16a596ae-edd3-4847-99fe-c4518e82c86f";
pub const PAUL_MCCARTNEY: &str = "b7839309-3348-463b-a7e3-5de1c168beb3";
pub const RINGO_STARR: &str = "03aa1462-ffa9-4978-901b-7c001562cf6f";
pub const PETE_BEST: &str = "62c1084e-6e34-4630-93fd-9153afb65309";
pub const GEORGE_HARRISON: &str = "c0c2293d-16bd-4603-8e08-638a9d18b22c";

#[derive(Default)]
pub struct MemoryDirectory {
    employees: RefCell<HashMap<String, Employee>>,
    compensations: RefCell<HashMap<String, Compensation>>,
    fetches: RefCell<Vec<String>>,
    removals: Cell<usize>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the same five employees as `migrations/0002_seed_employees.sql`.
    pub fn seeded() -> Self {
        let dir = Self::new();
        dir.insert(employee(
            JOHN_LENNON,
            ("John", "Lennon"),
            "Development Manager",
            &[PAUL_MCCARTNEY, RINGO_STARR],
        ));
        dir.insert(employee(PAUL_MCCARTNEY, ("Paul", "McCartney"), "Developer I", &[]));
        dir.insert(employee(
            RINGO_STARR,
            ("Ringo", "Starr"),
            "Developer V",
            &[PETE_BEST, GEORGE_HARRISON],
        ));
        dir.insert(employee(PETE_BEST, ("Pete", "Best"), "Developer II", &[]));
        dir.insert(employee(GEORGE_HARRISON, ("George", "Harrison"), "Developer III", &[]));
        dir
    }

    /// Store a record as-is. Direct reports are reduced to stubs the way the
    /// D1 store persists them.
    pub fn insert(&self, mut employee: Employee) {
        employee.direct_reports = employee
            .direct_reports
            .iter()
            .map(|r| DirectReport::stub(r.employee_id()))
            .collect();
        self.employees
            .borrow_mut()
            .insert(employee.employee_id.clone(), employee);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.employees.borrow().contains_key(id)
    }

    pub fn employee_count(&self) -> usize {
        self.employees.borrow().len()
    }

    /// Ids passed to `get_employee`, in call order.
    pub fn fetches(&self) -> Vec<String> {
        self.fetches.borrow().clone()
    }

    pub fn fetch_count(&self, id: &str) -> usize {
        self.fetches.borrow().iter().filter(|f| f.as_str() == id).count()
    }

    pub fn removals(&self) -> usize {
        self.removals.get()
    }

    fn remove(&self, id: &str) {
        if self.employees.borrow_mut().remove(id).is_some() {
            self.removals.set(self.removals.get() + 1);
        }
    }
}

pub fn employee(id: &str, name: (&str, &str), position: &str, reports: &[&str]) -> Employee {
    Employee {
        employee_id: id.into(),
        first_name: Some(name.0.into()),
        last_name: Some(name.1.into()),
        position: Some(position.into()),
        department: Some("Engineering".into()),
        direct_reports: reports.iter().map(|r| DirectReport::stub(*r)).collect(),
    }
}

impl DirectoryStore for MemoryDirectory {
    async fn get_employee(&self, id: &str) -> StoreResult<Option<Employee>> {
        self.fetches.borrow_mut().push(id.to_string());
        Ok(self.employees.borrow().get(id).cloned())
    }

    async fn create_employee(&self, mut employee: Employee) -> StoreResult<Employee> {
        employee.employee_id = generate_id()?;
        self.insert(employee.clone());
        Ok(employee)
    }

    async fn replace_employee(
        &self,
        original_id: &str,
        replacement: Employee,
    ) -> StoreResult<Employee> {
        self.remove(original_id);
        self.insert(replacement.clone());
        Ok(replacement)
    }

    async fn put_compensation(&self, compensation: Compensation) -> StoreResult<Compensation> {
        self.compensations
            .borrow_mut()
            .insert(compensation.employee_id.clone(), compensation.clone());
        Ok(compensation)
    }

    async fn get_compensation(&self, employee_id: &str) -> StoreResult<Option<Compensation>> {
        Ok(self.compensations.borrow().get(employee_id).cloned())
    }
}
