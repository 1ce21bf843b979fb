//! Directory store: keyed access to employee and compensation records.
//!
//! `get_employee` returns the record with its direct reports as stubs; callers
//! that need deeper levels fetch each stub by id.

mod d1;
#[cfg(test)]
pub mod memory;

pub use d1::D1Directory;

use crate::error::DirectoryError;
use crate::models::{Compensation, Employee};

pub type StoreResult<T> = std::result::Result<T, DirectoryError>;

#[allow(async_fn_in_trait)]
pub trait DirectoryStore {
    async fn get_employee(&self, id: &str) -> StoreResult<Option<Employee>>;

    /// Persist a new employee under a freshly generated identifier.
    async fn create_employee(&self, employee: Employee) -> StoreResult<Employee>;

    /// Remove the record stored under `original_id` and insert `replacement`.
    /// The removal must be committed before the insert lands.
    async fn replace_employee(
        &self,
        original_id: &str,
        replacement: Employee,
    ) -> StoreResult<Employee>;

    /// Insert or overwrite the compensation record for its employee id.
    async fn put_compensation(&self, compensation: Compensation) -> StoreResult<Compensation>;

    async fn get_compensation(&self, employee_id: &str) -> StoreResult<Option<Compensation>>;
}

/// Random UUIDv4-formatted identifier.
pub fn generate_id() -> StoreResult<String> {
    let mut buf = [0u8; 16];
    getrandom::getrandom(&mut buf)
        .map_err(|err| DirectoryError::Storage(format!("failed to generate id: {err}")))?;
    buf[6] = (buf[6] & 0x0f) | 0x40;
    buf[8] = (buf[8] & 0x3f) | 0x80;
    let hex = hex::encode(buf);
    Ok(format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    ))
}
