//! Reporting-structure resolution: counts everyone below an employee in the
//! org chart, loading stub subtrees from the directory as the walk reaches them.

use crate::error::DirectoryError;
use crate::models::{DirectReport, Employee};
use crate::store::DirectoryStore;

struct Frame {
    employee_id: String,
    reports: std::vec::IntoIter<DirectReport>,
}

/// Total number of transitive subordinates of `root`.
///
/// Each direct report counts once plus its own subordinates. Stub reports are
/// fetched from `store` exactly once per occurrence; the same id listed under
/// two managers is counted under both. A report that already sits on the
/// path from `root` fails with `ReportingCycle`.
pub async fn count_transitive_reports<S: DirectoryStore>(
    store: &S,
    root: &Employee,
) -> Result<u32, DirectoryError> {
    let mut total = 0u32;
    let mut stack = vec![Frame {
        employee_id: root.employee_id.clone(),
        reports: root.direct_reports.clone().into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(report) = frame.reports.next() else {
            stack.pop();
            continue;
        };
        total += 1;

        let report_id = report.employee_id();
        if stack.iter().any(|f| f.employee_id == report_id) {
            return Err(DirectoryError::ReportingCycle {
                employee_id: report_id.to_string(),
            });
        }

        let expanded = match report {
            DirectReport::Expanded(employee) => employee,
            DirectReport::Stub(id) => match store.get_employee(&id).await? {
                Some(employee) => employee,
                None => {
                    let manager_id = stack
                        .last()
                        .map(|f| f.employee_id.clone())
                        .unwrap_or_default();
                    return Err(DirectoryError::DanglingReference {
                        manager_id,
                        report_id: id,
                    });
                }
            },
        };

        if !expanded.direct_reports.is_empty() {
            stack.push(Frame {
                employee_id: expanded.employee_id,
                reports: expanded.direct_reports.into_iter(),
            });
        }
    }

    Ok(total)
}
