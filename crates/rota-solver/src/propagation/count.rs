//! Minimum worked shifts per employee.

use rota_core::ShiftType;

use super::Conflict;
use crate::grid::{AssignmentGrid, GridDomains};

/// At least `min_worked` of an employee's cells are Day or Night.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConstraint {
    pub(crate) employee: usize,
    pub(crate) days: usize,
    pub(crate) min_worked: usize,
}

impl CountConstraint {
    pub fn new(employee: usize, days: usize, min_worked: usize) -> Self {
        Self {
            employee,
            days,
            min_worked,
        }
    }

    pub fn employee(&self) -> usize {
        self.employee
    }

    pub fn min_worked(&self) -> usize {
        self.min_worked
    }

    /// Fails when too few cells can still be worked. When exactly enough
    /// can, all of them must be, so Off is removed from each.
    pub(crate) fn propagate(
        &self,
        domains: &mut GridDomains,
        changed: &mut Vec<usize>,
    ) -> Result<(), Conflict> {
        let first = self.employee * self.days;
        let workable = domains.row(self.employee).iter().filter(|d| d.can_work()).count();

        if workable < self.min_worked {
            return Err(Conflict);
        }
        if workable == self.min_worked {
            for cell in first..first + self.days {
                if domains.get(cell).can_work() && domains.remove(cell, ShiftType::Off)? {
                    changed.push(cell);
                }
            }
        }
        Ok(())
    }

    pub(crate) fn is_satisfied_by(&self, grid: &AssignmentGrid) -> bool {
        grid.worked_days(self.employee) >= self.min_worked
    }
}
