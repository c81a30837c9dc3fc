//! Daily headcount per shift kind.

use rota_core::ShiftType;

use super::Conflict;
use crate::grid::{AssignmentGrid, GridDomains};

/// Exactly `demand[k]` of a day's cells take `ShiftType::ALL[k]`.
///
/// Demands are signed: a negative off demand (more staff on shift than
/// employees) can never be met and fails on first propagation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionConstraint {
    pub(crate) day: usize,
    pub(crate) employees: usize,
    pub(crate) days: usize,
    pub(crate) demand: [i64; 3],
}

impl DistributionConstraint {
    pub fn new(day: usize, employees: usize, days: usize, demand: [i64; 3]) -> Self {
        Self {
            day,
            employees,
            days,
            demand,
        }
    }

    pub fn day(&self) -> usize {
        self.day
    }

    /// Required headcount for `shift`.
    pub fn demand(&self, shift: ShiftType) -> i64 {
        self.demand[shift.index()]
    }

    fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.employees).map(move |e| e * self.days + self.day)
    }

    /// For each shift kind: too many bound or too few possible is a
    /// conflict; once the bound count meets demand the value leaves every
    /// other cell; once the possible count meets demand every candidate
    /// cell is bound to it.
    pub(crate) fn propagate(
        &self,
        domains: &mut GridDomains,
        changed: &mut Vec<usize>,
    ) -> Result<(), Conflict> {
        for shift in ShiftType::ALL {
            let demand = self.demand(shift);
            if demand < 0 {
                return Err(Conflict);
            }

            let mut bound = 0i64;
            let mut possible = 0i64;
            for cell in self.cells() {
                let domain = domains.get(cell);
                if domain.contains(shift) {
                    possible += 1;
                    if domain.is_bound() {
                        bound += 1;
                    }
                }
            }

            if bound > demand || possible < demand {
                return Err(Conflict);
            }

            if bound == demand && possible > bound {
                for cell in self.cells() {
                    let domain = domains.get(cell);
                    if domain.contains(shift)
                        && !domain.is_bound()
                        && domains.remove(cell, shift)?
                    {
                        changed.push(cell);
                    }
                }
            } else if possible == demand && possible > bound {
                for cell in self.cells() {
                    if domains.get(cell).contains(shift) && domains.assign(cell, shift)? {
                        changed.push(cell);
                    }
                }
            }
        }
        Ok(())
    }

    pub(crate) fn is_satisfied_by(&self, grid: &AssignmentGrid) -> bool {
        ShiftType::ALL
            .iter()
            .all(|&shift| grid.count_on_day(self.day, shift) as i64 == self.demand(shift))
    }
}
