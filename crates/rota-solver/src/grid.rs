//! Decision variables: per-cell shift domains and bound grids.
//!
//! Cells are indexed row-major, `employee * days + day`.

use std::fmt;

use rota_core::ShiftType;

use crate::propagation::Conflict;

/// Set of shift kinds still possible for one cell.
///
/// Stored as a three-bit mask, one bit per [`ShiftType`]. The reserved
/// "unassigned" code has no bit and can never be a member.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftDomain(u8);

impl ShiftDomain {
    /// No values; a cell reaching this is a conflict.
    pub const EMPTY: ShiftDomain = ShiftDomain(0);

    /// `{Day, Night, Off}`
    pub const FULL: ShiftDomain = ShiftDomain(0b111);

    #[inline]
    fn bit(shift: ShiftType) -> u8 {
        1 << shift.index()
    }

    /// A domain holding only `shift`.
    #[inline]
    pub fn single(shift: ShiftType) -> Self {
        ShiftDomain(Self::bit(shift))
    }

    #[inline]
    pub fn contains(self, shift: ShiftType) -> bool {
        self.0 & Self::bit(shift) != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The value, when exactly one remains.
    pub fn value(self) -> Option<ShiftType> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    #[inline]
    pub fn is_bound(self) -> bool {
        self.len() == 1
    }

    /// Whether any worked shift (day or night) remains.
    #[inline]
    pub fn can_work(self) -> bool {
        self.contains(ShiftType::Day) || self.contains(ShiftType::Night)
    }

    pub fn without(self, shift: ShiftType) -> Self {
        ShiftDomain(self.0 & !Self::bit(shift))
    }

    pub fn with(self, shift: ShiftType) -> Self {
        ShiftDomain(self.0 | Self::bit(shift))
    }

    /// Members in symbol order.
    pub fn iter(self) -> impl Iterator<Item = ShiftType> {
        ShiftType::ALL.into_iter().filter(move |&s| self.contains(s))
    }
}

impl Default for ShiftDomain {
    fn default() -> Self {
        Self::FULL
    }
}

impl FromIterator<ShiftType> for ShiftDomain {
    fn from_iter<I: IntoIterator<Item = ShiftType>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, ShiftDomain::with)
    }
}

impl fmt::Debug for ShiftDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Domains of every cell of the employee × day grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDomains {
    employees: usize,
    days: usize,
    cells: Vec<ShiftDomain>,
}

impl GridDomains {
    /// A grid where every cell may take any shift.
    pub fn full(employees: usize, days: usize) -> Self {
        Self {
            employees,
            days,
            cells: vec![ShiftDomain::FULL; employees * days],
        }
    }

    pub fn employees(&self) -> usize {
        self.employees
    }

    pub fn days(&self) -> usize {
        self.days
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn index(&self, employee: usize, day: usize) -> usize {
        employee * self.days + day
    }

    #[inline]
    pub fn get(&self, cell: usize) -> ShiftDomain {
        self.cells[cell]
    }

    #[inline]
    pub fn at(&self, employee: usize, day: usize) -> ShiftDomain {
        self.cells[self.index(employee, day)]
    }

    /// Domains of one employee's row, in day order.
    pub fn row(&self, employee: usize) -> &[ShiftDomain] {
        let start = employee * self.days;
        &self.cells[start..start + self.days]
    }

    pub fn cells(&self) -> &[ShiftDomain] {
        &self.cells
    }

    /// Narrows `cell` to `domain ∩ current`.
    ///
    /// Returns whether anything changed, or a conflict if nothing is left.
    pub fn restrict(&mut self, cell: usize, domain: ShiftDomain) -> Result<bool, Conflict> {
        let current = self.cells[cell];
        let narrowed = ShiftDomain(current.0 & domain.0);
        if narrowed.is_empty() {
            return Err(Conflict);
        }
        self.cells[cell] = narrowed;
        Ok(narrowed != current)
    }

    /// Removes `shift` from `cell`.
    pub fn remove(&mut self, cell: usize, shift: ShiftType) -> Result<bool, Conflict> {
        self.restrict(cell, ShiftDomain::FULL.without(shift))
    }

    /// Binds `cell` to `shift`.
    pub fn assign(&mut self, cell: usize, shift: ShiftType) -> Result<bool, Conflict> {
        self.restrict(cell, ShiftDomain::single(shift))
    }

    /// Whether every cell holds exactly one value.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|d| d.is_bound())
    }

    /// The bound grid, once every cell holds exactly one value.
    pub fn to_grid(&self) -> Option<AssignmentGrid> {
        let cells = self
            .cells
            .iter()
            .map(|d| d.value())
            .collect::<Option<Vec<_>>>()?;
        Some(AssignmentGrid {
            employees: self.employees,
            days: self.days,
            cells,
        })
    }
}

/// A fully bound employee × day grid: one solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentGrid {
    employees: usize,
    days: usize,
    cells: Vec<ShiftType>,
}

impl AssignmentGrid {
    /// Builds a grid from rows of equal length.
    ///
    /// Returns `None` when the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<ShiftType>>) -> Option<Self> {
        let employees = rows.len();
        let days = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != days) {
            return None;
        }
        Some(Self {
            employees,
            days,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn employees(&self) -> usize {
        self.employees
    }

    pub fn days(&self) -> usize {
        self.days
    }

    #[inline]
    pub fn get(&self, employee: usize, day: usize) -> ShiftType {
        self.cells[employee * self.days + day]
    }

    /// One employee's shifts in day order.
    pub fn row(&self, employee: usize) -> &[ShiftType] {
        let start = employee * self.days;
        &self.cells[start..start + self.days]
    }

    /// Every employee's shift on `day`, in employee order.
    pub fn column(&self, day: usize) -> impl Iterator<Item = ShiftType> + '_ {
        (0..self.employees).map(move |e| self.get(e, day))
    }

    /// Number of employees on `shift` on `day`.
    pub fn count_on_day(&self, day: usize, shift: ShiftType) -> usize {
        self.column(day).filter(|&s| s == shift).count()
    }

    /// Number of days `employee` spends on `shift`.
    pub fn count_for_employee(&self, employee: usize, shift: ShiftType) -> usize {
        self.row(employee).iter().filter(|&&s| s == shift).count()
    }

    /// Number of worked (day or night) shifts of `employee`.
    pub fn worked_days(&self, employee: usize) -> usize {
        self.row(employee).iter().filter(|s| s.is_worked()).count()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[ShiftType] {
        &self.cells
    }
}
