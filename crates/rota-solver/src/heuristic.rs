//! Variable and value ordering.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rota_config::{ValueSelection, VariableSelection};
use rota_core::ShiftType;

use crate::grid::{GridDomains, ShiftDomain};

/// Picks the next unbound cell, or `None` when every cell is bound.
///
/// `MostConstrained` takes the cell with the fewest remaining values,
/// breaking ties by the lowest cell index. Cells that can fail soonest
/// are decided first.
pub fn select_cell(domains: &GridDomains, selection: VariableSelection) -> Option<usize> {
    let mut unbound = domains
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, d)| d.len() > 1);

    match selection {
        VariableSelection::InputOrder => unbound.next().map(|(cell, _)| cell),
        VariableSelection::MostConstrained => unbound
            .min_by_key(|&(cell, d)| (d.len(), cell))
            .map(|(cell, _)| cell),
    }
}

/// Values of `domain` in the order they should be tried.
///
/// The returned stack is popped from the back, so the first value to try
/// is last.
pub fn value_stack(
    domain: ShiftDomain,
    selection: ValueSelection,
    rng: &mut StdRng,
) -> Vec<ShiftType> {
    let mut values: Vec<ShiftType> = domain.iter().collect();
    match selection {
        ValueSelection::Ascending => values.reverse(),
        ValueSelection::Random => values.shuffle(rng),
    }
    values
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_select_cell_none_when_bound() {
        let mut domains = GridDomains::full(1, 2);
        domains.assign(0, ShiftType::Day).unwrap();
        domains.assign(1, ShiftType::Off).unwrap();
        assert_eq!(select_cell(&domains, VariableSelection::MostConstrained), None);
        assert_eq!(select_cell(&domains, VariableSelection::InputOrder), None);
    }

    #[test]
    fn test_most_constrained_prefers_smallest_domain() {
        let mut domains = GridDomains::full(2, 2);
        domains.remove(3, ShiftType::Night).unwrap();
        domains.remove(2, ShiftType::Night).unwrap();
        assert_eq!(select_cell(&domains, VariableSelection::MostConstrained), Some(2));
        assert_eq!(select_cell(&domains, VariableSelection::InputOrder), Some(0));
    }

    #[test]
    fn test_most_constrained_skips_bound_cells() {
        let mut domains = GridDomains::full(1, 3);
        domains.assign(0, ShiftType::Day).unwrap();
        assert_eq!(select_cell(&domains, VariableSelection::MostConstrained), Some(1));
    }

    #[test]
    fn test_ascending_pops_day_first() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut stack = value_stack(ShiftDomain::FULL, ValueSelection::Ascending, &mut rng);
        assert_eq!(stack.pop(), Some(ShiftType::Day));
        assert_eq!(stack.pop(), Some(ShiftType::Night));
        assert_eq!(stack.pop(), Some(ShiftType::Off));
    }

    #[test]
    fn test_random_keeps_all_values() {
        let mut rng = StdRng::seed_from_u64(3);
        let domain = ShiftDomain::FULL.without(ShiftType::Night);
        let mut stack = value_stack(domain, ValueSelection::Random, &mut rng);
        stack.sort();
        assert_eq!(stack, vec![ShiftType::Day, ShiftType::Off]);
    }

    #[test]
    fn test_random_is_seeded() {
        let a = value_stack(
            ShiftDomain::FULL,
            ValueSelection::Random,
            &mut StdRng::seed_from_u64(11),
        );
        let b = value_stack(
            ShiftDomain::FULL,
            ValueSelection::Random,
            &mut StdRng::seed_from_u64(11),
        );
        assert_eq!(a, b);
    }
}
