//! Property-based tests for the chain operations and `GenericList`.

use glist::{GenericList, ListError, Status, chain};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating GenericList
// =============================================================================

/// Generates a `Vec<i32>` with up to `max_size` elements.
fn elements(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size)
}

/// Generates a non-empty `Vec<i32>` together with a valid index into it.
fn elements_with_index() -> impl Strategy<Value = (Vec<i32>, usize)> {
    prop::collection::vec(any::<i32>(), 1..20)
        .prop_flat_map(|values| {
            let length = values.len();
            (Just(values), 0..length)
        })
}

fn to_list(values: &[i32]) -> GenericList<i32> {
    values.iter().copied().collect()
}

fn to_vec(list: &GenericList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_count_matches_iter_count(values in elements(30)) {
        let list = to_list(&values);
        prop_assert_eq!(chain::count(list.head()), values.len());
        prop_assert_eq!(list.len(), list.iter().count());
    }

    #[test]
    fn prop_push_increases_count_by_one(values in elements(30), element: i32) {
        let mut list = to_list(&values);
        let before = list.len();
        list.push(element).unwrap();
        prop_assert_eq!(list.len(), before + 1);
        prop_assert_eq!(list.iter().last(), Some(&element));
    }

    #[test]
    fn prop_for_each_visits_in_order(values in elements(30)) {
        let list = to_list(&values);
        let mut visited = Vec::new();
        let status = list.for_each(|value, index| visited.push((index, *value)));
        let expected: Vec<(usize, i32)> = values.iter().copied().enumerate().collect();
        prop_assert_eq!(visited, expected);
        prop_assert_eq!(status == Status::EmptyList, values.is_empty());
    }

    // =========================================================================
    // Insert / Delete Properties
    // =========================================================================

    #[test]
    fn prop_insert_places_element_and_shifts_rest((values, index) in elements_with_index(), element: i32) {
        let mut list = to_list(&values);
        let position = isize::try_from(index).unwrap();
        list.insert_at(position, element).unwrap();

        let mut expected = values.clone();
        expected.insert(index, element);
        prop_assert_eq!(list.get(index), Ok(&element));
        prop_assert_eq!(to_vec(&list), expected);
    }

    #[test]
    fn prop_delete_removes_element_and_shifts_rest((values, index) in elements_with_index()) {
        let mut list = to_list(&values);
        let position = isize::try_from(index).unwrap();
        let removed = list.delete_at(position);

        let mut expected = values.clone();
        let expected_removed = expected.remove(index);
        prop_assert_eq!(removed, Ok(expected_removed));
        prop_assert_eq!(to_vec(&list), expected);
    }

    #[test]
    fn prop_insert_then_delete_is_identity((values, index) in elements_with_index(), element: i32) {
        let mut list = to_list(&values);
        let position = isize::try_from(index).unwrap();
        list.insert_at(position, element).unwrap();
        prop_assert_eq!(list.delete_at(position), Ok(element));
        prop_assert_eq!(to_vec(&list), values);
    }

    #[test]
    fn prop_out_of_bounds_leaves_list_unchanged(values in elements(20), offset in 0isize..100, negative: bool) {
        let mut list = to_list(&values);
        let total = isize::try_from(values.len()).unwrap();
        let position = if negative { -1 - offset } else { total + offset };

        let inserted = list.insert_at(position, 0);
        prop_assert!(matches!(inserted, Err(ListError::PositionOutOfBounds(_))));
        let deleted = list.delete_at(position);
        prop_assert!(matches!(deleted, Err(ListError::PositionOutOfBounds(_))));
        prop_assert_eq!(to_vec(&list), values);
    }

    // =========================================================================
    // Destroy Properties
    // =========================================================================

    #[test]
    fn prop_destroy_empties_list(values in elements(30)) {
        let mut list = to_list(&values);
        let first = list.destroy();
        prop_assert_eq!(first == Status::Success, !values.is_empty());
        prop_assert_eq!(list.len(), 0);
        prop_assert_eq!(list.destroy(), Status::EmptyList);
    }
}
