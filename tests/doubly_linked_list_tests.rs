//! Unit tests for DoublyLinkedList.
//!
//! These tests cover construction, positional and value lookup, every
//! mutator and the read views, including the boundary behaviour of each.

use relink::persistent::{DoublyLinkedList, Mutation};
use rstest::{fixture, rstest};

#[fixture]
fn five() -> DoublyLinkedList<i32> {
    [14, 67, 10, 99, 45].into_iter().collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("relink=trace")
        .try_init();
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_list() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);
    assert!(list.values().is_empty());
}

#[rstest]
fn test_from_values_preserves_order() {
    let list = DoublyLinkedList::from_values([3, 1, 2]);
    assert_eq!(list.values(), vec![3, 1, 2]);
    assert_eq!(list.size(), 3);
}

#[rstest]
fn test_from_slice_and_vec_agree() {
    let from_slice = DoublyLinkedList::from_slice(&[1, 2, 3]);
    let from_vec: DoublyLinkedList<i32> = vec![1, 2, 3].into();
    assert_eq!(from_slice, from_vec);
}

// =============================================================================
// Links
// =============================================================================

#[rstest]
fn test_forward_linkage_is_consistent(five: DoublyLinkedList<i32>) {
    for index in 0..five.size() - 1 {
        let current = five.at(index).unwrap();
        assert_eq!(current.next(), five.at(index + 1));
    }
    assert!(five.tail().unwrap().next().is_none());
}

#[rstest]
fn test_backward_linkage_is_consistent(five: DoublyLinkedList<i32>) {
    for index in 1..five.size() {
        let current = five.at(index).unwrap();
        assert_eq!(current.prev(), five.at(index - 1));
    }
    assert!(five.head().unwrap().prev().is_none());
}

#[rstest]
fn test_traverse_forward_from_head(five: DoublyLinkedList<i32>) {
    let mut visited = Vec::new();
    let mut current = five.head();
    while let Some(node) = current {
        visited.push(*node.value());
        current = node.next();
    }
    assert_eq!(visited, five.values());
}

#[rstest]
fn test_traverse_backward_from_tail(five: DoublyLinkedList<i32>) {
    let reversed: Vec<i32> = five.iter_rev().copied().collect();
    assert_eq!(reversed, vec![45, 99, 10, 67, 14]);
    assert_eq!(five.nodes_rev().len(), 5);
}

#[rstest]
fn test_nodes_of_distinct_lists_are_distinct(five: DoublyLinkedList<i32>) {
    let copy = five.clone();
    assert_eq!(copy, five);
    assert_ne!(copy.head(), five.head());
}

// =============================================================================
// head / tail
// =============================================================================

#[rstest]
fn test_head_and_tail_of_empty_list() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert!(list.head().is_none());
    assert!(list.tail().is_none());
}

#[rstest]
fn test_head_and_tail_of_single_item_list() {
    let list = DoublyLinkedList::from_values([7]);
    assert_eq!(list.head(), list.tail());
    assert_eq!(list.head().map(|node| *node.value()), Some(7));
}

#[rstest]
fn test_head_updates_after_deleting_head(five: DoublyLinkedList<i32>) {
    let updated = five.delete([0]).applied().unwrap();
    assert_eq!(updated.head().map(|node| *node.value()), Some(67));
    assert_eq!(five.head().map(|node| *node.value()), Some(14));
}

#[rstest]
fn test_tail_updates_after_add_tail(five: DoublyLinkedList<i32>) {
    let updated = five.add_tail([1, 2]).applied().unwrap();
    let tail = updated.tail().unwrap();
    assert_eq!((*tail.value(), tail.index()), (2, 6));
}

// =============================================================================
// at
// =============================================================================

#[rstest]
#[case(0, Some(14))]
#[case(3, Some(99))]
#[case(4, Some(45))]
#[case(5, None)]
#[case(-1, None)]
fn test_at(five: DoublyLinkedList<i32>, #[case] index: i32, #[case] expected: Option<i32>) {
    let found = five.at(index);
    assert_eq!(found.map(|node| *node.value()), expected);
    if let Some(node) = found {
        assert_eq!(i32::try_from(node.index()).unwrap(), index);
    }
}

#[rstest]
fn test_at_on_empty_list() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert!(list.at(0).is_none());
}

#[rstest]
fn test_at_after_deleting_middle_values(five: DoublyLinkedList<i32>) {
    let updated = five.delete([1, 3]).applied().unwrap();
    assert_eq!(updated.at(1).map(|node| *node.value()), Some(10));
    assert_eq!(updated.at(2).map(|node| *node.value()), Some(45));
    assert!(updated.at(3).is_none());
}

// =============================================================================
// find
// =============================================================================

#[rstest]
fn test_find_on_empty_list() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert!(list.find(&1).is_none());
}

#[rstest]
fn test_find_without_duplicates(five: DoublyLinkedList<i32>) {
    let node = five.find(&99).unwrap();
    assert_eq!((*node.value(), node.index()), (99, 3));
    assert!(five.contains(&10));
    assert!(!five.contains(&11));
}

#[rstest]
fn test_find_resolves_first_duplicate() {
    let list = DoublyLinkedList::from_values([5, 25, 19, 6, 25]);
    assert_eq!(list.find(&25).map(|node| node.index()), Some(1));
}

#[rstest]
fn test_find_strings() {
    let list: DoublyLinkedList<String> =
        ["light", "dark", "light"].into_iter().map(String::from).collect();
    assert_eq!(list.find(&"light".to_string()).map(|node| node.index()), Some(0));
    assert_eq!(list.find(&"dark".to_string()).map(|node| node.index()), Some(1));
}

#[rstest]
fn test_tuple_values_support_search_and_remove() {
    let list: DoublyLinkedList<(i32, &str)> = [(1, "a"), (2, "b"), (1, "a")].into_iter().collect();
    assert_eq!(list.find(&(1, "a")).map(|node| node.index()), Some(0));
    assert!(list.contains(&(2, "b")));
    assert!(!list.contains(&(2, "a")));

    let updated = list.remove([(1, "a")]).applied().unwrap();
    assert_eq!(updated.values(), vec![(2, "b"), (1, "a")]);
}

// =============================================================================
// insert / add_head / add_tail
// =============================================================================

#[rstest]
fn test_insert_in_the_middle() {
    let list = DoublyLinkedList::from_values([1, 2, 3]);
    let updated = list.insert(1, [5]).applied().unwrap();
    assert_eq!(updated.values(), vec![1, 5, 2, 3]);
    assert_eq!(updated.size(), 4);
}

#[rstest]
fn test_insert_multiple_values_keeps_their_order() {
    let list = DoublyLinkedList::from_values([1, 4]);
    let updated = list.insert(1, [2, 3]).applied().unwrap();
    assert_eq!(updated.values(), vec![1, 2, 3, 4]);
}

#[rstest]
#[case(-1)]
#[case(4)]
#[case(100)]
fn test_insert_out_of_range_is_rejected(#[case] index: i64) {
    init_tracing();
    let list = DoublyLinkedList::from_values([1, 2, 3]);
    assert_eq!(list.insert(index, [5]), Mutation::Rejected);
}

#[rstest]
fn test_insert_at_size_appends() {
    let list = DoublyLinkedList::from_values([1, 2, 3]);
    let updated = list.insert(3, [4]).applied().unwrap();
    assert_eq!(updated.values(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_add_head_to_empty_list() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    let updated = list.add_head([500]).applied().unwrap();
    assert_eq!(updated.values(), vec![500]);
    assert!(list.is_empty());
}

#[rstest]
fn test_add_head_multiple_values() {
    let list = DoublyLinkedList::from_values([3, 4]);
    let updated = list.add_head([1, 2]).applied().unwrap();
    assert_eq!(updated.values(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_add_tail_to_two_items() {
    let list = DoublyLinkedList::from_values([1, 2]);
    let single = list.add_tail([3]).applied().unwrap();
    let multiple = list.add_tail([3, 4, 5]).applied().unwrap();
    assert_eq!(single.values(), vec![1, 2, 3]);
    assert_eq!(multiple.values(), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.values(), vec![1, 2]);
}

#[rstest]
fn test_add_thousand_values_one_by_one() {
    let mut list: DoublyLinkedList<usize> = DoublyLinkedList::new();
    for value in 0..1_000 {
        list = list.add_tail([value]).applied().unwrap();
    }
    assert_eq!(list.size(), 1_000);
    assert_eq!(list.at(999).map(|node| *node.value()), Some(999));
}

// =============================================================================
// delete
// =============================================================================

#[rstest]
fn test_delete_multiple_indices(five: DoublyLinkedList<i32>) {
    let updated = five.delete([0, 2]).applied().unwrap();
    assert_eq!(updated.values(), vec![67, 99, 45]);
    assert_eq!(updated.size(), 3);
}

#[rstest]
fn test_delete_ignores_missing_index(five: DoublyLinkedList<i32>) {
    let updated = five.delete([1, 10]).applied().unwrap();
    assert_eq!(updated.values(), vec![14, 10, 99, 45]);
}

#[rstest]
fn test_delete_only_invalid_indices_is_rejected(five: DoublyLinkedList<i32>) {
    init_tracing();
    assert!(five.delete([5, 6, -1]).is_rejected());
}

#[rstest]
fn test_delete_from_empty_list_is_rejected() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert_eq!(list.delete([0]).into_parts(), (false, None));
}

#[rstest]
fn test_delete_everything_leaves_empty_list() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    let emptied = list
        .add_head([500])
        .and_then(|list| list.delete([0]))
        .applied()
        .unwrap();
    assert!(emptied.is_empty());
    assert!(emptied.head().is_none());
}

#[rstest]
fn test_add_then_remove_everything() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    let filled = list.add_tail([1, 2, 3]).applied().unwrap();
    assert!(!filled.is_empty());
    let emptied = filled.remove([1, 2, 3]).applied().unwrap();
    assert!(emptied.is_empty());
}

// =============================================================================
// remove
// =============================================================================

#[rstest]
fn test_remove_from_empty_list_is_rejected() {
    let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    assert!(list.remove([1]).is_rejected());
}

#[rstest]
fn test_remove_missing_value_is_rejected() {
    let list = DoublyLinkedList::from_values([1, 2, 3]);
    assert!(list.remove([4]).is_rejected());
}

#[rstest]
fn test_remove_first_duplicate_only() {
    let list = DoublyLinkedList::from_values([11, 55, 55, 62]);
    let updated = list.remove([55]).applied().unwrap();
    assert_eq!(updated.values(), vec![11, 55, 62]);
    assert_eq!(updated.size(), 3);
}

#[rstest]
fn test_remove_multiple_values() {
    let list = DoublyLinkedList::from_values([55, 62, 99]);
    let updated = list.remove([62, 99]).applied().unwrap();
    assert_eq!(updated.values(), vec![55]);
}

#[rstest]
fn test_remove_multiple_values_with_duplicate() {
    let list = DoublyLinkedList::from_values([11, 55, 55, 62]);
    let updated = list.remove([11, 55]).applied().unwrap();
    assert_eq!(updated.values(), vec![55, 62]);
}

#[rstest]
fn test_remove_skips_values_not_present() {
    let list = DoublyLinkedList::from_values([11, 55, 62]);
    let updated = list.remove([11, 42]).applied().unwrap();
    assert_eq!(updated.values(), vec![55, 62]);
}

// =============================================================================
// values / iteration
// =============================================================================

#[rstest]
fn test_values_is_a_snapshot(five: DoublyLinkedList<i32>) {
    let mut snapshot = five.values();
    snapshot[0] = 0;
    assert_eq!(five.head().map(|node| *node.value()), Some(14));
}

#[rstest]
fn test_iterators_agree(five: DoublyLinkedList<i32>) {
    let borrowed: Vec<i32> = five.iter().copied().collect();
    let by_ref: Vec<i32> = (&five).into_iter().copied().collect();
    let owned: Vec<i32> = five.clone().into_iter().collect();
    assert_eq!(borrowed, by_ref);
    assert_eq!(borrowed, owned);
    assert_eq!(five.iter().len(), 5);
}

#[rstest]
fn test_display(five: DoublyLinkedList<i32>) {
    assert_eq!(five.to_string(), "[14, 67, 10, 99, 45]");
}
