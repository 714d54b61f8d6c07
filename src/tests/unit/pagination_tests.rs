//! Paginator Tests

use crate::core::search::{PageError, PageState, PAGE_SIZE};

#[test]
fn total_pages_covers_the_edge_cases() {
    let page = PageState::default();
    assert_eq!(page.total_pages(0), 1);
    assert_eq!(page.total_pages(1), 1);
    assert_eq!(page.total_pages(PAGE_SIZE), 1);
    assert_eq!(page.total_pages(PAGE_SIZE + 1), 2);
    assert_eq!(page.total_pages(1200), 3);
}

#[test]
fn go_to_rejects_out_of_range_pages() {
    let page = PageState::default();
    assert_eq!(
        page.go_to(0, 1200),
        Err(PageError::OutOfRange {
            requested: 0,
            total: 3
        })
    );
    assert_eq!(
        page.go_to(4, 1200),
        Err(PageError::OutOfRange {
            requested: 4,
            total: 3
        })
    );
}

#[test]
fn go_to_accepts_the_bounds() {
    let page = PageState::default();
    assert_eq!(page.go_to(1, 1200).expect("Failed to go").current(), 1);
    assert_eq!(page.go_to(3, 1200).expect("Failed to go").current(), 3);

    // An empty result set still has one valid page.
    assert_eq!(page.go_to(1, 0).expect("Failed to go").current(), 1);
}

#[test]
fn reset_returns_to_page_one() {
    let page = PageState::default().go_to(3, 1200).expect("Failed to go");
    assert_eq!(page.reset().current(), 1);
}

#[test]
fn slices_are_contiguous_and_sized() {
    let items: Vec<usize> = (0..25).collect();
    let page = PageState::new(10);

    let first = page.slice(&items);
    assert_eq!(first, &items[0..10]);

    let second = page.go_to(2, items.len()).expect("Failed to go");
    assert_eq!(second.slice(&items), &items[10..20]);

    let third = page.go_to(3, items.len()).expect("Failed to go");
    assert_eq!(third.slice(&items), &items[20..25]);
}

#[test]
fn last_page_scenario_1200_items() {
    let items: Vec<usize> = (0..1200).collect();
    let page = PageState::default().go_to(3, items.len()).expect("Failed to go");

    let slice = page.slice(&items);
    assert_eq!(slice.len(), 200);
    assert_eq!(slice[0], 1000);
    assert_eq!(page.displayed_range(items.len()), (1001, 1200));
}

#[test]
fn displayed_range_is_empty_for_an_empty_set() {
    assert_eq!(PageState::default().displayed_range(0), (0, 0));
}

#[test]
fn displayed_range_clamps_to_the_count() {
    let page = PageState::new(10);
    assert_eq!(page.displayed_range(7), (1, 7));
    assert_eq!(page.displayed_range(10), (1, 10));

    let second = page.go_to(2, 13).expect("Failed to go");
    assert_eq!(second.displayed_range(13), (11, 13));
}
