//! Search, filter and pagination behaviour of the table state machine.

use product_dashboard::ui::table::{TableEvent, TableModel};

#[test]
fn test_commit_search_requests_first_page_of_matches() {
    let mut table = TableModel::new(12);
    table.set_total(194);
    table.next_page();

    assert_eq!(table.commit_search("phone"), TableEvent::Search("phone".into()));
    assert_eq!(table.state().page, 1);
    assert_eq!(table.state().search, "phone");
}

#[test]
fn test_filter_clears_search() {
    let mut table = TableModel::new(12);
    table.commit_search("phone");

    assert_eq!(
        table.change_filter("beauty"),
        TableEvent::Filter("beauty".into())
    );
    assert_eq!(table.state().search, "");
    assert_eq!(table.state().filter, "beauty");
    assert_eq!(table.state().page, 1);
}

#[test]
fn test_search_clears_filter() {
    let mut table = TableModel::new(12);
    table.change_filter("beauty");
    table.commit_search("phone");

    assert_eq!(table.state().filter, "");
}

#[test]
fn test_emptying_search_box_reloads_first_page() {
    let mut table = TableModel::new(12);
    assert_eq!(table.edit_search("ph"), None);
    assert_eq!(table.state().search, "ph");

    assert_eq!(
        table.edit_search(""),
        Some(TableEvent::PageChange {
            skip: 0,
            search: String::new(),
            category: String::new(),
        })
    );
    assert_eq!(table.edit_search(""), None);
}

#[test]
fn test_clear_search_keeps_filter() {
    let mut table = TableModel::new(12);
    table.change_filter("beauty");
    table.edit_search("x");

    assert_eq!(
        table.clear_search(),
        TableEvent::PageChange {
            skip: 0,
            search: String::new(),
            category: "beauty".into(),
        }
    );
}

#[test]
fn test_next_page_emits_skip() {
    let mut table = TableModel::new(12);
    table.set_total(100);

    assert_eq!(
        table.next_page(),
        Some(TableEvent::PageChange {
            skip: 12,
            search: String::new(),
            category: String::new(),
        })
    );
    assert_eq!(table.state().page, 2);
}

#[test]
fn test_page_change_carries_search() {
    let mut table = TableModel::new(12);
    table.commit_search("phone");
    table.set_total(30);

    assert_eq!(
        table.next_page(),
        Some(TableEvent::PageChange {
            skip: 12,
            search: "phone".into(),
            category: String::new(),
        })
    );
}

#[test]
fn test_walk_to_last_page() {
    let mut table = TableModel::new(12);
    table.set_total(100);
    assert_eq!(table.page_label(), "Page 1 of 9");
    assert!(!table.pagination().can_prev(table.state().page));

    for _ in 0..8 {
        assert!(table.next_page().is_some());
    }

    assert_eq!(table.page_label(), "Page 9 of 9");
    assert!(!table.pagination().can_next(table.state().page));
    assert_eq!(table.next_page(), None);
    assert_eq!(table.state().page, 9);
}

#[test]
fn test_prev_page_stops_at_one() {
    let mut table = TableModel::new(12);
    table.set_total(100);
    assert_eq!(table.prev_page(), None);

    table.next_page();
    assert_eq!(
        table.prev_page(),
        Some(TableEvent::PageChange {
            skip: 0,
            search: String::new(),
            category: String::new(),
        })
    );
    assert_eq!(table.state().page, 1);
}

#[test]
fn test_empty_result_has_single_page() {
    let mut table = TableModel::new(12);
    table.set_total(0);

    assert_eq!(table.page_label(), "Page 1 of 1");
    assert_eq!(table.next_page(), None);
    assert_eq!(table.prev_page(), None);
}

#[test]
fn test_reset_restores_mount_state() {
    let mut table = TableModel::new(12);
    table.set_total(100);
    table.change_filter("beauty");
    table.next_page();
    table.reset();

    assert_eq!(table.state().page, 1);
    assert_eq!(table.state().filter, "");
    assert_eq!(table.state().search, "");
}
