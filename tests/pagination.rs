//! Page clamping across list mutations, mirroring what the panels do after a
//! removal shrinks the underlying list.

use quartermaster_bot::ui::panel::{clamp_page, page_count, page_slice};

#[test]
fn clamp_follows_a_shrinking_list() {
    // 21 items at 10/page puts the last page at index 2.
    let mut items: Vec<u32> = (0..21).collect();
    let mut page = 2;
    assert_eq!(page_slice(&items, page, 10), &[20]);

    // Removing the only item on the last page must pull the view back.
    items.pop();
    page = clamp_page(page, items.len(), 10);
    assert_eq!(page, 1);
    assert_eq!(page_slice(&items, page, 10).len(), 10);
}

#[test]
fn empty_lists_render_page_zero() {
    assert_eq!(clamp_page(7, 0, 10), 0);
    assert_eq!(page_count(0, 10), 0);
    assert_eq!(page_slice(&[] as &[u32], 0, 10), &[] as &[u32]);
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(1, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
}
