//! Assertion utilities for widget geometry
//!
//! Messages carry the caller's label so a failure inside a density sweep
//! points at the exact input.

use slidemenu_ui_graphics::IntRect;

/// Assert that `inner` lies fully inside `outer`.
pub fn assert_rect_contains_rect(outer: IntRect, inner: IntRect, msg: &str) {
    assert!(
        outer.contains_rect(&inner),
        "{}: {:?} is not contained in {:?}",
        msg,
        inner,
        outer
    );
}

/// Assert that two rectangles share no pixel.
pub fn assert_rects_disjoint(a: IntRect, b: IntRect, msg: &str) {
    assert!(
        !a.intersects(&b),
        "{}: {:?} overlaps {:?}",
        msg,
        a,
        b
    );
}

/// Assert that a rectangle contains a pixel.
pub fn assert_rect_contains_point(rect: IntRect, x: i32, y: i32, msg: &str) {
    assert!(
        rect.contains(x, y),
        "{}: point ({}, {}) not in rect {:?}",
        msg,
        x,
        y,
        rect
    );
}

/// Assert that exactly one of `rects` contains the pixel.
pub fn assert_point_in_exactly_one(rects: &[IntRect], x: i32, y: i32, msg: &str) {
    let hits = rects.iter().filter(|rect| rect.contains(x, y)).count();
    assert_eq!(
        hits, 1,
        "{}: point ({}, {}) is in {} of {:?}",
        msg, x, y, hits, rects
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_edge_is_claimed_once() {
        let left = IntRect::new(-5, 0, 0, 5);
        let own = IntRect::new(0, 0, 5, 5);
        assert_rects_disjoint(left, own, "adjacent");
        assert_point_in_exactly_one(&[left, own], 0, 2, "edge");
        assert_rect_contains_point(own, 0, 2, "edge");
    }

    #[test]
    #[should_panic(expected = "not contained")]
    fn containment_failure_reports() {
        assert_rect_contains_rect(IntRect::new(0, 0, 5, 5), IntRect::new(0, 0, 6, 5), "wide");
    }
}
