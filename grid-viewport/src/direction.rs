use core::cmp::Ordering;

use crate::{ScrollDirection, ScrollOffset};

/// Classifies the movement from `last` to `current`.
///
/// A vertical change always wins, even if the horizontal offset moved too. An unchanged
/// vertical offset falls through to the horizontal comparison, and an unchanged pair yields
/// [`ScrollDirection::None`].
pub fn scroll_direction(last: ScrollOffset, current: ScrollOffset) -> ScrollDirection {
    match current.scroll_top.cmp(&last.scroll_top) {
        Ordering::Greater => return ScrollDirection::Down,
        Ordering::Less => return ScrollDirection::Up,
        Ordering::Equal => {}
    }
    match current.scroll_left.cmp(&last.scroll_left) {
        Ordering::Greater => ScrollDirection::Right,
        Ordering::Less => ScrollDirection::Left,
        Ordering::Equal => ScrollDirection::None,
    }
}
