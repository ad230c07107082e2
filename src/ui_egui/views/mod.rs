use crate::models::event::Event;

pub mod month_view;
mod palette;

/// Events that fit in a cell plus how many were left out.
pub(crate) fn split_visible(events: &[Event], max_visible: usize) -> (&[Event], usize) {
    let shown = events.len().min(max_visible);
    (&events[..shown], events.len() - shown)
}

/// Height reserved for the "+N more" line.
pub(crate) const MORE_LINE_HEIGHT: f32 = 14.0;

/// How many chips fit in `available` height, and how many of `total` events
/// are left for "+N more". Room for that line is kept whenever anything is left out.
pub(crate) fn fit_chips(
    chip_heights: &[f32],
    spacing: f32,
    available: f32,
    total: usize,
) -> (usize, usize) {
    for drawn in (0..=chip_heights.len()).rev() {
        let hidden = total.saturating_sub(drawn);
        let mut needed: f32 = chip_heights[..drawn].iter().map(|h| h + spacing).sum();
        if hidden > 0 {
            needed += MORE_LINE_HEIGHT;
        }
        if needed <= available {
            return (drawn, hidden);
        }
    }
    (0, total)
}
