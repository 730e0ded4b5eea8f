/// Hover state machine for the spectrum viewer
///
/// Hover is modeled as an explicit finite state enum with a reducer so
/// transitions are testable without a UI. Each spectrum view owns one
/// `HoverState`; sibling views never share hover state.

use crate::data::spectrum::{Peak, Region};

/// What the pointer is currently over. At most one target at a time;
/// there is no terminal state — the view is continuously live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    /// Index into the displayed peak list
    Peak(usize),
    /// Index into the region list
    Region(usize),
}

/// Pointer events the reducer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    EnterPeak(usize),
    EnterRegion(usize),
    Leave,
}

impl HoverState {
    /// Apply one event. Entering peak B while peak A is hovered lands on
    /// B directly — no intervening leave is required, and the two are
    /// never active together.
    pub fn apply(self, event: HoverEvent) -> HoverState {
        match event {
            HoverEvent::EnterPeak(i) => HoverState::Peak(i),
            HoverEvent::EnterRegion(i) => HoverState::Region(i),
            HoverEvent::Leave => HoverState::Idle,
        }
    }

    pub fn hovered_peak(self) -> Option<usize> {
        match self {
            HoverState::Peak(i) => Some(i),
            _ => None,
        }
    }
}

/// Translate a pointer position in plot coordinates into a hover event.
///
/// A peak wins when the pointer is within `x_tolerance` of its stem and
/// below its apex; otherwise the first region containing x wins; otherwise
/// the pointer is over empty canvas and the state returns to idle.
pub fn hit_test(
    peaks: &[Peak],
    regions: &[Region],
    x: f64,
    y: f64,
    x_tolerance: f64,
) -> HoverEvent {
    let mut best: Option<(usize, f64)> = None;
    for (i, peak) in peaks.iter().enumerate() {
        let dist = (peak.position - x).abs();
        if dist <= x_tolerance && y >= 0.0 && y <= peak.intensity + 2.0 {
            match best {
                Some((_, d)) if d <= dist => {}
                _ => best = Some((i, dist)),
            }
        }
    }
    if let Some((i, _)) = best {
        return HoverEvent::EnterPeak(i);
    }
    if let Some((i, _)) = regions.iter().enumerate().find(|(_, r)| r.contains(x)) {
        return HoverEvent::EnterRegion(i);
    }
    HoverEvent::Leave
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::spectrum::{Peak, Region};

    #[test]
    fn test_hover_exclusivity() {
        // Hovering peak B after peak A, with no leave in between,
        // leaves exactly B active.
        let s = HoverState::Idle
            .apply(HoverEvent::EnterPeak(0))
            .apply(HoverEvent::EnterPeak(1));
        assert_eq!(s, HoverState::Peak(1));
        assert_eq!(s.hovered_peak(), Some(1));
    }

    #[test]
    fn test_leave_returns_to_idle() {
        let s = HoverState::Idle
            .apply(HoverEvent::EnterRegion(2))
            .apply(HoverEvent::Leave);
        assert_eq!(s, HoverState::Idle);
        assert_eq!(s.hovered_peak(), None);
    }

    #[test]
    fn test_peak_replaces_region() {
        let s = HoverState::Region(0).apply(HoverEvent::EnterPeak(3));
        assert_eq!(s, HoverState::Peak(3));
    }

    #[test]
    fn test_hit_test_prefers_nearest_peak() {
        let peaks = vec![Peak::new(29.0, 100.0), Peak::new(31.0, 80.0)];
        let ev = hit_test(&peaks, &[], 30.2, 50.0, 1.5);
        assert_eq!(ev, HoverEvent::EnterPeak(1), "31 is nearer to 30.2 than 29");
    }

    #[test]
    fn test_hit_test_region_when_no_peak_near() {
        let peaks = vec![Peak::new(29.0, 100.0)];
        let regions = vec![Region::new(20.0, 40.0, "test", 0)];
        let ev = hit_test(&peaks, &regions, 35.0, 10.0, 1.0);
        assert_eq!(ev, HoverEvent::EnterRegion(0));
    }

    #[test]
    fn test_hit_test_above_apex_misses_peak() {
        // Pointer horizontally aligned but far above the stem apex
        let peaks = vec![Peak::new(29.0, 20.0)];
        let ev = hit_test(&peaks, &[], 29.0, 80.0, 1.0);
        assert_eq!(ev, HoverEvent::Leave);
    }

    #[test]
    fn test_hit_test_empty_canvas_is_leave() {
        let ev = hit_test(&[], &[], 10.0, 10.0, 1.0);
        assert_eq!(ev, HoverEvent::Leave);
    }
}
