//! Time-of-day windows.

/// A local-time hour range. `end_hour > 24` spans midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub label: &'static str,
    pub start_hour: f64,
    pub end_hour: f64,
}

pub const WINDOWS: [TimeWindow; 6] = [
    TimeWindow {
        label: "earlyMorning",
        start_hour: 4.0,
        end_hour: 6.99,
    },
    TimeWindow {
        label: "morning",
        start_hour: 7.0,
        end_hour: 10.99,
    },
    TimeWindow {
        label: "midday",
        start_hour: 11.0,
        end_hour: 13.99,
    },
    TimeWindow {
        label: "afternoon",
        start_hour: 14.0,
        end_hour: 16.99,
    },
    TimeWindow {
        label: "evening",
        start_hour: 17.0,
        end_hour: 19.99,
    },
    TimeWindow {
        label: "night",
        start_hour: 20.0,
        end_hour: 27.99,
    },
];

const MORNING: usize = 1;

/// Window for a label, ASCII case-insensitive. Unknown labels get `morning`.
pub fn resolve_window(label: &str) -> &'static TimeWindow {
    let label = label.trim();
    WINDOWS
        .iter()
        .find(|w| w.label.eq_ignore_ascii_case(label))
        .unwrap_or(&WINDOWS[MORNING])
}

impl TimeWindow {
    pub fn wraps_midnight(&self) -> bool {
        self.end_hour > 24.0
    }

    /// Whole local hours to sample, in label order.
    ///
    /// A window spanning midnight yields `[start..=23]` then
    /// `[0..=trunc(end - 24)]`. Every hour is taken on the requested date;
    /// the wrapped hours are not moved to the following day.
    pub fn hours(&self) -> Vec<u32> {
        let start = self.start_hour.trunc() as u32;
        if self.wraps_midnight() {
            let last = (self.end_hour - 24.0).trunc() as u32;
            (start..24).chain(0..=last).collect()
        } else {
            (start..=self.end_hour.trunc() as u32).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_hours_wrap() {
        let night = resolve_window("night");
        assert_eq!(night.hours(), [20, 21, 22, 23, 0, 1, 2, 3]);
        assert!(night.hours().iter().all(|h| !(4..=19).contains(h)));
        assert!(night.wraps_midnight());
        assert!(!resolve_window("evening").wraps_midnight());
    }

    #[test]
    fn plain_windows() {
        assert_eq!(resolve_window("earlyMorning").hours(), [4, 5, 6]);
        assert_eq!(resolve_window("morning").hours(), [7, 8, 9, 10]);
        assert_eq!(resolve_window("midday").hours(), [11, 12, 13]);
        assert_eq!(resolve_window("afternoon").hours(), [14, 15, 16]);
        assert_eq!(resolve_window("evening").hours(), [17, 18, 19]);
    }

    #[test]
    fn unknown_label_is_morning() {
        let w = resolve_window("dusk");
        assert_eq!((w.start_hour, w.end_hour), (7.0, 10.99));
        assert_eq!(resolve_window("").label, "morning");
    }

    #[test]
    fn labels_ignore_case() {
        assert_eq!(resolve_window("earlymorning").label, "earlyMorning");
        assert_eq!(resolve_window("NIGHT").label, "night");
        assert_eq!(resolve_window(" Evening ").label, "evening");
    }
}
