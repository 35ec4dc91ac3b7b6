//! Core data models for the touch event viewer.
//! Records, the newest-first event log and the table projection live here;
//! nothing in this module touches the DOM.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::util::format_num;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceTag {
    A,
    B,
    C,
}

impl SourceTag {
    /// Outermost first, matching the nesting of the regions on the page.
    pub const ALL: [SourceTag; 3] = [SourceTag::A, SourceTag::B, SourceTag::C];

    pub fn label(self) -> &'static str {
        match self {
            SourceTag::A => "A",
            SourceTag::B => "B",
            SourceTag::C => "C",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SourceTag::A => "rgb(6, 250, 250)",
            SourceTag::B => "rgb(141, 45, 231)",
            SourceTag::C => "rgb(238, 130, 238)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::TouchStart, EventKind::TouchMove, EventKind::TouchEnd];

    /// DOM event type string, as passed to `addEventListener`.
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
        }
    }

    pub fn from_dom_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.dom_name() == name)
    }
}

/// One active contact, copied out of a native `Touch`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub screen_x: f64,
    pub screen_y: f64,
    pub client_x: f64,
    pub client_y: f64,
    /// Degrees, as reported by the platform.
    pub rotation_angle: f64,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl TouchPoint {
    pub const COLUMNS: [&'static str; 7] = [
        "screenX",
        "screenY",
        "clientX",
        "clientY",
        "rotationAngle",
        "radiusX",
        "radiusY",
    ];

    /// Builds a snapshot from a reader keyed by DOM property name
    /// (`COLUMNS` order). Values are kept as doubles.
    pub fn from_dom_fields(mut read: impl FnMut(&str) -> f64) -> Self {
        let [screen_x, screen_y, client_x, client_y, rotation_angle, radius_x, radius_y] =
            Self::COLUMNS.map(|name| read(name));
        Self {
            screen_x,
            screen_y,
            client_x,
            client_y,
            rotation_angle,
            radius_x,
            radius_y,
        }
    }

    pub fn values(&self) -> [f64; 7] {
        [
            self.screen_x,
            self.screen_y,
            self.client_x,
            self.client_y,
            self.rotation_angle,
            self.radius_x,
            self.radius_y,
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub kind: EventKind,
    /// `None` when the target is outside every registered region.
    pub tag: Option<SourceTag>,
    /// Platform index order, never re-sorted.
    pub touch_points: Vec<TouchPoint>,
    /// Consecutive events folded into this record.
    pub repeat_count: u32,
}

impl EventRecord {
    pub fn new(kind: EventKind, tag: Option<SourceTag>, touch_points: Vec<TouchPoint>) -> Self {
        Self {
            kind,
            tag,
            touch_points,
            repeat_count: 0,
        }
    }

    fn merges_with(&self, other: &EventRecord) -> bool {
        self.kind == other.kind && self.tag == other.tag
    }
}

/// Newest-first log. Adjacent records never share `(kind, tag)`, so only
/// the head can absorb an incoming record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    pub fn insert(&mut self, record: EventRecord) {
        match self.records.first_mut() {
            Some(head) if head.merges_with(&record) => {
                let repeat_count = head.repeat_count.saturating_add(1);
                *head = EventRecord {
                    repeat_count,
                    ..record
                };
            }
            _ => {
                self.records.insert(0, EventRecord {
                    repeat_count: 0,
                    ..record
                });
            }
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn head(&self) -> Option<&EventRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest touch point count over all records.
    pub fn widest(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.touch_points.len())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LogAction {
    Record(EventRecord),
    Clear,
}

impl Reducible for EventLog {
    type Action = LogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            LogAction::Record(record) => new.insert(record),
            LogAction::Clear => {
                if new.is_empty() {
                    return self;
                }
                new.clear();
            }
        }
        Rc::new(new)
    }
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub index: usize,
    pub event_type: &'static str,
    /// Empty when the record was never merged.
    pub count: String,
    /// Background color per indicator cell, in `SourceTag::ALL` order.
    pub indicators: [Option<&'static str>; 3],
    /// One group of seven formatted cells per touch point.
    pub groups: Vec<[String; 7]>,
}

pub fn table_rows(log: &EventLog) -> Vec<TableRow> {
    log.records()
        .iter()
        .enumerate()
        .map(|(index, record)| TableRow {
            index,
            event_type: record.kind.dom_name(),
            count: if record.repeat_count == 0 {
                String::new()
            } else {
                record.repeat_count.to_string()
            },
            indicators: SourceTag::ALL.map(|t| (record.tag == Some(t)).then(|| t.color())),
            groups: record
                .touch_points
                .iter()
                .map(|p| p.values().map(format_num))
                .collect(),
        })
        .collect()
}

/// Column groups the header must span.
pub fn header_groups(log: &EventLog, max_touch_points: u32) -> usize {
    (max_touch_points as usize).max(log.widest())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64) -> TouchPoint {
        TouchPoint {
            screen_x: x,
            screen_y: x + 1.0,
            client_x: x + 2.0,
            client_y: x + 3.0,
            rotation_angle: 0.0,
            radius_x: 11.5,
            radius_y: 11.5,
        }
    }

    fn rec(kind: EventKind, tag: Option<SourceTag>) -> EventRecord {
        EventRecord::new(kind, tag, vec![point(10.0)])
    }

    #[test]
    fn repeated_events_fold_into_one_record() {
        for n in 1..=6u32 {
            let mut log = EventLog::default();
            for _ in 0..n {
                log.insert(rec(EventKind::TouchMove, Some(SourceTag::B)));
            }
            assert_eq!(log.len(), 1);
            assert_eq!(log.head().unwrap().repeat_count, n - 1);
        }
    }

    #[test]
    fn alternating_events_never_merge() {
        let mut log = EventLog::default();
        let seq = [
            (EventKind::TouchStart, Some(SourceTag::A)),
            (EventKind::TouchStart, Some(SourceTag::B)),
            (EventKind::TouchMove, Some(SourceTag::B)),
            (EventKind::TouchEnd, Some(SourceTag::B)),
            (EventKind::TouchEnd, Some(SourceTag::C)),
            (EventKind::TouchEnd, None),
            (EventKind::TouchStart, None),
        ];
        for (kind, tag) in seq {
            log.insert(rec(kind, tag));
        }
        assert_eq!(log.len(), seq.len());
        assert!(log.records().iter().all(|r| r.repeat_count == 0));
        assert_eq!(log.head().unwrap().kind, EventKind::TouchStart);
        assert_eq!(log.head().unwrap().tag, None);
    }

    #[test]
    fn merge_takes_touch_points_from_new_event() {
        let mut log = EventLog::default();
        log.insert(rec(EventKind::TouchStart, Some(SourceTag::C)));
        log.insert(EventRecord::new(
            EventKind::TouchStart,
            Some(SourceTag::C),
            vec![point(50.0), point(70.0)],
        ));
        assert_eq!(log.len(), 1);
        let head = log.head().unwrap();
        assert_eq!(head.kind, EventKind::TouchStart);
        assert_eq!(head.tag, Some(SourceTag::C));
        assert_eq!(head.repeat_count, 1);
        assert_eq!(head.touch_points, vec![point(50.0), point(70.0)]);
    }

    #[test]
    fn start_then_end_on_same_region_keeps_both() {
        let mut log = EventLog::default();
        log.insert(rec(EventKind::TouchStart, Some(SourceTag::A)));
        log.insert(rec(EventKind::TouchEnd, Some(SourceTag::A)));
        let got: Vec<_> = log
            .records()
            .iter()
            .map(|r| (r.kind, r.tag, r.repeat_count))
            .collect();
        assert_eq!(
            got,
            vec![
                (EventKind::TouchEnd, Some(SourceTag::A), 0),
                (EventKind::TouchStart, Some(SourceTag::A), 0),
            ]
        );
    }

    #[test]
    fn incoming_repeat_count_is_ignored() {
        let mut log = EventLog::default();
        let mut r = rec(EventKind::TouchStart, Some(SourceTag::A));
        r.repeat_count = 9;
        log.insert(r.clone());
        assert_eq!(log.head().unwrap().repeat_count, 0);
        log.insert(r);
        assert_eq!(log.head().unwrap().repeat_count, 1);
    }

    #[test]
    fn only_head_is_a_merge_target() {
        let mut log = EventLog::default();
        log.insert(rec(EventKind::TouchStart, Some(SourceTag::A)));
        log.insert(rec(EventKind::TouchMove, Some(SourceTag::A)));
        log.insert(rec(EventKind::TouchStart, Some(SourceTag::A)));
        assert_eq!(log.len(), 3);
        for pair in log.records().windows(2) {
            assert!(!pair[0].merges_with(&pair[1]));
        }
    }

    #[test]
    fn clear_empties_any_log() {
        let mut log = EventLog::default();
        for i in 0..5 {
            let kind = if i % 2 == 0 { EventKind::TouchStart } else { EventKind::TouchEnd };
            log.insert(rec(kind, Some(SourceTag::B)));
        }
        assert_eq!(log.len(), 5);
        log.clear();
        assert!(log.is_empty());
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn reducer_records_and_clears() {
        let log = Rc::new(EventLog::default());
        let log = log.reduce(LogAction::Record(rec(EventKind::TouchStart, Some(SourceTag::C))));
        let log = log.reduce(LogAction::Record(rec(EventKind::TouchStart, Some(SourceTag::C))));
        assert_eq!(log.len(), 1);
        assert_eq!(log.head().unwrap().repeat_count, 1);
        let log = log.reduce(LogAction::Clear);
        assert!(log.is_empty());
    }

    #[test]
    fn clearing_empty_log_keeps_same_state() {
        let log = Rc::new(EventLog::default());
        let cleared = Rc::clone(&log).reduce(LogAction::Clear);
        assert!(Rc::ptr_eq(&log, &cleared));
    }

    #[test]
    fn dom_names_parse_back() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_dom_name(kind.dom_name()), Some(kind));
        }
        assert_eq!(EventKind::from_dom_name("touchcancel"), None);
        assert_eq!(EventKind::from_dom_name("TouchStart"), None);
    }

    #[test]
    fn rows_are_jagged_by_touch_count() {
        let mut log = EventLog::default();
        log.insert(EventRecord::new(EventKind::TouchStart, Some(SourceTag::A), vec![point(1.0)]));
        log.insert(EventRecord::new(
            EventKind::TouchMove,
            Some(SourceTag::A),
            vec![point(1.0), point(2.0), point(3.0)],
        ));
        log.insert(EventRecord::new(EventKind::TouchEnd, Some(SourceTag::A), vec![]));
        let rows = table_rows(&log);
        let widths: Vec<_> = rows.iter().map(|r| r.groups.len()).collect();
        assert_eq!(widths, vec![0, 3, 1]);
        assert_eq!(header_groups(&log, 2), 3);
        assert_eq!(header_groups(&log, 10), 10);
    }

    #[test]
    fn row_cells_follow_record() {
        let mut log = EventLog::default();
        log.insert(rec(EventKind::TouchMove, Some(SourceTag::B)));
        log.insert(rec(EventKind::TouchMove, Some(SourceTag::B)));
        log.insert(rec(EventKind::TouchEnd, None));
        let rows = table_rows(&log);

        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].event_type, "touchend");
        assert_eq!(rows[0].count, "");
        assert_eq!(rows[0].indicators, [None, None, None]);

        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].event_type, "touchmove");
        assert_eq!(rows[1].count, "1");
        assert_eq!(rows[1].indicators, [None, Some("rgb(141, 45, 231)"), None]);
        assert_eq!(
            rows[1].groups[0],
            ["10", "11", "12", "13", "0", "11.5", "11.5"].map(String::from)
        );
    }

    #[test]
    fn dom_fields_keep_fractional_geometry() {
        let p = TouchPoint::from_dom_fields(|name| match name {
            "screenX" => 301.25,
            "screenY" => 402.0,
            "clientX" => 120.5,
            "clientY" => 88.75,
            "rotationAngle" => 12.5,
            "radiusX" => 11.5,
            "radiusY" => 9.25,
            _ => f64::NAN,
        });
        assert_eq!(p.values(), [301.25, 402.0, 120.5, 88.75, 12.5, 11.5, 9.25]);

        let mut log = EventLog::default();
        log.insert(EventRecord::new(EventKind::TouchMove, Some(SourceTag::C), vec![p]));
        assert_eq!(
            table_rows(&log)[0].groups[0],
            ["301.25", "402", "120.5", "88.75", "12.5", "11.5", "9.25"].map(String::from)
        );
    }

    #[test]
    fn record_serializes_as_json() {
        let r = rec(EventKind::TouchStart, Some(SourceTag::A));
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"kind\":\"TouchStart\""));
        assert!(json.contains("\"tag\":\"A\""));
        let back: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
