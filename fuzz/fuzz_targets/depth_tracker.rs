#![no_main]

use html::{Analysis, DepthTracker, TrackerStatus};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let mut tracker = DepthTracker::new();
    let mut frozen = None;

    for line in text.lines() {
        let status = tracker.feed(line);
        assert_eq!(tracker.depth(), tracker.stack().len());
        assert!(tracker.max_depth() >= tracker.deepest_text().map_or(0, |_| 1));

        match (status, &frozen) {
            (TrackerStatus::Malformed, None) => {
                frozen = Some((
                    tracker.max_depth(),
                    tracker.deepest_text().map(str::to_owned),
                    tracker.lines_seen(),
                ));
            }
            (TrackerStatus::Malformed, Some((max_depth, deepest, lines))) => {
                assert_eq!(tracker.max_depth(), *max_depth);
                assert_eq!(tracker.deepest_text(), deepest.as_deref());
                assert_eq!(tracker.lines_seen(), *lines);
            }
            (TrackerStatus::Running, Some(_)) => panic!("malformed state was cleared"),
            (TrackerStatus::Running, None) => {}
        }
    }

    let still_open = !tracker.stack().is_empty();
    let was_malformed = tracker.is_malformed();
    let analysis = tracker.finish();
    if was_malformed || still_open {
        assert!(analysis.is_malformed());
    }
    if let Analysis::Deepest { depth, .. } = analysis {
        assert!(depth > 0);
    }
});
