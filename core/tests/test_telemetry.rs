#[cfg(test)]
mod tests {
    use std::time::Duration;

    use filecut_core::progress::{FileInfo, ProgressEvent, SlicePlan};
    use filecut_core::telemetry::{Stage, StageTimes, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

    #[test]
    fn counters_merge_and_add_assign() {
        let mut a = TelemetryCounters::default();
        a.add_worker();
        a.add_batch(3, 300);

        let mut b = TelemetryCounters::default();
        b.add_worker();
        b.add_batch(2, 150);
        b.add_duplicate();

        let mut merged = a;
        merged.merge(&b);
        assert_eq!(merged.workers_spawned, 2);
        assert_eq!(merged.chunks_sliced, 5);
        assert_eq!(merged.bytes_sliced, 450);
        assert_eq!(merged.duplicate_deliveries, 1);

    }

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Slice, Duration::from_millis(2));
        times.add(Stage::Slice, Duration::from_millis(3));
        times.add(Stage::Plan, Duration::from_micros(10));

        assert_eq!(times.get(Stage::Slice), Duration::from_millis(5));
        assert_eq!(times.get(Stage::Collect), Duration::ZERO);
        assert!(times.has_all(&[Stage::Slice, Stage::Plan]));
        assert!(!times.has_all(&[Stage::Collect]));
        assert!(times.summary().contains("slice=5.000ms"));
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut counters = TelemetryCounters::default();
        counters.chunks_planned = 2;
        counters.add_worker();
        counters.add_batch(2, 2048);

        let mut timer = TelemetryTimer::new();
        timer.add_stage_time(Stage::Slice, Duration::from_millis(1));
        timer.finish();

        let snapshot = TelemetrySnapshot::from(&counters, &timer);
        assert!(snapshot.sanity_check());

        let json = snapshot.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["bytes_sliced"], 2048);
        assert_eq!(value["workers_spawned"], 1);
        assert!(value["stage_times"]["times"].get("Slice").is_some());
    }

    #[test]
    fn progress_events_are_tagged() {
        let start = ProgressEvent::Start {
            file: FileInfo { name: "a.bin".into(), size: 10 },
            plan: SlicePlan { chunk_size: 4, chunk_count: 3, worker_count: 2, active_workers: 2 },
        };
        let json = serde_json::to_value(&start).unwrap();
        assert_eq!(json["type"], "start");
        assert_eq!(json["plan"]["chunk_count"], 3);

        let progress = ProgressEvent::Progress { completed: 1, total: 4 };
        assert_eq!(serde_json::to_value(&progress).unwrap()["type"], "progress");
        assert_eq!(progress.fraction(), 0.25);
    }
}
