//! Integration tests for wn-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{BookingSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(booking_id: u32, tick: u64) -> BookingSnapshotRow {
        BookingSnapshotRow {
            booking_id,
            tick,
            state:       "queued",
            origin:      booking_id * 10,
            destination: booking_id * 10 + 1,
            in_transit:  false,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            planned:              tick,
            departures:           2,
            arrived:              1,
            failed:               0,
            reservations_granted: 0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("booking_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("booking_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["booking_id", "tick", "state", "origin", "destination", "in_transit"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["tick", "planned", "departures", "arrived", "failed", "reservations_granted"]
        );
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("booking_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // booking_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[0][2], "queued");
        assert_eq!(&read_rows[1][0], "1");
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3"); // tick
        assert_eq!(&read_rows[0][1], "3"); // planned
        assert_eq!(&read_rows[0][2], "2"); // departures
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use wn_core::{
            FactionId, Payload, PayloadCapacity, PlatformId, SimConfig, TravelerId, WaypointId,
        };
        use wn_network::{ScheduleMode, WaypointGraphBuilder};
        use wn_routing::ShortestPathPlanner;
        use wn_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let config = SimConfig {
            total_ticks:             6,
            snapshot_interval_ticks: 2,
        };

        let mut b = WaypointGraphBuilder::new();
        let cap = PayloadCapacity::new(100, 100);
        let w0 = b.add_waypoint(PlatformId(1), FactionId(0), cap, true);
        let w1 = b.add_waypoint(PlatformId(2), FactionId(0), cap, true);
        let w2 = b.add_waypoint(PlatformId(3), FactionId(0), cap, true);
        b.add_lane(w0, w1, 1, ScheduleMode::Interval { every_ticks: 1 });
        b.add_lane(w1, w2, 1, ScheduleMode::Interval { every_ticks: 1 });

        let mut sim = SimBuilder::new(config, b.build(), ShortestPathPlanner)
            .build()
            .unwrap();
        for i in 0..3 {
            sim.request_haul(
                TravelerId(i),
                FactionId(0),
                WaypointId(0),
                WaypointId(2),
                Payload::new(10, 10),
            );
        }

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // snapshot_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 3 bookings).
        let mut rdr = csv::Reader::from_path(dir.path().join("booking_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(
            rows.len(),
            9,
            "expected 3 ticks x 3 bookings = 9 snapshot rows, got {}",
            rows.len()
        );

        // One summary row per tick.
        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr2.records().count(), 6);
    }
}
