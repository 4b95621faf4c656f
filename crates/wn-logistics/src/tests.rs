use wn_core::{HaulerId, ResourceId, SimClock, SimMode, SiteId, Tick};

use crate::{BoardConfig, ClaimBoard, ClaimRequest, LogisticsError, ReservationStatus};

fn clock_at(t: u64) -> SimClock {
    SimClock {
        current_tick: Tick(t),
        paused:       false,
        mode:         SimMode::Record,
    }
}

fn board() -> ClaimBoard {
    ClaimBoard::new(BoardConfig {
        max_claims_per_tick:   8,
        min_batch:             1,
        max_batch:             u32::MAX,
        reservation_ttl_ticks: 10,
    })
}

const DEPOT: SiteId = SiteId(0);
const ORE: ResourceId = ResourceId(0);

mod allocation {
    use super::*;

    #[test]
    fn first_come_first_served_splits_outstanding() {
        // 50 units wanted; a 30-carry hauler requests before a 60-carry one.
        let mut b = board();
        b.post_demand(DEPOT, ORE, 50, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 30));
        b.submit_claim(ClaimRequest::open(HaulerId(2), 60));

        let report = b.tick(&clock_at(1));
        assert_eq!(report.granted, 2);
        assert_eq!(report.rejected, 0);

        // First hauler gets its full carry, second gets what's left.
        assert_eq!(b.active_reservation(HaulerId(1)).map(|r| r.units), Some(30));
        assert_eq!(b.active_reservation(HaulerId(2)).map(|r| r.units), Some(20));

        let d = b.demand(DEPOT, ORE).expect("demand exists");
        assert_eq!(d.reserved, 50);
        assert_eq!(d.outstanding(), 0);
    }

    #[test]
    fn fully_reserved_demand_rejects_further_claims() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 30, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 30));
        b.tick(&clock_at(1));

        b.submit_claim(ClaimRequest::open(HaulerId(2), 30));
        let report = b.tick(&clock_at(2));
        assert_eq!(report.granted, 0);
        assert_eq!(report.rejected, 1);
        assert!(!b.has_active(HaulerId(2)));
    }

    #[test]
    fn one_active_reservation_per_hauler() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 100, 5, Tick::ZERO);
        b.post_demand(SiteId(1), ORE, 100, 5, Tick::ZERO);

        b.submit_claim(ClaimRequest::open(HaulerId(1), 30));
        b.tick(&clock_at(1));
        assert!(b.has_active(HaulerId(1)));

        // Plenty of open demand, but the hauler is already committed.
        b.submit_claim(ClaimRequest::open(HaulerId(1), 30));
        let report = b.tick(&clock_at(2));
        assert_eq!(report.granted, 0);
        assert_eq!(report.rejected, 1);
    }

    #[test]
    fn higher_priority_demand_wins() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 500, 1, Tick::ZERO);
        b.post_demand(SiteId(1), ORE, 10, 9, Tick::ZERO);

        b.submit_claim(ClaimRequest::open(HaulerId(1), 40));
        b.tick(&clock_at(1));

        let r = b.active_reservation(HaulerId(1)).expect("granted");
        assert_eq!(r.site, SiteId(1));
        assert_eq!(r.units, 10);
    }

    #[test]
    fn equal_priority_breaks_on_outstanding_then_site_id() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 20, 5, Tick::ZERO);
        b.post_demand(SiteId(1), ORE, 80, 5, Tick::ZERO);

        b.submit_claim(ClaimRequest::open(HaulerId(1), 100));
        b.tick(&clock_at(1));
        assert_eq!(
            b.active_reservation(HaulerId(1)).map(|r| r.site),
            Some(SiteId(1))
        );

        // Equal outstanding: lower site id wins.
        let mut b = board();
        b.post_demand(DEPOT, ORE, 40, 5, Tick::ZERO);
        b.post_demand(SiteId(1), ORE, 40, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 10));
        b.tick(&clock_at(1));
        assert_eq!(
            b.active_reservation(HaulerId(1)).map(|r| r.site),
            Some(DEPOT)
        );
    }

    #[test]
    fn filters_restrict_matching() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 100, 9, Tick::ZERO);
        b.post_demand(SiteId(1), ResourceId(1), 10, 1, Tick::ZERO);

        let mut req = ClaimRequest::open(HaulerId(1), 50);
        req.resource_filter = Some(ResourceId(1));
        b.submit_claim(req);
        b.tick(&clock_at(1));

        let r = b.active_reservation(HaulerId(1)).expect("granted");
        assert_eq!(r.resource, ResourceId(1));
        assert_eq!(r.site, SiteId(1));
    }

    #[test]
    fn allocation_below_min_batch_is_rejected() {
        let mut b = ClaimBoard::new(BoardConfig {
            min_batch: 25,
            ..BoardConfig::default()
        });
        b.post_demand(DEPOT, ORE, 20, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 100));

        let report = b.tick(&clock_at(1));
        assert_eq!(report.rejected, 1);
        assert_eq!(b.demand(DEPOT, ORE).map(|d| d.reserved), Some(0));
    }

    #[test]
    fn allocation_below_desired_min_is_rejected() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 20, 5, Tick::ZERO);
        let mut req = ClaimRequest::open(HaulerId(1), 100);
        req.desired_min_units = 40;
        b.submit_claim(req);

        assert_eq!(b.tick(&clock_at(1)).rejected, 1);
    }

    #[test]
    fn max_batch_caps_allocation() {
        let mut b = ClaimBoard::new(BoardConfig {
            max_batch: 15,
            ..BoardConfig::default()
        });
        b.post_demand(DEPOT, ORE, 100, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 100));
        b.tick(&clock_at(1));

        assert_eq!(b.active_reservation(HaulerId(1)).map(|r| r.units), Some(15));
    }

    #[test]
    fn quota_bounds_claims_processed_per_tick() {
        let mut b = ClaimBoard::new(BoardConfig {
            max_claims_per_tick: 1,
            ..BoardConfig::default()
        });
        b.post_demand(DEPOT, ORE, 100, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 30));
        b.submit_claim(ClaimRequest::open(HaulerId(2), 30));

        let report = b.tick(&clock_at(1));
        assert_eq!(report.granted, 1);
        assert_eq!(report.rejected, 0);
        assert!(b.has_active(HaulerId(1)));
        assert!(!b.has_active(HaulerId(2)));
    }

    #[test]
    fn claims_are_pulses_cleared_every_tick() {
        let mut b = board();
        // No demand at all: the claim is rejected AND cleared.
        b.submit_claim(ClaimRequest::open(HaulerId(1), 30));
        assert_eq!(b.pending_claims().len(), 1);

        let report = b.tick(&clock_at(1));
        assert_eq!(report.rejected, 1);
        assert!(b.pending_claims().is_empty());

        // Next tick processes nothing unless the hauler re-requests.
        assert_eq!(b.tick(&clock_at(2)).rejected, 0);
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn expiry_releases_units_and_frees_the_hauler() {
        let mut b = board(); // ttl = 10
        b.post_demand(DEPOT, ORE, 50, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 50));
        b.tick(&clock_at(1));
        assert_eq!(b.demand(DEPOT, ORE).map(|d| d.outstanding()), Some(0));

        // Not expired yet at tick 10 (granted at 1, ttl 10 → expiry 11).
        assert_eq!(b.tick(&clock_at(10)).expired, 0);

        let report = b.tick(&clock_at(11));
        assert_eq!(report.expired, 1);
        assert!(!b.has_active(HaulerId(1)));
        assert_eq!(b.demand(DEPOT, ORE).map(|d| d.outstanding()), Some(50));

        let r = b.reservations().next().expect("ledger keeps the entry");
        assert_eq!(r.status, ReservationStatus::Expired);
    }

    #[test]
    fn fulfill_moves_units_from_reserved_to_delivered() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 50, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 50));
        b.tick(&clock_at(1));

        let id = b.active_reservation(HaulerId(1)).map(|r| r.id).expect("granted");
        b.fulfill(id, Tick(4)).expect("active reservation");

        let d = b.demand(DEPOT, ORE).expect("demand exists");
        assert_eq!(d.reserved, 0);
        assert_eq!(d.delivered, 50);
        assert!(d.is_satisfied());
        assert!(!b.has_active(HaulerId(1)));
        assert_eq!(
            b.reservation(id).map(|r| r.status),
            Ok(ReservationStatus::Fulfilled)
        );
    }

    #[test]
    fn cancel_releases_units_for_reclaiming() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 50, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 50));
        b.tick(&clock_at(1));

        let id = b.active_reservation(HaulerId(1)).map(|r| r.id).expect("granted");
        b.cancel(id, Tick(2)).expect("active reservation");
        assert_eq!(b.demand(DEPOT, ORE).map(|d| d.outstanding()), Some(50));

        // Someone else can claim the released units.
        b.submit_claim(ClaimRequest::open(HaulerId(2), 50));
        assert_eq!(b.tick(&clock_at(3)).granted, 1);
    }

    #[test]
    fn terminal_reservations_cannot_be_closed_again() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 50, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 50));
        b.tick(&clock_at(1));

        let id = b.active_reservation(HaulerId(1)).map(|r| r.id).expect("granted");
        b.fulfill(id, Tick(2)).expect("first close works");
        assert_eq!(
            b.cancel(id, Tick(3)),
            Err(LogisticsError::ReservationNotActive(id))
        );
    }

    #[test]
    fn expired_hauler_can_claim_again() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 50, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 50));
        b.tick(&clock_at(1));
        b.tick(&clock_at(11)); // expires

        b.submit_claim(ClaimRequest::open(HaulerId(1), 50));
        assert_eq!(b.tick(&clock_at(12)).granted, 1);
    }
}

mod demand_intake {
    use super::*;

    #[test]
    fn reposting_accumulates_requirement_and_raises_priority() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 30, 2, Tick::ZERO);
        b.post_demand(DEPOT, ORE, 20, 7, Tick(3));

        let d = b.demand(DEPOT, ORE).expect("demand exists");
        assert_eq!(d.required, 50);
        assert_eq!(d.priority, 7);
        assert_eq!(d.last_update_tick, Tick(3));
    }

    #[test]
    fn delivery_against_unknown_demand_is_an_error() {
        let mut b = board();
        assert_eq!(
            b.record_delivery(DEPOT, ORE, 10, Tick(1)),
            Err(LogisticsError::DemandNotFound {
                site:     DEPOT,
                resource: ORE,
            })
        );
    }

    #[test]
    fn direct_delivery_shrinks_outstanding() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 50, 5, Tick::ZERO);
        b.record_delivery(DEPOT, ORE, 45, Tick(1)).expect("posted");
        assert_eq!(b.demand(DEPOT, ORE).map(|d| d.outstanding()), Some(5));

        b.submit_claim(ClaimRequest::open(HaulerId(1), 30));
        b.tick(&clock_at(2));
        assert_eq!(b.active_reservation(HaulerId(1)).map(|r| r.units), Some(5));
    }
}

mod playback {
    use super::*;

    #[test]
    fn playback_tick_is_a_whole_tick_no_op() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 50, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 30));

        let clock = SimClock {
            current_tick: Tick(1),
            paused:       false,
            mode:         SimMode::Playback,
        };
        let report = b.tick(&clock);
        assert_eq!(report, crate::BoardReport::default());
        // Pending claims survive untouched for the replayed tick.
        assert_eq!(b.pending_claims().len(), 1);
        assert!(!b.has_active(HaulerId(1)));
    }

    #[test]
    fn paused_tick_is_a_no_op_too() {
        let mut b = board();
        b.post_demand(DEPOT, ORE, 50, 5, Tick::ZERO);
        b.submit_claim(ClaimRequest::open(HaulerId(1), 30));

        let mut clock = clock_at(1);
        clock.paused = true;
        assert_eq!(b.tick(&clock).granted, 0);
        assert!(!b.has_active(HaulerId(1)));
    }
}
