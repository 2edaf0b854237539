use chrono::offset::TimeZone;
use chrono::{DateTime, Duration, Utc};
use periods::{check_overlap, period_duration, periods_overlap_range, truncate_period, TimePeriod};

// A shift as a roster might store it; the last one has no end yet.
struct Shift {
    person: &'static str,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
}

impl TimePeriod for Shift {
    type Instant = DateTime<Utc>;

    fn period_start(&self) -> DateTime<Utc> {
        self.start
    }

    fn period_end(&self) -> DateTime<Utc> {
        self.end.unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

fn main() {
    let people = ["Alice", "Bob", "Carol"];
    let mut roster = Vec::new();

    // Set up the roster: three-day shifts, with a day off between
    // each handover, and an open-ended shift at the end.
    let start_of_roster = Utc.with_ymd_and_hms(2019, 1, 7, 0, 0, 0).unwrap();
    let mut shift_start = start_of_roster;
    for _ in 0..3 {
        for person in &people {
            let shift_end = shift_start + Duration::days(3);
            roster.push(Shift {
                person: *person,
                start: shift_start,
                end: Some(shift_end),
            });
            shift_start = shift_end + Duration::days(1);
        }
    }
    roster.push(Shift {
        person: "Dave",
        start: shift_start,
        end: None,
    });

    if let Err(err) = check_overlap(&roster[..]) {
        eprintln!("roster is broken: {}", err);
        return;
    }

    // Who worked in the second week, and for how long?
    let week = start_of_roster + Duration::weeks(1)..start_of_roster + Duration::weeks(2);
    for shift in &roster[periods_overlap_range(&roster, &week)] {
        let (start, end) = truncate_period(shift, &week);
        println!(
            "{} from {} ({} of {})",
            shift.person,
            start,
            end - start,
            period_duration(shift),
        );
    }
}
