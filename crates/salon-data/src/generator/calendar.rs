//! Day-by-day series: trailing analytics and the forward schedule.

use chrono::{Datelike, NaiveDate, Weekday};

use super::{draw_u32, shift_days, weekday_name};
use crate::money::scale;
use crate::random::RandomSource;
use crate::records::{DailyAnalytics, ScheduleDay};

/// Number of days covered by the analytics series, ending today.
pub const ANALYTICS_DAYS: u32 = 90;

/// Number of days covered by the schedule, starting today.
pub const SCHEDULE_DAYS: u32 = 30;

/// Bookable slots on an open day.
pub const SLOTS_PER_DAY: u32 = 8;

const MONDAY_CLOSED_PROBABILITY: f64 = 0.3;
const SPECIAL_EVENT_PROBABILITY: f64 = 0.1;

const WEEKDAY_HOURS: (&str, &str) = ("09:00", "18:00");
const SATURDAY_HOURS: (&str, &str) = ("07:00", "17:00");

/// Generates one analytics row per day for the 90 days ending `today`.
///
/// Weekends draw from a busier booking range than weekdays. Completed
/// bookings are 85–95% of the day's bookings; revenue, deposits and tips
/// scale with the booking count. Returning clients never drop below zero.
pub fn generate_analytics<R: RandomSource>(rng: &mut R, today: NaiveDate) -> Vec<DailyAnalytics> {
    (0..ANALYTICS_DAYS)
        .rev()
        .map(|days_ago| {
            let date = shift_days(today, -i64::from(days_ago));
            let bookings = if is_weekend(date) {
                draw_u32(rng, 5, 10)
            } else {
                draw_u32(rng, 2, 6)
            };
            let bookings_f = f64::from(bookings);
            let completion = rng.float_in(0.85, 0.95);

            DailyAnalytics {
                date,
                day_of_week: weekday_name(date).to_owned(),
                total_bookings: bookings,
                completed_bookings: floor_count(bookings_f * completion),
                cancelled_bookings: draw_u32(rng, 0, 2),
                no_shows: draw_u32(rng, 0, 1),
                revenue: scale(bookings_f, rng.float_in(150.0, 300.0)),
                deposits_collected: scale(bookings_f, rng.float_in(45.0, 90.0)),
                tips: scale(bookings_f, rng.float_in(10.0, 40.0)),
                new_clients: draw_u32(rng, 0, 3),
                returning_clients: bookings.saturating_sub(draw_u32(rng, 0, 3)),
                average_rating: (rng.float_in(4.5, 5.0) * 10.0).round_ties_even() / 10.0,
            }
        })
        .collect()
}

/// Generates the opening schedule for the 30 days starting `today`.
///
/// Sundays are always closed and Mondays close 30% of the time. Closed days
/// have no hours and no slots. Saturdays open earlier than other days.
pub fn generate_schedule<R: RandomSource>(rng: &mut R, today: NaiveDate) -> Vec<ScheduleDay> {
    (0..SCHEDULE_DAYS)
        .map(|offset| {
            let date = shift_days(today, i64::from(offset));
            match date.weekday() {
                Weekday::Sun => closed_day(date, "Closed - Sunday"),
                Weekday::Mon if rng.chance(MONDAY_CLOSED_PROBABILITY) => {
                    closed_day(date, "Closed - Monday rest day")
                }
                Weekday::Sat => open_day(rng, date, SATURDAY_HOURS),
                _ => open_day(rng, date, WEEKDAY_HOURS),
            }
        })
        .collect()
}

fn closed_day(date: NaiveDate, note: &str) -> ScheduleDay {
    ScheduleDay {
        date,
        day_of_week: weekday_name(date).to_owned(),
        is_available: false,
        open_time: None,
        close_time: None,
        total_slots: 0,
        booked_slots: 0,
        available_slots: 0,
        is_special_event: false,
        notes: note.to_owned(),
    }
}

fn open_day<R: RandomSource>(rng: &mut R, date: NaiveDate, hours: (&str, &str)) -> ScheduleDay {
    let booked = draw_u32(rng, 2, 7);
    let special = rng.chance(SPECIAL_EVENT_PROBABILITY);
    ScheduleDay {
        date,
        day_of_week: weekday_name(date).to_owned(),
        is_available: true,
        open_time: Some(hours.0.to_owned()),
        close_time: Some(hours.1.to_owned()),
        total_slots: SLOTS_PER_DAY,
        booked_slots: booked,
        available_slots: SLOTS_PER_DAY.saturating_sub(booked),
        is_special_event: special,
        notes: if special {
            "Special event - bridal party block booking".to_owned()
        } else {
            String::new()
        },
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Floors a non-negative fraction of a booking count to a whole count.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "input is a small non-negative booking count; `as` saturates"
)]
fn floor_count(value: f64) -> u32 {
    value.floor() as u32
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::generator::test_fixtures::{rng, today};
    use crate::random::{ScriptedSource, SeededSource};

    #[rstest]
    fn analytics_cover_ninety_days_ending_today(mut rng: SeededSource, today: NaiveDate) {
        let analytics = generate_analytics(&mut rng, today);

        assert_eq!(analytics.len(), 90);
        assert_eq!(analytics.first().map(|d| d.date), Some(shift_days(today, -89)));
        assert_eq!(analytics.last().map(|d| d.date), Some(today));
        for pair in analytics.windows(2) {
            if let [earlier, later] = pair {
                assert!(earlier.date < later.date);
            }
        }
    }

    #[rstest]
    fn weekend_bookings_use_the_busier_range(mut rng: SeededSource, today: NaiveDate) {
        for day in generate_analytics(&mut rng, today) {
            if is_weekend(day.date) {
                assert!((5..=10).contains(&day.total_bookings), "{day:?}");
            } else {
                assert!((2..=6).contains(&day.total_bookings), "{day:?}");
            }
        }
    }

    #[rstest]
    fn analytics_counts_are_consistent(mut rng: SeededSource, today: NaiveDate) {
        for day in generate_analytics(&mut rng, today) {
            assert!(day.completed_bookings <= day.total_bookings);
            assert!(day.returning_clients <= day.total_bookings);
            assert!(day.cancelled_bookings <= 2);
            assert!(day.no_shows <= 1);
            assert!(day.revenue >= 150.0 * f64::from(day.total_bookings) - 0.01);
            assert!((4.5..=5.0).contains(&day.average_rating));
        }
    }

    #[test]
    fn returning_clients_clamp_at_zero() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        let mut rng = ScriptedSource::new([2, 0, 0, 0, 3], [0.0]);

        let analytics = generate_analytics(&mut rng, today);
        let first = analytics.first().expect("first day");

        assert_eq!(first.total_bookings, 2);
        assert_eq!(first.returning_clients, 0);
    }

    #[rstest]
    fn schedule_covers_thirty_days_from_today(mut rng: SeededSource, today: NaiveDate) {
        let schedule = generate_schedule(&mut rng, today);

        assert_eq!(schedule.len(), 30);
        assert_eq!(schedule.first().map(|d| d.date), Some(today));
        assert_eq!(schedule.last().map(|d| d.date), Some(shift_days(today, 29)));
    }

    #[rstest]
    fn schedule_slot_arithmetic_holds(mut rng: SeededSource, today: NaiveDate) {
        for day in generate_schedule(&mut rng, today) {
            if day.is_available {
                assert_eq!(day.total_slots, SLOTS_PER_DAY);
                assert_eq!(day.available_slots, day.total_slots - day.booked_slots);
                assert!((2..=7).contains(&day.booked_slots));
                assert!(day.open_time.is_some() && day.close_time.is_some());
            } else {
                assert_eq!(day.total_slots, 0);
                assert_eq!(day.booked_slots, 0);
                assert_eq!(day.available_slots, 0);
                assert!(day.open_time.is_none() && day.close_time.is_none());
            }
        }
    }

    #[rstest]
    fn sundays_are_always_closed(mut rng: SeededSource, today: NaiveDate) {
        for day in generate_schedule(&mut rng, today) {
            if day.date.weekday() == Weekday::Sun {
                assert!(!day.is_available);
            }
            if matches!(
                day.date.weekday(),
                Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri | Weekday::Sat
            ) {
                assert!(day.is_available);
            }
        }
    }

    #[rstest]
    fn saturday_opens_earlier(mut rng: SeededSource, today: NaiveDate) {
        let schedule = generate_schedule(&mut rng, today);

        let saturday = schedule
            .iter()
            .find(|d| d.date.weekday() == Weekday::Sat)
            .expect("a Saturday within 30 days");
        let friday = schedule
            .iter()
            .find(|d| d.date.weekday() == Weekday::Fri)
            .expect("a Friday within 30 days");
        assert_eq!(saturday.open_time.as_deref(), Some("07:00"));
        assert_eq!(friday.open_time.as_deref(), Some("09:00"));
    }

    #[test]
    fn certain_monday_closure_closes_monday() {
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        let mut rng = ScriptedSource::constant(0, 0.0);

        let schedule = generate_schedule(&mut rng, monday);
        let first = schedule.first().expect("first day");

        assert!(!first.is_available);
        assert_eq!(first.notes, "Closed - Monday rest day");
    }

    #[test]
    fn unlikely_monday_closure_keeps_monday_open() {
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        let mut rng = ScriptedSource::constant(7, 0.95);

        let schedule = generate_schedule(&mut rng, monday);
        let first = schedule.first().expect("first day");

        assert!(first.is_available);
        assert_eq!(first.booked_slots, 7);
        assert_eq!(first.available_slots, 1);
        assert!(!first.is_special_event);
    }
}
