//! Cross-module scenarios over the public API, including zone-aware
//! behavior against the system zoneinfo database.

use datemath::{CalendarContext, Instant, TimeZone, Unit, WeekNumbering, Weekday};

fn utc() -> CalendarContext {
    CalendarContext::default()
}

fn new_york() -> CalendarContext {
    CalendarContext {
        time_zone: TimeZone::IanaIdentifier("America/New_York".into()),
        ..Default::default()
    }
}

#[test]
fn boundaries_nest_and_agree_with_arithmetic() {
    let ctx = utc();
    let instant = Instant::from_epoch_milliseconds(1_181_411_181_500).unwrap();

    for unit in [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
    ] {
        let start = instant.start_of(unit, &ctx).unwrap();
        let middle = instant.middle_of(unit, &ctx).unwrap();
        let end = instant.end_of(unit, &ctx).unwrap();
        assert!(start <= middle && middle <= end, "{unit:?}");
        assert!(start <= instant && instant <= end.add(Unit::Second, 1, &ctx).unwrap());

        let next_start = instant.start_of_next(unit, &ctx).unwrap();
        assert_eq!(end.add(Unit::Second, 1, &ctx).unwrap(), next_start, "{unit:?}");
        assert_eq!(
            instant.add(unit, 1, &ctx).unwrap().start_of(unit, &ctx).unwrap(),
            next_start,
            "{unit:?}"
        );

        let previous_start = instant.start_of_previous(unit, &ctx).unwrap();
        assert_eq!(
            instant.subtract(unit, 1, &ctx).unwrap().start_of(unit, &ctx).unwrap(),
            previous_start,
            "{unit:?}"
        );
        assert!(previous_start < start && start < next_start, "{unit:?}");
    }

    // A second still has a start, it just truncates subsecond precision.
    let start = instant.start_of(Unit::Second, &ctx).unwrap();
    assert_eq!(start.epoch_milliseconds(), 1_181_411_181_000);
}

#[test]
fn constructed_components_read_back() {
    let ctx = utc();
    let instant = Instant::from_components(2007, 6, 9, 17, 46, 21, &ctx).unwrap();

    assert_eq!(instant.year(&ctx).unwrap(), 2007);
    assert_eq!(instant.month(&ctx).unwrap(), 6);
    assert_eq!(instant.day_of_month(&ctx).unwrap(), 9);
    assert_eq!(instant.hour(&ctx).unwrap(), 17);
    assert_eq!(instant.minute(&ctx).unwrap(), 46);
    assert_eq!(instant.second(&ctx).unwrap(), 21);
    assert_eq!(instant.weekday(&ctx).unwrap(), Weekday::Saturday);
    assert_eq!(instant.day_of_year(&ctx).unwrap(), 160);

    let components = instant.components(&ctx).unwrap();
    assert_eq!(components.week_of_year, 23);
    assert_eq!(components.week_of_month, 2);
}

#[test]
fn week_dates_round_trip_in_every_numbering_system() {
    for (numbering, first_day) in [
        (WeekNumbering::Us, Weekday::Sunday),
        (WeekNumbering::Us, Weekday::Monday),
        (WeekNumbering::Iso, Weekday::Monday),
        (WeekNumbering::Simple, Weekday::Sunday),
    ] {
        let ctx = CalendarContext {
            week_numbering: numbering,
            first_day_of_week: first_day,
            ..Default::default()
        };
        let instant = Instant::from_ymd(2007, 6, 9, &ctx).unwrap();

        let year = instant.year_of_week(&ctx).unwrap();
        let week = instant.week_of_year(&ctx).unwrap();
        let weekday = instant.weekday(&ctx).unwrap();
        let rebuilt = Instant::from_year_week_weekday(year, week, weekday, &ctx).unwrap();
        assert_eq!(rebuilt, instant, "{numbering:?}/{first_day:?}");
    }
}

#[test]
fn iso_week_vectors() {
    let ctx = CalendarContext {
        week_numbering: WeekNumbering::Iso,
        ..Default::default()
    };

    let monday = Instant::from_year_week_weekday(2015, 1, Weekday::Monday, &ctx).unwrap();
    assert_eq!(monday.to_iso_string(&ctx).unwrap(), "2014-12-29T00:00:00Z");

    let last_of_week_one = Instant::from_ymd(2015, 1, 4, &ctx).unwrap();
    assert_eq!(last_of_week_one.week_of_year(&ctx).unwrap(), 1);
    assert_eq!(last_of_week_one.year_of_week(&ctx).unwrap(), 2015);

    let next_monday = Instant::from_ymd(2015, 1, 5, &ctx).unwrap();
    assert_eq!(next_monday.week_of_year(&ctx).unwrap(), 2);
}

#[test]
fn month_and_year_adds_clamp_to_real_days() {
    let ctx = utc();

    let jan = Instant::from_ymd(2015, 1, 31, &ctx).unwrap();
    let feb = jan.add(Unit::Month, 1, &ctx).unwrap();
    assert_eq!(feb.to_iso_string(&ctx).unwrap(), "2015-02-28T00:00:00Z");

    let leap_jan = Instant::from_ymd(2016, 1, 31, &ctx).unwrap();
    let leap_feb = leap_jan.add(Unit::Month, 1, &ctx).unwrap();
    assert_eq!(leap_feb.to_iso_string(&ctx).unwrap(), "2016-02-29T00:00:00Z");

    let leap_day = Instant::from_ymd(2016, 2, 29, &ctx).unwrap();
    let next_year = leap_day.add(Unit::Year, 1, &ctx).unwrap();
    assert_eq!(next_year.to_iso_string(&ctx).unwrap(), "2017-02-28T00:00:00Z");
}

#[test]
fn differences_negate_cleanly_for_every_unit() {
    let ctx = utc();
    let pairs = [
        // A clamp-sensitive calendar pair.
        (
            Instant::from_ymd(2015, 1, 31, &ctx).unwrap(),
            Instant::from_ymd(2015, 2, 28, &ctx).unwrap(),
        ),
        // A plain multi-unit gap.
        (
            Instant::from_components(2007, 6, 9, 17, 46, 21, &ctx).unwrap(),
            Instant::from_components(2010, 2, 1, 3, 5, 7, &ctx).unwrap(),
        ),
    ];

    for (a, b) in pairs {
        for unit in [
            Unit::Year,
            Unit::Month,
            Unit::Week,
            Unit::Day,
            Unit::Hour,
            Unit::Minute,
            Unit::Second,
        ] {
            let since = b.since(&a, unit, &ctx).unwrap();
            assert_eq!(a.until(&b, unit, &ctx).unwrap(), since, "{unit:?}");
            assert_eq!(a.since(&b, unit, &ctx).unwrap(), -since, "{unit:?}");
        }
    }
}

#[test]
fn february_lengths_follow_leap_years() {
    let ctx = utc();
    let leap = Instant::from_ymd(2016, 2, 10, &ctx).unwrap();
    assert_eq!(leap.days_in_month(&ctx).unwrap(), 29);
    let common = Instant::from_ymd(2015, 2, 10, &ctx).unwrap();
    assert_eq!(common.days_in_month(&ctx).unwrap(), 28);
}

#[test]
fn week_membership_follows_the_first_day_setting() {
    let sunday_start = utc();
    let monday_start = CalendarContext {
        first_day_of_week: Weekday::Monday,
        ..Default::default()
    };

    let saturday = Instant::from_ymd(2015, 3, 7, &sunday_start).unwrap();
    let sunday = Instant::from_ymd(2015, 3, 8, &sunday_start).unwrap();

    assert!(!saturday
        .is_within_same(Unit::Week, &sunday, &sunday_start)
        .unwrap());
    assert!(saturday
        .is_within_same(Unit::Week, &sunday, &monday_start)
        .unwrap());
}

#[test]
fn spring_forward_day_runs_short() {
    let ctx = new_york();
    let noon = Instant::from_components(2017, 3, 12, 12, 0, 0, &ctx).unwrap();

    let hours = noon.hours_in_day(&ctx).unwrap();
    assert_eq!(hours.len(), 23);
    assert_eq!(hours[0], noon.start_of(Unit::Day, &ctx).unwrap());

    // The skipped hour is real elapsed time, not wall arithmetic.
    assert_eq!(noon.seconds_into_day(&ctx).unwrap(), 11 * 3600);

    let start = noon.start_of(Unit::Day, &ctx).unwrap();
    let next_start = start.start_of_next(Unit::Day, &ctx).unwrap();
    assert_eq!(start.add(Unit::Day, 1, &ctx).unwrap(), next_start);
    assert_eq!(next_start.as_i128() - start.as_i128(), 23 * 3_600_000_000_000);
}

#[test]
fn fall_back_day_runs_long() {
    let ctx = new_york();
    let noon = Instant::from_components(2017, 11, 5, 12, 0, 0, &ctx).unwrap();

    assert_eq!(noon.hours_in_day(&ctx).unwrap().len(), 25);

    let before = Instant::from_components(2017, 11, 4, 10, 0, 0, &ctx).unwrap();
    let after = before.add(Unit::Day, 1, &ctx).unwrap();
    assert_eq!(after.hour(&ctx).unwrap(), 10);
    assert_eq!(after.as_i128() - before.as_i128(), 25 * 3_600_000_000_000);
}

#[test]
fn ambiguous_and_skipped_readings_resolve_deterministically() {
    let ctx = new_york();
    let utc = utc();

    // The repeated 01:30 resolves to the earlier instant, still on daylight
    // time.
    let repeated = Instant::from_components(2017, 11, 5, 1, 30, 0, &ctx).unwrap();
    assert_eq!(repeated.to_iso_string(&utc).unwrap(), "2017-11-05T05:30:00Z");

    // The skipped 02:30 projects forward through the gap.
    let skipped = Instant::from_components(2017, 3, 12, 2, 30, 0, &ctx).unwrap();
    assert_eq!(skipped.to_iso_string(&utc).unwrap(), "2017-03-12T07:30:00Z");
    assert_eq!(skipped.hour(&ctx).unwrap(), 3);
}

#[test]
fn zone_conversions_preserve_the_reading() {
    let ctx = utc();
    let instant = Instant::from_iso_str("2007-06-09T17:46:21Z").unwrap();

    assert_eq!(
        instant.to_iso_string(&new_york()).unwrap(),
        "2007-06-09T13:46:21-04:00"
    );

    let shifted = instant
        .in_time_zone(&TimeZone::IanaIdentifier("America/New_York".into()), &ctx)
        .unwrap();
    assert_eq!(shifted.to_iso_string(&ctx).unwrap(), "2007-06-09T13:46:21Z");
}

#[test]
fn shared_context_swaps_and_resets() {
    CalendarContext::configure_first_day_of_week(Weekday::Monday);
    CalendarContext::configure_week_numbering(WeekNumbering::Iso);
    let shared = CalendarContext::shared();
    assert_eq!(shared.first_day_of_week, Weekday::Monday);
    assert_eq!(shared.week_numbering, WeekNumbering::Iso);

    CalendarContext::reset();
    let shared = CalendarContext::shared();
    assert_eq!(shared.first_day_of_week, Weekday::Sunday);
    assert_eq!(shared.week_numbering, WeekNumbering::Us);
}
