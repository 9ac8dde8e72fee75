use chrono::NaiveDate;
use rshiftlog::config::Config;
use rshiftlog::core::add::{AddLogic, AddRequest};
use rshiftlog::core::logic::Core;
use rshiftlog::core::settings::{Settings, SettingsLogic, SettingsUpdate, Source};
use rshiftlog::core::term::TermLogic;
use rshiftlog::db::pool::DbPool;
use rshiftlog::db::queries::load_entries;
use rshiftlog::db::terms::load_terms;
use rshiftlog::models::restriction::RestrictionStatus;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn dashboard_at(pool: &mut DbPool, now: NaiveDate) -> rshiftlog::core::logic::Dashboard {
    let settings = Settings::load(pool, &Config::default()).unwrap();
    let entries = load_entries(&pool.conn).unwrap();
    let terms = load_terms(&pool.conn).unwrap();
    Core::build_dashboard(&entries, &terms, &settings, now, None)
}

#[test]
fn stored_entries_feed_the_dashboard() {
    let mut pool = DbPool::in_memory().unwrap();
    AddLogic::seed_demo(&mut pool).unwrap();

    let dash = dashboard_at(&mut pool, d(2025, 8, 10));
    assert_eq!(dash.rate, 10.0);
    assert_eq!(dash.figures.this_week.hours, 18.0);
    assert_eq!(dash.figures.this_week.earnings, 180.0);
    assert_eq!(dash.figures.this_month.hours, 23.0);
    assert_eq!(dash.figures.total.earnings, 230.0);
    assert_eq!(dash.restriction.status, RestrictionStatus::Ok);
    assert!((dash.restriction.ratio - 0.9).abs() < 1e-9);
}

#[test]
fn saved_rate_and_limit_change_the_figures() {
    let mut pool = DbPool::in_memory().unwrap();
    AddLogic::seed_demo(&mut pool).unwrap();

    let update = SettingsUpdate {
        rate: Some(12.0),
        weekly_limit: Some(15.0),
        ..Default::default()
    };
    SettingsLogic::save(&mut pool, &update).unwrap();

    let settings = Settings::load(&mut pool, &Config::default()).unwrap();
    assert_eq!(settings.rate.source, Source::Database);

    let dash = dashboard_at(&mut pool, d(2025, 8, 10));
    assert_eq!(dash.figures.this_week.earnings, 216.0);
    assert_eq!(dash.restriction.status, RestrictionStatus::Exceeded);
    assert_eq!(dash.restriction.ratio, 1.0);
}

#[test]
fn active_term_removes_the_cap() {
    let mut pool = DbPool::in_memory().unwrap();
    let req = AddRequest {
        date: Some(d(2025, 8, 5)),
        hours: Some(40.0),
        ..Default::default()
    };
    AddLogic::apply(&mut pool, &req).unwrap();
    TermLogic::add(&mut pool, d(2025, 8, 1), d(2025, 8, 31)).unwrap();

    let dash = dashboard_at(&mut pool, d(2025, 8, 10));
    assert_eq!(dash.restriction.status, RestrictionStatus::Unrestricted);

    let after = dashboard_at(&mut pool, d(2025, 9, 1));
    assert_eq!(after.figures.previous_month.hours, 40.0);
    assert_eq!(after.restriction.status, RestrictionStatus::Ok);
}
