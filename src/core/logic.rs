use crate::core::aggregate::aggregate;
use crate::core::calendar::DateWindow;
use crate::core::restriction::evaluate;
use crate::core::settings::Settings;
use crate::models::entry::Entry;
use crate::models::figures::Figures;
use crate::models::restriction::Restriction;
use crate::models::term::Term;
use chrono::NaiveDate;

/// Everything the dashboard shows for one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub now: NaiveDate,
    pub rate: f64,
    pub weekly_limit: f64,
    pub pay_cut: Option<DateWindow>,
    pub figures: Figures,
    pub restriction: Restriction,
}

pub struct Core;

impl Core {
    /// Aggregate, then check the weekly figure against the cap.
    ///
    /// `payday` overrides the persisted anchor when given.
    pub fn build_dashboard(
        entries: &[Entry],
        terms: &[Term],
        settings: &Settings,
        now: NaiveDate,
        payday: Option<NaiveDate>,
    ) -> Dashboard {
        let pay_cut = payday.or(settings.payday).map(DateWindow::pay_cut);
        let figures = aggregate(entries, settings.rate(), now, pay_cut);
        let restriction = evaluate(figures.this_week.hours, settings.weekly_limit(), terms, now);

        Dashboard {
            now,
            rate: settings.rate(),
            weekly_limit: settings.weekly_limit(),
            pay_cut,
            figures,
            restriction,
        }
    }
}
