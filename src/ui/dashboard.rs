//! Text rendering of a computed [`Dashboard`].

use crate::core::logic::Dashboard;
use crate::models::figures::Bucket;
use crate::models::restriction::{Restriction, RestrictionStatus};
use crate::utils::formatting::{format_currency, format_hours, format_number, progress_bar};
use crate::utils::table::Table;
use ansi_term::Colour;

const BAR_WIDTH: usize = 20;

/// Pill text, exactly as shown next to the progress bar.
pub fn pill_text(r: &Restriction, weekly_hours: f64, limit: f64) -> String {
    match r.status {
        RestrictionStatus::Unrestricted => "Full-time — no restriction".to_string(),
        RestrictionStatus::Ok => format!("OK ({:.2}/{} hrs)", weekly_hours, format_number(limit)),
        RestrictionStatus::Exceeded => {
            format!("Exceeded ({:.2}/{} hrs)", weekly_hours, format_number(limit))
        }
    }
}

fn paint_pill(r: &Restriction, text: &str) -> String {
    let colour = if r.status.is_breach() {
        Colour::Red
    } else {
        Colour::Green
    };
    colour.bold().paint(text).to_string()
}

fn row(label: &str, b: Bucket) -> Vec<String> {
    vec![
        label.to_string(),
        format_hours(b.hours),
        format_currency(b.earnings),
    ]
}

/// Plain (uncoloured) figures table.
pub fn figures_table(dash: &Dashboard, separator: char) -> String {
    let f = &dash.figures;
    let mut t = Table::new(vec!["", "Hours", "Earnings"]).with_separator(separator);
    t.add_row(row("This week", f.this_week));
    t.add_row(row("Previous week", f.previous_week));
    t.add_row(row("This month", f.this_month));
    t.add_row(row("Previous month", f.previous_month));
    t.add_row(row("Total owed", f.total));
    t.add_row(row("Pending pay cut", f.pending_pay_cut));
    t.render()
}

pub fn render(dash: &Dashboard, separator: char) -> String {
    let weekly = dash.figures.this_week.hours;
    let pill = pill_text(&dash.restriction, weekly, dash.weekly_limit);

    let mut out = String::new();
    out.push_str(&format!(
        "As of {} · rate {}/h\n",
        dash.now.format("%Y-%m-%d (%a)"),
        format_currency(dash.rate)
    ));
    if let Some(w) = dash.pay_cut {
        out.push_str(&format!(
            "Pay-cut window: {} → {}\n",
            w.start.format("%Y-%m-%d"),
            w.end.format("%Y-%m-%d")
        ));
    }
    out.push('\n');
    out.push_str(&figures_table(dash, separator));
    out.push('\n');
    out.push_str(&format!(
        "Weekly limit: {} {:>3.0}%  {}\n",
        progress_bar(dash.restriction.ratio, BAR_WIDTH),
        dash.restriction.ratio * 100.0,
        paint_pill(&dash.restriction, &pill)
    ));
    out
}
