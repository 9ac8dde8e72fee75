use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 40;

/// Log colour per operation, white when unknown.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "paid" => Colour::Yellow,
        "term" => Colour::Cyan,
        "settings" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(row: &LogRow) -> String {
    if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max - 3).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    /// One formatted line per row, operation coloured, columns aligned on
    /// the uncoloured text.
    pub fn format_rows(rows: &[LogRow]) -> Vec<String> {
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| op_target(r).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        rows.iter()
            .map(|r| {
                let visible = truncate(&op_target(r), MAX_OP_WIDTH);
                let padding = " ".repeat(op_w.saturating_sub(visible.chars().count()));
                let colour = color_for_operation(&r.operation);

                let painted = match visible.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", colour.paint(op), rest),
                    None => colour.paint(visible.as_str()).to_string(),
                };

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    r.id,
                    r.date,
                    painted,
                    padding,
                    r.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        println!("📜 Internal log:\n");
        for line in Self::format_rows(&rows) {
            println!("{line}");
        }

        Ok(())
    }
}
