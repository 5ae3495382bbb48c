use larder_core::{FoodRow, StatusKind, SOON_WINDOW_DAYS};
use unicode_width::UnicodeWidthChar;

const NAME_WIDTH: usize = 18;
const BAR_WIDTH: usize = 40;
const MIN_BAR: usize = 2;

const RESET: &str = "\x1b[0m";

fn bar_color(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Expired => "\x1b[31m",
        // Due-today draws in the soon color, like the original pills.
        StatusKind::Today | StatusKind::Soon => "\x1b[33m",
        StatusKind::Fresh => "\x1b[32m",
    }
}

pub fn render(rows: &[FoodRow]) {
    if rows.is_empty() {
        println!("No foods yet. Add one and the expiry graph appears here.");
        return;
    }

    // Scale against the widest horizon, with a floor of one week so short
    // lists don't render full-width bars.
    let max_abs_days = rows
        .iter()
        .map(|row| row.status.days_left.abs())
        .max()
        .unwrap_or(0)
        .max(SOON_WINDOW_DAYS);

    for row in rows {
        let ratio = row.status.days_left.abs() as f64 / max_abs_days as f64;
        let filled = ((ratio * BAR_WIDTH as f64).round() as usize).clamp(MIN_BAR, BAR_WIDTH);

        println!(
            "{}  {}{}{}{}  {}  {}",
            pad_name(&row.name),
            bar_color(row.status.kind),
            "█".repeat(filled),
            RESET,
            " ".repeat(BAR_WIDTH - filled),
            row.formatted_date,
            row.status.text,
        );
    }
}

/// Truncate/pad to a fixed display width, counting wide characters properly.
fn pad_name(name: &str) -> String {
    let mut out = String::new();
    let mut width = 0usize;
    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > NAME_WIDTH {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str(&" ".repeat(NAME_WIDTH.saturating_sub(width)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_name_fixes_the_display_width() {
        assert_eq!(pad_name("Milk").len(), NAME_WIDTH);
        assert_eq!(pad_name("A very long food name indeed").chars().count(), NAME_WIDTH);
    }
}
