use larder_core::{FoodRow, ScanSuggestion};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use uuid::Uuid;

#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "Food")]
    food: String,
    #[tabled(rename = "Expiry date")]
    date: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "Id")]
    id: String,
}

pub fn render_list(rows: &[FoodRow]) {
    if rows.is_empty() {
        println!("No entries to show.");
        return;
    }

    let list_rows: Vec<ListRow> = rows
        .iter()
        .map(|row| ListRow {
            food: row.name.clone(),
            date: row.formatted_date.clone(),
            status: row.status.short.to_string(),
            days: row.status.days_left.to_string(),
            id: short_id(&row.id),
        })
        .collect();

    let mut table = Table::new(list_rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}

#[derive(Tabled)]
struct SuggestionRow {
    #[tabled(rename = "Suggestion")]
    name: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
}

pub fn render_suggestions(suggestions: &[ScanSuggestion]) {
    let rows: Vec<SuggestionRow> = suggestions
        .iter()
        .map(|suggestion| SuggestionRow {
            name: suggestion.name.clone(),
            confidence: format!("{}%", suggestion.confidence_percent()),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}

fn short_id(id: &Uuid) -> String {
    let id = id.to_string();
    if id.len() > 8 {
        id[..8].to_string()
    } else {
        id
    }
}
