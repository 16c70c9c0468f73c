use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use cards_model::Vocabulary;

use crate::pipeline::ConvertResult;

/// One-line run summary, including the number of cards written.
pub fn success_message(result: &ConvertResult) -> String {
    let name = result
        .output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| result.output.display().to_string());
    if result.written {
        format!(
            "Successfully updated {name}. Wrote {} cards to {name}",
            result.cards
        )
    } else {
        format!("Dry run: {} cards ready for {name}, nothing written", result.cards)
    }
}

pub fn print_summary(result: &ConvertResult) {
    println!("{}", success_message(result));
}

/// Both normalization maps as one table.
pub fn vocab_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Shorthand"),
        header_cell("Display term"),
    ]);
    apply_table_style(&mut table);
    for vocabulary in Vocabulary::ALL {
        for (shorthand, display) in vocabulary.entries() {
            table.add_row(vec![
                Cell::new(vocabulary.name()).fg(Color::Green),
                Cell::new(shorthand),
                Cell::new(display),
            ]);
        }
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
