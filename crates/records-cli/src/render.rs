//! Output rendering for sorted records and the style listing.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use records_model::{Person, SortStyle};

use crate::cli::OutputFormatArg;

/// Renders `persons` in the requested format. The result never ends with a
/// newline.
pub fn render_records(persons: &[Person], format: OutputFormatArg) -> Result<String> {
    match format {
        OutputFormatArg::Plain => Ok(render_plain(persons)),
        OutputFormatArg::Table => Ok(render_table(persons).to_string()),
        OutputFormatArg::Json => {
            serde_json::to_string_pretty(persons).context("serialize records as json")
        }
    }
}

fn render_plain(persons: &[Person]) -> String {
    persons
        .iter()
        .map(Person::to_record_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_table(persons: &[Person]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Last Name"),
        header_cell("First Name"),
        header_cell("Gender"),
        header_cell("Favorite Color"),
        header_cell("Date of Birth"),
    ]);
    apply_table_style(&mut table);
    for person in persons {
        table.add_row(vec![
            Cell::new(person.last_name()),
            Cell::new(person.first_name()),
            Cell::new(person.gender()),
            Cell::new(person.favorite_color()),
            Cell::new(person.date_of_birth().format("%m/%d/%Y")),
        ]);
    }
    table
}

/// Table of every sort style with the default marked.
pub fn render_styles() -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Style"),
        header_cell("Order"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    let default = SortStyle::default();
    for style in SortStyle::ALL {
        let marker = if style == default { "yes" } else { "" };
        table.add_row(vec![
            Cell::new(style.name()),
            Cell::new(style.description()),
            Cell::new(marker),
        ]);
    }
    table.to_string()
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
