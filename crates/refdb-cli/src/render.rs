//! Report rendering.
//!
//! Text output lists every failing file followed by its errors, one per line
//! with the line number padded to a fixed column:
//!
//! ```text
//!
//! database/channels.csv
//!  3      Entry with the id "bbc.uk" already exists
//!
//! 1 error(s)
//! ```
//!
//! Clean files print nothing.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use refdb_model::{DatasetReport, ValidationReport};
use refdb_schema::{Constraint, Schema, SchemaRegistry};

/// Width the line number is padded to in text output.
const LINE_COLUMN_WIDTH: usize = 6;

/// Render the per-file error listing followed by the error total.
pub fn render_text(report: &ValidationReport) -> String {
    let mut out = String::new();
    for dataset in report.datasets.iter().filter(|d| d.has_errors()) {
        out.push('\n');
        out.push_str(&dataset.path.display().to_string());
        out.push('\n');
        for error in &dataset.errors {
            out.push_str(&format!(
                " {:<width$} {}\n",
                error.line,
                error.message,
                width = LINE_COLUMN_WIDTH
            ));
        }
    }
    let total = report.error_count();
    if total > 0 {
        out.push_str(&format!("\n{total} error(s)\n"));
    }
    out
}

/// Render the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &ValidationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Summary table (one row per dataset) followed by an error table when needed.
pub fn render_tables(report: &ValidationReport) -> String {
    let mut summary = Table::new();
    summary.set_header(vec![
        header_cell("Dataset"),
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Errors"),
    ]);
    apply_table_style(&mut summary);
    align_column(&mut summary, 2, CellAlignment::Right);
    align_column(&mut summary, 3, CellAlignment::Right);

    let mut total_rows = 0usize;
    for dataset in &report.datasets {
        total_rows += dataset.rows;
        summary.add_row(vec![
            Cell::new(&dataset.dataset)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(dataset.path.display()),
            Cell::new(dataset.rows),
            count_cell(dataset.error_count()),
        ]);
    }
    summary.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        count_cell(report.error_count()).add_attribute(Attribute::Bold),
    ]);

    let mut out = summary.to_string();
    if let Some(errors) = error_table(&report.datasets) {
        out.push_str("\n\nErrors:\n");
        out.push_str(&errors.to_string());
    }
    out.push('\n');
    out
}

/// Table of registered datasets, their fields, and the rules on each.
pub fn render_schemas(registry: &SchemaRegistry) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Field"),
        header_cell("Required"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for schema in registry.iter() {
        add_schema_rows(&mut table, schema);
    }
    table.to_string()
}

fn add_schema_rows(table: &mut Table, schema: &Schema) {
    let unique_field = schema.unique_key().map(|key| key.field.as_str());
    for (idx, spec) in schema.fields().iter().enumerate() {
        let dataset = if idx == 0 {
            Cell::new(schema.dataset())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };
        let mut rules: Vec<String> = spec.rule.constraints.iter().map(describe).collect();
        if spec.rule.is_list() {
            rules.insert(0, "list".to_string());
        }
        if unique_field == Some(spec.name.as_str()) {
            rules.push("unique".to_string());
        }
        let required = if spec.rule.is_required() {
            Cell::new("yes").fg(Color::Green)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![
            dataset,
            Cell::new(&spec.name),
            required,
            Cell::new(rules.join(", ")),
        ]);
    }
}

fn describe(constraint: &Constraint) -> String {
    match constraint {
        Constraint::Type(kind) => kind.name().to_string(),
        Constraint::Pattern(pattern) => format!("/{}/", pattern.as_str()),
        Constraint::OneOf(set) => format!("one of [{}]", set.members().join(", ")),
        Constraint::Custom(check) => check.name.to_string(),
    }
}

fn error_table(datasets: &[DatasetReport]) -> Option<Table> {
    if datasets.iter().all(|dataset| !dataset.has_errors()) {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Line"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for dataset in datasets {
        for error in &dataset.errors {
            table.add_row(vec![
                Cell::new(&dataset.dataset).fg(Color::Blue),
                dim_cell(error.line),
                Cell::new(&error.message),
            ]);
        }
    }
    Some(table)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
