use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use senti_ingest::ColumnHint;
use senti_model::{Category, CategoryBreakdown, DataTable, ThresholdPolicy};

use crate::types::{AnalyzeRunResult, FileSummary, ScoredText};

pub fn print_analyze_summary(result: &AnalyzeRunResult) {
    for path in &result.report_paths {
        println!("Report: {}", path.display());
    }

    if !result.files.is_empty() {
        print_file_table(&result.files);
        print_category_table(&result.files);
        print_star_table(&result.files);
        print_skipped_record_table(&result.files);
    }

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_file_table(files: &[FileSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Encoding"),
        header_cell("Rows"),
        header_cell("Scored"),
        header_cell("Missing"),
        header_cell("Malformed"),
        header_cell("Positive"),
        header_cell("Neutral"),
        header_cell("Negative"),
        header_cell("Mean"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..10 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_rows = 0usize;
    let mut total_scored = 0usize;
    let mut total_missing = 0usize;
    let mut total_malformed = 0usize;
    let mut weighted_mean = 0.0f64;
    let mut counts = [0usize; 3];

    for file in files {
        total_rows += file.total_rows;
        total_scored += file.scored;
        total_missing += file.skipped_missing;
        total_malformed += file.skipped_malformed;
        if let Some(stats) = &file.stats {
            weighted_mean += stats.mean * stats.count as f64;
        }
        for (slot, category) in Category::ALL.iter().enumerate() {
            counts[slot] += file.breakdown.count(*category);
        }

        table.add_row(vec![
            Cell::new(&file.source),
            dim_cell(file.encoding),
            Cell::new(file.total_rows),
            Cell::new(file.scored),
            count_cell(file.skipped_missing, Color::Yellow),
            count_cell(file.skipped_malformed, Color::Red),
            category_count_cell(Category::Positive, file.breakdown.count(Category::Positive)),
            category_count_cell(Category::Neutral, file.breakdown.count(Category::Neutral)),
            category_count_cell(Category::Negative, file.breakdown.count(Category::Negative)),
            mean_cell(file.stats.as_ref().map(|stats| stats.mean)),
        ]);
    }

    let overall_mean = if total_scored > 0 {
        Some(weighted_mean / total_scored as f64)
    } else {
        None
    };
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(total_scored).add_attribute(Attribute::Bold),
        count_cell(total_missing, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_malformed, Color::Red).add_attribute(Attribute::Bold),
        category_count_cell(Category::Positive, counts[0]).add_attribute(Attribute::Bold),
        category_count_cell(Category::Neutral, counts[1]).add_attribute(Attribute::Bold),
        category_count_cell(Category::Negative, counts[2]).add_attribute(Attribute::Bold),
        mean_cell(overall_mean).add_attribute(Attribute::Bold),
    ]);

    println!("{table}");
}

/// Combined category counts across files, with Pareto cumulative overlay.
fn print_category_table(files: &[FileSummary]) {
    let mut combined = CategoryBreakdown::default();
    let total: usize = files.iter().map(|file| file.breakdown.total).sum();
    if total == 0 {
        return;
    }
    for category in Category::ALL {
        let count: usize = files.iter().map(|file| file.breakdown.count(category)).sum();
        if count > 0 {
            combined.insert(category, count, total);
        }
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sentiment"),
        header_cell("Count"),
        header_cell("Percent"),
        header_cell("Cumulative"),
    ]);
    apply_detail_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for entry in combined.pareto() {
        table.add_row(vec![
            category_cell(entry.category),
            Cell::new(entry.count),
            Cell::new(format!("{:.1}%", entry.percent)),
            Cell::new(format!("{:.1}%", entry.cumulative_percent)),
        ]);
    }

    println!();
    println!("Sentiment distribution:");
    println!("{table}");
}

fn print_star_table(files: &[FileSummary]) {
    let mut counts = [0usize; 5];
    for file in files {
        for (rating, count) in file.stars.iter() {
            counts[usize::from(rating.as_u8() - 1)] += count;
        }
    }
    let total: usize = counts.iter().sum();
    if total == 0 {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stars"),
        header_cell("Count"),
        header_cell("Percent"),
    ]);
    apply_detail_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    for (slot, count) in counts.iter().enumerate() {
        let percent = *count as f64 / total as f64 * 100.0;
        table.add_row(vec![
            Cell::new("*".repeat(slot + 1)),
            Cell::new(*count),
            Cell::new(format!("{percent:.1}%")),
        ]);
    }

    println!();
    println!("Star ratings:");
    println!("{table}");
}

fn print_skipped_record_table(files: &[FileSummary]) {
    let mut rows = Vec::new();
    for file in files {
        for error in &file.row_errors {
            rows.push((file.source.as_str(), error.record, error.message.as_str()));
        }
    }
    if rows.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Record"),
        header_cell("Error"),
    ]);
    apply_detail_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for (source, record, message) in rows {
        table.add_row(vec![
            Cell::new(source),
            Cell::new(record),
            Cell::new(message),
        ]);
    }

    println!();
    println!("Skipped records:");
    println!("{table}");
}

pub fn print_columns_table(
    table_data: &DataTable,
    hints: &std::collections::BTreeMap<String, ColumnHint>,
    suggested: &[String],
) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Unique"),
        header_cell("Mean len"),
        header_cell("Text?"),
    ]);
    apply_detail_table_style(&mut table);
    for index in 2..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 5, CellAlignment::Center);

    for header in &table_data.headers {
        let Some(hint) = hints.get(header.as_str()) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(header),
            dim_cell(if hint.is_numeric { "numeric" } else { "text" }),
            Cell::new(format!("{:.0}%", hint.null_ratio * 100.0)),
            Cell::new(format!("{:.0}%", hint.unique_ratio * 100.0)),
            Cell::new(format!("{:.1}", hint.mean_length)),
            if hint.is_text_like() {
                Cell::new("yes")
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold)
            } else {
                dim_cell("-")
            },
        ]);
    }

    println!("{table}");
    if suggested.is_empty() {
        println!("No text-like columns detected.");
    } else {
        println!("Suggested columns for analysis: {}", suggested.join(", "));
    }
}

pub fn print_distribution_table(column: &str, counts: &[senti_core::ValueCount]) {
    if counts.is_empty() {
        println!("Column {column:?} has no non-missing values.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell(column),
        header_cell("Count"),
        header_cell("Percent"),
    ]);
    apply_detail_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    for entry in counts {
        table.add_row(vec![
            Cell::new(&entry.value),
            Cell::new(entry.count),
            Cell::new(format!("{:.1}%", entry.percent)),
        ]);
    }

    println!("{table}");
}

pub fn print_preview_table(table_data: &DataTable, rows: usize) {
    let mut table = Table::new();
    table.set_header(
        table_data
            .headers
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_detail_table_style(&mut table);

    for row in table_data.rows.iter().take(rows) {
        table.add_row(
            row.cells
                .iter()
                .map(|cell| match cell.as_text() {
                    Some(text) => Cell::new(text),
                    None => dim_cell("-"),
                })
                .collect::<Vec<_>>(),
        );
    }

    println!("{table}");
    println!(
        "Showing {} of {} rows.",
        table_data.record_count().min(rows),
        table_data.record_count()
    );
}

pub fn print_score_table(scored: &[ScoredText], policy: ThresholdPolicy) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Text"),
        header_cell("Compound"),
        header_cell("Category"),
        header_cell("Stars"),
        header_cell("Pos"),
        header_cell("Neu"),
        header_cell("Neg"),
    ]);
    apply_detail_table_style(&mut table);
    for index in 1..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for entry in scored {
        table.add_row(vec![
            Cell::new(&entry.text),
            Cell::new(format!("{:+.4}", entry.scores.compound)),
            category_cell(entry.category),
            Cell::new("*".repeat(usize::from(entry.stars.as_u8()))),
            Cell::new(format!("{:.2}", entry.scores.positive)),
            Cell::new(format!("{:.2}", entry.scores.neutral)),
            Cell::new(format!("{:.2}", entry.scores.negative)),
        ]);
    }

    println!("{table}");
    println!("Policy: {policy}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn apply_detail_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Positive => Color::Green,
        Category::Neutral => Color::Grey,
        Category::Negative => Color::Red,
    }
}

fn category_cell(category: Category) -> Cell {
    Cell::new(category.as_str())
        .fg(category_color(category))
        .add_attribute(Attribute::Bold)
}

fn category_count_cell(category: Category, count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(category_color(category))
    } else {
        dim_cell(count)
    }
}

fn mean_cell(mean: Option<f64>) -> Cell {
    match mean {
        Some(value) => Cell::new(format!("{value:+.3}")),
        None => dim_cell("-"),
    }
}
