pub mod trace;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use orderchr::links::LinkIndex;
use orderchr::optimizer::AnnealResult;
use orderchr::scorer::ScoreDetails;

pub fn print_run_summary(result: &AnnealResult, index: &LinkIndex) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Chromosomes").add_attribute(Attribute::Bold),
        Cell::new("Links"),
        Cell::new("Iterations"),
        Cell::new("Accepted"),
        Cell::new("Initial"),
        Cell::new("Best").fg(Color::Cyan),
        Cell::new("Change"),
        Cell::new("Time"),
    ]);

    for i in 0..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let change = match result.improvement_pct() {
        Some(pct) => {
            let text = format!("{:.1}%", pct);
            if pct < 0.0 {
                Cell::new(text).fg(Color::Green)
            } else if pct > 0.0 {
                Cell::new(text).fg(Color::Red)
            } else {
                Cell::new(text)
            }
        }
        None => Cell::new("n/a"),
    };

    table.add_row(vec![
        Cell::new(result.initial.len()),
        Cell::new(index.record_count()),
        Cell::new(result.iterations),
        Cell::new(result.accepted_moves),
        Cell::new(result.initial_score),
        Cell::new(result.best_score)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        change,
        Cell::new(format!("{:.2}s", result.elapsed.as_secs_f64())),
    ]);

    println!("\n{}", table);
}

/// Prints the orders in the form circos configuration files take.
pub fn print_orders(result: &AnnealResult, index: &LinkIndex) {
    let best = result.best.to_delimited(index);
    println!("Initial order: {}", result.initial.to_delimited(index));
    println!("Final order:   {}", best);
    println!("chromosomes_order = {}", best);
}

pub fn print_score_report(results: &[(String, ScoreDetails)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Order").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Between"),
        Cell::new("Local"),
        Cell::new("Pairs"),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, d) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(d.total).fg(Color::Cyan),
            Cell::new(d.between),
            Cell::new(d.local),
            Cell::new(d.pairs_scored),
        ]);
    }
    println!("\n{}", table);
}
