use prettytable::{Cell, Row, Table};

use crate::solver::{
    engine::{ConstraintId, PerConstraintStats, SearchStats},
    graph::ConstraintGraph,
    semantics::DomainSemantics,
};

/// Renders per-arc propagation statistics as a text table, cheapest arcs
/// first.
pub fn render_stats_table<S: DomainSemantics>(
    stats: &SearchStats,
    graph: &ConstraintGraph<S>,
) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint Type"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Revise Calls"),
        Cell::new("Prunings"),
        Cell::new("Time / Call (µs)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();

    sorted_stats.sort_by_key(|entry| (entry.1.time_spent_micros, *entry.0));

    for (constraint_id, arc_stats) in sorted_stats {
        let descriptor = graph.constraint(*constraint_id).descriptor();
        let avg_time = if arc_stats.revisions > 0 {
            arc_stats.time_spent_micros as f64 / arc_stats.revisions as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&arc_stats.revisions.to_string()),
            Cell::new(&arc_stats.prunings.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                arc_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    table.to_string()
}
