//! Display functions for command results

use crate::commands::{
    BuildReport, NeighborhoodReport, NeighborsReport, PathsReport, StatsReport,
};
use colored::Colorize;

/// Print the result of building the graph
pub fn print_build_report(report: &BuildReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "EDIT GRAPH".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("   Words:   {}", report.word_count);
    println!(
        "   Nodes:   {}",
        report.node_count.to_string().bright_yellow()
    );
    println!(
        "   Edges:   {}",
        report.edge_count.to_string().bright_yellow()
    );
    println!("   Time:    {:.3}s", report.duration.as_secs_f64());
}

/// Print a neighbor listing
pub fn print_neighbors_report(report: &NeighborsReport) {
    match report {
        NeighborsReport::NotFound { word } => {
            println!("{}", format!("'{word}' is not in the graph").red());
        }
        NeighborsReport::Found { word, neighbors } => {
            println!(
                "\nNeighbors of {} ({}):",
                word.bright_yellow().bold(),
                neighbors.len()
            );
            for (neighbor, relation) in neighbors {
                println!("   {:<16} {}", neighbor.text(), relation.to_string().cyan());
            }
            if neighbors.is_empty() {
                println!("   {}", "(none)".dimmed());
            }
        }
    }
}

/// Print a shortest-path result
pub fn print_paths_report(report: &PathsReport) {
    match report {
        PathsReport::NotFound { missing, .. } => {
            for word in missing {
                println!("{}", format!("'{word}' is not in the graph").red());
            }
        }
        PathsReport::Found { from, to, paths } => {
            if paths.is_empty() {
                println!(
                    "No path between {} and {} (different components)",
                    from.bright_yellow(),
                    to.bright_yellow()
                );
                return;
            }

            let steps = paths[0].len() - 1;
            println!(
                "\n{} shortest path(s) of {} step(s) from {} to {}:",
                paths.len().to_string().bright_yellow(),
                steps,
                from.bright_yellow().bold(),
                to.bright_yellow().bold()
            );
            for path in paths {
                let rendered: Vec<&str> = path.iter().map(crate::core::Word::text).collect();
                println!("   {}", rendered.join(" → "));
            }
        }
    }
}

/// Print corpus and graph statistics
pub fn print_stats_report(report: &StatsReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD NETWORK STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Corpus:".bright_cyan().bold());
    println!("   Words:   {}", report.word_count);
    for (length, count) in &report.bucket_sizes {
        println!("   {length:>2}-letter words: {count}");
    }

    println!("\n{}", "Graph:".bright_cyan().bold());
    println!("   Nodes:      {}", report.node_count);
    println!("   Edges:      {}", report.edge_count);
    println!("   Components: {}", report.component_count);
    println!("   Largest:    {} words", report.largest_component);
}

/// Print a renderable neighborhood
///
/// Text form of the node/edge handoff the external renderer consumes.
pub fn print_neighborhood_report(report: &NeighborhoodReport) {
    match report {
        NeighborhoodReport::NotFound { word } => {
            println!("{}", format!("'{word}' is not in the graph").red());
        }
        NeighborhoodReport::Found {
            word,
            depth,
            subgraph,
        } => {
            println!(
                "\nNeighborhood of {} within {} step(s): {} nodes, {} edges",
                word.bright_yellow().bold(),
                depth,
                subgraph.nodes.len(),
                subgraph.edges.len()
            );
            for (a, b) in &subgraph.edges {
                println!("   {} -- {}", a.text(), b.text());
            }
        }
    }
}
