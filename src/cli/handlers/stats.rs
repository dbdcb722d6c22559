//! Stats command handler.

use anyhow::Result;

use crate::cli::StatsArgs;
use crate::cli::output::{OutputFormat, StatsReport};
use crate::domain::{Link, TreeNode};
use crate::graph::{MemoryGraph, materialize};
use crate::infra::read_outline;
use crate::wiki::WikiParser;

pub fn handle_stats(args: &StatsArgs, parser: &WikiParser<'_>) -> Result<()> {
    let root = read_outline(&args.file, parser)?;
    let report = build_report(args.file.display().to_string(), &root);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => {
            let g = &report.graph;
            println!("{}", report.path);
            println!("  nodes:             {}", report.nodes);
            println!("  max depth:         {}", g.max_depth);
            println!("  topics:            {}", g.topics);
            println!("    fresh:           {}", g.fresh_topics);
            println!("    referenced:      {}", g.referenced_topics);
            println!("  links:             {}", g.links);
            println!("    relations:       {}", g.relations);
            println!("  pages with props:  {}", g.pages_with_properties);
        }
    }
    Ok(())
}

/// Materializes `root` into a fresh in-memory graph and summarizes it.
pub fn build_report(path: String, root: &TreeNode<Link>) -> StatsReport {
    let mut graph = MemoryGraph::new();
    let Ok(_) = materialize(&mut graph, root);
    StatsReport {
        path,
        nodes: root.count_descendants(),
        graph: graph.stats(),
    }
}
