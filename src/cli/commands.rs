//! CLI command implementations.
//!
//! Every command parses the document into the storage the `--matrix` flag
//! asks for, runs one engine, and prints either text or JSON. Printed node
//! listings are sorted by label so output is stable across runs; traversal
//! and spanning tree output keeps algorithm order, which is the point of
//! those commands.

use std::path::Path;

use crate::engine::{
    dfs, is_dag, kruskal, shortest_paths_dense, shortest_paths_heap, toposort, Distance,
};
use crate::format::{DotReader, DotWriter};
use crate::graph::{AdjacencyList, AdjacencyMatrix, EdgeListGraph, Graph, ListGraph, Storage};
use crate::types::TangleResult;

/// Display node and edge counts for a document.
pub fn cmd_info(path: &Path, matrix: bool, json: bool) -> TangleResult<()> {
    if matrix {
        info_for(&DotReader::read_from_file::<AdjacencyMatrix<String>>(path)?, path, json)
    } else {
        info_for(&DotReader::read_from_file::<AdjacencyList<String>>(path)?, path, json)
    }
}

fn info_for<S: Storage<Node = String>>(
    graph: &Graph<S>,
    path: &Path,
    json: bool,
) -> TangleResult<()> {
    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "kind": graph.kind().name(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Kind: {}", graph.kind());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// List the node labels, sorted.
pub fn cmd_nodes(path: &Path, matrix: bool, json: bool) -> TangleResult<()> {
    if matrix {
        nodes_for(&DotReader::read_from_file::<AdjacencyMatrix<String>>(path)?, json)
    } else {
        nodes_for(&DotReader::read_from_file::<AdjacencyList<String>>(path)?, json)
    }
}

fn nodes_for<S: Storage<Node = String>>(graph: &Graph<S>, json: bool) -> TangleResult<()> {
    let mut labels = graph.nodes();
    labels.sort();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&labels).unwrap_or_default()
        );
    } else {
        for label in &labels {
            println!("{}", label);
        }
        println!("\n{} nodes", labels.len());
    }
    Ok(())
}

/// Print the whole-graph depth-first visit order.
pub fn cmd_dfs(path: &Path, matrix: bool, json: bool) -> TangleResult<()> {
    if matrix {
        dfs_for(&DotReader::read_from_file::<AdjacencyMatrix<String>>(path)?, json)
    } else {
        dfs_for(&DotReader::read_from_file::<AdjacencyList<String>>(path)?, json)
    }
}

fn dfs_for<S: Storage<Node = String>>(graph: &Graph<S>, json: bool) -> TangleResult<()> {
    let order = dfs(graph);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&order).unwrap_or_default()
        );
    } else {
        println!("{}", order.join(" "));
    }
    Ok(())
}

/// Print single-source shortest distances, sorted by label.
pub fn cmd_paths(
    path: &Path,
    source: &str,
    dense: bool,
    matrix: bool,
    json: bool,
) -> TangleResult<()> {
    if matrix {
        paths_for(
            &DotReader::read_from_file::<AdjacencyMatrix<String>>(path)?,
            source,
            dense,
            json,
        )
    } else {
        paths_for(
            &DotReader::read_from_file::<AdjacencyList<String>>(path)?,
            source,
            dense,
            json,
        )
    }
}

fn paths_for<S: Storage<Node = String>>(
    graph: &Graph<S>,
    source: &str,
    dense: bool,
    json: bool,
) -> TangleResult<()> {
    let source = source.to_string();
    let distances = if dense {
        shortest_paths_dense(graph, &source)?
    } else {
        shortest_paths_heap(graph, &source)?
    };

    let mut rows: Vec<(String, Distance)> = distances.into_iter().collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    if json {
        let map: serde_json::Map<String, serde_json::Value> = rows
            .iter()
            .map(|(label, distance)| {
                let value = serde_json::to_value(distance).unwrap_or(serde_json::Value::Null);
                (label.clone(), value)
            })
            .collect();
        let info = serde_json::json!({
            "source": source,
            "algorithm": if dense { "dense" } else { "heap" },
            "distances": map,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Distances from {}:", source);
        for (label, distance) in &rows {
            println!("  {}: {}", label, distance);
        }
    }
    Ok(())
}

/// Build and print a minimum spanning tree of the document's graph.
pub fn cmd_mst(path: &Path, json: bool) -> TangleResult<()> {
    let graph = DotReader::read_from_file::<AdjacencyList<String>>(path)?;
    let tree = kruskal(&EdgeListGraph::from_graph(&graph));

    if json {
        let edges: Vec<serde_json::Value> = tree
            .edges()
            .iter()
            .map(|(weight, u, v)| {
                serde_json::json!({"u": u, "v": v, "weight": weight})
            })
            .collect();
        let info = serde_json::json!({
            "edges": edges,
            "edge_count": tree.edge_count(),
            "total_weight": tree.total_weight(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        for (weight, u, v) in tree.edges() {
            println!("{} -- {} [weight={}]", u, v, weight);
        }
        println!(
            "\n{} edges, total weight {}",
            tree.edge_count(),
            tree.total_weight()
        );
    }
    Ok(())
}

/// Check the document for cycles and print a topological order.
///
/// Each `u -- v` statement is read as a directed arc from `u` to `v`, so
/// documents written "prerequisite first" order the way dependency lists
/// usually do.
pub fn cmd_order(path: &Path, json: bool) -> TangleResult<()> {
    let mut graph: ListGraph<String> = Graph::directed();
    graph.import_from_file(path)?;

    let dag = is_dag(&graph);
    let order = toposort(&graph);

    if json {
        let info = serde_json::json!({
            "is_dag": dag,
            "order": order,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        match order {
            Some(order) => println!("{}", order.join(" ")),
            None => println!("Graph has a cycle; no topological order exists"),
        }
    }
    Ok(())
}

/// Re-emit the document's graph in canonical form on stdout.
pub fn cmd_export(path: &Path) -> TangleResult<()> {
    let graph = DotReader::read_from_file::<AdjacencyList<String>>(path)?;
    print!("{}", DotWriter::write_to_string(&graph));
    Ok(())
}
