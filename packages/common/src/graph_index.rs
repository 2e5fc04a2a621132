//! Adjacency index over an editor graph
//!
//! Answers the structural questions shared by tree reconstruction and the
//! linter: which nodes are roots, which edges dangle, whether a node has
//! several parents, and whether the graph contains a cycle.

use crate::error::GraphShapeError;
use crate::result::ShapeResult;
use flowcanvas_model::{Graph, GraphEdge, GraphNode};
use std::collections::{HashMap, HashSet};

#[derive(Debug)]
pub struct GraphIndex<'g> {
    graph: &'g Graph,

    /// Node id -> position in `graph.nodes` (first occurrence wins)
    nodes: HashMap<&'g str, usize>,

    /// Node id -> edges leaving it, in edge order
    outgoing: HashMap<&'g str, Vec<&'g GraphEdge>>,

    /// Node id -> edges entering it, in edge order
    incoming: HashMap<&'g str, Vec<&'g GraphEdge>>,

    /// Edges with at least one endpoint missing from the node list
    dangling: Vec<&'g GraphEdge>,
}

impl<'g> GraphIndex<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        let mut nodes = HashMap::with_capacity(graph.nodes.len());
        for (position, node) in graph.nodes.iter().enumerate() {
            nodes.entry(node.id.as_str()).or_insert(position);
        }

        let mut outgoing: HashMap<&str, Vec<&GraphEdge>> = HashMap::new();
        let mut incoming: HashMap<&str, Vec<&GraphEdge>> = HashMap::new();
        let mut dangling = Vec::new();

        for edge in &graph.edges {
            if !nodes.contains_key(edge.source.as_str()) || !nodes.contains_key(edge.target.as_str()) {
                dangling.push(edge);
                continue;
            }
            outgoing.entry(edge.source.as_str()).or_default().push(edge);
            incoming.entry(edge.target.as_str()).or_default().push(edge);
        }

        Self {
            graph,
            nodes,
            outgoing,
            incoming,
            dangling,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn node(&self, id: &str) -> Option<&'g GraphNode> {
        self.nodes.get(id).map(|&position| &self.graph.nodes[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Edges leaving `id` (dangling edges excluded)
    pub fn outgoing(&self, id: &str) -> &[&'g GraphEdge] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges entering `id` (dangling edges excluded)
    pub fn incoming(&self, id: &str) -> &[&'g GraphEdge] {
        self.incoming.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn dangling_edges(&self) -> &[&'g GraphEdge] {
        &self.dangling
    }

    /// Node ids with no incoming edge, in node order
    pub fn roots(&self) -> Vec<&'g str> {
        self.unique_node_ids()
            .filter(|id| self.incoming(id).is_empty())
            .collect()
    }

    /// Nodes entered by more than one edge, with their parents
    pub fn multi_parent_nodes(&self) -> Vec<(&'g str, Vec<&'g str>)> {
        self.unique_node_ids()
            .filter_map(|id| {
                let parents = self.incoming(id);
                (parents.len() > 1).then(|| (id, parents.iter().map(|e| e.source.as_str()).collect()))
            })
            .collect()
    }

    /// Node ids appearing more than once in the node list
    pub fn duplicate_node_ids(&self) -> Vec<&'g str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for node in &self.graph.nodes {
            if !seen.insert(node.id.as_str()) && !duplicates.contains(&node.id.as_str()) {
                duplicates.push(node.id.as_str());
            }
        }
        duplicates
    }

    /// Find one cycle, returned as the node path that closes it
    ///
    /// Iterative DFS so deep graphs cannot exhaust the stack.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Visiting,
            Done,
        }

        let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(self.nodes.len());

        for start in self.unique_node_ids() {
            if marks.contains_key(start) {
                continue;
            }

            // (node, index of the next outgoing edge to follow)
            let mut stack: Vec<(&str, usize)> = vec![(start, 0)];
            marks.insert(start, Mark::Visiting);

            while let Some(frame) = stack.last_mut() {
                let (node, next) = *frame;
                let edges = self.outgoing(node);

                if next >= edges.len() {
                    marks.insert(node, Mark::Done);
                    stack.pop();
                    continue;
                }
                frame.1 += 1;

                let target = edges[next].target.as_str();
                match marks.get(target) {
                    Some(Mark::Visiting) => {
                        let begin = stack.iter().position(|(id, _)| *id == target).unwrap_or(0);
                        let mut path: Vec<String> =
                            stack[begin..].iter().map(|(id, _)| id.to_string()).collect();
                        path.push(target.to_string());
                        return Some(path);
                    }
                    Some(Mark::Done) => {}
                    None => {
                        marks.insert(target, Mark::Visiting);
                        stack.push((target, 0));
                    }
                }
            }
        }

        None
    }

    /// Check that the graph reads as exactly one tree and return its root
    ///
    /// Parent conflicts and cycles are reported before root ambiguity, so a
    /// rootless cycle is described as a cycle.
    pub fn check_tree(&self) -> ShapeResult<&'g str> {
        if let Some((node, parents)) = self.multi_parent_nodes().into_iter().next() {
            return Err(GraphShapeError::MultipleParents {
                node: node.to_string(),
                parents: parents.into_iter().map(str::to_string).collect(),
            });
        }

        if let Some(path) = self.find_cycle() {
            return Err(GraphShapeError::Cycle(path));
        }

        let roots = self.roots();
        match roots.as_slice() {
            [] => Err(GraphShapeError::NoRoot),
            [root] => Ok(*root),
            _ => Err(GraphShapeError::MultipleRoots(
                roots.iter().map(|id| id.to_string()).collect(),
            )),
        }
    }

    fn unique_node_ids(&self) -> impl Iterator<Item = &'g str> + '_ {
        self.graph
            .nodes
            .iter()
            .enumerate()
            .filter(|(position, node)| self.nodes.get(node.id.as_str()) == Some(position))
            .map(|(_, node)| node.id.as_str())
    }
}
