use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::{Debug, Formatter};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, from {:?} to {:?}", .0.route[0], .0.route[1])]
    DuplicateEdge(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first is the start node, last is the end node
    route: Vec<T>,
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut nodes = self.route.iter();
        let Some(first) = nodes.next() else {
            return write!(f, "[]");
        };
        write!(f, "{first:?}")?;
        for node in nodes {
            write!(f, " -> {node:?}")?;
        }
        Ok(())
    }
}

/// Directed dependency graph; an edge `from -> to` means `to` is derived from `from`.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    edges: BTreeMap<Node, Vec<Node>>,
    dependents_cache: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
            dependents_cache: BTreeMap::new(),
        }
    }

    pub fn route_to(&mut self, from: Node, to: Node) {
        self.edges.entry(from).or_default().push(to);
        self.dependents_cache.clear();
    }

    /// Every node transitively derived from `node`.
    pub fn dependents(&mut self, node: Node) -> &BTreeSet<Node> {
        let edges = &self.edges;
        self.dependents_cache
            .entry(node)
            .or_insert_with(|| Self::collect_dependents(edges, node))
    }

    fn collect_dependents(edges: &BTreeMap<Node, Vec<Node>>, node: Node) -> BTreeSet<Node> {
        let mut collected = BTreeSet::new();
        let mut queue = VecDeque::from([node]);

        while let Some(current) = queue.pop_front() {
            for to in edges.get(&current).into_iter().flatten() {
                // the collected check also stops cycles from looping forever
                if collected.insert(*to) {
                    queue.push_back(*to);
                }
            }
        }

        collected
    }

    /// Checks the graph is a DAG without repeated edges (Kahn's algorithm).
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree: BTreeMap<Node, usize> = BTreeMap::new();
        for (from, targets) in &self.edges {
            in_degree.entry(*from).or_insert(0);
            let mut seen = BTreeSet::new();
            for to in targets {
                if !seen.insert(*to) {
                    return Err(TopologyError::DuplicateEdge(DepRoute {
                        route: vec![*from, *to],
                    }));
                }
                *in_degree.entry(*to).or_insert(0) += 1;
            }
        }

        let mut ready: VecDeque<Node> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(node, _)| *node)
            .collect();
        let mut order = Vec::with_capacity(in_degree.len());

        while let Some(node) = ready.pop_front() {
            order.push(node);
            for to in self.edges.get(&node).into_iter().flatten() {
                if let Some(degree) = in_degree.get_mut(to) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(*to);
                    }
                }
            }
        }

        if order.len() == in_degree.len() {
            return Ok(order);
        }

        let remaining: BTreeSet<Node> = in_degree
            .keys()
            .filter(|node| !order.contains(node))
            .copied()
            .collect();
        Err(TopologyError::CycleDetected(DepRoute {
            route: self.find_cycle(&remaining).unwrap_or_default(),
        }))
    }

    fn find_cycle(&self, nodes: &BTreeSet<Node>) -> Option<Vec<Node>> {
        let start = *nodes.iter().next()?;
        let mut path = vec![start];
        let mut current = start;

        // Every remaining node still has an incoming edge from another remaining
        // node, so walking forward inside the set must revisit a node.
        loop {
            let next = self
                .edges
                .get(&current)
                .into_iter()
                .flatten()
                .find(|to| nodes.contains(to))
                .copied()?;
            if let Some(pos) = path.iter().position(|node| *node == next) {
                let mut cycle = path.split_off(pos);
                cycle.push(next);
                return Some(cycle);
            }
            path.push(next);
            current = next;
        }
    }
}
