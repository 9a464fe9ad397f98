//! This module implements a breadth-first variant of
//! [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html)
//! which records each node together with the index of the node that first discovered it, so that
//! the frontier only has to carry indices.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::debug;
use std::collections::VecDeque;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut index = Some(start);
    let mut path: Vec<N> = std::iter::from_fn(|| {
        let (node, &parent) = parents.get_index(index?)?;
        index = Some(parent);
        Some(node.clone())
    })
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until `success` holds for a dequeued node. Successors are visited in the
/// order they are yielded and each node is only ever discovered once, so the first path found has
/// the minimal number of hops. `capacity` is a hint for the number of reachable nodes.
pub fn bfs<N, FN, IN, FS>(
    start: &N,
    capacity: usize,
    mut successors: FN,
    mut success: FS,
) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = VecDeque::new();
    to_see.push_back(0);
    let mut parents: FxIndexMap<N, usize> =
        FxIndexMap::with_capacity_and_hasher(capacity, FxBuildHasher::default());
    parents.insert(start.clone(), usize::MAX);
    let mut expanded = 0usize;
    while let Some(index) = to_see.pop_front() {
        let successors = {
            let (node, _) = parents.get_index(index)?;
            if success(node) {
                debug!(
                    "Goal found after expanding {} of {} discovered nodes",
                    expanded,
                    parents.len()
                );
                return Some(reverse_path(&parents, index));
            }
            expanded += 1;
            successors(node)
        };
        for successor in successors {
            // Only the first discovery counts, later ones are never shorter.
            if let Vacant(e) = parents.entry(successor) {
                to_see.push_back(e.index());
                e.insert(index);
            }
        }
    }
    debug!("Frontier exhausted after expanding {} nodes", expanded);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A line graph 0 - 1 - ... - 9 with a shortcut 0 - 5.
    fn line_successors(n: &u32) -> Vec<u32> {
        let mut succ = Vec::new();
        if *n > 0 {
            succ.push(n - 1);
        }
        if *n < 9 {
            succ.push(n + 1);
        }
        if *n == 0 {
            succ.push(5);
        }
        succ
    }

    #[test]
    fn takes_the_shortcut() {
        let path = bfs(&0, 10, line_successors, |n| *n == 7).unwrap();
        assert_eq!(path, vec![0, 5, 6, 7]);
    }

    #[test]
    fn start_is_goal() {
        let path = bfs(&3, 10, line_successors, |n| *n == 3).unwrap();
        assert_eq!(path, vec![3]);
    }

    #[test]
    fn unreachable_goal() {
        assert!(bfs(&0, 10, line_successors, |n| *n == 42).is_none());
    }

    /// Equal length alternatives are decided by successor order.
    #[test]
    fn first_successor_wins_ties() {
        let diamond = |n: &u8| match n {
            0 => vec![1, 2],
            1 | 2 => vec![3],
            _ => vec![],
        };
        assert_eq!(bfs(&0, 4, diamond, |n| *n == 3).unwrap(), vec![0, 1, 3]);
    }
}
