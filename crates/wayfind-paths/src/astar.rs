use std::hash::Hash;

use crate::pathsearch::{CameFrom, Path, PathSearch, SearchLimits, SearchOutcome};
use crate::traits::{AstarPather, FnPather};

/// Find the cheapest path from `start` to `goal` with A*.
///
/// The graph is defined entirely by the three closures:
///
/// - `heuristic(node)` estimates the remaining cost to `goal`; it must never
///   overestimate for the result to be optimal.
/// - `neighbors_of(node)` lists the nodes reachable in one step.
/// - `edge_cost(came_from, from, to)` is the cost of one step, `>= 0`, with
///   `f64::INFINITY` for an impassable edge.
///
/// Returns the path including both endpoints, or `None` if `goal` cannot be
/// reached. `start == goal` yields `[start]`.
///
/// ```
/// let path = wayfind_paths::find_path(
///     0i32,
///     3,
///     |n| (3 - n).abs() as f64,
///     |&n| [n - 1, n + 1],
///     |_, from, to| (from - to).abs() as f64,
/// );
/// assert_eq!(path, Some(vec![0, 1, 2, 3]));
/// ```
pub fn find_path<N, H, F, I, C>(
    start: N,
    goal: N,
    heuristic: H,
    neighbors_of: F,
    edge_cost: C,
) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
    H: Fn(&N) -> f64,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    C: Fn(&CameFrom<N>, &N, &N) -> f64,
{
    let pather = FnPather::new(heuristic, neighbors_of, edge_cost);
    PathSearch::new().astar_path(&pather, start, goal)
}

impl<N: Clone + Eq + Hash> PathSearch<N> {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists.
    pub fn astar_path<P>(&mut self, pather: &P, from: N, to: N) -> Option<Vec<N>>
    where
        P: AstarPather<Node = N>,
    {
        self.astar(pather, from, to, &SearchLimits::unlimited()).into_path()
    }

    /// Run A* from `from` to `to` within `limits`.
    ///
    /// Ties between equally cheap paths go to whichever was discovered
    /// first, so the result depends on the pather's neighbor order.
    pub fn astar<P>(
        &mut self,
        pather: &P,
        from: N,
        to: N,
        limits: &SearchLimits,
    ) -> SearchOutcome<N>
    where
        P: AstarPather<Node = N>,
    {
        self.reset();

        if from == to {
            self.g.insert(from.clone(), 0.0);
            self.f.insert(from.clone(), pather.estimate(&from, &to));
            log::debug!("astar: start is the goal");
            return SearchOutcome::Found(Path {
                nodes: vec![from],
                cost: 0.0,
            });
        }

        // Initialise the start node.
        let start_f = pather.estimate(&from, &to);
        self.g.insert(from.clone(), 0.0);
        self.f.insert(from.clone(), start_f);
        self.open.insert(from, start_f);
        self.stats.max_frontier = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            let Some(current) = self.open.remove_min() else {
                break 'search SearchOutcome::Exhausted;
            };

            if current == to {
                let cost = self.g.get(&current).copied().unwrap_or(f64::INFINITY);
                break 'search SearchOutcome::Found(Path {
                    nodes: self.reconstruct(current),
                    cost,
                });
            }

            if !limits.allows(self.stats.expanded) {
                break 'search SearchOutcome::LimitReached;
            }

            self.stats.expanded += 1;
            let current_g = self.g.get(&current).copied().unwrap_or(f64::INFINITY);
            log::trace!(
                "astar: expanding node {} (g = {current_g}, frontier = {})",
                self.stats.expanded,
                self.open.len()
            );

            nbuf.clear();
            pather.neighbors(&current, &mut nbuf);

            for neighbor in nbuf.drain(..) {
                self.stats.relaxed += 1;
                let tentative_g = current_g + pather.cost(&self.came_from, &current, &neighbor);
                let known_g = self.g.get(&neighbor).copied().unwrap_or(f64::INFINITY);
                // Strict: an equal-cost alternative never replaces the
                // first one found.
                if tentative_g < known_g {
                    let f = tentative_g + pather.estimate(&neighbor, &to);
                    self.came_from.insert(neighbor.clone(), current.clone());
                    self.g.insert(neighbor.clone(), tentative_g);
                    self.f.insert(neighbor.clone(), f);
                    self.open.upsert(neighbor, f);
                }
            }

            self.stats.max_frontier = self.stats.max_frontier.max(self.open.len());
        };

        self.nbuf = nbuf;

        log::debug!(
            "astar: {outcome} after {} expansions ({} relaxations, frontier peak {})",
            self.stats.expanded,
            self.stats.relaxed,
            self.stats.max_frontier
        );
        outcome
    }

    /// Walk `came_from` back from `goal` and return the path in start-to-goal
    /// order.
    fn reconstruct(&self, goal: N) -> Vec<N> {
        let mut path = Vec::new();
        let mut current = Some(goal);
        while let Some(node) = current {
            current = self.came_from.get(&node).cloned();
            path.push(node);
            // A valid chain visits each recorded node at most once; anything
            // longer is a predecessor cycle left by negative edge costs.
            if path.len() > self.came_from.len() {
                break;
            }
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    fn line_path(start: i32, goal: i32) -> Option<Vec<i32>> {
        find_path(
            start,
            goal,
            |&n| (goal - n).abs() as f64,
            |&n| if n > 0 { vec![n - 1, n + 1] } else { vec![n + 1] },
            |_, &from, &to| (from - to).abs() as f64,
        )
    }

    #[test]
    fn line_start_is_goal() {
        assert_eq!(line_path(0, 0), Some(vec![0]));
    }

    #[test]
    fn line_single_step() {
        assert_eq!(line_path(0, 1), Some(vec![0, 1]));
    }

    #[test]
    fn line_forward() {
        assert_eq!(line_path(0, 5), Some(vec![0, 1, 2, 3, 4, 5]));
    }

    #[test]
    fn line_backward() {
        assert_eq!(line_path(5, 3), Some(vec![5, 4, 3]));
    }

    #[test]
    fn unreachable_goal_exhausts() {
        // Two disconnected components: {0, 1, 2} and {10, 11}.
        let neighbors = |&n: &i32| -> Vec<i32> {
            match n {
                0 => vec![1],
                1 => vec![0, 2],
                2 => vec![1],
                10 => vec![11],
                11 => vec![10],
                _ => vec![],
            }
        };
        let path = find_path(0, 11, |_| 0.0, neighbors, |_, _, _| 1.0);
        assert_eq!(path, None);
    }

    #[test]
    fn infinite_edges_are_never_taken() {
        // 0 -> 1 is impassable, the detour 0 -> 2 -> 1 costs 10.
        let neighbors = |&n: &i32| -> Vec<i32> {
            match n {
                0 => vec![1, 2],
                2 => vec![1],
                _ => vec![],
            }
        };
        let cost = |_: &CameFrom<i32>, &from: &i32, &to: &i32| match (from, to) {
            (0, 1) => f64::INFINITY,
            _ => 5.0,
        };
        assert_eq!(find_path(0, 1, |_| 0.0, neighbors, cost), Some(vec![0, 2, 1]));

        let blocked = |_: &CameFrom<i32>, _: &i32, _: &i32| f64::INFINITY;
        assert_eq!(find_path(0, 1, |_| 0.0, neighbors, blocked), None);
    }

    #[test]
    fn decrease_key_finds_cheaper_late_route() {
        // The direct edge to 3 is discovered first but is expensive; the
        // cheaper route through 1 and 2 must replace it.
        let neighbors = |&n: &u8| -> Vec<u8> {
            match n {
                0 => vec![3, 1],
                1 => vec![2],
                2 => vec![3],
                3 => vec![4],
                _ => vec![],
            }
        };
        let cost = |_: &CameFrom<u8>, &from: &u8, &to: &u8| match (from, to) {
            (0, 3) => 10.0,
            _ => 1.0,
        };
        let mut search = PathSearch::new();
        let pather = FnPather::new(|_: &u8| 0.0, neighbors, cost);
        let outcome = search.astar(&pather, 0, 4, &SearchLimits::unlimited());
        let path = outcome.path().unwrap();
        assert_eq!(path.nodes, vec![0, 1, 2, 3, 4]);
        assert_eq!(path.cost, 4.0);
        assert_eq!(search.cost_to(&3), Some(3.0));
        assert_eq!(search.came_from().get(&3), Some(&2));
    }

    #[test]
    fn first_discovered_tie_wins() {
        // Diamond 0 -> {1, 2} -> 3 with equal costs: neighbor order decides.
        let cost = |_: &CameFrom<u8>, _: &u8, _: &u8| 1.0;
        let left_first = |&n: &u8| -> Vec<u8> {
            match n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        };
        let right_first = |&n: &u8| -> Vec<u8> {
            match n {
                0 => vec![2, 1],
                1 | 2 => vec![3],
                _ => vec![],
            }
        };
        assert_eq!(find_path(0, 3, |_| 0.0, left_first, cost), Some(vec![0, 1, 3]));
        assert_eq!(find_path(0, 3, |_| 0.0, right_first, cost), Some(vec![0, 2, 3]));
    }

    #[test]
    fn edge_cost_sees_predecessors() {
        let start = 0i32;
        let consistent = Cell::new(true);
        let path = find_path(
            start,
            6,
            |&n| (6 - n).abs() as f64,
            |&n| [n - 1, n + 1],
            |came_from, &from, _| {
                if from != start && !came_from.contains_key(&from) {
                    consistent.set(false);
                }
                1.0
            },
        );
        assert_eq!(path, Some(vec![0, 1, 2, 3, 4, 5, 6]));
        assert!(consistent.get());
    }

    #[test]
    fn inadmissible_heuristic_still_finds_a_path() {
        let path = find_path(
            0i32,
            8,
            |&n| 100.0 * (8 - n).abs() as f64,
            |&n| [n - 1, n + 1, n + 2],
            |_, _, _| 1.0,
        )
        .unwrap();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&8));
    }

    #[test]
    fn limit_stops_search() {
        let pather = FnPather::new(
            |_: &i32| 0.0,
            |&n: &i32| [n - 1, n + 1],
            |_: &CameFrom<i32>, _: &i32, _: &i32| 1.0,
        );
        let mut search = PathSearch::new();
        let outcome = search.astar(&pather, 0, 50, &SearchLimits::with_max_expansions(10));
        assert_eq!(outcome, SearchOutcome::LimitReached);
        assert_eq!(search.stats().expanded, 10);

        let outcome = search.astar(&pather, 0, 5, &SearchLimits::with_max_expansions(1_000));
        assert_eq!(outcome.path().map(|p| p.cost), Some(5.0));
    }

    #[test]
    fn zero_budget_still_answers_trivial_query() {
        let pather = FnPather::new(
            |_: &i32| 0.0,
            |&n: &i32| [n + 1],
            |_: &CameFrom<i32>, _: &i32, _: &i32| 1.0,
        );
        let mut search = PathSearch::new();
        let outcome = search.astar(&pather, 4, 4, &SearchLimits::with_max_expansions(0));
        assert_eq!(outcome.into_path(), Some(vec![4]));
        assert_eq!(search.stats().expanded, 0);
    }

    #[test]
    fn search_state_is_reused_cleanly() {
        let pather = FnPather::new(
            |_: &i32| 0.0,
            |&n: &i32| [n - 1, n + 1],
            |_: &CameFrom<i32>, _: &i32, _: &i32| 1.0,
        );
        let mut search = PathSearch::new();
        assert_eq!(search.astar_path(&pather, 0, 3), Some(vec![0, 1, 2, 3]));
        assert_eq!(search.cost_to(&3), Some(3.0));

        assert_eq!(search.astar_path(&pather, 10, 8), Some(vec![10, 9, 8]));
        assert_eq!(search.cost_to(&3), None);
        assert_eq!(search.cost_to(&8), Some(2.0));
        assert_eq!(search.estimate_through(&8), Some(2.0));
        assert!(search.stats().expanded >= 2);
    }

    #[test]
    fn stats_track_work() {
        let pather = FnPather::new(
            |&n: &i32| (4 - n).abs() as f64,
            |&n: &i32| [n - 1, n + 1],
            |_: &CameFrom<i32>, _: &i32, _: &i32| 1.0,
        );
        let mut search = PathSearch::new();
        search.astar_path(&pather, 0, 4);
        let stats = search.stats();
        // With an exact heuristic only the nodes on the path are expanded.
        assert_eq!(stats.expanded, 4);
        assert_eq!(stats.relaxed, 8);
        assert!(stats.max_frontier >= 1);
    }

    #[test]
    fn negative_cycle_does_not_hang_reconstruction() {
        let mut search: PathSearch<u8> = PathSearch::new();
        let mut came_from = HashMap::new();
        came_from.insert(1, 2);
        came_from.insert(2, 1);
        search.came_from = came_from;
        let path = search.reconstruct(1);
        assert!(path.len() <= 3);
    }
}
