use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    fmt::Display,
    time::{Duration, Instant},
};

use serde::{Serialize, Serializer};

use crate::grid::{CellStorage, Coordinate, GridStore};
use crate::policy::{Edge, Heuristic, Movement, NeighborPolicy};
use crate::{DenseGrid, SparseGrid};

/// Weight added on top of the heuristic term so that, among entries with the
/// same f, the one that is closer to the goal is preferred.
pub const TIE_BREAK: f64 = 1e-5;

/// Run state of a single cell
#[derive(Clone, Copy, Debug)]
struct Node {
    g: f64,
    from: Option<Coordinate>,
    closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            from: None,
            closed: false,
        }
    }
}

/// The objects that we store in the priority queue
#[derive(Debug)]
struct ToVisit {
    f: f64,
    seq: u64,
    point: Coordinate,
}

impl Ord for ToVisit {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse on f for BinaryHeap to be a min-heap, newest entry wins ties
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for ToVisit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ToVisit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ToVisit {}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct PathResult {
    /// The cells from the one after `start` up to and including `goal`
    pub path: Vec<Coordinate>,
    pub start: Coordinate,
    pub goal: Coordinate,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Running,
    Failed,
    Succeeded(PathResult),
}

impl SearchState {
    pub fn is_done(&self) -> bool {
        !matches!(self, SearchState::Running)
    }
}

/// Counters of the last finished search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of distinct cells the search discovered, the start included
    pub expanded: usize,
    pub elapsed: Duration,
}

/// Everything a caller gets back from [`PathFinder::do_search`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub found: bool,
    pub path: Vec<Coordinate>,
    /// `f64::INFINITY` when no path was found
    pub cost: f64,
    pub expanded: usize,
    /// Number of cells in the grid
    pub cells: usize,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(d.as_secs_f64() * 1000.0)
}

impl Display for SearchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "searched:   {} / {}", self.expanded, self.cells)?;
        writeln!(f, "distance:   {}", self.cost)?;
        writeln!(f, "walk steps: {}", self.path.len())?;
        write!(
            f,
            "spend time: {:.3} ms",
            self.elapsed.as_secs_f64() * 1000.0
        )
    }
}

/// A* search engine over a [`GridStore`].
///
/// Owns the grid and the two pluggable policies. Walls may be edited and
/// policies swapped freely between searches; while a [`Search`] is in
/// flight the engine is mutably borrowed, so none of that can happen
/// mid-run.
pub struct PathFinder<G: GridStore> {
    grid: G,
    heuristic: Option<Box<dyn Heuristic>>,
    neighbors: Option<Box<dyn NeighborPolicy>>,
    last_stats: Option<SearchStats>,
}

impl PathFinder<DenseGrid> {
    pub fn dense(width: usize, height: usize) -> Self {
        Self::new(DenseGrid::new(width, height))
    }
}

impl PathFinder<SparseGrid> {
    pub fn sparse(width: usize, height: usize) -> Self {
        Self::new(SparseGrid::new(width, height))
    }
}

impl<G: GridStore> PathFinder<G> {
    /// Create an engine without policies, they must be installed before the
    /// first search.
    pub fn new(grid: G) -> Self {
        Self {
            grid,
            heuristic: None,
            neighbors: None,
            last_stats: None,
        }
    }

    pub fn with_movement(grid: G, movement: Movement) -> Self {
        let mut finder = Self::new(grid);
        finder.set_movement(movement);
        finder
    }

    pub fn set_heuristic(&mut self, heuristic: impl Heuristic + 'static) {
        self.heuristic = Some(Box::new(heuristic));
    }

    pub fn set_neighbors(&mut self, neighbors: impl NeighborPolicy + 'static) {
        self.neighbors = Some(Box::new(neighbors));
    }

    /// Install one of the built-in movement rules together with its heuristic.
    pub fn set_movement(&mut self, movement: Movement) {
        self.heuristic = Some(Box::new(movement.heuristic()));
        self.neighbors = Some(movement.neighbors());
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Replace the grid with an empty one of the given size.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.grid.resize(width, height);
        self.last_stats = None;
    }

    pub fn is_wall(&self, c: Coordinate) -> bool {
        self.grid.is_wall(c)
    }

    pub fn set_wall(&mut self, c: Coordinate, wall: bool) {
        self.grid.set_wall(c, wall);
    }

    pub fn is_visited(&self, c: Coordinate) -> bool {
        self.grid.is_visited(c)
    }

    pub fn is_on_path(&self, c: Coordinate) -> bool {
        self.grid.is_on_path(c)
    }

    pub fn last_stats(&self) -> Option<SearchStats> {
        self.last_stats
    }

    /// Start a search that can be advanced with [`Search::step`].
    ///
    /// # Panics
    ///
    /// Panics if the heuristic or the neighbor policy was never installed.
    pub fn begin(&mut self, start: Coordinate, goal: Coordinate) -> Search<'_, G> {
        let Some(heuristic) = self.heuristic.as_deref() else {
            panic!("no heuristic installed, call set_heuristic or set_movement before searching");
        };
        let Some(neighbors) = self.neighbors.as_deref_mut() else {
            panic!("no neighbor policy installed, call set_neighbors or set_movement before searching");
        };
        Search::new(
            &mut self.grid,
            heuristic,
            neighbors,
            &mut self.last_stats,
            start,
            goal,
        )
    }

    /// Run a search from `start` to `goal` to completion.
    pub fn do_search(&mut self, start: Coordinate, goal: Coordinate) -> SearchReport {
        self.begin(start, goal).finish()
    }
}

/// One A* run in progress.
pub struct Search<'a, G: GridStore> {
    grid: &'a mut G,
    heuristic: &'a dyn Heuristic,
    neighbors: &'a mut dyn NeighborPolicy,
    last_stats: &'a mut Option<SearchStats>,
    start: Coordinate,
    goal: Coordinate,
    nodes: G::Storage<Node>,
    visit_list: BinaryHeap<ToVisit>,
    seq: u64,
    expanded: usize,
    elapsed: Duration,
    buf: Vec<Edge>,
    state: SearchState,
}

impl<'a, G: GridStore> Search<'a, G> {
    fn new(
        grid: &'a mut G,
        heuristic: &'a dyn Heuristic,
        neighbors: &'a mut dyn NeighborPolicy,
        last_stats: &'a mut Option<SearchStats>,
        start: Coordinate,
        goal: Coordinate,
    ) -> Self {
        let timer = Instant::now();

        grid.clear_marks();
        neighbors.reset();
        let nodes = grid.create_storage();

        let mut search = Self {
            grid,
            heuristic,
            neighbors,
            last_stats,
            start,
            goal,
            nodes,
            visit_list: BinaryHeap::new(),
            seq: 0,
            expanded: 0,
            elapsed: Duration::ZERO,
            buf: Vec::with_capacity(8),
            state: SearchState::Running,
        };

        if search.grid.contains(start) && search.grid.contains(goal) {
            search.nodes.get_mut(start).g = 0.0;
            search.grid.set_visited(start);
            search.expanded = 1;
            search.visit_list.push(ToVisit {
                f: search.heuristic.estimate(start, goal) * (1.0 + TIE_BREAK),
                seq: 0,
                point: start,
            });
        } else {
            log::debug!("search {} -> {} leaves the grid", start, goal);
            search.state = SearchState::Failed;
        }

        search.elapsed += timer.elapsed();
        if search.state.is_done() {
            search.record();
        }
        search
    }

    /// Pop one entry off the frontier and expand it.
    pub fn step(&mut self) -> &SearchState {
        if self.state.is_done() {
            return &self.state;
        }
        let timer = Instant::now();

        if let Some(visit) = self.visit_list.pop() {
            log::trace!("pop {} f={:.5}", visit.point, visit.f);

            if visit.point == self.goal {
                self.state = SearchState::Succeeded(self.backtrack());
            } else if !self.nodes.get(visit.point).closed {
                self.expand(visit.point);
            }
            // otherwise it is a stale duplicate of a cell that is already final
        } else {
            self.state = SearchState::Failed;
        }

        self.elapsed += timer.elapsed();
        if self.state.is_done() {
            self.record();
        }
        &self.state
    }

    /// Drive the search to one of its terminal states.
    pub fn finish(mut self) -> SearchReport {
        while !self.step().is_done() {}

        let (found, path, cost) = match &self.state {
            SearchState::Succeeded(result) => (true, result.path.clone(), result.total_cost),
            _ => (false, Vec::new(), f64::INFINITY),
        };
        SearchReport {
            found,
            path,
            cost,
            expanded: self.expanded,
            cells: self.grid.len(),
            elapsed: self.elapsed,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    /// Number of entries waiting in the frontier, stale ones included
    pub fn frontier_len(&self) -> usize {
        self.visit_list.len()
    }

    /// Read-only access to the grid, e.g. to draw the visited cells while
    /// stepping.
    pub fn grid(&self) -> &G {
        &*self.grid
    }

    fn expand(&mut self, point: Coordinate) {
        let current = self.nodes.get_mut(point);
        current.closed = true;
        let g = current.g;

        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        self.neighbors.neighbors(point, &*self.grid, &mut buf);

        for &(next, move_cost) in buf.iter() {
            if self.grid.is_wall(next) {
                continue;
            }
            let node = self.nodes.get(next);
            let tentative = g + move_cost;
            if node.closed || tentative >= node.g {
                continue;
            }

            *self.nodes.get_mut(next) = Node {
                g: tentative,
                from: Some(point),
                closed: false,
            };
            if !self.grid.is_visited(next) {
                self.grid.set_visited(next);
                self.expanded += 1;
            }

            self.seq += 1;
            self.visit_list.push(ToVisit {
                f: tentative + self.heuristic.estimate(next, self.goal) * (1.0 + TIE_BREAK),
                seq: self.seq,
                point: next,
            });
        }

        self.buf = buf;
    }

    /// Walk the predecessors back from the goal and mark the path.
    fn backtrack(&mut self) -> PathResult {
        let mut path = Vec::new();
        let mut current = self.goal;

        while current != self.start {
            self.grid.set_on_path(current);
            path.push(current);
            current = match self.nodes.get(current).from {
                Some(from) => from,
                None => panic!("Backtracking lead to a cell that was never reached"),
            };
        }

        path.reverse();

        PathResult {
            path,
            start: self.start,
            goal: self.goal,
            total_cost: self.nodes.get(self.goal).g,
        }
    }

    fn record(&mut self) {
        let stats = SearchStats {
            expanded: self.expanded,
            elapsed: self.elapsed,
        };
        match &self.state {
            SearchState::Succeeded(result) => log::debug!(
                "search {} -> {} found path: cost={} steps={} expanded={} in {:?}",
                self.start,
                self.goal,
                result.total_cost,
                result.path.len(),
                stats.expanded,
                stats.elapsed
            ),
            _ => log::debug!(
                "search {} -> {} found no path: expanded={} in {:?}",
                self.start,
                self.goal,
                stats.expanded,
                stats.elapsed
            ),
        }
        *self.last_stats = Some(stats);
    }
}

#[cfg(test)]
mod test {
    use std::f64::consts::SQRT_2;

    use super::*;
    use crate::distance::{euclidean, manhattan};
    use crate::grid::WallMap;
    use crate::policy::{Diagonal, Orthogonal};

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn orthogonal<G: GridStore>(grid: G) -> PathFinder<G> {
        let mut finder = PathFinder::new(grid);
        finder.set_heuristic(manhattan);
        finder.set_neighbors(Orthogonal::new());
        finder
    }

    /// 5x5 grid with a wall row at y=2, leaving `opening` free
    fn walled<G: GridStore>(opening: Option<i32>) -> G {
        let mut grid = G::with_size(5, 5);
        for x in 0..5 {
            if Some(x) != opening {
                grid.set_wall(c(x, 2), true);
            }
        }
        grid
    }

    /// a 12x12 grid with a few obstacles, used to compare backends
    fn obstacle_course<G: GridStore>() -> G {
        let mut grid = G::with_size(12, 12);
        for y in 0..9 {
            grid.set_wall(c(3, y), true);
        }
        for y in 3..12 {
            grid.set_wall(c(7, y), true);
        }
        for x in 8..11 {
            grid.set_wall(c(x, 5), true);
        }
        grid
    }

    #[test]
    fn test_basic_route() {
        let mut finder = orthogonal(DenseGrid::new(5, 5));
        let report = finder.do_search(c(0, 0), c(4, 4));

        assert!(report.found);
        assert_eq!(report.path.len(), 8);
        assert_eq!(report.cost, 8.0);
        assert_eq!(report.path.last(), Some(&c(4, 4)));
        assert!(!report.path.contains(&c(0, 0)));
        for p in &report.path {
            assert!(finder.is_on_path(*p));
        }
        assert!(!finder.is_on_path(c(0, 0)));
    }

    #[test]
    fn test_route_through_opening() {
        let mut finder = orthogonal(walled::<DenseGrid>(Some(2)));
        let report = finder.do_search(c(0, 0), c(4, 4));

        assert!(report.found);
        assert!(report.path.contains(&c(2, 2)));
        assert_eq!(report.cost, 8.0);
    }

    #[test]
    fn test_basic_no_route() {
        let mut finder = orthogonal(walled::<SparseGrid>(None));
        let report = finder.do_search(c(0, 0), c(4, 4));

        assert!(!report.found);
        assert!(report.path.is_empty());
        assert!(report.cost.is_infinite());
        // everything above the wall was discovered, nothing below
        assert_eq!(report.expanded, 10);
        assert!(finder.is_visited(c(4, 1)));
        assert!(!finder.is_visited(c(4, 3)));
    }

    #[test]
    fn test_enclosed_goal() {
        let mut finder = PathFinder::with_movement(DenseGrid::new(9, 9), Movement::Diagonal);
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx != 0 || dy != 0 {
                    finder.set_wall(c(5 + dx, 5 + dy), true);
                }
            }
        }
        let report = finder.do_search(c(0, 0), c(5, 5));

        assert!(!report.found);
        assert!(report.path.is_empty());
        assert_eq!(report.cost, f64::INFINITY);
    }

    #[test]
    fn test_goal_is_wall() {
        let mut finder = orthogonal(DenseGrid::new(4, 4));
        finder.set_wall(c(3, 3), true);
        let report = finder.do_search(c(0, 0), c(3, 3));
        assert!(!report.found);
    }

    #[test]
    fn test_start_equals_goal() {
        let mut finder = PathFinder::with_movement(SparseGrid::new(6, 6), Movement::Diagonal);
        finder.set_wall(c(3, 2), true);
        let report = finder.do_search(c(2, 2), c(2, 2));

        assert!(report.found);
        assert!(report.path.is_empty());
        assert_eq!(report.cost, 0.0);
        assert_eq!(report.expanded, 1);
    }

    #[test]
    fn test_out_of_bounds_endpoints() {
        let mut finder = orthogonal(DenseGrid::new(4, 4));
        let report = finder.do_search(c(-1, 0), c(3, 3));
        assert!(!report.found);
        assert_eq!(report.expanded, 0);

        let report = finder.do_search(c(0, 0), c(4, 0));
        assert!(!report.found);
        assert!(report.cost.is_infinite());
    }

    #[test]
    fn test_diagonal_open_grid_steps() {
        let mut finder = PathFinder::new(DenseGrid::new(7, 7));
        finder.set_heuristic(euclidean);
        finder.set_neighbors(Diagonal);

        let start = c(1, 2);
        for goal in [c(6, 6), c(0, 0), c(6, 2), c(3, 6), c(1, 3)] {
            let report = finder.do_search(start, goal);
            let dx = (goal.x - start.x).abs();
            let dy = (goal.y - start.y).abs();
            let (lo, hi) = (dx.min(dy), dx.max(dy));

            assert!(report.found);
            assert_eq!(report.path.len(), hi as usize);
            let expected = SQRT_2 * lo as f64 + (hi - lo) as f64;
            assert!((report.cost - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_diagonal_blocked_corner() {
        // the only gap is a diagonal squeeze between two walls
        let mut finder = PathFinder::with_movement(DenseGrid::new(3, 3), Movement::Diagonal);
        finder.set_wall(c(1, 0), true);
        finder.set_wall(c(0, 1), true);
        finder.set_wall(c(1, 2), true);
        finder.set_wall(c(2, 1), true);

        let report = finder.do_search(c(0, 0), c(1, 1));
        assert!(!report.found);

        // opening one side lets the diagonal through
        finder.set_wall(c(1, 0), false);
        let report = finder.do_search(c(0, 0), c(1, 1));
        assert!(report.found);
        assert_eq!(report.path, vec![c(1, 1)]);
        assert_eq!(report.cost, SQRT_2);
    }

    #[test]
    fn test_weighted_shortcut() {
        // entering (2,1) is expensive, so the path goes around it
        let mut finder = PathFinder::new(DenseGrid::new(5, 3));
        finder.set_heuristic(manhattan);
        finder.set_neighbors(
            |cell: Coordinate, grid: &dyn WallMap, buf: &mut Vec<Edge>| {
                for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                    let n = cell.offset(dx, dy);
                    if grid.is_wall(n) {
                        continue;
                    }
                    let cost = if n == Coordinate::new(2, 1) { 10.0 } else { 1.0 };
                    buf.push((n, cost));
                }
            },
        );

        let report = finder.do_search(c(0, 1), c(4, 1));
        assert!(report.found);
        assert_eq!(report.cost, 6.0);
        assert!(!report.path.contains(&c(2, 1)));
    }

    #[test]
    fn test_stale_entries_not_reexpanded() {
        use std::{cell::RefCell, collections::HashMap, rc::Rc};

        let mut grid = SparseGrid::new(30, 30);
        for y in 0..25 {
            grid.set_wall(c(15, y), true);
        }
        let reference = PathFinder::with_movement(grid.clone(), Movement::Diagonal)
            .do_search(c(0, 0), c(29, 0));

        let counts = Rc::new(RefCell::new(HashMap::<Coordinate, usize>::new()));
        let seen = Rc::clone(&counts);
        let mut diagonal = Diagonal;
        let mut finder = PathFinder::new(grid);
        finder.set_heuristic(|_: Coordinate, _: Coordinate| 0.0);
        finder.set_neighbors(
            move |cell: Coordinate, grid: &dyn WallMap, buf: &mut Vec<Edge>| {
                *seen.borrow_mut().entry(cell).or_insert(0) += 1;
                diagonal.neighbors(cell, grid, buf);
            },
        );

        let report = finder.do_search(c(0, 0), c(29, 0));
        assert!(report.found);
        assert!((report.cost - reference.cost).abs() < 1e-9);
        let counts = counts.borrow();
        assert!(!counts.is_empty());
        assert!(counts.values().all(|&n| n == 1));
    }

    #[test]
    fn test_zero_heuristic_matches_cost() {
        let mut astar = orthogonal(obstacle_course::<DenseGrid>());
        let mut dijkstra = PathFinder::new(obstacle_course::<DenseGrid>());
        dijkstra.set_heuristic(|_: Coordinate, _: Coordinate| 0.0);
        dijkstra.set_neighbors(Orthogonal::new());

        let a = astar.do_search(c(0, 0), c(11, 11));
        let d = dijkstra.do_search(c(0, 0), c(11, 11));
        assert!(a.found && d.found);
        assert_eq!(a.cost, d.cost);
        assert!(a.expanded <= d.expanded);
    }

    #[test]
    fn test_expanded_is_monotonic_and_bounded() {
        let mut finder = orthogonal(obstacle_course::<SparseGrid>());
        let cells = finder.grid().len();
        let mut search = finder.begin(c(0, 0), c(11, 0));
        assert_eq!((search.start(), search.goal()), (c(0, 0), c(11, 0)));
        assert_eq!(search.frontier_len(), 1);

        let mut last = search.expanded();
        assert_eq!(last, 1);
        while !search.step().is_done() {
            assert!(search.expanded() >= last);
            assert!(search.expanded() <= cells);
            assert!(search.frontier_len() > 0);
            last = search.expanded();
        }
        assert!(matches!(search.state(), SearchState::Succeeded(_)));
        assert!(search.expanded() <= cells);
        assert!(search.grid().is_visited(c(11, 0)));

        let elapsed = search.elapsed();
        let report = search.finish();
        assert_eq!(report.elapsed, elapsed);
    }

    #[test]
    fn test_idempotent() {
        let mut finder = orthogonal(obstacle_course::<DenseGrid>());
        let first = finder.do_search(c(0, 11), c(11, 0));
        let second = finder.do_search(c(0, 11), c(11, 0));

        assert_eq!(first.path, second.path);
        assert_eq!(first.cost, second.cost);
        assert_eq!(first.expanded, second.expanded);
    }

    fn compare_backends(movement: Movement, start: Coordinate, goal: Coordinate) {
        let mut dense = PathFinder::with_movement(obstacle_course::<DenseGrid>(), movement);
        let mut sparse = PathFinder::with_movement(obstacle_course::<SparseGrid>(), movement);

        let d = dense.do_search(start, goal);
        let s = sparse.do_search(start, goal);

        assert_eq!(d.found, s.found);
        assert_eq!(d.path, s.path);
        assert_eq!(d.cost, s.cost);
        assert_eq!(d.expanded, s.expanded);
        for y in 0..12 {
            for x in 0..12 {
                assert_eq!(dense.is_visited(c(x, y)), sparse.is_visited(c(x, y)));
                assert_eq!(dense.is_on_path(c(x, y)), sparse.is_on_path(c(x, y)));
            }
        }
    }

    #[test]
    fn test_dense_and_sparse_agree() {
        for movement in [Movement::Orthogonal, Movement::Diagonal] {
            compare_backends(movement, c(0, 0), c(11, 11));
            compare_backends(movement, c(11, 0), c(0, 11));
            compare_backends(movement, c(5, 5), c(9, 9));
            // (3,3) is a wall
            compare_backends(movement, c(0, 0), c(3, 3));
        }
    }

    #[test]
    fn test_marks_reset_between_searches() {
        let mut finder = orthogonal(DenseGrid::new(6, 1));
        finder.do_search(c(0, 0), c(5, 0));
        assert!(finder.is_on_path(c(3, 0)));

        finder.do_search(c(5, 0), c(4, 0));
        assert!(!finder.is_on_path(c(3, 0)));
        assert!(!finder.is_visited(c(0, 0)));
    }

    #[test]
    fn test_last_stats() {
        let mut finder = orthogonal(DenseGrid::new(5, 5));
        assert_eq!(finder.last_stats(), None);

        let report = finder.do_search(c(0, 0), c(4, 4));
        let stats = finder.last_stats().unwrap();
        assert_eq!(stats.expanded, report.expanded);
        assert_eq!(stats.elapsed, report.elapsed);

        finder.resize(3, 3);
        assert_eq!(finder.last_stats(), None);
    }

    #[test]
    fn test_report_output() {
        let mut finder = orthogonal(DenseGrid::new(5, 5));
        let report = finder.do_search(c(0, 0), c(4, 0));

        let text = report.to_string();
        assert!(text.contains("searched:"));
        assert!(text.contains(&format!("/ {}", 25)));
        assert!(text.contains("walk steps: 4"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["found"], true);
        assert_eq!(json["cost"], 4.0);
        assert_eq!(json["path"][0]["x"], 1);
        assert!(json["elapsed_ms"].is_number());

        finder.set_wall(c(4, 0), true);
        let json = serde_json::to_value(finder.do_search(c(0, 0), c(4, 0))).unwrap();
        assert!(json["cost"].is_null());
    }

    #[test]
    #[should_panic(expected = "no heuristic installed")]
    fn test_missing_heuristic_panics() {
        let mut finder = PathFinder::dense(3, 3);
        finder.set_neighbors(Orthogonal::new());
        finder.do_search(c(0, 0), c(2, 2));
    }

    #[test]
    #[should_panic(expected = "no neighbor policy installed")]
    fn test_missing_neighbors_panics() {
        let mut finder = PathFinder::sparse(3, 3);
        finder.set_heuristic(manhattan);
        finder.do_search(c(0, 0), c(2, 2));
    }
}
