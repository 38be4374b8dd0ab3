use crate::search::{SearchResult, SearchSpace};
use crate::DEFAULT_GRID_SIZE;

use core::fmt;
use fxhash::FxHashSet;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use grid_util::BoolGrid;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// A uniform-cost 4-connected grid. Cells set to [true] in the [BoolGrid] are walls and take
/// no part in the graph. The first coordinate of a [Point] is the row, the second the column.
///
/// Connected components of the open cells are tracked in a [UnionFind] so reachability can be
/// answered without searching.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::square(DEFAULT_GRID_SIZE)
    }
}

impl PathingGrid {
    /// An open grid without walls.
    pub fn new(width: usize, height: usize) -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::new(width, height, false),
            components: UnionFind::new(width * height),
            components_dirty: true,
        }
    }
    pub fn square(size: usize) -> PathingGrid {
        PathingGrid::new(size, size)
    }
    /// A square grid with the given walls. Walls outside the grid are ignored. Components are
    /// left dirty; call [update](Self::update) before asking for reachability.
    pub fn with_walls<I>(size: usize, walls: I) -> PathingGrid
    where
        I: IntoIterator<Item = Point>,
    {
        let mut pathing_grid = PathingGrid::square(size);
        for wall in walls {
            if pathing_grid.grid.point_in_bounds(wall) {
                pathing_grid.grid.set_point(wall, true);
            }
        }
        pathing_grid
    }
    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }
    fn get_ix_point(&self, point: &Point) -> usize {
        self.grid.get_ix_point(point)
    }
    pub fn is_wall(&self, pos: Point) -> bool {
        self.grid.point_in_bounds(pos) && self.grid.get_point(pos)
    }
    pub fn can_move_to(&self, pos: Point) -> bool {
        self.grid.point_in_bounds(pos) && !self.grid.get_point(pos)
    }
    /// Open cells adjacent to `point`, enumerated up, down, left, right. This is the adjacency
    /// order of a row-major grid graph (networkx `grid_2d_graph`), so searches expand cells in
    /// the same order a front-end built on that model expects.
    pub fn neighbourhood_points(&self, point: &Point) -> SmallVec<[Point; 4]> {
        [
            Point::new(point.x - 1, point.y),
            Point::new(point.x + 1, point.y),
            Point::new(point.x, point.y - 1),
            Point::new(point.x, point.y + 1),
        ]
        .into_iter()
        .filter(|p| self.can_move_to(*p))
        .collect()
    }

    /// Places or removes a wall. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set_wall(&mut self, pos: Point, blocked: bool) {
        if !self.grid.point_in_bounds(pos) {
            return;
        }
        if blocked {
            if !self.grid.get_point(pos) {
                self.components_dirty = true;
            }
        } else {
            let pos_ix = self.get_ix_point(&pos);
            for n in self.neighbourhood_points(&pos) {
                self.components.union(pos_ix, self.get_ix_point(&n));
            }
        }
        self.grid.set_point(pos, blocked);
    }

    /// Checks if start and goal are open cells on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not both open cells on the same component. Call
    /// [update](Self::update) after placing walls for this to be accurate.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are on different components", start, goal);
                true
            }
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        let w = self.width();
        let h = self.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.can_move_to(p) {
                        self.components.union(parent_ix, self.get_ix_point(&p));
                    }
                }
            }
        }
    }

    /// Draws the grid with a search result on top of it, one row per line: `S` start,
    /// `G` goal, `#` wall, `*` path, `o` visited and `.` untouched open cells.
    pub fn render(&self, start: &Point, goal: &Point, result: &SearchResult<Point>) -> String {
        let path: FxHashSet<Point> = result.path.iter().copied().collect();
        let visited: FxHashSet<Point> = result.visited.iter().copied().collect();
        let mut out = String::with_capacity((self.height() + 1) * self.width());
        for x in 0..self.width() as i32 {
            for y in 0..self.height() as i32 {
                let p = Point::new(x, y);
                let c = if p == *start {
                    'S'
                } else if p == *goal {
                    'G'
                } else if self.grid.get(x, y) {
                    '#'
                } else if path.contains(&p) {
                    '*'
                } else if visited.contains(&p) {
                    'o'
                } else {
                    '.'
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for x in 0..self.width() as i32 {
            let row = (0..self.height() as i32)
                .map(|y| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl SearchSpace for PathingGrid {
    type Node = Point;
    type Neighbours = SmallVec<[Point; 4]>;

    fn contains(&self, node: &Point) -> bool {
        self.can_move_to(*node)
    }
    fn neighbours(&self, node: &Point) -> Self::Neighbours {
        self.neighbourhood_points(node)
    }
    /// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), exact on an
    /// empty 4-connected grid and therefore admissible with walls.
    fn heuristic(&self, node: &Point, goal: &Point) -> i32 {
        node.manhattan_distance(goal)
    }
}
