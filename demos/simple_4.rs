use grid_util::point::Point;
use pathfinder_engine::{Algorithm, PathingGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() -> pathfinder_engine::Result<()> {
    let pathing_grid = PathingGrid::with_walls(3, [Point::new(1, 1)]);
    println!("{}", pathing_grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    for algorithm in Algorithm::ALL {
        let result = algorithm.find_path(&pathing_grid, &start, &end)?;
        println!("{algorithm}: expanded {} cells", result.visited.len());
        print!("{}", pathing_grid.render(&start, &end, &result));
        for p in &result.path {
            println!("{:?}", p);
        }
    }
    Ok(())
}
