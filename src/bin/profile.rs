use mazescape::Maze;

const SIDE: usize = 1001;

fn main() -> mazescape::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(10);

    for seed in 0..num_iters {
        let mut maze = Maze::with_seed(SIDE, SIDE, seed)?;
        maze.find_escape();
        println!(
            "seed {seed}: escape is {} cells long",
            maze.escape_path().len()
        );
    }
    Ok(())
}
