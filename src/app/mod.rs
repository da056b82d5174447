pub mod cli;
pub mod logging;

use std::{fs, io::Write, path::Path};

use crate::{error::Result, maze::Maze};
use cli::{Command, RenderArgs};

/// Runs one command and prints the resulting maze to `out`.
pub struct App<W: Write> {
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Generate {
                height,
                width,
                seed,
                export,
                render,
            } => {
                let mut maze = match seed {
                    Some(seed) => Maze::with_seed(height, width, seed)?,
                    None => Maze::new(height, width)?,
                };
                tracing::info!("[app] generated a {height}x{width} maze (seed {seed:?})");
                if let Some(path) = export {
                    Self::export(&maze, &path)?;
                }
                self.show(&mut maze, render)
            }
            Command::Load { file, render } => {
                let text = fs::read_to_string(&file)?;
                let mut maze = Maze::load(&text)?;
                tracing::info!("[app] loaded maze from {}", file.display());
                self.show(&mut maze, render)
            }
        }
    }

    fn export(maze: &Maze, path: &Path) -> Result<()> {
        fs::write(path, maze.export())?;
        tracing::info!("[app] exported maze to {}", path.display());
        Ok(())
    }

    fn show(&mut self, maze: &mut Maze, render: RenderArgs) -> Result<()> {
        if render.solve {
            maze.find_escape();
        }
        let text = if render.color {
            maze.render_styled(render.solve)
        } else {
            maze.render(render.solve)
        };
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
