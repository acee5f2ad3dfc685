use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use maze_caster::backend::{InputBackend, RaylibBackend, RenderBackend};
use maze_caster::config::{Cli, Config};
use maze_caster::core::{load_maze, KeyState, Maze};
use maze_caster::render::render_frame;
use maze_caster::session::{Progress, Session};
use maze_caster::logging;

const WIN_BANNER: &str = r"
     \ //   __    ||   ||
      \/  //  \  ||   ||
      //  ||    || ||   ||
     //    \__//   \_//

\      //\      //   ||     ||\   ||
 \    //  \    //    ||     || \  ||
  \  //    \  //     ||     ||  \ ||
   \//      \//      ||     ||   \||
";

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());
    let _log_guard = match logging::init(config.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("could not install logger: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(true) => {
            println!("{WIN_BANNER}");
            ExitCode::SUCCESS
        }
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Plays every maze in order. Returns whether the last goal was reached
/// (as opposed to the player quitting).
fn run(config: &Config) -> Result<bool> {
    let mazes = config
        .mazes
        .iter()
        .map(|path| load_maze(path).with_context(|| format!("loading maze {}", path.display())))
        .collect::<Result<Vec<Maze>>>()?;
    let mut session = Session::new(mazes, config).context("preparing levels")?;
    info!(levels = session.total(), "mazes loaded");

    let mut backend = RaylibBackend::init(config).context("starting raylib")?;
    let mut keys = KeyState::default();

    loop {
        keys.process_events(backend.poll());
        if keys.quit {
            info!(level = session.index() + 1, "quit requested");
            return Ok(false);
        }

        if session.tick(&keys) == Progress::Completed {
            return Ok(true);
        }

        if let Some(level) = session.level() {
            render_frame(level, &mut backend).context("rendering frame")?;
            backend.present()?;
        }
    }
}
