use std::{path::PathBuf, thread};

use clap::Parser;
use gridmaze::{
    dims::Dims,
    logging,
    search::{SearchKind, SearchState},
    settings::{Settings, SettingsError},
    GeneratorError, Session, SessionError,
};
use log::info;
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(version, about, name = "gridmaze")]
struct Args {
    #[clap(long, help = "Maze width in cells")]
    width: Option<i32>,
    #[clap(long, help = "Maze height in cells")]
    height: Option<i32>,
    #[clap(long, help = "Seed of the maze generator")]
    seed: Option<u64>,
    #[clap(long, value_enum, help = "Search to run over the maze")]
    strategy: Option<SearchKind>,
    #[clap(long, help = "Milliseconds between two search steps")]
    tick_ms: Option<u64>,
    #[clap(long, help = "Stop after this many steps even if the search is not over")]
    max_ticks: Option<usize>,
    #[clap(long, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(short, long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config in debug format and quit")]
    debug_config: bool,
    #[clap(short, long, action, help = "Log debug messages")]
    verbose: bool,
}

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("cannot install logger; {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.reset_config {
        Settings::reset_config(&path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", path);
        }
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(&path)?);
        return Ok(());
    }

    let settings = apply_args(Settings::load(&path)?, &args);

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        settings.get_log_level().into()
    };
    logging::init(level)?;

    let mut session = Session::new(settings.maze_config())?;
    let strategy = settings.get_strategy();
    let tick = settings.get_tick();
    session.start(strategy);

    let mut ticks = 0;
    while args.max_ticks.map_or(true, |max| ticks < max) && session.tick() {
        ticks += 1;
        if !tick.is_zero() {
            thread::sleep(tick);
        }
    }
    info!("stopped after {} ticks", ticks);

    let graph = session.graph();
    let Dims(w, h) = graph.size();
    println!("maze:     {}x{}, seed {}", w, h, session.maze().seed());
    println!("walls:    {}", session.maze().unique_walls().len());
    println!("search:   {}", strategy);
    println!("steps:    {}", session.steps());
    println!("visited:  {}", graph.travelled_count());
    match session.search_state() {
        Some(SearchState::GoalFound) => println!("path:     {} cells", graph.path_cells().len()),
        Some(SearchState::Exhausted) => println!("path:     goal unreachable"),
        _ => println!("path:     not found yet"),
    }
    if let Some(elapsed) = session.elapsed() {
        println!("elapsed:  {:.3}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn apply_args(mut settings: Settings, args: &Args) -> Settings {
    if let Some(width) = args.width {
        settings = settings.set_width(width);
    }
    if let Some(height) = args.height {
        settings = settings.set_height(height);
    }
    if let Some(seed) = args.seed {
        settings = settings.set_seed(seed);
    }
    if let Some(strategy) = args.strategy {
        settings = settings.set_strategy(strategy);
    }
    if let Some(tick_ms) = args.tick_ms {
        settings = settings.set_tick_ms(tick_ms);
    }
    settings
}
