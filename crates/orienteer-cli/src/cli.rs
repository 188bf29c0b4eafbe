use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Orienteer: cheapest routes through grid mazes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log to stderr; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON settings file with `costs` and `barrier` sections.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cheapest route through a map with `S` and `E` markers, where turning
    /// costs extra, and the number of cells on any cheapest route.
    Maze(MazeArgs),
    /// First obstacle in a list that cuts the top-left corner off from the
    /// bottom-right one.
    Barrier(BarrierArgs),
}

#[derive(Args, Debug)]
pub struct MazeArgs {
    /// The maze map (`#` wall, `.` floor, `S` start, `E` goal).
    pub file: PathBuf,

    /// Cost of one step forward.
    #[arg(long)]
    pub step: Option<u64>,

    /// Cost of a 90 degree turn.
    #[arg(long)]
    pub turn: Option<u64>,

    /// Also print the map with cells on a cheapest route drawn as `O`.
    #[arg(long, default_value_t = false)]
    pub render: bool,
}

#[derive(Args, Debug)]
pub struct BarrierArgs {
    /// Obstacle list, one `x,y` pair per line.
    pub file: PathBuf,

    /// Grid width.
    #[arg(long, default_value_t = 71)]
    pub size: i32,

    /// Grid height; defaults to the width.
    #[arg(long)]
    pub height: Option<i32>,

    /// Report the shortest walk after dropping this many obstacles.
    #[arg(long)]
    pub take: Option<usize>,

    /// Binary-search the obstacle list instead of scanning it.
    #[arg(long, default_value_t = false)]
    pub bisect: bool,

    /// Only search again after obstacles landing on a shortest walk.
    #[arg(long, default_value_t = false)]
    pub skip_off_path: bool,
}
