use clap::Parser;

use crate::{domain::theme::Theme, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of animation frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(
        long,
        value_enum,
        value_name = "THEME",
        help = "Theme preselected for the first greeting (overrides config)"
    )]
    pub theme: Option<Theme>,

    #[arg(long, help = "Show the measured frame rate in the corner")]
    pub show_fps: bool,
}
