use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use motion_math::SpringParameters;

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "motion-playground")]
#[command(version, about = "Explore spring animation parameters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot the response curve of a spring
    Graph {
        #[command(flatten)]
        spring: SpringArgs,
        /// Plot width in columns
        #[arg(long, default_value_t = 72)]
        width: u16,
        /// Plot height in rows
        #[arg(long, default_value_t = 20)]
        height: u16,
    },
    /// Convert between physical and design-friendly parameters
    Convert(ConvertArgs),
    /// Estimate how long a spring takes to settle
    Estimate {
        #[command(flatten)]
        spring: SpringArgs,
        /// Distance from the target at release
        #[arg(long, default_value_t = 1.0)]
        displacement: f32,
        /// Distance under which the spring counts as settled
        #[arg(long, default_value_t = motion_math::SpringDefaults::DISPLACEMENT_THRESHOLD)]
        threshold: f32,
    },
    /// Project a floating window fling and dock it
    Fling(FlingArgs),
    /// Step a spring frame by frame between two values
    Animate {
        #[command(flatten)]
        spring: SpringArgs,
        /// Start value
        #[arg(long, default_value_t = 1.0)]
        from: f32,
        /// Target value
        #[arg(long, default_value_t = 1.5)]
        to: f32,
        /// Frames per second
        #[arg(long, default_value_t = 60)]
        fps: u32,
    },
}

#[derive(Args, Clone, Copy)]
struct SpringArgs {
    /// Damping ratio; below 1 the spring bounces
    #[arg(long, default_value_t = 0.25)]
    damping_ratio: f32,
    /// Stiffness; higher is faster
    #[arg(long, default_value_t = 100.0)]
    stiffness: f32,
}

impl From<SpringArgs> for SpringParameters {
    fn from(args: SpringArgs) -> Self {
        SpringParameters::new(args.damping_ratio, args.stiffness)
    }
}

#[derive(Args)]
#[group(required = true, multiple = true)]
struct ConvertArgs {
    /// Bounce in [-1, 1]
    #[arg(long, requires = "duration", conflicts_with_all = ["damping_ratio", "stiffness"])]
    bounce: Option<f32>,
    /// Duration (frequency response) in seconds
    #[arg(long, requires = "bounce")]
    duration: Option<f32>,
    /// Damping ratio
    #[arg(long, requires = "stiffness")]
    damping_ratio: Option<f32>,
    /// Stiffness
    #[arg(long, requires = "damping_ratio")]
    stiffness: Option<f32>,
}

#[derive(Args)]
struct FlingArgs {
    /// Window offset at release, from the bottom-right corner
    #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    position: Vec<f32>,
    /// Release velocity in pixels per second
    #[arg(long, required = true, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    velocity: Vec<f32>,
    /// Container size
    #[arg(long, num_args = 2, value_names = ["W", "H"], default_values_t = [1080.0, 2200.0])]
    container: Vec<f32>,
    /// Window size
    #[arg(long, num_args = 2, value_names = ["W", "H"], default_values_t = [360.0, 240.0])]
    window: Vec<f32>,
    /// How much of the release velocity carries into the fling
    #[arg(long, default_value_t = 1.0)]
    velocity_factor: f32,
    #[command(flatten)]
    spring: SpringArgs,
}

fn main() -> Result<()> {
    init_tracing();
    let Cli { command } = Cli::parse();

    match command {
        Commands::Graph {
            spring,
            width,
            height,
        } => commands::graph::execute(spring.into(), width, height)?,
        Commands::Convert(args) => match (args.bounce, args.duration) {
            (Some(bounce), Some(duration)) => commands::convert::from_design(bounce, duration)?,
            _ => commands::convert::from_physics(SpringParameters::new(
                args.damping_ratio.unwrap_or_default(),
                args.stiffness.unwrap_or_default(),
            ))?,
        },
        Commands::Estimate {
            spring,
            displacement,
            threshold,
        } => commands::estimate::execute(spring.into(), displacement, threshold)?,
        Commands::Fling(args) => commands::fling::execute(commands::fling::FlingOptions {
            position: commands::fling::vec2(&args.position)?,
            velocity: commands::fling::vec2(&args.velocity)?,
            container: commands::fling::vec2(&args.container)?,
            window: commands::fling::vec2(&args.window)?,
            velocity_factor: args.velocity_factor,
            spring: args.spring.into(),
        })?,
        Commands::Animate {
            spring,
            from,
            to,
            fps,
        } => commands::animate::execute(spring.into(), from, to, fps)?,
    }

    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,motion_math=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
