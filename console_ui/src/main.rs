mod render;
mod session;
mod shell;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

use sim_core::{ConfigForm, LaunchMode, Params};

use session::Session;

#[derive(Parser)]
#[command(name = "arcsim")]
#[command(version)]
#[command(about = "2D projectile-motion simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (per-second kinematic readouts)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch once with the given parameters and print the trajectory
    Run {
        /// Ball radius, world units
        #[arg(long, default_value = "10")]
        radius: String,

        /// Launch speed, units per second
        #[arg(long, default_value = "50")]
        speed: String,

        /// Launch angle in degrees (oblique mode only)
        #[arg(long, default_value = "30")]
        angle: String,

        /// Downward gravity, units per second squared
        #[arg(long, default_value = "9.8")]
        gravity: String,

        /// Linear drag coefficient; malformed input falls back to 0
        #[arg(long, default_value = "0")]
        drag: String,

        /// Launch mode
        #[arg(long, value_enum, default_value_t = ModeArg::Oblique)]
        mode: ModeArg,

        /// Step flat out instead of pacing at 120 steps per second
        #[arg(long)]
        fast: bool,
    },

    /// Interactive parameter shell (run / clear / set / mode / quit)
    Shell {
        /// Step flat out instead of pacing at 120 steps per second
        #[arg(long)]
        fast: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Oblique,
    Horizontal,
}

impl From<ModeArg> for LaunchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Oblique => LaunchMode::Oblique,
            ModeArg::Horizontal => LaunchMode::Horizontal,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{h({l:<5})} {m}{n}")))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .expect("logging config is well-formed");
    log4rs::init_config(config).expect("logging initializes once");
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            radius,
            speed,
            angle,
            gravity,
            drag,
            mode,
            fast,
        } => {
            let form = ConfigForm {
                radius,
                speed,
                angle_deg: angle,
                gravity,
                drag,
                mode: mode.into(),
            };
            let config = match form.validate() {
                Ok(config) => config,
                Err(err) => {
                    log::error!("{}", err);
                    std::process::exit(1);
                }
            };

            let step_rate = (!fast).then_some(Params::STEP_RATE);
            let mut session = Session::new(config);
            let summary = session.drive(step_rate);

            print!("{}", render::render_frame(&session));
            log::info!(
                "landed after {} steps ({:.2} simulated seconds) at x = {:.2}, speed {:.2}",
                summary.steps,
                summary.sim_seconds,
                summary.impact_pos.x,
                summary.impact_vel.length()
            );
        }
        Commands::Shell { fast } => {
            let step_rate = (!fast).then_some(Params::STEP_RATE);
            shell::run_shell(step_rate);
        }
    }
}
