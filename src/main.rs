use std::{fs, process::ExitCode, sync::Arc};

use clap::Parser;
use turtle_logo::{
    error::LogoError,
    interpreter::{control::RunControl, evaluator::core::RunOutcome},
    parse, run,
    settings::Settings,
    turtle::{Canvas, DrawCommand, Turtle},
    util::logging::init_tracing,
};

/// turtle-logo runs turtle-graphics Logo scripts and prints what the turtle
/// drew.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells turtle-logo to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the parse tree instead of running the script.
    #[arg(long)]
    tree: bool,

    /// Prints every logged line and color change after the run.
    #[arg(long)]
    log: bool,

    /// Speed from 1 (slowest) to 100 (no delay between turtle actions).
    #[arg(long, default_value_t = Settings::default().speed,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    speed: u8,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = Settings::default().width)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = Settings::default().height)]
    height: u32,

    contents: String,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings { width: self.width,
                   height: self.height,
                   speed: self.speed,
                   ..Settings::default() }
    }

    fn script(&self) -> Result<String, LogoError> {
        if !self.file {
            return Ok(self.contents.clone());
        }
        fs::read_to_string(&self.contents).map_err(|source| LogoError::Io { path: self.contents.clone(),
                                                                            source })
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn execute(args: &Args) -> Result<(), LogoError> {
    let script = args.script()?;

    if args.tree {
        println!("{:#}", parse(&script)?);
        return Ok(());
    }

    let settings = args.settings();
    let canvas = Arc::new(Canvas::new(settings.width, settings.height));
    let control = Arc::new(RunControl::from_settings(&settings));

    let outcome = run(&script, Turtle::new(Arc::clone(&canvas)), &control)?;
    if outcome == RunOutcome::Stopped {
        eprintln!("Run stopped before completion.");
    }

    if args.log {
        canvas.replay(print_command);
    } else {
        println!("{} drawing commands", canvas.commands().len());
    }
    Ok(())
}

fn print_command(command: &DrawCommand) {
    match command {
        DrawCommand::Line { from, to } => {
            println!("line ({:.2}, {:.2}) -> ({:.2}, {:.2})", from.x, from.y, to.x, to.y);
        },
        DrawCommand::Color { red, green, blue } => println!("color {red} {green} {blue}"),
    }
}
