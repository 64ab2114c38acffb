#![allow(non_snake_case)]
use RustedKinematics::kinematics::motion::MotionTask;
use RustedKinematics::kinematics::task::{TaskError, TaskOverrides};
use argh::FromArgs;
use std::path::Path;
use std::process::ExitCode;

#[derive(FromArgs)]
/// Position, velocity and acceleration of a point moving along the path s(x)
struct Arguments {
    #[argh(option, short = 't')]
    /// time of interest, an expression without the variable (default: 1)
    time: Option<String>,

    #[argh(option, short = 'p')]
    /// path s(x), an expression in x (default: x*x/2)
    path: Option<String>,

    #[argh(option)]
    /// fractional digits of the output, 0..15 (default: 4)
    precision: Option<String>,

    #[argh(option, short = 'l')]
    /// log level: off, debug, info, warn, error (default: off)
    loglevel: Option<String>,

    #[argh(switch)]
    /// also write the log into a timestamped file
    log_file: bool,

    #[argh(option)]
    /// task document; flags given on the command line override its values
    task: Option<String>,

    #[argh(option)]
    /// first time of the trajectory sweep
    start: Option<String>,

    #[argh(option)]
    /// last time of the trajectory sweep
    end: Option<String>,

    #[argh(option)]
    /// number of sweep points (default: 11)
    points: Option<usize>,

    #[argh(option)]
    /// csv file for the sweep table
    csv: Option<String>,
}

fn build_task(args: &Arguments) -> Result<MotionTask, TaskError> {
    let mut task = match &args.task {
        Some(file) => MotionTask::from_file(Path::new(file))?,
        None => {
            let mut task = MotionTask::new();
            task.loglevel = Some("off".to_string());
            task
        }
    };
    let overrides = TaskOverrides {
        time: args.time.clone(),
        path: args.path.clone(),
        precision: args.precision.clone(),
        loglevel: args.loglevel.clone(),
        log_to_file: args.log_file,
        start: args.start.clone(),
        end: args.end.clone(),
        points: args.points,
        csv: args.csv.clone(),
    };
    task.apply_overrides(&overrides)?;
    Ok(task)
}

fn run(args: &Arguments) -> Result<(), TaskError> {
    let mut task = build_task(args)?;
    let result = task.solve()?;
    println!("{}", result.to_table(task.precision));
    if let Some(trajectory) = task.get_trajectory() {
        println!("{}", trajectory.to_table(task.precision));
        if let Some(csv) = task.trajectory_settings.as_ref().and_then(|s| s.csv.as_ref()) {
            trajectory.save_csv(csv)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Arguments = argh::from_env();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
