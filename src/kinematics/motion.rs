//! Position, velocity and acceleration of a point moving along a path s(x).
//!
//! The path is given as a string in the single variable `x` (time), the time of
//! interest is given as another string without a variable.
//!  # Example
//!  ```
//!  use RustedKinematics::kinematics::motion::MotionTask;
//!  let mut task = MotionTask::new();
//!  task.set_task("3", "x*x/2", Some("2"));
//!  task.loglevel = Some("off".to_string());
//!  let result = task.solve().unwrap();
//!  assert_eq!(result.velocity, 3.0);
//!  assert_eq!(task.formatted_result().unwrap()[1], "4.50");
//!  ```
use crate::kinematics::precision::Precision;
use crate::kinematics::trajectory::{Trajectory, TrajectorySettings};
use crate::symbolic::parse_expr::ParseError;
use crate::symbolic::symbolic_engine::Expr;
use chrono::Local;
use log::{debug, error, info, warn};
use simplelog::*;
use std::fs::File;
use std::time::Instant;
use tabled::{builder::Builder, settings::Style};

pub const DEFAULT_TIME_EXPR: &str = "1";
pub const DEFAULT_PATH_EXPR: &str = "x*x/2";

/// the path and its first two derivatives, parsed and differentiated once and
/// then rebound for every time value
#[derive(Clone, Debug, PartialEq)]
pub struct MotionModel {
    pub path: Expr,
    pub velocity: Expr,
    pub acceleration: Expr,
}

impl MotionModel {
    pub fn new(path: Expr) -> MotionModel {
        let velocity = path.diff();
        let acceleration = velocity.diff();
        MotionModel {
            path,
            velocity,
            acceleration,
        }
    }

    pub fn from_path(path_expr: &str) -> Result<MotionModel, ParseError> {
        Ok(MotionModel::new(Expr::parse_expression(path_expr)?))
    }

    /// bind `time` into all three trees and evaluate them
    pub fn at(&mut self, time: f64) -> (f64, f64, f64) {
        self.path.set_variable(time);
        self.velocity.set_variable(time);
        self.acceleration.set_variable(time);
        (
            self.path.eval(),
            self.velocity.eval(),
            self.acceleration.eval(),
        )
    }

    pub fn motion_at(&mut self, time: f64) -> MotionResult {
        let (position, velocity, acceleration) = self.at(time);
        MotionResult {
            time,
            position,
            velocity,
            acceleration,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionResult {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

impl MotionResult {
    pub fn formatted(&self, precision: Precision) -> [String; 4] {
        [
            precision.format(self.time),
            precision.format(self.position),
            precision.format(self.velocity),
            precision.format(self.acceleration),
        ]
    }

    pub fn to_table(&self, precision: Precision) -> String {
        let labels = ["time x", "path s(x)", "velocity s'(x)", "acceleration s''(x)"];
        let mut builder = Builder::default();
        builder.push_record(["quantity", "value"]);
        for (label, value) in labels.iter().zip(self.formatted(precision)) {
            builder.push_record([label.to_string(), value]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.to_string()
    }
}

/// Parse both strings and differentiate the path twice. The time is evaluated right away,
/// a variable inside `time_expr` keeps its default 0.
pub fn prepare_motion(time_expr: &str, path_expr: &str) -> Result<(f64, MotionModel), ParseError> {
    let time_tree = Expr::parse_expression(time_expr)?;
    if time_tree.contains_variable() {
        warn!("time expression '{}' contains the variable, it is taken as 0", time_expr);
    }
    let model = MotionModel::from_path(path_expr)?;
    debug!(
        "tree sizes: path {}, velocity {}, acceleration {}",
        model.path.node_count(),
        model.velocity.node_count(),
        model.acceleration.node_count()
    );
    Ok((time_tree.eval(), model))
}

/// Parse both strings, differentiate the path twice and evaluate everything at the
/// time given by `time_expr`. Nothing is evaluated unless both strings parse.
pub fn compute_motion(time_expr: &str, path_expr: &str) -> Result<MotionResult, ParseError> {
    let (time, mut model) = prepare_motion(time_expr, path_expr)?;
    Ok(model.motion_at(time))
}

pub struct MotionTask {
    pub time_expr: String,
    pub path_expr: String,
    pub precision: Precision,
    pub loglevel: Option<String>, // "off"/"none", "debug", "info", "warn", "error"
    pub log_to_file: bool,
    pub trajectory_settings: Option<TrajectorySettings>,

    result: Option<MotionResult>,
    trajectory: Option<Trajectory>,
}

impl MotionTask {
    pub fn new() -> MotionTask {
        MotionTask {
            time_expr: DEFAULT_TIME_EXPR.to_string(),
            path_expr: DEFAULT_PATH_EXPR.to_string(),
            precision: Precision::default(),
            loglevel: Some("info".to_string()),
            log_to_file: false,
            trajectory_settings: None,
            result: None,
            trajectory: None,
        }
    }
    ////////////////////////////SETTERS///////////////////////////////////////////////////////////////////
    pub fn set_task(&mut self, time_expr: &str, path_expr: &str, precision: Option<&str>) {
        self.time_expr = time_expr.to_string();
        self.path_expr = path_expr.to_string();
        self.precision = Precision::from_text(precision);
    }

    pub fn set_trajectory(&mut self, settings: TrajectorySettings) {
        self.trajectory_settings = Some(settings);
    }

    pub fn solver(&mut self) -> Result<MotionResult, ParseError> {
        self.result = None;
        self.trajectory = None;
        let begin = Instant::now();
        info!(
            "time: '{}', path: '{}', precision: {}",
            self.time_expr, self.path_expr, self.precision
        );
        let (time, mut model) =
            prepare_motion(&self.time_expr, &self.path_expr).map_err(|err| {
                error!("{}", err);
                err
            })?;
        let result = model.motion_at(time);
        if !result.position.is_finite()
            || !result.velocity.is_finite()
            || !result.acceleration.is_finite()
        {
            warn!("result contains non-finite values: {:?}", result);
        }
        if let Some(settings) = &self.trajectory_settings {
            let trajectory = Trajectory::from_model(&mut model, settings);
            info!("trajectory of {} points computed", trajectory.times.len());
            self.trajectory = Some(trajectory);
        }
        info!("computed in {:?}", begin.elapsed());
        self.result = Some(result);
        Ok(result)
    }

    // wrapper around solver function to implement logging
    pub fn solve(&mut self) -> Result<MotionResult, ParseError> {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);

        if is_logging_disabled {
            return self.solver();
        }
        let (log_option, known_level) = match self.loglevel.as_deref() {
            Some("debug") => (LevelFilter::Debug, true),
            Some("info") | None => (LevelFilter::Info, true),
            Some("warn") => (LevelFilter::Warn, true),
            Some("error") => (LevelFilter::Error, true),
            Some(_) => (LevelFilter::Info, false),
        };
        let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
            log_option,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )];
        let mut file_error = None;
        if self.log_to_file {
            let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
            let name = format!("log_{}.txt", date_and_time);
            match File::create(&name) {
                Ok(file) => loggers.push(WriteLogger::new(log_option, Config::default(), file)),
                Err(e) => file_error = Some(format!("cannot create log file {}: {}", name, e)),
            }
        }
        // a logger may already be installed by an earlier call, that is fine
        let _ = CombinedLogger::init(loggers);
        if let Some(msg) = file_error {
            warn!("{}", msg);
        }
        if !known_level {
            warn!(
                "unknown loglevel {:?}, using info",
                self.loglevel.as_deref().unwrap_or_default()
            );
        }
        let res = self.solver();
        info!("Program ended");
        res
    }

    pub fn get_result(&self) -> Option<MotionResult> {
        self.result
    }

    pub fn get_trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    /// four strings with `precision` fractional digits: time, path, velocity, acceleration
    pub fn formatted_result(&self) -> Option<[String; 4]> {
        self.result.map(|res| res.formatted(self.precision))
    }
}

impl Default for MotionTask {
    fn default() -> Self {
        MotionTask::new()
    }
}
