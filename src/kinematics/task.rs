//! Motion task from a text document:
//! ```text
//! kinematics
//!  time: 2
//!  path: x*x/2
//!  precision: 4
//!  loglevel: info
//! trajectory
//!  start: 0
//!  end: 10
//!  points: 11
//!  csv: motion.csv
//! ```
//! The `trajectory` section is optional, as are `precision`, `loglevel`, `points` and `csv`.
use crate::Utils::task_parser::{DocumentMap, parse_document_as, template_from};
use crate::kinematics::motion::MotionTask;
use crate::kinematics::precision::Precision;
use crate::kinematics::trajectory::TrajectorySettings;
use crate::symbolic::parse_expr::ParseError;
use crate::symbolic::symbolic_engine::Expr;
use log::info;
use std::fmt;
use std::fs;
use std::path::Path;

const KINEMATICS: &str = "kinematics";
const TRAJECTORY: &str = "trajectory";
const KINEMATICS_KEYS: [&str; 4] = ["time", "path", "precision", "loglevel"];
const TRAJECTORY_KEYS: [&str; 4] = ["start", "end", "points", "csv"];
pub const LOG_LEVELS: [&str; 6] = ["off", "none", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq)]
pub enum TaskError {
    Document(String),
    MissingKey(String),
    InvalidValue { key: String, value: String },
    InvalidLogLevel(String),
    Io(String),
    Expression(ParseError),
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskError::Document(msg) => write!(f, "Invalid task document: {}", msg),
            TaskError::MissingKey(key) => write!(f, "Missing key: {}", key),
            TaskError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
            TaskError::InvalidLogLevel(level) => write!(
                f,
                "Invalid loglevel: {} (expected one of {})",
                level,
                LOG_LEVELS.join(", ")
            ),
            TaskError::Io(msg) => write!(f, "I/O error: {}", msg),
            TaskError::Expression(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for TaskError {}

impl From<ParseError> for TaskError {
    fn from(err: ParseError) -> Self {
        TaskError::Expression(err)
    }
}

impl From<std::io::Error> for TaskError {
    fn from(err: std::io::Error) -> Self {
        TaskError::Io(err.to_string())
    }
}

pub fn check_loglevel(level: &str) -> Result<(), TaskError> {
    if LOG_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(TaskError::InvalidLogLevel(level.to_string()))
    }
}

fn template() -> DocumentMap {
    template_from(&[
        (KINEMATICS, &KINEMATICS_KEYS[..]),
        (TRAJECTORY, &TRAJECTORY_KEYS[..]),
    ])
}

fn value<'a>(doc: &'a DocumentMap, section: &str, key: &str) -> Option<&'a str> {
    doc.get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_deref())
}

fn required<'a>(doc: &'a DocumentMap, section: &str, key: &str) -> Result<&'a str, TaskError> {
    value(doc, section, key).ok_or_else(|| TaskError::MissingKey(format!("{}.{}", section, key)))
}

/// time-like values are expressions too, "10/3" is a valid end of the sweep
fn eval_constant(text: &str) -> Result<f64, TaskError> {
    Ok(Expr::parse_expression(text)?.eval())
}

fn trajectory_settings(doc: &DocumentMap) -> Result<Option<TrajectorySettings>, TaskError> {
    let section_given = doc
        .get(TRAJECTORY)
        .map(|s| s.values().any(|v| v.is_some()))
        .unwrap_or(false);
    if !section_given {
        return Ok(None);
    }
    let start = eval_constant(required(doc, TRAJECTORY, "start")?)?;
    let end = eval_constant(required(doc, TRAJECTORY, "end")?)?;
    let points = match value(doc, TRAJECTORY, "points") {
        Some(text) => Some(text.parse::<usize>().map_err(|_| TaskError::InvalidValue {
            key: "points".to_string(),
            value: text.to_string(),
        })?),
        None => None,
    };
    let csv = value(doc, TRAJECTORY, "csv").map(String::from);
    Ok(Some(TrajectorySettings::new(start, end, points, csv)))
}

/// Values given on the command line. Every field that is set wins over the value the task
/// already has, `None` leaves it alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskOverrides {
    pub time: Option<String>,
    pub path: Option<String>,
    pub precision: Option<String>,
    pub loglevel: Option<String>,
    pub log_to_file: bool,
    pub start: Option<String>,
    pub end: Option<String>,
    pub points: Option<usize>,
    pub csv: Option<String>,
}

impl TaskOverrides {
    fn sweep_requested(&self) -> bool {
        self.start.is_some() || self.end.is_some() || self.points.is_some() || self.csv.is_some()
    }
}

/// sweep bound from its text, else from the task, else an error
fn sweep_bound(text: Option<&str>, fallback: Option<f64>, key: &str) -> Result<f64, TaskError> {
    match (text, fallback) {
        (Some(text), _) => eval_constant(text),
        (None, Some(value)) => Ok(value),
        (None, None) => Err(TaskError::MissingKey(key.to_string())),
    }
}

impl MotionTask {
    pub fn apply_overrides(&mut self, overrides: &TaskOverrides) -> Result<(), TaskError> {
        if let Some(time) = &overrides.time {
            self.time_expr = time.clone();
        }
        if let Some(path) = &overrides.path {
            self.path_expr = path.clone();
        }
        if overrides.precision.is_some() {
            self.precision = Precision::from_text(overrides.precision.as_deref());
        }
        if let Some(level) = &overrides.loglevel {
            check_loglevel(level)?;
            self.loglevel = Some(level.clone());
        }
        self.log_to_file = self.log_to_file || overrides.log_to_file;

        if overrides.sweep_requested() {
            let base = self.trajectory_settings.clone();
            let start = sweep_bound(overrides.start.as_deref(), base.as_ref().map(|s| s.start), "start")?;
            let end = sweep_bound(overrides.end.as_deref(), base.as_ref().map(|s| s.end), "end")?;
            let points = overrides.points.or(base.as_ref().map(|s| s.points));
            let csv = overrides.csv.clone().or(base.and_then(|s| s.csv));
            self.set_trajectory(TrajectorySettings::new(start, end, points, csv));
        }
        Ok(())
    }

    pub fn from_document(input: &str) -> Result<MotionTask, TaskError> {
        let doc = parse_document_as(input, Some(&template())).map_err(TaskError::Document)?;
        let mut task = MotionTask::new();
        task.time_expr = required(&doc, KINEMATICS, "time")?.to_string();
        task.path_expr = required(&doc, KINEMATICS, "path")?.to_string();
        task.precision = Precision::from_text(value(&doc, KINEMATICS, "precision"));
        if let Some(level) = value(&doc, KINEMATICS, "loglevel") {
            check_loglevel(level)?;
            task.loglevel = Some(level.to_string());
        }
        task.trajectory_settings = trajectory_settings(&doc)?;
        info!("task loaded: time '{}', path '{}'", task.time_expr, task.path_expr);
        Ok(task)
    }

    pub fn from_file(path: &Path) -> Result<MotionTask, TaskError> {
        let content = fs::read_to_string(path)
            .map_err(|e| TaskError::Io(format!("{}: {}", path.display(), e)))?;
        MotionTask::from_document(&content)
    }
}
