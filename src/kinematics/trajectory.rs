use crate::Utils::logger::save_rows_to_csv;
use crate::kinematics::motion::MotionModel;
use crate::kinematics::precision::Precision;
use crate::symbolic::parse_expr::ParseError;
use crate::symbolic::utils::linspace;
use log::info;
use std::io;
use tabled::{builder::Builder, settings::Style};

pub const DEFAULT_POINTS: usize = 11;

#[derive(Clone, Debug, PartialEq)]
pub struct TrajectorySettings {
    pub start: f64,
    pub end: f64,
    pub points: usize,
    pub csv: Option<String>, // file name for the table, None - no file
}

impl TrajectorySettings {
    pub fn new(start: f64, end: f64, points: Option<usize>, csv: Option<String>) -> Self {
        TrajectorySettings {
            start,
            end,
            points: points.unwrap_or(DEFAULT_POINTS),
            csv,
        }
    }
}

/// s(t), v(t), a(t) sampled on an evenly spaced time grid
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub rows: Vec<Vec<f64>>,
}

impl Trajectory {
    /// the path is parsed and differentiated once, the same three trees are rebound for every time
    pub fn compute(path_expr: &str, settings: &TrajectorySettings) -> Result<Trajectory, ParseError> {
        let mut model = MotionModel::from_path(path_expr)?;
        Ok(Trajectory::from_model(&mut model, settings))
    }

    /// sweep an already differentiated model, its trees are left bound to the last time
    pub fn from_model(model: &mut MotionModel, settings: &TrajectorySettings) -> Trajectory {
        let times = linspace(settings.start, settings.end, settings.points);
        let rows = times
            .iter()
            .map(|&t| {
                let (s, v, a) = model.at(t);
                vec![s, v, a]
            })
            .collect();
        Trajectory { times, rows }
    }

    pub fn headers() -> Vec<String> {
        vec!["s(t)".to_string(), "v(t)".to_string(), "a(t)".to_string()]
    }

    pub fn to_table(&self, precision: Precision) -> String {
        let mut builder = Builder::default();
        let mut header = vec!["t".to_string()];
        header.extend(Self::headers());
        builder.push_record(header);
        for (t, row) in self.times.iter().zip(self.rows.iter()) {
            let mut record = vec![precision.format(*t)];
            record.extend(row.iter().map(|v| precision.format(*v)));
            builder.push_record(record);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.to_string()
    }

    pub fn save_csv(&self, filename: &str) -> io::Result<()> {
        save_rows_to_csv(&self.rows, &Self::headers(), filename, &self.times, "t")?;
        info!("trajectory saved to {}", filename);
        Ok(())
    }
}
