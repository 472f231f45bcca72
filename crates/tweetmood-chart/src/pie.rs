//! Donut-style pie chart of the positive/negative split, written as SVG.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use thiserror::Error;
use tracing::info;
use tweetmood_core::{AggregateResult, Sentiment};

pub const DEFAULT_OUTPUT: &str = "tweetmood.svg";

const SIZE: (u32, u32) = (900, 700);
const POSITIVE_COLOR: RGBColor = RGBColor(0xff, 0x99, 0x99);
const NEGATIVE_COLOR: RGBColor = RGBColor(0x66, 0xb3, 0xff);
const START_ANGLE: f64 = 140.0;
/// Hole radius as a share of the outer radius.
const DONUT_RATIO: f64 = 0.70;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("cannot draw chart to {path}: {reason}")]
    Draw { path: PathBuf, reason: String },
}

/// Renders an aggregate. Fire-and-forget: callers do not consume any output.
pub trait ChartRenderer {
    fn render(&self, result: &AggregateResult, title: &str) -> Result<(), ChartError>;
}

/// Two-slice donut chart saved as an SVG file.
pub struct PieChart {
    output: PathBuf,
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}

impl PieChart {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    fn draw(&self, result: &AggregateResult, title: &str) -> Result<(), String> {
        let root = SVGBackend::new(&self.output, SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let area = root
            .titled(title, ("sans-serif", 28))
            .map_err(|e| e.to_string())?;

        let (width, height) = area.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.38;

        let slices = [Sentiment::Positive, Sentiment::Negative];
        let sizes: Vec<f64> = slices.iter().map(|&s| result.percentage(s)).collect();
        let labels: Vec<String> = slices
            .iter()
            .map(|&s| format!("{} ({:.2}%)", s.label(), result.percentage(s)))
            .collect();
        let colors = [POSITIVE_COLOR, NEGATIVE_COLOR];

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(START_ANGLE);
        pie.donut_hole(radius * DONUT_RATIO);
        pie.label_style(("sans-serif", 20).into_font().color(&BLACK));
        area.draw(&pie).map_err(|e| e.to_string())?;

        root.present().map_err(|e| e.to_string())?;
        Ok(())
    }
}

impl ChartRenderer for PieChart {
    fn render(&self, result: &AggregateResult, title: &str) -> Result<(), ChartError> {
        self.draw(result, title).map_err(|reason| ChartError::Draw {
            path: self.output.clone(),
            reason,
        })?;
        info!(path = %self.output.display(), "chart written");
        Ok(())
    }
}
