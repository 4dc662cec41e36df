use std::sync::Arc;

use log::debug;

use crate::catalog::catalog;
use crate::sampling::{ConfigError, SamplingConfig};
use crate::spectrum::{frequency_axis, SpectrumAnalyzer};

/// The frequency window the spectrum row is displayed over; the full axis
/// extends far past what is visually useful.
pub const SPECTRUM_WINDOW: (f64, f64) = (-5.0, 5.0);

/// One rendering instruction: a curve, its grid position, and axis hints.
/// Pure data; how to draw it is entirely the renderer's business.
#[derive(Clone, Debug)]
pub struct PlotCell {
    pub row: usize,
    pub col: usize,
    pub title: String,
    /// Shared domain: the time grid on row 0, the frequency axis on row 1.
    pub x: Arc<Vec<f64>>,
    pub y: Vec<f64>,
    /// Restrict the visible x range; `None` shows the full domain.
    pub x_window: Option<(f64, f64)>,
}

/// Run the whole sampling-and-transform pipeline. Each catalog signal maps
/// to two cells of a 2×N grid: row 0 holds amplitude vs time, row 1 the
/// real part of the spectrum vs frequency, with signals in catalog order
/// along the columns.
pub fn run(config: &SamplingConfig) -> Result<Vec<PlotCell>, ConfigError> {
    config.validate()?;

    let grid = config.grid();
    let time = Arc::new(grid.as_slice().to_vec());
    let frequencies = Arc::new(frequency_axis(config.steps, config.time_step()));
    let analyzer = SpectrumAnalyzer::new(config.steps);

    let signals = catalog();
    let mut cells = Vec::with_capacity(2 * signals.len());
    for (col, signal) in signals.iter().enumerate() {
        debug!("sampling and transforming {}", signal.name);
        let amplitude = signal.sample(&grid);
        let spectrum = analyzer.analyze(&amplitude);
        cells.push(PlotCell {
            row: 0,
            col,
            title: format!("f(t) = {}(t)", signal.name),
            x: Arc::clone(&time),
            y: amplitude,
            x_window: None,
        });
        cells.push(PlotCell {
            row: 1,
            col,
            title: "F(frequency)".to_string(),
            x: Arc::clone(&frequencies),
            y: spectrum.real(),
            x_window: Some(SPECTRUM_WINDOW),
        });
    }
    Ok(cells)
}
