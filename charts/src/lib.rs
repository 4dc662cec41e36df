use plotters::coord::Shift;
use plotters::prelude::*;

use signals::pipeline::PlotCell;

/// Draw every cell into an evenly split rows×cols grid on `root`. Cells
/// address sub-areas in row-major order, matching their (row, col) fields.
pub fn render_gallery<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    rows: usize,
    cols: usize,
    cells: &[PlotCell],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let areas = root.split_evenly((rows, cols));
    for cell in cells {
        build_cell_chart(ChartBuilder::on(&areas[cell.row * cols + cell.col]), cell)?;
    }
    Ok(())
}

/// Draw a single cell: a captioned cartesian chart with one line series.
/// The x range honours the cell's window if set, otherwise spans the data.
pub fn build_cell_chart<DB: DrawingBackend>(
    mut builder: ChartBuilder<DB>,
    cell: &PlotCell,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (x_min, x_max) = match cell.x_window {
        Some(window) => window,
        None => data_range(&cell.x),
    };
    let (y_min, y_max) = padded(data_range(&cell.y));

    let mut chart = builder
        .margin(10)
        .caption(&cell.title, ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_max_light_lines(0)
        .y_max_light_lines(0)
        .draw()?;

    chart.draw_series(LineSeries::new(
        cell.x.iter().copied().zip(cell.y.iter().copied()),
        &RED,
    ))?;

    Ok(())
}

fn data_range(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Widen a range slightly so flat series still get a visible band.
fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    let span = hi - lo;
    if span > 0.0 {
        (lo - 0.05 * span, hi + 0.05 * span)
    } else {
        (lo - 1.0, hi + 1.0)
    }
}
