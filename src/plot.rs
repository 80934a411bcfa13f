//! Plotting helpers: loss curves and 2-d decision boundaries, written as PNGs.

use log::info;
use plotters::prelude::*;

use crate::linear_model::Predictor;
use crate::{Matrix, Vector};

/// Draw the loss trace of a training run as a line chart.
pub fn plot_loss_curve(
    losses: &[f64],
    title: &str,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if losses.is_empty() {
        info!("empty loss trace, skipping {}", filename);
        return Ok(());
    }

    let loss_min = losses.iter().cloned().fold(f64::INFINITY, f64::min);
    let mut loss_max = losses.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if loss_max == loss_min {
        loss_max = loss_min + 1.0;
    }

    let root_area = BitMapBackend::new(filename, (640, 480)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .margin(5)
        .set_all_label_area_size(50)
        .caption(title, ("sans-serif", 30).into_font())
        .build_cartesian_2d(0.0..losses.len() as f64, loss_min..loss_max)?;
    chart
        .configure_mesh()
        .x_desc("iteration")
        .y_desc("loss")
        .draw()?;

    chart.draw_series(LineSeries::new(
        losses.iter().enumerate().map(|(i, &loss)| (i as f64, loss)),
        &RED,
    ))?;

    root_area.present()?;
    info!("loss curve written to {}", filename);
    Ok(())
}

/// Shade the plane by predicted label and scatter the training points on top.
///
/// `x` must hold 2-d points, one per row, with 0/1 labels in `y`. The region is
/// the bounding box of the points padded by 0.5, sampled on a 200x200 grid
/// through the model's [`Predictor`] capability.
pub fn plot_decision_boundary(
    x: &Matrix,
    y: &Vector,
    model: &dyn Predictor,
    title: &str,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if x.ncols() != 2 {
        return Err(format!("decision boundary needs 2-d points, got {} features", x.ncols()).into());
    }

    const RESOLUTION: usize = 200;
    let x_min = x.column(0).iter().cloned().fold(f64::INFINITY, f64::min) - 0.5;
    let x_max = x.column(0).iter().cloned().fold(f64::NEG_INFINITY, f64::max) + 0.5;
    let y_min = x.column(1).iter().cloned().fold(f64::INFINITY, f64::min) - 0.5;
    let y_max = x.column(1).iter().cloned().fold(f64::NEG_INFINITY, f64::max) + 0.5;
    let step_x = (x_max - x_min) / RESOLUTION as f64;
    let step_y = (y_max - y_min) / RESOLUTION as f64;

    let mut grid = Matrix::zeros((RESOLUTION * RESOLUTION, 2));
    for row in 0..RESOLUTION {
        for col in 0..RESOLUTION {
            grid[(row * RESOLUTION + col, 0)] = x_min + (col as f64 + 0.5) * step_x;
            grid[(row * RESOLUTION + col, 1)] = y_min + (row as f64 + 0.5) * step_y;
        }
    }
    let labels = model.predict_batch(&grid)?;

    let root_area = BitMapBackend::new(filename, (640, 520)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .margin(5)
        .set_all_label_area_size(50)
        .caption(title, ("sans-serif", 30).into_font())
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart.configure_mesh().x_desc("x1").y_desc("x2").draw()?;

    let positive_region = RGBColor(255, 210, 200);
    let negative_region = RGBColor(200, 215, 255);
    chart.draw_series((0..RESOLUTION * RESOLUTION).map(|i| {
        let x0 = x_min + (i % RESOLUTION) as f64 * step_x;
        let y0 = y_min + (i / RESOLUTION) as f64 * step_y;
        let color = if labels[i] >= 0.5 {
            positive_region
        } else {
            negative_region
        };
        Rectangle::new([(x0, y0), (x0 + step_x, y0 + step_y)], color.filled())
    }))?;

    chart.draw_series(x.rows().into_iter().zip(y.iter()).map(|(point, &label)| {
        let color = if label >= 0.5 { RED } else { BLUE };
        Circle::new((point[0], point[1]), 3, color.filled())
    }))?;

    root_area.present()?;
    info!("decision boundary written to {}", filename);
    Ok(())
}
