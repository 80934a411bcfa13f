use linlab::{GradientDescent, LinearRegression, make_linear_regression};
use linlab::{metrics, plot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Linear Regression: Closed Form vs Gradient Descent ===\n");

    // Ground truth y = 3x + 1 with mild noise
    let (x, y) = make_linear_regression(100, 0.1, Some(0));
    println!(
        "Generated {} samples from y = 3x + 1 + N(0, 0.1)\n",
        x.nrows()
    );

    // Closed form: one normal-equation solve
    let mut closed_form = LinearRegression::new();
    closed_form.fit(&x, &y)?;
    let theta = closed_form.theta.as_ref().unwrap();
    println!("Normal equation:   intercept={:.4}, slope={:.4}", theta[0], theta[1]);

    // Gradient descent on the same data
    let gd = GradientDescent::new().learning_rate(0.1).iterations(500);
    let mut iterative = LinearRegression::new();
    let trace = iterative.fit_gradient_descent(&x, &y, &gd)?;
    let theta = iterative.theta.as_ref().unwrap();
    println!("Gradient descent:  intercept={:.4}, slope={:.4}", theta[0], theta[1]);

    let predictions = iterative.predict(&x)?;
    println!("\nTraining MSE: {:.6}", metrics::mean_squared_error(&y, &predictions)?);
    println!("Training R²:  {:.6}", iterative.score(&x, &y)?);
    println!(
        "Loss trace: {:.6} (first) -> {:.6} (last) over {} iterations",
        trace[0],
        trace[trace.len() - 1],
        trace.len()
    );

    plot::plot_loss_curve(&trace, "MSE per iteration", "linear_loss.png")?;
    println!("\nLoss curve saved to linear_loss.png");

    Ok(())
}
