use linlab::{Dataset, GradientDescent, LogisticRegression, make_binary_classification, plot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Logistic Regression on Two Gaussian Clusters ===\n");

    let (x, y) = make_binary_classification(200, Some(2));
    let dataset = Dataset::new(x, y)?;
    println!(
        "Generated {} samples, {} features (clusters at (1,1) and (-1,-1))\n",
        dataset.n_samples(),
        dataset.n_features()
    );

    let gd = GradientDescent::new().learning_rate(0.2).iterations(300);
    let mut model = LogisticRegression::new();
    let trace = model.fit(&dataset.features, &dataset.labels, &gd)?;

    let theta = model.theta.as_ref().unwrap();
    println!(
        "Learned parameters: intercept={:.4}, w1={:.4}, w2={:.4}",
        theta[0], theta[1], theta[2]
    );

    let accuracy = model.score(&dataset.features, &dataset.labels)?;
    println!("Training accuracy: {:.1}%", accuracy * 100.0);
    println!(
        "Cross-entropy: {:.4} (first iteration) -> {:.4} (last)",
        trace[0],
        trace[trace.len() - 1]
    );

    let probs = model.predict_proba(&dataset.features)?;
    println!(
        "\nSample probabilities: first={:.3} (label {}), last={:.3} (label {})",
        probs[0],
        dataset.labels[0],
        probs[probs.len() - 1],
        dataset.labels[dataset.labels.len() - 1]
    );

    plot::plot_loss_curve(&trace, "Cross-entropy per iteration", "logistic_loss.png")?;
    plot::plot_decision_boundary(
        &dataset.features,
        &dataset.labels,
        &model,
        "Decision boundary",
        "decision_boundary.png",
    )?;
    println!("\nPlots saved to logistic_loss.png and decision_boundary.png");

    Ok(())
}
