use crate::galerkin::driver::SweepResult;
use crate::spectral::operator::PGOperator;

/// Plot semilog convergence curves (log10 of the discrete L2 error against
/// the problem size) for every projection strategy, one marker style per
/// method, into a PNG file.
pub fn plot_convergence(filename: &str, sweep: &SweepResult) {
    use plotters::prelude::*;
    let x_min = *sweep.sizes.first().unwrap() as f64;
    let x_max = *sweep.sizes.last().unwrap() as f64;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for (_, errors) in &sweep.curves {
        for &e in errors {
            let v = e.max(1e-16).log10();
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
    }

    let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE).unwrap();

    let mut chart = ChartBuilder::on(&root_area)
        .caption("Petrov-Galerkin convergence", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min - 1.0..x_max + 1.0, y_min - 0.5..y_max + 0.5)
        .unwrap();

    chart
        .configure_mesh()
        .x_desc("N")
        .y_desc("log10 ||u_N - u||")
        .draw()
        .unwrap();

    for (col, (method, errors)) in sweep.curves.iter().enumerate() {
        let series: Vec<(f64, f64)> = sweep
            .sizes
            .iter()
            .zip(errors.iter())
            .map(|(&n, &e)| (n as f64, e.max(1e-16).log10()))
            .collect();
        chart
            .draw_series(
                series
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, Palette99::pick(col).filled())),
            )
            .unwrap()
            .label(format!("{}", method))
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, Palette99::pick(col).filled()));
        chart
            .draw_series(LineSeries::new(series, &Palette99::pick(col)))
            .unwrap();
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .unwrap();
}

/// Scatter the nonzero pattern of a weak-form operator (matrix "spy" plot)
/// into a PNG file; row 0 is drawn at the top.
pub fn plot_sparsity(filename: &str, op: &PGOperator) {
    use plotters::prelude::*;
    let (rows, cols) = op.shape();

    let root_area = BitMapBackend::new(filename, (600, 600)).into_drawing_area();
    root_area.fill(&WHITE).unwrap();

    let mut chart = ChartBuilder::on(&root_area)
        .caption(
            format!("operator nonzeros ({} of {})", op.nnz(), rows * cols),
            ("sans-serif", 25),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-0.5..cols as f64 - 0.5, -0.5..rows as f64 - 0.5)
        .unwrap();

    chart.configure_mesh().draw().unwrap();

    chart
        .draw_series(op.nonzero_positions().into_iter().map(|(i, j)| {
            Circle::new((j as f64, (rows - 1 - i) as f64), 5, BLACK.filled())
        }))
        .unwrap();
}
