#![allow(non_snake_case)]
use RustedSpectral::Utils::logger::init_logger;
use RustedSpectral::Utils::plots::{plot_convergence, plot_sparsity};
use RustedSpectral::galerkin::assembly::assemble_operator;
use RustedSpectral::galerkin::driver::convergence_sweep;
use RustedSpectral::galerkin::manufactured::Equation;
use RustedSpectral::spectral::family::PolyFamily;
use log::{error, info};

fn main() {
    init_logger(Some("info".to_string()));

    let sizes: Vec<usize> = (8..40).step_by(4).collect();
    let family = PolyFamily::Legendre;
    let eq = Equation::VariableCoefficient;

    let sweep = match convergence_sweep(&sizes, family, eq) {
        Ok(sweep) => sweep,
        Err(e) => {
            error!("convergence sweep failed: {}", e);
            std::process::exit(1);
        }
    };

    for (method, errors) in &sweep.curves {
        let row: Vec<String> = errors.iter().map(|e| format!("{:9.2e}", e)).collect();
        info!("{:<12} {}", format!("{}", method), row.join(" "));
    }

    plot_convergence("convergence.png", &sweep);

    match assemble_operator(20, PolyFamily::Chebyshev, eq) {
        Ok(op) => plot_sparsity("sparsity.png", &op),
        Err(e) => {
            error!("operator assembly failed: {}", e);
            std::process::exit(1);
        }
    }
    info!("wrote convergence.png and sparsity.png");
}
