//! Finds a root of `x³ - 2x - 5` from random guesses and steps through the run.
//!
//! Run with `RUST_LOG=debug` (or `trace`) to see solver logging.

use rootline_core::Function;
use rootline_replay::{Frame, SecantLine, StepCursor};
use rootline_solvers::equation::secant::{Config, Degeneracy, SecantSolver, Status};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let degeneracy = Degeneracy::perturb();
    let config = Config::default().with_degeneracy(degeneracy)?;
    let f = Function::new(|x: f64| x.powi(3) - 2.0 * x - 5.0);

    let solver = SecantSolver::new(&f).with_config(config);
    let [x0, x1] = solver.guesses().as_array();
    println!("f(x) = x^3 - 2x - 5, starting from {x0:.4} and {x1:.4}");

    let solution = solver.start()?;
    let trajectory = solution.trajectory();

    for (i, point) in trajectory.rounded(4).iter().enumerate() {
        println!("{i:>4}: [{}, {}]", point.x, point.y);
    }
    match solution.status {
        Status::Converged => println!("root: {}", solution.root()),
        status => println!("best estimate: {} ({status:?})", solution.root()),
    }

    let mut cursor = StepCursor::new(trajectory);
    loop {
        if let Some(frame) = Frame::at(trajectory, cursor.read(), degeneracy) {
            let [a, b] = frame.segment.map(|p| p.rounded(2));
            let line = match frame.line {
                SecantLine::Sloped { slope, .. } => format!("slope {slope:.4}"),
                SecantLine::Vertical { x } => format!("vertical at {x:.4}"),
            };
            println!(
                "step {:>3}: ({}, {}) -> ({}, {}), {line}, next x = {:.4}",
                frame.step, a.x, a.y, b.x, b.y, frame.marker_x
            );
        }
        if !cursor.advance() {
            break;
        }
    }

    Ok(())
}
