#![allow(non_snake_case)]
use RustedNewtonCotes::numerical::newton_cotes::NewtonCotesH2;
use RustedNewtonCotes::symbolic::symbolic_engine::Expr;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    // sample function f(x) = x^2
    let sample_function = Expr::parse_expression("x^2");

    // integration limits
    let lower_limit = 0.0;
    let upper_limit = 2.0;

    // compute the integral and step size
    let solver = NewtonCotesH2::new(sample_function, lower_limit, upper_limit);
    let (result, _step_size) = solver.integrate()?;
    println!(
        "The integral of f(x) from {} to {} is approximately {:.4}",
        lower_limit, upper_limit, result
    );
    Ok(())
}
