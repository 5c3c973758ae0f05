#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```rust, ignore
/// use RustedNewtonCotes::symbolic::symbolic_engine::Expr;
/// let input = "x^2";
/// let parsed_expression = Expr::parse_expression(input);
/// println!(" parsed_expression {}", parsed_expression);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) turns a String expression into a symbolic expression
/// 2) turns a symbolic expression into a Rust function
/// 3) turns a symbolic expression into a string expression for printing and control results
///# Example#
/// ```rust, ignore
/// use RustedNewtonCotes::symbolic::symbolic_engine::Expr;
/// let input = "x^2";
/// let f = Expr::parse_expression(input);
/// // differentiate with respect to x
/// let df_dx = f.diff("x");
/// println!("df_dx = {}", df_dx);
/// // convert symbolic expression to a Rust function and evaluate the function
/// let f_res = f.lambdify1D()(2.0);
/// println!("f(2) = {}", f_res);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
///________________________________________________________________________________________________________________________________________________
/// lambdification: turn a symbolic expression into a regular Rust closure
pub mod symbolic_lambdify;
/// constant folding and algebraic identities for expression trees
pub mod symbolic_simplify;

#[cfg(test)]
mod symbolic_engine_tests;
