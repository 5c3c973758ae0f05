//! # Symbolic Engine Derivatives Module
//!
//! Extends the symbolic engine with analytical differentiation, direct
//! evaluation and string conversion. `diff` implements the standard calculus
//! rules (power rule, product rule, quotient rule, chain rule) by exhaustive
//! pattern matching on the expression tree; `n_th_derivative1D` chains `diff`
//! with simplification to obtain higher-order derivatives, which is how the
//! quadrature layer gets the second derivative for its error bound.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// Implements the standard differentiation rules:
    /// - Power rule: d/dx(x^n) = n*x^(n-1)
    /// - Product rule: d/dx(f*g) = f'*g + f*g'
    /// - Quotient rule: d/dx(f/g) = (f'*g - f*g')/g^2
    /// - Chain rule: d/dx(f(g(x))) = f'(g(x))*g'(x)
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::Var("x".to_string());
    /// let f = x.clone().pow(Expr::Const(2.0)); // x^2
    /// let df_dx = f.diff("x"); // 2*x
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => Expr::Mul(
                Box::new(Expr::Mul(
                    exp.clone(),
                    Box::new(Expr::Pow(
                        base.clone(),
                        Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                    )),
                )),
                Box::new(base.diff(var)),
            ),
            Expr::Exp(expr) => {
                Expr::Mul(Box::new(Expr::Exp(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => {
                Expr::Mul(Box::new(Expr::cos(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::tg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::cos(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::ctg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::sin(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
        }
    } // end of diff

    /// Computes the nth derivative of a single-variable expression.
    ///
    /// Repeatedly applies differentiation and simplification. n = 0 returns
    /// the (simplified) original function.
    pub fn n_th_derivative1D(&self, var_name: &str, n: usize) -> Expr {
        let mut expr = self.clone();
        let mut i = 0;
        while i < n {
            expr = expr.diff(var_name).simplify();
            i += 1;
        }
        expr.simplify()
    }

    /// Converts symbolic expression to human-readable string representation.
    pub fn sym_to_str(&self, var: &str) -> String {
        match self {
            Expr::Var(name) => name.clone(),
            Expr::Const(val) => val.to_string(),
            Expr::Add(lhs, rhs) => format!("({}) + ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Sub(lhs, rhs) => format!("({}) - ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Mul(lhs, rhs) => format!("({}) * ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Div(lhs, rhs) => format!("({}) / ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Pow(base, exp) => format!("({}^{})", base.sym_to_str(var), exp.sym_to_str(var)),
            Expr::Exp(expr) => format!("exp({})", expr.sym_to_str(var)),
            Expr::Ln(expr) => format!("ln({})", expr.sym_to_str(var)),
            Expr::sin(expr) => format!("sin({})", expr.sym_to_str(var)),
            Expr::cos(expr) => format!("cos({})", expr.sym_to_str(var)),
            Expr::tg(expr) => format!("tg({})", expr.sym_to_str(var)),
            Expr::ctg(expr) => format!("ctg({})", expr.sym_to_str(var)),
        } // end of match
    } // end of sym_to_str

    /// Extracts all unique variable names from the symbolic expression.
    ///
    /// Returns a sorted, deduplicated list. Essential for automatic variable
    /// detection in lambdify1D().
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();

        match self {
            Expr::Var(name) => {
                vars.push(name.clone());
            }
            Expr::Const(_) => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => {
                vars.extend(lhs.all_arguments_are_variables());
                vars.extend(rhs.all_arguments_are_variables());
            }
            Expr::Exp(expr)
            | Expr::Ln(expr)
            | Expr::sin(expr)
            | Expr::cos(expr)
            | Expr::tg(expr)
            | Expr::ctg(expr) => {
                vars.extend(expr.all_arguments_are_variables());
            }
        }

        vars.sort();
        vars.dedup();
        vars
    } // end of all_arguments_are_variables

    /// DIRECT EXPRESSION EVALUATION

    /// Evaluates symbolic expression directly without creating a closure.
    ///
    /// Use lambdify1D() for repeated evaluation, eval_expression() for
    /// one-time use.
    ///
    /// # Panics
    /// Panics if the expression contains a variable not listed in `vars`.
    pub fn eval_expression(&self, vars: Vec<&str>, values: &[f64]) -> f64 {
        match self {
            Expr::Var(name) => {
                let index = vars.iter().position(|&x| x == name).unwrap();
                values[index]
            }
            Expr::Const(val) => *val,
            Expr::Add(lhs, rhs) => {
                lhs.eval_expression(vars.clone(), values) + rhs.eval_expression(vars, values)
            }
            Expr::Sub(lhs, rhs) => {
                lhs.eval_expression(vars.clone(), values) - rhs.eval_expression(vars, values)
            }
            Expr::Mul(lhs, rhs) => {
                lhs.eval_expression(vars.clone(), values) * rhs.eval_expression(vars, values)
            }
            Expr::Div(lhs, rhs) => {
                lhs.eval_expression(vars.clone(), values) / rhs.eval_expression(vars, values)
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.eval_expression(vars.clone(), values);
                let exp_fn = exp.eval_expression(vars, values);
                base_fn.powf(exp_fn)
            }
            Expr::Exp(expr) => expr.eval_expression(vars, values).exp(),
            Expr::Ln(expr) => expr.eval_expression(vars, values).ln(),
            Expr::sin(expr) => expr.eval_expression(vars, values).sin(),
            Expr::cos(expr) => expr.eval_expression(vars, values).cos(),
            Expr::tg(expr) => expr.eval_expression(vars, values).tan(),
            Expr::ctg(expr) => 1.0 / expr.eval_expression(vars, values).tan(),
        }
    } // end of eval_expression
}
