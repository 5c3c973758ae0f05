//! # Symbolic Expression Simplification Module
//!
//! Algebraic simplification for symbolic expressions. Two complementary
//! passes are applied recursively:
//!
//! 1. **Constant Folding**: arithmetic and transcendental operations on
//!    numerical constants are evaluated in place
//! 2. **Algebraic Identities**: rules like x + 0 = x, x * 1 = x, 0 * x = 0,
//!    x^1 = x, x^0 = 1
//!
//! Differentiation produces heavily redundant trees (zero terms from constant
//! branches, unit factors from the chain rule), so the derivatives module
//! runs `simplify` after every `diff` pass.

use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    //___________________________________SIMPLIFICATION____________________________________

    /// Simplifies the expression by constant folding and basic algebraic identities.
    ///
    /// Subexpressions are simplified first, then the rules are applied to the
    /// rebuilt node. The result is structurally stable: simplifying an
    /// already-simplified expression returns an equal tree.
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                    (Expr::Const(a), _) if *a == 0.0 => rhs,
                    (_, Expr::Const(b)) if *b == 0.0 => lhs,
                    _ => Expr::Add(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Sub(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                    (_, Expr::Const(b)) if *b == 0.0 => lhs,
                    _ if lhs == rhs => Expr::Const(0.0),
                    _ => Expr::Sub(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Mul(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                    (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
                    (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(0.0),
                    (Expr::Const(a), _) if *a == 1.0 => rhs,
                    (_, Expr::Const(b)) if *b == 1.0 => lhs,
                    _ => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Div(lhs, rhs) => {
                let lhs = lhs.simplify();
                let rhs = rhs.simplify();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) if *b != 0.0 => Expr::Const(a / b),
                    (Expr::Const(a), _) if *a == 0.0 => Expr::Const(0.0),
                    (_, Expr::Const(b)) if *b == 1.0 => lhs,
                    _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Pow(base, exp) => {
                let base = base.simplify();
                let exp = exp.simplify();
                match (&base, &exp) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(*b)),
                    (_, Expr::Const(b)) if *b == 0.0 => Expr::Const(1.0),
                    (_, Expr::Const(b)) if *b == 1.0 => base,
                    (Expr::Const(a), _) if *a == 1.0 => Expr::Const(1.0),
                    _ => Expr::Pow(Box::new(base), Box::new(exp)),
                }
            }
            Expr::Exp(expr) => match expr.simplify() {
                Expr::Const(val) => Expr::Const(val.exp()),
                simplified => Expr::Exp(Box::new(simplified)),
            },
            Expr::Ln(expr) => match expr.simplify() {
                Expr::Const(val) => Expr::Const(val.ln()),
                simplified => Expr::Ln(Box::new(simplified)),
            },
            Expr::sin(expr) => match expr.simplify() {
                Expr::Const(val) => Expr::Const(val.sin()),
                simplified => Expr::sin(Box::new(simplified)),
            },
            Expr::cos(expr) => match expr.simplify() {
                Expr::Const(val) => Expr::Const(val.cos()),
                simplified => Expr::cos(Box::new(simplified)),
            },
            Expr::tg(expr) => match expr.simplify() {
                Expr::Const(val) => Expr::Const(val.tan()),
                simplified => Expr::tg(Box::new(simplified)),
            },
            Expr::ctg(expr) => match expr.simplify() {
                Expr::Const(val) => Expr::Const(1.0 / val.tan()),
                simplified => Expr::ctg(Box::new(simplified)),
            },
        }
    } // end of simplify
}
