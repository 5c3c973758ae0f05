use crate::symbolic::symbolic_engine::Expr;
use crate::symbols;
//___________________________________TESTS____________________________________

mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_symbols() {
        let vars = Expr::Symbols("x, y");
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0], Expr::Var("x".to_string()));
        assert_eq!(vars[1], Expr::Var("y".to_string()));
    }

    #[test]
    fn test_symbols_macro() {
        let x = symbols!(x);
        assert_eq!(x, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_ops() {
        let x = Expr::Var("x".to_string());
        let expr = x.clone() + Expr::Const(2.0);
        let expected = Expr::Add(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_neg() {
        let expr = Expr::Var("x".to_string());
        let neg_expr = -expr;
        let expected = Expr::Mul(
            Box::new(Expr::Const(-1.0)),
            Box::new(Expr::Var("x".to_string())),
        );
        assert_eq!(neg_expr, expected);
    }

    #[test]
    fn test_diff() {
        let x = Expr::Var("x".to_string());
        let f = Expr::Pow(Box::new(x.clone()), Box::new(Expr::Const(2.0)));
        let df_dx = f.diff("x");
        let C = Expr::Const(2.0);
        let C1 = Expr::Const(1.0);

        let expected_result = C.clone() * Expr::pow(x.clone(), C.clone() - C1.clone()) * C1.clone();
        assert_eq!(df_dx, expected_result);
    }

    #[test]
    fn test_diff_simplified() {
        let x = Expr::Var("x".to_string());
        let f = x.clone().pow(Expr::Const(2.0));
        let df_dx = f.diff("x").simplify();
        let expected = Expr::Const(2.0) * x;
        assert_eq!(df_dx, expected);
    }

    #[test]
    fn test_second_derivative_of_square() {
        let x = Expr::Var("x".to_string());
        let f = x.clone().pow(Expr::Const(2.0));
        let d2f_dx2 = f.n_th_derivative1D("x", 2);
        assert_eq!(d2f_dx2, Expr::Const(2.0));
    }

    #[test]
    fn test_second_derivative_of_linear_is_zero() {
        let x = Expr::Var("x".to_string());
        let d2f_dx2 = x.n_th_derivative1D("x", 2);
        assert_eq!(d2f_dx2, Expr::Const(0.0));
    }

    #[test]
    fn test_diff_sin() {
        let x = Expr::Var("x".to_string());
        let f = Expr::sin(Box::new(x.clone()));
        let df_dx = f.diff("x").simplify();
        let expected = Expr::cos(Box::new(x));
        assert_eq!(df_dx, expected);
    }

    #[test]
    fn test_diff_exp_chain_rule() {
        // d/dx exp(2*x) = exp(2*x) * 2
        let f = Expr::parse_expression("exp(2*x)");
        let df_dx = f.diff("x").simplify();
        let df = df_dx.lambdify1D();
        assert_relative_eq!(df(0.5), 2.0 * (1.0f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_set_variable() {
        let f = Expr::parse_expression("x^2 + 1");
        let substituted = f.set_variable("x", 3.0).simplify();
        assert_eq!(substituted, Expr::Const(10.0));
    }

    #[test]
    fn test_contains_variable() {
        let f = Expr::parse_expression("x^2 + sin(y)");
        assert!(f.contains_variable("x"));
        assert!(f.contains_variable("y"));
        assert!(!f.contains_variable("z"));
    }

    #[test]
    fn test_all_arguments_are_variables() {
        let f = Expr::parse_expression("x^2 + y*x");
        let vars = f.all_arguments_are_variables();
        assert_eq!(vars, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_lambdify1D() {
        let f = Expr::parse_expression("x^2");
        let func = f.lambdify1D();
        assert_relative_eq!(func(3.0), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lambdify1D_constant() {
        let f = Expr::Const(5.0);
        let func = f.lambdify1D();
        assert_relative_eq!(func(100.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eval_expression() {
        let f = Expr::parse_expression("x^2 + y");
        let result = f.eval_expression(vec!["x", "y"], &[3.0, 1.0]);
        assert_relative_eq!(result, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simplify_identities() {
        let x = Expr::Var("x".to_string());
        assert_eq!((x.clone() + Expr::Const(0.0)).simplify(), x.clone());
        assert_eq!((x.clone() * Expr::Const(1.0)).simplify(), x.clone());
        assert_eq!((x.clone() * Expr::Const(0.0)).simplify(), Expr::Const(0.0));
        assert_eq!(
            x.clone().pow(Expr::Const(0.0)).simplify(),
            Expr::Const(1.0)
        );
        assert_eq!(x.clone().pow(Expr::Const(1.0)).simplify(), x.clone());
    }

    #[test]
    fn test_simplify_constant_folding() {
        let expr = Expr::Const(2.0) * Expr::Const(3.0) + Expr::Const(1.0);
        assert_eq!(expr.simplify(), Expr::Const(7.0));
    }

    #[test]
    fn test_parse_expression() {
        let parsed = Expr::parse_expression("2*x + 1");
        let expected = Expr::Const(2.0) * Expr::Var("x".to_string()) + Expr::Const(1.0);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_unary_minus() {
        let parsed = Expr::parse_expression("-x");
        let expected = Expr::Mul(
            Box::new(Expr::Const(-1.0)),
            Box::new(Expr::Var("x".to_string())),
        );
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_functions() {
        let parsed = Expr::parse_expression("exp(x) + log(x)");
        let x = Box::new(Expr::Var("x".to_string()));
        let expected = Expr::Add(
            Box::new(Expr::Exp(x.clone())),
            Box::new(Expr::Ln(x)),
        );
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_scientific_notation() {
        let parsed = Expr::parse_expression("1e-2");
        assert_eq!(parsed, Expr::Const(0.01));
    }

    #[test]
    fn test_parse_precedence() {
        // 1 + 2*x^2 at x = 3 is 19
        let parsed = Expr::parse_expression("1 + 2*x^2");
        let f = parsed.lambdify1D();
        assert_relative_eq!(f(3.0), 19.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_error() {
        use crate::symbolic::parse_expr::parse_expression_func;
        assert!(parse_expression_func("2*/x").is_err());
        assert!(parse_expression_func("").is_err());
        assert!(parse_expression_func("foo(x)").is_err());
    }

    #[test]
    fn test_display() {
        let expr = Expr::parse_expression("x + 2");
        assert_eq!(format!("{}", expr), "(x + 2)");
    }

    #[test]
    fn test_sym_to_str() {
        let expr = Expr::Add(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr.sym_to_str("x"), "(x) + (2)");
    }
}
