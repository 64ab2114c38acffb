use crate::symbolic::parse_expr::{ParseError, parse_expression_func};
use crate::symbolic::symbolic_engine::{BinOp, Expr};
use crate::symbolic::utils::numerical_derivative;
//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn x() -> Expr {
        Expr::var()
    }

    fn c(val: f64) -> Expr {
        Expr::Const(val)
    }

    /// random tree over + - * /, every denominator is kept >= 1 so that the
    /// finite difference stays well conditioned
    fn random_expr(rng: &mut StdRng, depth: usize) -> Expr {
        if depth == 0 || rng.random_bool(0.25) {
            return if rng.random_bool(0.5) {
                x()
            } else {
                c(rng.random_range(0.5..2.0))
            };
        }
        let lhs = random_expr(rng, depth - 1);
        let rhs = random_expr(rng, depth - 1);
        match rng.random_range(0..4) {
            0 => lhs + rhs,
            1 => lhs - rhs,
            2 => lhs * rhs,
            _ => {
                let offset = c(rng.random_range(1.0..2.0));
                lhs / (rhs.clone() * rhs + offset)
            }
        }
    }

    #[test]
    fn test_add_sub_mul_div_overloads() {
        assert_eq!(x() + c(2.0), Expr::BinOp(BinOp::Add, x().boxed(), c(2.0).boxed()));
        assert_eq!(x() - c(2.0), Expr::BinOp(BinOp::Sub, x().boxed(), c(2.0).boxed()));
        assert_eq!(x() * c(2.0), Expr::BinOp(BinOp::Mul, x().boxed(), c(2.0).boxed()));
        assert_eq!(x() / c(2.0), Expr::BinOp(BinOp::Div, x().boxed(), c(2.0).boxed()));
    }

    #[test]
    fn test_neg() {
        let neg_expr = -x();
        assert_eq!(neg_expr, Expr::BinOp(BinOp::Mul, c(-1.0).boxed(), x().boxed()));
    }

    #[test]
    fn test_display() {
        let expr = (x() + c(1.0)) * x() / c(2.5);
        assert_eq!(expr.to_string(), "(((x + 1) * x) / 2.5)");
        assert_eq!(expr.sym_to_str(), "(((x) + (1)) * (x)) / (2.5)");
    }

    #[test]
    fn test_display_parses_back() {
        let expr = parse_expression_func("x*x/2 - (3 - x)/(x + 1)").unwrap();
        let reparsed = parse_expression_func(&expr.to_string()).unwrap();
        assert_eq!(expr, reparsed);
    }

    #[test]
    fn test_display_parses_back_with_negative_constants() {
        let expr = parse_expression_func("x*(-2)").unwrap();
        assert_eq!(expr, x() * c(-2.0));
        assert_eq!(expr.to_string(), "(x * (-2))");
        assert_eq!(parse_expression_func(&expr.to_string()), Ok(expr));

        for input in ["(-1.5)/x - (-3)", "-4*x + x/(-0.5)", "-7"] {
            let expr = parse_expression_func(input).unwrap();
            let printed = expr.to_string();
            assert_eq!(parse_expression_func(&printed), Ok(expr.clone()), "printed: {}", printed);
            assert_eq!(parse_expression_func(&expr.sym_to_str()), Ok(expr));
        }
        // trees built in code may carry -0.0 as well
        let expr = x() - c(-0.0);
        assert_eq!(parse_expression_func(&expr.to_string()), Ok(expr));
    }

    #[test]
    fn test_set_variable_binds_every_occurrence() {
        let mut expr = x() * x() + x();
        expr.set_variable(3.0);
        assert_eq!(expr, Expr::Var(3.0) * Expr::Var(3.0) + Expr::Var(3.0));
        assert_eq!(expr.eval(), 12.0);
    }

    #[test]
    fn test_set_variable_leaves_constants() {
        let mut expr = c(2.0) * c(5.0);
        expr.set_variable(7.0);
        assert_eq!(expr, c(2.0) * c(5.0));
    }

    #[test]
    fn test_unbound_variable_defaults_to_zero() {
        let expr = parse_expression_func("x + 4").unwrap();
        assert_eq!(expr.eval(), 4.0);
    }

    #[test]
    fn test_contains_variable() {
        assert!(parse_expression_func("2*(1+x)").unwrap().contains_variable());
        assert!(!parse_expression_func("2*(1+3)").unwrap().contains_variable());
    }

    #[test]
    fn test_node_count() {
        assert_eq!(x().node_count(), 1);
        assert_eq!(parse_expression_func("x*x/2").unwrap().node_count(), 5);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = parse_expression_func("x*x + 1").unwrap();
        original.set_variable(2.0);
        let mut copy = original.clone();
        copy.set_variable(10.0);
        assert_eq!(original.eval(), 5.0);
        assert_eq!(copy.eval(), 101.0);
        assert_eq!(original, Expr::Var(2.0) * Expr::Var(2.0) + c(1.0));
    }

    #[test]
    fn test_with_variable_does_not_touch_source() {
        let source = x() * c(3.0);
        let bound = source.with_variable(2.0);
        assert_eq!(bound.eval(), 6.0);
        assert_eq!(source.eval(), 0.0);
    }

    #[test]
    fn test_diff_constant_and_variable() {
        assert_eq!(c(5.0).diff(), c(0.0));
        assert_eq!(x().diff(), c(1.0));
        let mut dx = x().diff();
        for value in [-3.0, 0.0, 42.0] {
            dx.set_variable(value);
            assert_eq!(dx.eval(), 1.0);
        }
    }

    #[test]
    fn test_diff_sum_and_difference() {
        assert_eq!((x() + c(2.0)).diff(), c(1.0) + c(0.0));
        assert_eq!((x() - c(2.0)).diff(), c(1.0) - c(0.0));
    }

    #[test]
    fn test_diff_product_rule_shape() {
        let f = x() * c(3.0);
        assert_eq!(f.diff(), c(1.0) * c(3.0) + x() * c(0.0));
    }

    #[test]
    fn test_diff_quotient_rule_shape() {
        let f = c(1.0) / x();
        let expected = (c(0.0) * x() - c(1.0) * c(1.0)) / (x() * x());
        assert_eq!(f.diff(), expected);
    }

    #[test]
    fn test_diff_does_not_mutate_source() {
        let mut f = parse_expression_func("x*x/(x+1)").unwrap();
        f.set_variable(2.0);
        let before = f.clone();
        let mut df = f.diff();
        df.set_variable(-5.0);
        assert_eq!(f, before);
    }

    #[test]
    fn test_double_derivative_of_constants_is_zero() {
        for input in ["7", "(1+2)*(3-1)", "4/0.5-3"] {
            let expr = parse_expression_func(input).unwrap();
            let mut second = expr.diff().diff();
            for value in [-1.0, 0.5, 3.0] {
                second.set_variable(value);
                assert_eq!(second.eval(), 0.0, "input {}", input);
            }
        }
    }

    #[test]
    fn test_path_x_squared_over_two() {
        let s = parse_expression_func("x*x/2").unwrap();
        let mut v = s.diff();
        let mut a = v.diff();
        let mut s = s;
        s.set_variable(3.0);
        v.set_variable(3.0);
        a.set_variable(3.0);
        assert_relative_eq!(s.eval(), 4.5);
        assert_relative_eq!(v.eval(), 3.0);
        assert_relative_eq!(a.eval(), 1.0);
    }

    #[test]
    fn test_n_th_derivative() {
        let f = parse_expression_func("x*x*x").unwrap();
        assert_eq!(f.n_th_derivative1D(0), f);
        let f3 = f.n_th_derivative1D(3);
        assert_relative_eq!(f3.with_variable(1.7).eval(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(f3.diff().with_variable(1.7).eval(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let expr = parse_expression_func("1/0").unwrap();
        assert_eq!(expr.eval(), f64::INFINITY);
        let expr = parse_expression_func("-1/0").unwrap();
        assert_eq!(expr.eval(), f64::NEG_INFINITY);
        let expr = parse_expression_func("0/0").unwrap();
        assert!(expr.eval().is_nan());
        let mut expr = parse_expression_func("1/x").unwrap();
        expr.set_variable(0.0);
        assert_eq!(expr.eval(), f64::INFINITY);
    }

    #[test]
    fn test_redundant_brackets_do_not_change_result() {
        let inputs = ["2+3*4", "x*x/2", "(1+2)*(3-1)", "10-3-2", "x/(x+1)"];
        for input in inputs {
            let plain = parse_expression_func(input).unwrap().with_variable(1.5).eval();
            for n in 1..4 {
                let wrapped = format!("{}{}{}", "(".repeat(n), input, ")".repeat(n));
                let value = parse_expression_func(&wrapped).unwrap().with_variable(1.5).eval();
                assert_eq!(plain, value, "{}", wrapped);
            }
        }
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let a = parse_expression_func(" ( 1 +\t2 ) *\n( 3 - 1 ) ").unwrap();
        assert_eq!(a.eval(), 6.0);
    }

    #[test]
    fn test_parse_error_aborts_whole_tree() {
        assert_eq!(
            parse_expression_func("(x+1)*(2a-x)"),
            Err(ParseError::InvalidOperand("2a".to_string()))
        );
        assert_eq!(
            parse_expression_func("x*(1+)"),
            Err(ParseError::EmptyExpression)
        );
    }

    #[test]
    fn test_compare_num1D() {
        let f = parse_expression_func("x*x/(x+3) - 2*x").unwrap();
        let (norm, passed) = f.compare_num1D(0.0, 5.0, 50, 1e-4);
        assert!(passed, "norm = {}", norm);
    }

    #[test]
    fn test_lambdify1D() {
        let f = parse_expression_func("x*x - 1").unwrap().lambdify1D();
        assert_eq!(f(3.0), 8.0);
        assert_eq!(f(-1.0), 0.0);
    }

    #[test]
    fn test_lambdify1D_from_linspace() {
        let f = parse_expression_func("2*x").unwrap();
        assert_eq!(f.lambdify1D_from_linspace(0.0, 2.0, 3), vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_random_expressions_match_finite_differences() {
        let mut rng = StdRng::seed_from_u64(2024);
        let h = 1e-5;
        for _ in 0..200 {
            let f = random_expr(&mut rng, 4);
            let df = f.diff();
            let points: Vec<f64> = (0..5).map(|_| rng.random_range(-2.0..2.0)).collect();
            let numeric = numerical_derivative(f.lambdify1D(), points.clone(), h);
            for (point, approx_value) in points.iter().zip(numeric) {
                let exact = df.with_variable(*point).eval();
                let tolerance = 1e-4 * exact.abs().max(1.0);
                assert!(
                    (exact - approx_value).abs() <= tolerance,
                    "f = {}, x = {}, symbolic = {}, numeric = {}",
                    f,
                    point,
                    exact,
                    approx_value
                );
            }
        }
    }

    #[test]
    fn test_random_second_derivative_matches_finite_differences() {
        let mut rng = StdRng::seed_from_u64(7);
        let h = 1e-4;
        for _ in 0..100 {
            let f = random_expr(&mut rng, 3);
            let df = f.diff();
            let d2f = df.diff();
            let point = rng.random_range(-2.0..2.0);
            let numeric = numerical_derivative(df.lambdify1D(), vec![point], h)[0];
            let exact = d2f.with_variable(point).eval();
            assert!(
                (exact - numeric).abs() <= 1e-4 * exact.abs().max(1.0),
                "f = {}, x = {}, symbolic = {}, numeric = {}",
                f,
                point,
                exact,
                numeric
            );
        }
    }
}
