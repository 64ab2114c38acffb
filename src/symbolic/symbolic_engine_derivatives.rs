//! # Symbolic Engine Derivatives Module
//!
//! This module extends the symbolic engine with differentiation, evaluation
//! and numerical validation.
//!
//! ## Key Methods
//!
//! ### Differentiation
//! - `diff()` - analytical derivative with respect to the variable
//! - `n_th_derivative1D()` - higher-order derivatives
//!
//! ### Function evaluation
//! - `eval()` - direct evaluation with the value currently bound to the variable
//! - `lambdify1D()` - turn the tree into a closure of one argument
//!
//! ### Numerical Analysis
//! - `compare_num1D()` - validate the analytical derivative against central differences
//!
//! ### Parsing and Utilities
//! - `parse_expression()` - String to symbolic expression
//! - `sym_to_str()` - Symbolic expression to string
//!
//! Differentiation never simplifies: `d/dx (x*x)` is `((1 * x) + (x * 1))`, and every
//! operand reused by the product or quotient rule is a fresh clone, so the derivative
//! shares no nodes with the source tree.

use crate::symbolic::parse_expr::{ParseError, parse_expression_func};
use crate::symbolic::symbolic_engine::{BinOp, Expr};
use crate::symbolic::utils::{linspace, norm, numerical_derivative};
use log::{debug, info};

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to the variable.
    ///
    /// - d/dx(c) = 0, d/dx(x) = 1
    /// - Sum rule: d/dx(f ± g) = f' ± g'
    /// - Product rule: d/dx(f*g) = f'*g + f*g'
    /// - Quotient rule: d/dx(f/g) = (f'*g - f*g')/(g*g)
    ///
    /// # Returns
    /// New symbolic expression representing the derivative, `self` is not modified
    ///
    /// # Examples
    /// ```
    /// use RustedKinematics::symbolic::symbolic_engine::Expr;
    /// let f = Expr::var() * Expr::var(); // x*x
    /// let mut df_dx = f.diff(); // 1*x + x*1
    /// df_dx.set_variable(3.0);
    /// assert_eq!(df_dx.eval(), 6.0);
    /// ```
    pub fn diff(&self) -> Expr {
        match self {
            Expr::Var(_) => Expr::Const(1.0),
            Expr::Const(_) => Expr::Const(0.0),
            Expr::BinOp(op, lhs, rhs) => match op {
                BinOp::Add => Expr::BinOp(BinOp::Add, lhs.diff().boxed(), rhs.diff().boxed()),
                BinOp::Sub => Expr::BinOp(BinOp::Sub, lhs.diff().boxed(), rhs.diff().boxed()),
                BinOp::Mul => Expr::BinOp(
                    BinOp::Add,
                    Box::new(Expr::BinOp(BinOp::Mul, lhs.diff().boxed(), rhs.clone())),
                    Box::new(Expr::BinOp(BinOp::Mul, lhs.clone(), rhs.diff().boxed())),
                ),
                BinOp::Div => Expr::BinOp(
                    BinOp::Div,
                    Box::new(Expr::BinOp(
                        BinOp::Sub,
                        Box::new(Expr::BinOp(BinOp::Mul, lhs.diff().boxed(), rhs.clone())),
                        Box::new(Expr::BinOp(BinOp::Mul, lhs.clone(), rhs.diff().boxed())),
                    )),
                    Box::new(Expr::BinOp(BinOp::Mul, rhs.clone(), rhs.clone())),
                ),
            },
        }
    } // end of diff

    /// Computes the nth derivative by repeated differentiation.
    ///
    /// # Arguments
    /// * `n` - Order of derivative (0 = copy of the original function, 1 = first derivative, etc.)
    pub fn n_th_derivative1D(&self, n: usize) -> Expr {
        let mut expr = self.clone();
        for _ in 0..n {
            expr = expr.diff();
        }
        expr
    }

    /// EVALUATION

    /// Evaluates the tree using the value currently bound to the variable.
    ///
    /// Division by zero is not an error: the result is inf or NaN as IEEE 754 says.
    pub fn eval(&self) -> f64 {
        match self {
            Expr::Var(x) => *x,
            Expr::Const(val) => *val,
            Expr::BinOp(op, lhs, rhs) => op.apply(lhs.eval(), rhs.eval()),
        }
    }

    /// Turns the expression into a function of one argument.
    ///
    /// The closure owns its own copy of the tree and rebinds it on every call.
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64> {
        let expr = self.clone();
        Box::new(move |x: f64| expr.with_variable(x).eval())
    }

    /// Evaluates the expression at every point of a linspace
    pub fn lambdify1D_from_linspace(&self, start: f64, end: f64, num_values: usize) -> Vec<f64> {
        let mut expr = self.clone();
        linspace(start, end, num_values)
            .into_iter()
            .map(|x| {
                expr.set_variable(x);
                expr.eval()
            })
            .collect()
    }

    /// Compares the analytical derivative with a central-difference approximation
    /// over a linspace.
    ///
    /// # Returns
    /// `(norm, passed)` where `passed` is true if the norm of the difference is below `max_norm`
    pub fn compare_num1D(
        &self,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> (f64, bool) {
        let diff = &self.diff(); // get the analtical derivative
        let analytical_derivative = diff.lambdify1D_from_linspace(start, end, num_values);
        let analitical_function = self.lambdify1D();
        let step = (1.0 / 1e4) * (end - start) / (num_values as f64 - 1.0);
        let domain = linspace(start, end, num_values);
        let numerical_derivative = numerical_derivative(analitical_function, domain, step);
        let norma_val = norm(analytical_derivative, numerical_derivative);
        debug!("compare_num1D: norm = {}, max_norm = {}", norma_val, max_norm);
        (norma_val, max_norm > norma_val)
    }

    /// Converts symbolic expression to human-readable string representation.
    ///
    /// Every operand is wrapped into its own brackets, which is noisy but unambiguous.
    ///
    /// # Examples
    /// ```
    /// use RustedKinematics::symbolic::symbolic_engine::Expr;
    /// let expr = Expr::var() + Expr::Const(2.0);
    /// assert_eq!(expr.sym_to_str(), "(x) + (2)");
    /// ```
    pub fn sym_to_str(&self) -> String {
        match self {
            Expr::Var(_) => "x".to_string(),
            Expr::Const(val) => val.to_string(),
            Expr::BinOp(op, lhs, rhs) => {
                format!("({}) {} ({})", lhs.sym_to_str(), op, rhs.sym_to_str())
            }
        }
    }

    /// PARSING

    /// Parses a string into a symbolic expression, logging the result.
    pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
        match parse_expression_func(input) {
            Ok(expr) => {
                info!("found expression: {}", expr);
                Ok(expr)
            }
            Err(err) => {
                info!("failed to parse '{}': {}", input, err);
                Err(err)
            }
        }
    }
}
