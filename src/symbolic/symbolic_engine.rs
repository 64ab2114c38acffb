//! # Symbolic Engine Module
//!
//! This module provides the expression tree used throughout the crate: a closed set of
//! node kinds for single-variable arithmetic, together with construction helpers,
//! pretty printing and the in-place variable binder.
//!
//! ## Purpose
//!
//! The symbolic engine allows users to:
//! - Build expression trees from code (operator overloading) or from strings (see `parse_expr`)
//! - Bind a numeric value to every occurrence of the variable
//! - Print trees in a fully parenthesized human-readable form
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Variable**: `Var(f64)` - the single variable `x`, holding its currently bound value
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Operations**: `BinOp(BinOp, Box<Expr>, Box<Expr>)` - `+ - * /`
//!
//! ### Key Methods
//! - `set_variable(value)` - bind a value to every variable leaf, in place
//! - `contains_variable()` - check whether the tree depends on `x`
//! - `diff()` / `eval()` - see `symbolic_engine_derivatives`
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: Uses Box<Expr> for children, each node owns its two
//!    operands exclusively, so `Clone` is always a deep, independent copy and dropping a
//!    tree tears down every descendant exactly once
//!
//! 2. **Operator Overloading**: Implements std::ops traits (Add, Sub, Mul, Div, Neg) for
//!    natural syntax: `x + Expr::Const(2.0) * x`
//!
//! 3. **Mutable leaf**: the bound value lives inside the `Var` leaf itself, there is no
//!    evaluation context to pass around

use std::fmt;
use strum_macros::{Display, EnumIter};

/// Binary operator kinds.
///
/// The declaration order is the order in which the parser tries to split a string:
/// additive operators first, so that multiplicative ones end up deeper in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum BinOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl BinOp {
    /// operator character as it appears in the input text
    pub fn symbol(&self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }

    /// apply the operator to two numbers (IEEE 754 semantics, x/0 is inf or NaN)
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => lhs / rhs,
        }
    }
}

/// Core symbolic expression enum representing a single-variable arithmetic expression
/// as an abstract syntax tree.
///
/// # Examples
/// ```
/// use RustedKinematics::symbolic::symbolic_engine::{BinOp, Expr};
/// let x = Expr::Var(0.0);
/// let expr = Expr::BinOp(BinOp::Add, Box::new(x), Box::new(Expr::Const(2.0)));
/// assert_eq!(expr.to_string(), "(x + 2)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// The variable `x` together with the value currently bound to it
    Var(f64),
    /// Numerical constant value
    Const(f64),
    /// Binary operation: left (op) right
    BinOp(BinOp, Box<Expr>, Box<Expr>),
}

/// Display implementation for pretty printing symbolic expressions.
///
/// Every binary operation is wrapped in parentheses and so is every negative
/// constant (a bare `-2` on the right of an operator would be read as a
/// subtraction), so the printed text parses back into the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(_) => write!(f, "x"),
            Expr::Const(val) if val.is_sign_negative() => write!(f, "({})", val),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::BinOp(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::BinOp(BinOp::Add, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::BinOp(BinOp::Sub, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::BinOp(BinOp::Mul, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::BinOp(BinOp::Div, self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Const(-1.0) * self
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates the variable leaf with the default binding 0.0
    pub fn var() -> Expr {
        Expr::Var(0.0)
    }

    /// Binds `value` to the variable throughout the expression, in place.
    ///
    /// Recursively traverses the tree and overwrites the value held by every `Var`
    /// leaf. The variable may occur any number of times (`x*x`), so binding is a
    /// whole-tree walk rather than a single assignment. Constants are left alone.
    ///
    /// # Arguments
    /// * `value` - Numerical value to bind to the variable
    pub fn set_variable(&mut self, value: f64) {
        match self {
            Expr::Var(x) => *x = value,
            Expr::Const(_) => {}
            Expr::BinOp(_, lhs, rhs) => {
                lhs.set_variable(value);
                rhs.set_variable(value);
            }
        }
    }

    /// Returns a copy of the tree with `value` bound to the variable, leaving `self`
    /// untouched.
    pub fn with_variable(&self, value: f64) -> Expr {
        let mut bound = self.clone();
        bound.set_variable(value);
        bound
    }

    /// check if the expression contains the variable
    pub fn contains_variable(&self) -> bool {
        match self {
            Expr::Var(_) => true,
            Expr::Const(_) => false,
            Expr::BinOp(_, left, right) => left.contains_variable() || right.contains_variable(),
        }
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Const(_) => 1,
            Expr::BinOp(_, lhs, rhs) => 1 + lhs.node_count() + rhs.node_count(),
        }
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}
