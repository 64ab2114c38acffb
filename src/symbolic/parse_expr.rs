//! a module turns a String expression into a symbolic expression
//!# Example
//! ```
//! use RustedKinematics::symbolic::parse_expr::parse_expression_func;
//! let mut parsed_expression = parse_expression_func("x*x/2").unwrap();
//! parsed_expression.set_variable(3.0);
//! assert_eq!(parsed_expression.eval(), 4.5);
//! ```
use crate::symbolic::symbolic_engine::{BinOp, Expr};
use crate::symbolic::utils::{
    find_rightmost_char_outside_brackets, remove_spaces, strip_redundant_brackets,
};
use log::debug;
use std::fmt;
use strum::IntoEnumIterator;

//                  search recursion diagram
//                "(x+1)*x-x/2"                     |
//                |       left  | right             |
//                |_________________________________|
//                |      no + outside brackets      |
//                |        split by rightmost -     |
//                |_________________________________|
//                |   (x+1)*x   |       x/2         |
//                |       |     |        |          |
//                |_____ \|/    |        |          |
//                |    split by *        |          |
//                |_____________|________|__________|
//                |  (x+1) | x  |   split by /      |
//                |  strip |    |   x    |   2      |
//                |___\|/__|_Ok_|___Ok___|___Ok_____|
//                |   x+1  -> split by +            |
//                |_________________________________|

/// Errors raised while turning a string into an expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// the string, or one side of a split operator, has nothing in it
    EmptyExpression,
    /// a leaf that is neither `x`/`X` nor a number
    InvalidOperand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::EmptyExpression => write!(f, "Empty expression"),
            ParseError::InvalidOperand(token) => write!(f, "Invalid operand: {}", token),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a raw string into an expression tree.
///
/// Whitespace is removed first, then the recursive splitter does the rest.
pub fn parse_expression_func(input: &str) -> Result<Expr, ParseError> {
    let normalized = remove_spaces(input);
    debug!("input: {}, normalized: {}", input, normalized);
    parse_normalized(&normalized)
}

fn parse_normalized(input: &str) -> Result<Expr, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    let input = strip_redundant_brackets(input);

    // operators are tried in the order + - * /, the first one found outside
    // brackets (and not in the leading position) becomes the root of this subtree
    for op in BinOp::iter() {
        if let Some(pos) = find_rightmost_char_outside_brackets(input, op.symbol()) {
            if pos == 0 {
                continue;
            }
            let left = &input[..pos];
            let right = &input[pos + 1..];
            debug!(
                "SIGN '{}' found at position {}: left: {}, right: {}",
                op, pos, left, right
            );
            let lhs = parse_normalized(left)?;
            let rhs = parse_normalized(right)?;
            return Ok(Expr::BinOp(op, lhs.boxed(), rhs.boxed()));
        }
    }

    parse_operand(input)
}

fn parse_operand(token: &str) -> Result<Expr, ParseError> {
    if token == "x" || token == "X" {
        debug!("found variable: {}", token);
        return Ok(Expr::var());
    }
    match token.parse::<f64>() {
        Ok(value) => {
            debug!("found constant: {}", value);
            Ok(Expr::Const(value))
        }
        Err(_) => Err(ParseError::InvalidOperand(token.to_string())),
    }
}
