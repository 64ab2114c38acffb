/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedKinematics::symbolic::parse_expr::parse_expression_func;
/// let input = "(x + 1) * x / 2";
/// let parsed_expression = parse_expression_func(input).unwrap();
/// println!("parsed_expression {}", parsed_expression);
/// assert_eq!(parsed_expression.with_variable(3.0).eval(), 6.0);
///  ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) defines the expression tree (constant, variable, binary operation)
/// 2) binds values to the variable and evaluates trees
/// 3) turns a symbolic expression into a string expression for printing and control results
///# Example#
/// ```
/// use RustedKinematics::symbolic::symbolic_engine::Expr;
/// let input = "x*x/2";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// // velocity and acceleration
/// let mut v = parsed_expression.diff();
/// let mut a = v.diff();
/// v.set_variable(3.0);
/// a.set_variable(3.0);
/// assert_eq!(v.eval(), 3.0);
/// assert_eq!(a.eval(), 1.0);
/// // compare numerical and analtical derivatives for a given linspace defined by start, end values and number of values.
/// let (norm, res) = parsed_expression.compare_num1D(0.0, 10.0, 100, 1e-6);
/// println!("norm = {}, res = {}", norm, res);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
#[cfg(test)]
mod symbolic_engine_tests;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
