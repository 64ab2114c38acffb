// the collection of utility functions mainly for bracket parsing and proceeding

/// drop every whitespace character, nothing else is touched (case included)
pub fn remove_spaces(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// true if the string is `( ... )` and that leading bracket is closed by the very last
/// character, so the pair wraps the whole string: `(x+1)` yes, `(x)+(y)` no
pub fn has_redundant_brackets(s: &str) -> bool {
    if s.len() < 2 || !s.starts_with('(') || !s.ends_with(')') {
        return false;
    }
    let last = s.len() - 1;
    let mut depth: i32 = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth == 0 && i != last {
            return false;
        }
    }
    true
}

/// strip outer bracket pairs while they wrap the whole string: `((x))` -> `x`
pub fn strip_redundant_brackets(s: &str) -> &str {
    let mut s = s;
    while has_redundant_brackets(s) {
        s = &s[1..s.len() - 1];
    }
    s
}

// find position of the rightmost given char that lies outside brackets.
// The scan goes from the end, ')' opens a level and '(' closes it. A '-' in the
// very first position is a sign of the whole operand, not an operator.
pub fn find_rightmost_char_outside_brackets(s: &str, target: char) -> Option<usize> {
    let mut depth: i32 = 0;
    for (i, c) in s.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => depth -= 1,
            _ => {}
        }
        if depth != 0 {
            continue;
        }
        if c == target {
            if target == '-' && i == 0 {
                continue;
            }
            return Some(i);
        }
    }
    None
}

pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    if num_values == 1 {
        return vec![start];
    }
    let mut values = Vec::with_capacity(num_values);
    let step = (end - start) / (num_values as f64 - 1.0);

    for i in 0..num_values {
        let value = start + (i as f64 * step);
        values.push(value);
    }

    values
}

/*
    // Define a vector of argument values
    let x_values = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    // Define the step size for the numerical derivative
    let h = 0.001;
    // Compute the numerical derivative
    let derivatives = numerical_derivative(f, x_values, h);
*/
pub fn numerical_derivative<F>(f: F, x_values: Vec<f64>, h: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let mut derivatives = Vec::with_capacity(x_values.len());

    for &x in &x_values {
        let f_x_plus_h = f(x + h);
        let f_x_minus_h = f(x - h);
        let derivative = (f_x_plus_h - f_x_minus_h) / (2.0 * h);
        derivatives.push(derivative);
    }

    derivatives
}

// compute norm of two vectors
pub fn norm(x: Vec<f64>, y: Vec<f64>) -> f64 {
    assert_eq!(x.len(), y.len());
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}
