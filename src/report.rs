//! Text report comparing two vectors
//!
//! Exercises every query on [`Vec4`] for a pair of operands and renders the
//! results using the configured precision.

use std::fmt;

use vec4d_math::{MathError, Vec4};

use crate::config::AppConfig;

/// One labelled result in a report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<18} {}", self.label, self.value)
    }
}

/// Full report for a pair of vectors
#[derive(Debug, Clone)]
pub struct VectorReport {
    pub lines: Vec<ReportLine>,
}

impl VectorReport {
    /// Evaluate all operations on `a` and `b`
    ///
    /// Division and normalization follow the IEEE policy for the arithmetic
    /// lines, and the checked variants for the normalized and line-distance
    /// lines, so a zero operand shows up as `undefined` rather than NaN there.
    pub fn build(a: Vec4<f64>, b: Vec4<f64>, config: &AppConfig) -> Self {
        let precision = config.display.precision;
        let vector = |v: Vec4<f64>| match precision {
            Some(p) => format!("{:.*}", p, v),
            None => v.to_string(),
        };
        let scalar = |s: f64| match precision {
            Some(p) => format!("{:.*}", p, s),
            None => s.to_string(),
        };
        let checked_vector = |name: &str, result: Result<Vec4<f64>, MathError>| match result {
            Ok(v) => vector(v),
            Err(err) => {
                log::warn!("{} is undefined: {}", name, err);
                format!("undefined ({})", err)
            }
        };

        let mut lines = Vec::new();
        let mut push = |label: &'static str, value: String| {
            lines.push(ReportLine { label, value });
        };

        push("a", vector(a));
        push("b", vector(b));
        push("a + b", vector(a + b));
        push("a - b", vector(a - b));
        push("a * b", vector(a * b));
        push("a / b", vector(a / b));
        push("a . b", scalar(a.dot(b)));
        push("|a|", scalar(a.length()));
        push("|b|", scalar(b.length()));
        push("normalized a", checked_vector("normalized a", a.try_normalized()));
        push("normalized b", checked_vector("normalized b", b.try_normalized()));
        push("a == b", (a == b).to_string());
        push("a ~= b", a.approx_eq(b, config.math.epsilon).to_string());
        push("a < b", (a < b).to_string());
        push("a <= b", (a <= b).to_string());
        push("a > b", (a > b).to_string());
        push("a >= b", (a >= b).to_string());
        push("a null", a.is_null().to_string());
        push("dist(a, b)", scalar(a.distance_to_point(b)));

        let line_distance = match a.try_distance_to_line(Vec4::zero(), b) {
            Ok(d) => scalar(d),
            Err(err) => {
                log::warn!("distance to line along b is undefined: {}", err);
                format!("undefined ({})", err)
            }
        };
        push("dist(a, 0 + t*b)", line_distance);

        log::debug!("built report with {} lines", lines.len());
        Self { lines }
    }

    /// Look up a line by label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

/// Parse a command-line operand, using `default` when it is absent
pub fn parse_operand(arg: Option<&str>, default: Vec4<f64>) -> Result<Vec4<f64>, MathError> {
    match arg {
        None => Ok(default),
        Some(text) => text.parse(),
    }
}

impl fmt::Display for VectorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
