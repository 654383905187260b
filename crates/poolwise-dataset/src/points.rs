//! Parse and render the sparse point format.

use poolwise_core::errors::StoreError;
use poolwise_core::models::{Example, ExampleId, FeatureVector, Label};

/// Parse one non-empty point line. `line_no` is 1-based, for error messages.
pub fn parse_line(line: &str, line_no: usize) -> Result<Example, StoreError> {
    let mut fields = line.split_whitespace();
    let parse_err = |message: String| StoreError::Parse {
        line: line_no,
        message,
    };

    let id = fields
        .next()
        .ok_or_else(|| parse_err("missing id".to_string()))?
        .parse::<u64>()
        .map_err(|e| parse_err(format!("bad id: {e}")))?;
    let label = fields
        .next()
        .ok_or_else(|| parse_err("missing label".to_string()))?;
    let label = parse_label(label).ok_or_else(|| parse_err(format!("bad label: {label}")))?;

    let mut entries = Vec::new();
    for field in fields {
        let (index, value) = field
            .split_once(':')
            .ok_or_else(|| parse_err(format!("expected index:value, got {field}")))?;
        let index = index
            .parse::<u32>()
            .map_err(|e| parse_err(format!("bad feature index {index}: {e}")))?;
        let value = value
            .parse::<f64>()
            .map_err(|e| parse_err(format!("bad feature value {value}: {e}")))?;
        entries.push((index, value));
    }

    Ok(Example::new(ExampleId(id), FeatureVector::new(entries), label))
}

/// Labels are integers, but `1.0`-style values written by other tools are accepted.
fn parse_label(raw: &str) -> Option<Label> {
    if let Ok(v) = raw.parse::<i32>() {
        return Some(Label(v));
    }
    let v = raw.parse::<f64>().ok()?;
    (v.fract() == 0.0 && v.abs() <= i32::MAX as f64).then(|| Label(v as i32))
}

/// Render one example as a point line (no trailing newline).
pub fn render_line(example: &Example) -> String {
    let mut line = format!("{} {}", example.id, example.label);
    for (index, value) in example.features.entries() {
        line.push_str(&format!(" {index}:{value}"));
    }
    line
}
