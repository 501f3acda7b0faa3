use caixa_engine::EngineError;
use serde_json::Value;

pub fn render_error(error: &EngineError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];

    lines.extend(issue_lines(error));

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

/// Validation failures carry a per-row issue list; surface it so the user
/// can fix the file in one pass.
fn issue_lines(error: &EngineError) -> Vec<String> {
    let Some(issues) = error
        .data
        .as_ref()
        .and_then(|data| data.get("issues"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut lines = vec![String::new(), "  Issues:".to_string()];
    for issue in issues {
        let row = issue.get("row").and_then(Value::as_i64).unwrap_or(0);
        let field = issue.get("field").and_then(Value::as_str).unwrap_or("?");
        let description = issue
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("invalid value");
        let received = issue
            .get("received")
            .and_then(Value::as_str)
            .map(|value| format!(" (got `{value}`)"))
            .unwrap_or_default();
        lines.push(format!("    row {row}, {field}: {description}{received}"));
    }
    lines
}
