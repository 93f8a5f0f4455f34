use anyhow::Result;
use comfy_table::Table;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Render `data` to stdout; write errors (a closed pipe included) are returned
pub fn print_output<T: Serialize>(data: T, format: OutputFormat) -> Result<()> {
    let rendered = render_output(data, format)?;
    writeln!(std::io::stdout().lock(), "{}", rendered)?;
    Ok(())
}

pub fn render_output<T: Serialize>(data: T, format: OutputFormat) -> Result<String> {
    let json_value = serde_json::to_value(data)?;

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json_value)?,
        OutputFormat::Yaml => serde_yaml::to_string(&json_value)?,
        OutputFormat::Table => render_table(&json_value),
    };

    Ok(rendered)
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(arr) if !arr.is_empty() => {
            let mut table = Table::new();

            // Get headers from first object
            if let Value::Object(first) = &arr[0] {
                let headers: Vec<String> = first.keys().cloned().collect();
                table.set_header(&headers);

                for item in arr {
                    if let Value::Object(obj) = item {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|h| format_value(obj.get(h).unwrap_or(&Value::Null)))
                            .collect();
                        table.add_row(row);
                    }
                }
            } else {
                table.set_header(vec!["Value"]);
                for item in arr {
                    table.add_row(vec![format_value(item)]);
                }
            }

            table.to_string()
        }
        Value::Object(obj) => {
            let mut table = Table::new();
            table.set_header(vec!["Key", "Value"]);

            for (key, val) in obj {
                table.add_row(vec![key.clone(), format_value(val)]);
            }

            table.to_string()
        }
        _ => format_value(value),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) if arr.iter().all(|v| !v.is_array() && !v.is_object()) => arr
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}
