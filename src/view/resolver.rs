//! View name resolution against the compiled-in templates.

use thiserror::Error;

use crate::view::View;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("no template for view '{0}'")]
    NotFound(String),
}

const TEMPLATES: &[(&str, &str)] = &[(
    "response/hello",
    r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Title</title>
</head>
<body>
<p>{{data}}</p>
</body>
</html>
"#,
)];

fn template(name: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, body)| *body)
}

/// Render `view`, replacing each `{{key}}` with the escaped model value.
/// Placeholders without a model value render as empty text.
pub fn render(view: &View) -> Result<String, ViewError> {
    let source = template(view.name()).ok_or_else(|| ViewError::NotFound(view.name().to_string()))?;

    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                if let Some(value) = view.model().get(key) {
                    escape_into(&mut out, value);
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
