//! HTML output helpers.

use std::fmt::Write;

use serde_yaml::Value;

use crate::config::json::key_to_string;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make a JSON document safe to embed inside a `<script>` element.
pub fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\!--")
}

/// Render a value as nested HTML lists.
///
/// Mappings become `<dl>`, sequences `<ul>`, scalars escaped text. String
/// values that look like web addresses are turned into links.
pub fn value_to_html(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str(r#"<span class="null">&mdash;</span>"#),
        Value::Bool(b) => {
            let _ = write!(out, r#"<span class="bool">{b}</span>"#);
        }
        Value::Number(n) => {
            let _ = write!(out, r#"<span class="number">{}</span>"#, escape(&n.to_string()));
        }
        Value::String(s) => write_string(out, s),
        Value::Sequence(items) => {
            if items.is_empty() {
                out.push_str(r#"<span class="empty">[]</span>"#);
                return;
            }
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                write_value(out, item);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Value::Mapping(mapping) => {
            if mapping.is_empty() {
                out.push_str(r#"<p class="empty">Nothing configured yet.</p>"#);
                return;
            }
            out.push_str("<dl>");
            for (key, value) in mapping {
                let _ = write!(out, "<dt>{}</dt><dd>", escape(&key_to_string(key)));
                write_value(out, value);
                out.push_str("</dd>");
            }
            out.push_str("</dl>");
        }
        Value::Tagged(tagged) => write_value(out, &tagged.value),
    }
}

fn write_string(out: &mut String, s: &str) {
    let escaped = escape(s);
    if is_link(s) {
        let _ = write!(out, r#"<a href="{escaped}" target="_blank" rel="noopener">{escaped}</a>"#);
    } else {
        out.push_str(&escaped);
    }
}

fn is_link(s: &str) -> bool {
    url::Url::parse(s)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
