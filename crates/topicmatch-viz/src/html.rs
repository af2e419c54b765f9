//! Standalone HTML page for a [`Report`].

use crate::report::Report;
use std::fmt::Write as _;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Escape text for HTML and SVG content and attribute values.
pub fn escape_html(text: &str) -> String {
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

/// JSON that is safe to inline inside a `<script>` element.
fn inline_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Render the report as one HTML document.
///
/// Charts are embedded as Plotly figure JSON and drawn client-side; word
/// clouds are inlined as SVG.
pub fn generate_html(report: &Report) -> serde_json::Result<String> {
    let mut html = String::new();
    let title = escape_html(&report.title);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_CDN}"></script>
<style>
body {{ font-family: sans-serif; margin: 2em; color: #333; }}
section {{ margin-bottom: 2.5em; }}
.topic {{ display: flex; flex-wrap: wrap; align-items: center; gap: 1em; }}
</style>
</head>
<body>
<h1>{title}</h1>
"#
    );

    let mut charts: Vec<(String, String)> = Vec::new();

    html.push_str("<section>\n<h2>Top topics</h2>\n<div id=\"chart-topics\"></div>\n</section>\n");
    charts.push(("chart-topics".to_string(), report.topics.to_json()?));

    for (i, section) in report.sections.iter().enumerate() {
        let id = format!("chart-words-{}", i);
        let _ = write!(
            html,
            "<section>\n<h2>{}</h2>\n<div class=\"topic\">\n<div id=\"{}\"></div>\n<div class=\"cloud\">{}</div>\n</div>\n</section>\n",
            escape_html(&section.title),
            id,
            section.cloud_svg
        );
        charts.push((id, section.words.to_json()?));
    }

    html.push_str("<section>\n<h2>Recommended supervisors</h2>\n<div id=\"chart-dashboard\"></div>\n</section>\n");
    charts.push(("chart-dashboard".to_string(), report.dashboard.to_json()?));

    html.push_str("<script>\n");
    for (id, json) in &charts {
        let _ = writeln!(
            html,
            "(function () {{ var fig = {}; Plotly.newPlot(\"{}\", fig.data, fig.layout); }})();",
            inline_json(json),
            id
        );
    }
    html.push_str("</script>\n</body>\n</html>\n");

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"R&D"</b> 'x'"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; &#39;x&#39;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn inline_json_cannot_close_script() {
        assert_eq!(inline_json(r#"{"a":"</script>"}"#), r#"{"a":"<\/script>"}"#);
    }
}
