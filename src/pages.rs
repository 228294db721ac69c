//! Server-rendered HTML pages built from the same normalized records as the
//! JSON routes.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use news_core::NormalizedRecord;
use serde_json::Value;

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
    h1 { border-bottom: 2px solid #eee; padding-bottom: .5rem; }
    .item { border-bottom: 1px solid #eee; padding: 1rem 0; }
    .item img { max-width: 100%; border-radius: 4px; }
    .meta { color: #777; font-size: .9rem; }
    code { background: #f4f4f4; padding: .1rem .3rem; border-radius: 3px; }
    .error { background: #fff0f0; border: 1px solid #f5c2c2; padding: 1rem; border-radius: 4px; }
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
{body}
<p class="meta"><a href="/">API documentation</a></p>
</body>
</html>
"##,
        title = text(title),
        style = STYLE,
        body = body
    )
}

fn field<'a>(record: &'a NormalizedRecord, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or_default()
}

pub fn documentation() -> String {
    let endpoints = [
        ("GET", "/api/health", "Health check"),
        ("GET", "/api/info", "API information"),
        ("GET", "/api/gaming-news", "Latest gaming news (JSON). Optional ?q= and ?limit="),
        ("GET", "/gaming-news", "Latest gaming news (HTML)"),
        ("GET", "/api/hacker-news", "Hacker News stories (JSON). Optional ?q= and ?limit="),
        ("GET", "/hacker-news", "Hacker News stories (HTML)"),
        ("GET", "/api/users", "All users"),
        ("GET", "/api/users/{id}", "User by id"),
        ("POST", "/api/users", "Create user: {\"name\", \"email\"}"),
        ("PUT", "/api/users/{id}", "Update user"),
        ("DELETE", "/api/users/{id}", "Delete user"),
        ("GET", "/api/news", "News search function. Optional ?q="),
        ("GET", "/api/debug-env", "Reports whether the news API key is configured"),
    ];

    let rows: String = endpoints
        .iter()
        .map(|(method, path, description)| {
            format!(
                "<tr><td><code>{}</code></td><td><code>{}</code></td><td>{}</td></tr>\n",
                method,
                text(path),
                text(description)
            )
        })
        .collect();

    let body = format!(
        r#"<h1>News Proxy API</h1>
<p>Fetches news from NewsAPI and Hacker News and re-exposes it as a uniform JSON envelope.</p>
<table>
<thead><tr><th>Method</th><th>Path</th><th>Description</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    );
    layout("News Proxy API", &body)
}

pub fn articles(title: &str, records: &[NormalizedRecord]) -> String {
    let items: String = records
        .iter()
        .map(|r| {
            let image = match field(r, "image") {
                "" => String::new(),
                src => format!("<img src=\"{}\" alt=\"\">\n", attr(src)),
            };
            format!(
                r#"<div class="item">
{image}<h2><a href="{url}" target="_blank" rel="noopener">{title}</a></h2>
<p>{description}</p>
<p class="meta">{source} · {published}</p>
</div>
"#,
                image = image,
                url = attr(field(r, "url")),
                title = text(field(r, "title")),
                description = text(field(r, "description")),
                source = text(field(r, "source")),
                published = text(field(r, "publishedAt")),
            )
        })
        .collect();

    layout(title, &list_body(title, records.len(), &items))
}

pub fn stories(title: &str, records: &[NormalizedRecord]) -> String {
    let items: String = records
        .iter()
        .map(|r| {
            let points = r
                .get("points")
                .and_then(Value::as_i64)
                .map(|p| format!("{} points · ", p))
                .unwrap_or_default();
            format!(
                r#"<div class="item">
<h2><a href="{url}" target="_blank" rel="noopener">{title}</a></h2>
<p class="meta">{points}by {author} · {created}</p>
</div>
"#,
                url = attr(field(r, "url")),
                title = text(field(r, "title")),
                points = points,
                author = text(field(r, "author")),
                created = text(field(r, "created_at")),
            )
        })
        .collect();

    layout(title, &list_body(title, records.len(), &items))
}

fn list_body(title: &str, count: usize, items: &str) -> String {
    if count == 0 {
        return format!("<h1>{}</h1>\n<p>No results.</p>", text(title));
    }
    format!("<h1>{}</h1>\n{}", text(title), items)
}

pub fn error(message: &str) -> String {
    let body = format!(
        r#"<h1>Something went wrong</h1>
<div class="error">{}</div>"#,
        text(message)
    );
    layout("Error", &body)
}
