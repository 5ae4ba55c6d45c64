use crate::routes::{ROUTES, Screen};

pub fn render_page(title: &str, active: Option<Screen>, body: &str) -> String {
    PAGE_HTML
        .replace("{{TITLE}}", &escape(title))
        .replace("{{NAV}}", &navigation_bar(active))
        .replace("{{BODY}}", body)
}

pub fn navigation_bar(active: Option<Screen>) -> String {
    let links: String = ROUTES
        .iter()
        .map(|route| {
            let current = if Some(route.screen) == active {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<li><a class="nav-link" href="{}"{current}>{}</a></li>"#,
                route.path, route.label
            )
        })
        .collect();

    format!(
        r#"<nav class="navbar"><a class="brand" href="/">CODEDOC</a><ul class="nav-links">{links}</ul></nav>"#
    )
}

pub fn render_not_found(path: &str) -> String {
    let body = format!(
        r#"<section class="screen" data-screen="not-found"><h2>Page not found</h2><p class="subtitle">Nothing lives at <code>{}</code>.</p></section>"#,
        escape(path)
    );
    render_page("Not found", None, &body)
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encodes a query component.
pub fn encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b',' => out.push(','),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Builds `path?k=v&...`, skipping empty values.
pub fn url(path: &str, pairs: &[(&str, String)]) -> String {
    let query: Vec<String> = pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", encode(value)))
        .collect();

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", query.join("&"))
    }
}

/// [`url`], escaped for an attribute value.
pub fn href(path: &str, pairs: &[(&str, String)]) -> String {
    escape(&url(path, pairs))
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>CodeDoc · {{TITLE}}</title>
  <style>
    :root {
      --bg: #f4f6fb;
      --ink: #161616;
      --muted: #6f6f6f;
      --primary: #0f62fe;
      --primary-hover: #4a89ff;
      --card: #ffffff;
      --note: #ffc222;
      --shadow: 0 16px 40px rgba(15, 98, 254, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "IBM Plex Sans", "Helvetica Neue", Arial, sans-serif;
    }

    .navbar {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 14px 28px;
      background: #f8f9fa;
      border-bottom: 1px solid rgba(22, 22, 22, 0.08);
    }

    .navbar a {
      color: var(--primary);
      text-decoration: none;
      transition: all ease 0.2s;
    }

    .navbar a:hover {
      color: var(--primary-hover);
    }

    .brand {
      font-size: 1.4em;
      font-weight: 600;
    }

    .nav-links {
      display: flex;
      gap: 20px;
      list-style: none;
      margin: 0;
      padding: 0;
    }

    .nav-link[aria-current="page"] {
      border-bottom: 2px solid var(--primary);
    }

    main {
      width: min(960px, 100%);
      margin: 0 auto;
      padding: 40px 20px 64px;
    }

    .screen {
      display: grid;
      gap: 28px;
    }

    h1, h2 {
      margin: 0;
      font-weight: 400;
    }

    h1 {
      font-size: clamp(2rem, 5vw, 3.4rem);
    }

    h4 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .panel {
      background: var(--card);
      border-radius: 12px;
      padding: 24px;
      box-shadow: var(--shadow);
    }

    .toggles {
      display: flex;
      flex-wrap: wrap;
    }

    .toggle {
      --accent: var(--primary);
      display: inline-block;
      margin: 8px;
      padding: 12px 18px;
      border-radius: 8px;
      border: 1px solid var(--accent);
      text-decoration: none;
      font-weight: 500;
    }

    .toggle.tertiary {
      background: transparent;
      color: var(--accent);
    }

    .toggle.primary {
      background: var(--accent);
      color: white;
    }

    .notices {
      display: flex;
      gap: 12px;
      overflow-x: auto;
      padding-bottom: 8px;
      margin-bottom: 12px;
    }

    .notice {
      flex: 0 0 260px;
      border-left: 3px solid var(--primary);
      background: #edf5ff;
      padding: 12px 16px;
    }

    .notice strong {
      display: block;
      margin-bottom: 4px;
    }

    .chips {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin: 12px 0;
    }

    .chip {
      display: inline-flex;
      gap: 8px;
      align-items: center;
      padding: 6px 12px;
      border-radius: 999px;
      background: #e0e0e0;
    }

    .chip a {
      color: var(--muted);
      text-decoration: none;
    }

    .inline-form {
      display: flex;
      gap: 8px;
    }

    input[type="text"] {
      flex: 1;
      padding: 10px 12px;
      border: 1px solid #8d8d8d;
      border-radius: 4px;
      font: inherit;
    }

    textarea {
      width: 100%;
      min-height: 120px;
      padding: 12px;
      border: 2px solid var(--note);
      border-radius: 4px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 4px;
      padding: 12px 20px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--primary);
      color: white;
    }

    .uploader {
      display: grid;
      gap: 8px;
    }

    .details p {
      margin: 0 0 4px;
    }

    .details h6 {
      margin: 12px 0 4px;
      font-size: 1rem;
    }

    .calendar {
      display: grid;
      gap: 12px;
    }

    .calendar-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .calendar table {
      border-collapse: collapse;
      width: 100%;
      max-width: 420px;
    }

    .calendar th, .calendar td {
      text-align: center;
      padding: 4px;
    }

    .day {
      display: block;
      padding: 8px 0;
      border-radius: 4px;
      color: var(--ink);
      text-decoration: none;
    }

    .day.today {
      font-weight: 700;
      color: var(--primary);
    }

    .day.selected {
      background: var(--primary);
      color: white;
    }

    .frequency {
      border-collapse: collapse;
      width: 100%;
    }

    .frequency th, .frequency td {
      text-align: left;
      padding: 10px 12px;
      border-bottom: 1px solid #e0e0e0;
    }

    .modal-backdrop {
      position: fixed;
      inset: 0;
      background: rgba(22, 22, 22, 0.5);
      display: grid;
      place-items: center;
      padding: 20px;
    }

    .modal {
      background: var(--card);
      border-radius: 8px;
      padding: 28px;
      width: min(520px, 100%);
      display: grid;
      gap: 16px;
    }

    .modal .close {
      justify-self: end;
      color: var(--primary);
    }
  </style>
</head>
<body>
  {{NAV}}
  <main class="app">
    {{BODY}}
  </main>
</body>
</html>
"#;
