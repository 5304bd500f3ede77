//! Directory listing module
//!
//! Generates the HTML listing served for directories without an index
//! file. Entries are sorted by name; subdirectories get a trailing slash.

use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::http::response;
use crate::logger;

/// Serve a generated listing for `dir`, linked relative to `request_path`.
pub async fn serve_listing(
    dir: &Path,
    request_path: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match collect_entries(dir).await {
        Ok(entries) => {
            let html = render_listing(request_path, &entries);
            response::build_html_response(html, is_head)
        }
        Err(e) => {
            logger::log_error(&format!("failed to list '{}': {e}", dir.display()));
            response::build_500_response()
        }
    }
}

/// Entry names sorted by name, directories marked with a trailing slash.
async fn collect_entries(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = Vec::new();
    let mut reader = fs::read_dir(dir).await?;

    while let Some(entry) = reader.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }

    entries.sort();
    Ok(entries)
}

fn render_listing(request_path: &str, entries: &[String]) -> String {
    // Hrefs are resolved by the browser against the request path, which
    // needs a trailing slash to anchor them inside this directory.
    let base = if request_path.ends_with('/') {
        request_path.to_string()
    } else {
        format!("{request_path}/")
    };

    let mut items = String::new();
    for name in entries {
        let escaped = escape_html(name);
        items.push_str(&format!(
            "        <li><a href=\"{base}{escaped}\">{escaped}</a></li>\n"
        ));
    }

    let title = escape_html(request_path);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Directory listing for {title}</title>
</head>
<body>
    <h1>Directory listing for {title}</h1>
    <hr>
    <ul>
{items}    </ul>
    <hr>
</body>
</html>"#
    )
}

/// Escape the characters that would break out of HTML text or attributes
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_links_entries_under_request_path() {
        let html = render_listing("/assets", &["app.js".to_string(), "sub/".to_string()]);
        assert!(html.contains("href=\"/assets/app.js\""));
        assert!(html.contains("href=\"/assets/sub/\""));
        assert!(html.contains("Directory listing for /assets"));
    }

    #[test]
    fn render_keeps_root_hrefs_absolute() {
        let html = render_listing("/", &["index.js".to_string()]);
        assert!(html.contains("href=\"/index.js\""));
        assert!(!html.contains("href=\"//"));
    }

    #[test]
    fn escape_neutralizes_markup_in_names() {
        assert_eq!(escape_html("a<b>&\"c"), "a&lt;b&gt;&amp;&quot;c");
    }

    #[tokio::test]
    async fn collect_marks_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::File::create(dir.path().join("b.txt")).unwrap();
        std::fs::File::create(dir.path().join("a.txt")).unwrap();

        let entries = collect_entries(dir.path()).await.unwrap();
        assert_eq!(entries, vec!["a.txt", "b.txt", "sub/"]);
    }
}
