//! HTML rendering of the single page: a settings sidebar plus one of a welcome
//! banner, an error banner, or the chart and "Recent News" list.
//!
//! The API key is never written back into the page; the password field is
//! always rendered empty.

mod html;

pub use html::escape_html;

use crate::{NsError, articles::ArticleEntry, pipeline::Report};

pub const PAGE_TITLE: &str = "Stock News Sentiment";
pub const REPORT_HEADING: &str = "Stock News Sentiment Analysis";
pub const RECENT_NEWS_HEADING: &str = "Recent News";
pub const WELCOME_MESSAGE: &str = "Enter your Alpha Vantage API key and ticker symbols in the sidebar, then click 'Fetch Data' to begin.";

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r"
body { margin: 0; display: flex; font-family: sans-serif; color: #1e293b; }
aside { width: 280px; min-height: 100vh; padding: 16px 20px; background: #f1f5f9; box-sizing: border-box; }
aside label { display: block; margin: 12px 0 4px; font-size: 14px; }
aside input { width: 100%; padding: 6px; box-sizing: border-box; }
aside button { margin-top: 16px; padding: 8px 16px; }
main { flex: 1; padding: 16px 32px; }
.banner { padding: 12px 16px; border-radius: 6px; }
.info { background: #e0f2fe; color: #075985; }
.error { background: #fee2e2; color: #991b1b; }
.articles { max-height: 900px; overflow-y: auto; }
.meta { color: #64748b; margin: 4px 0; }
";

/// What the main area shows.
#[derive(Debug)]
pub enum PageState<'a> {
    /// Nothing fetched yet.
    Welcome,
    /// The invocation failed; carries the user-facing message.
    Error(String),
    /// The invocation succeeded.
    Report(&'a Report),
}

impl<'a> PageState<'a> {
    /// Maps a pipeline result to a page state.
    pub fn from_result(result: &'a Result<Report, NsError>) -> Self {
        match result {
            Ok(report) => Self::Report(report),
            Err(e) => Self::Error(e.user_message()),
        }
    }
}

/// Renders the full HTML document. `tickers` prefills the ticker field.
pub fn render_page(tickers: &str, state: &PageState<'_>) -> String {
    let (head_extra, main) = match state {
        PageState::Welcome => (
            String::new(),
            format!(r#"<div class="banner info">{}</div>"#, escape_html(WELCOME_MESSAGE)),
        ),
        PageState::Error(msg) => (
            String::new(),
            format!(r#"<div class="banner error">{}</div>"#, escape_html(msg)),
        ),
        PageState::Report(report) => (
            format!(r#"<script src="{PLOTLY_CDN}"></script>"#),
            render_report(report),
        ),
    };

    let sidebar = render_sidebar(tickers);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<style>{STYLE}</style>
{head_extra}
</head>
<body>
{sidebar}
<main>
{main}
</main>
</body>
</html>
"#
    )
}

fn render_sidebar(tickers: &str) -> String {
    let tickers = escape_html(tickers);
    format!(
        r#"<aside>
<h2>Settings</h2>
<form method="post" action="/">
<label for="tickers">Enter ticker symbols (comma-separated)</label>
<input id="tickers" name="tickers" type="text" value="{tickers}">
<label for="api_key">Enter your Alpha Vantage API key</label>
<input id="api_key" name="api_key" type="password" value="" autocomplete="off">
<button type="submit">Fetch Data</button>
</form>
</aside>"#
    )
}

fn render_report(report: &Report) -> String {
    let figure = html::script_json(&report.chart.to_plotly());
    let articles: String = report.articles.iter().map(render_article).collect();
    format!(
        r#"<h1>{REPORT_HEADING}</h1>
<div id="sentiment-chart" style="width:100%;"></div>
<script>
const figure = {figure};
Plotly.newPlot("sentiment-chart", figure.data, figure.layout, {{responsive: true}});
</script>
<h2>{RECENT_NEWS_HEADING}</h2>
<div class="articles">
{articles}</div>"#
    )
}

fn render_article(article: &ArticleEntry) -> String {
    let title = escape_html(&article.title);
    let heading = match &article.url {
        Some(url) => format!(r#"<a href="{}">{title}</a>"#, escape_html(url)),
        None => title,
    };
    let source = article
        .source
        .as_deref()
        .map(|s| format!(r#"<p class="meta">Source: {}</p>"#, escape_html(s)))
        .unwrap_or_default();
    format!(
        r#"<article>
<h3>{heading}</h3>
<p class="meta">Published: {}</p>
<p class="meta">Sentiment: {}</p>
{source}<p>{}</p>
<hr>
</article>
"#,
        escape_html(&article.published),
        article.sentiment.as_str(),
        escape_html(&article.summary),
    )
}
