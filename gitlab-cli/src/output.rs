// ABOUTME: This module handles output formatting for the issue list commands
// ABOUTME: It provides table, id, url, and JSON formatters selected once per render

use anyhow::Result;
use chrono::{DateTime, Utc};
use gitlab_sdk::{Issue, Page};
use owo_colors::OwoColorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::constants::ui;
use crate::filter::FilterSpec;
use crate::hyperlinks::hyperlink;
use crate::types::OutputMode;

/// Per-invocation rendering switches, resolved before the request is made.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub hyperlinks: bool,
    pub use_color: bool,
    pub pretty_json: bool,
    pub now: DateTime<Utc>,
}

impl RenderOptions {
    pub fn plain(now: DateTime<Utc>) -> Self {
        Self {
            hyperlinks: false,
            use_color: false,
            pretty_json: false,
            now,
        }
    }
}

pub trait OutputFormat {
    fn format_page(&self, page: &Page<Issue>) -> Result<String>;
}

/// Renders `page` in the mode selected by `spec`.
pub fn render(page: &Page<Issue>, spec: &FilterSpec, options: &RenderOptions) -> Result<String> {
    match spec.output {
        OutputMode::Table => TableFormatter::new(spec, options).format_page(page),
        OutputMode::Ids => IdsFormatter.format_page(page),
        OutputMode::Urls => UrlsFormatter.format_page(page),
        OutputMode::Json => JsonFormatter::new(options.pretty_json).format_page(page),
    }
}

pub struct TableFormatter<'a> {
    spec: &'a FilterSpec,
    hyperlinks: bool,
    use_color: bool,
    now: DateTime<Utc>,
}

struct Cell {
    plain: String,
    styled: String,
}

impl Cell {
    fn plain(text: String) -> Self {
        Self {
            styled: text.clone(),
            plain: text,
        }
    }
}

impl<'a> TableFormatter<'a> {
    pub fn new(spec: &'a FilterSpec, options: &RenderOptions) -> Self {
        Self {
            spec,
            hyperlinks: options.hyperlinks,
            use_color: options.use_color,
            now: options.now,
        }
    }

    fn plural_noun(&self, count: usize) -> String {
        let noun = self.spec.noun();
        if count == 1 {
            noun.to_string()
        } else {
            format!("{noun}s")
        }
    }

    fn qualified(&self, noun: &str) -> String {
        match self.spec.state.qualifier() {
            Some(qualifier) => format!("{qualifier} {noun}"),
            None => noun.to_string(),
        }
    }

    fn header(&self, page: &Page<Issue>) -> String {
        format!(
            "Showing {} {} in {} that match your search. (Page {})\n\n",
            page.len(),
            self.qualified(&self.plural_noun(page.len())),
            self.spec.scope,
            page.page
        )
    }

    fn empty_message(&self) -> String {
        format!(
            "No {} match your search in {}.\n\n\n",
            self.qualified(&self.plural_noun(0)),
            self.spec.scope
        )
    }

    fn row(&self, issue: &Issue) -> [Cell; 5] {
        let id = format!("#{}", issue.iid);
        let mut id_styled = if !self.use_color {
            id.clone()
        } else if issue.is_open() {
            id.green().to_string()
        } else {
            id.red().to_string()
        };
        if self.hyperlinks {
            id_styled = hyperlink(&id_styled, &issue.web_url);
        }

        let labels = format_labels(&issue.labels);
        let labels_styled = if self.use_color && !labels.is_empty() {
            labels.cyan().to_string()
        } else {
            labels.clone()
        };

        let age = relative_time(issue.created_at.parsed(), self.now);
        let age_styled = if self.use_color {
            age.dimmed().to_string()
        } else {
            age.clone()
        };

        [
            Cell {
                plain: id,
                styled: id_styled,
            },
            Cell::plain(issue.references.full.clone()),
            Cell::plain(truncate_title(&issue.title, ui::TITLE_MAX_WIDTH)),
            Cell {
                plain: labels,
                styled: labels_styled,
            },
            Cell {
                plain: age,
                styled: age_styled,
            },
        ]
    }
}

impl OutputFormat for TableFormatter<'_> {
    fn format_page(&self, page: &Page<Issue>) -> Result<String> {
        if page.is_empty() {
            return Ok(self.empty_message());
        }

        let rows: Vec<[Cell; 5]> = page.iter().map(|issue| self.row(issue)).collect();

        let mut widths = [0usize; 5];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.plain.width());
            }
        }

        let mut out = self.header(page);
        for row in &rows {
            let last = row.len() - 1;
            for (column, cell) in row.iter().enumerate() {
                out.push_str(&cell.styled);
                if column < last {
                    let padding = widths[column] - cell.plain.width();
                    out.extend(std::iter::repeat_n(' ', padding));
                    out.push(ui::COLUMN_SEPARATOR);
                }
            }
            out.push('\n');
        }
        out.push('\n');
        Ok(out)
    }
}

pub struct IdsFormatter;

impl OutputFormat for IdsFormatter {
    fn format_page(&self, page: &Page<Issue>) -> Result<String> {
        Ok(page.iter().map(|issue| format!("{}\n", issue.iid)).collect())
    }
}

pub struct UrlsFormatter;

impl OutputFormat for UrlsFormatter {
    fn format_page(&self, page: &Page<Issue>) -> Result<String> {
        Ok(page
            .iter()
            .map(|issue| format!("{}\n", issue.web_url))
            .collect())
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormat for JsonFormatter {
    fn format_page(&self, page: &Page<Issue>) -> Result<String> {
        let mut json = if self.pretty {
            serde_json::to_string_pretty(&page.items)?
        } else {
            serde_json::to_string(&page.items)?
        };
        json.push('\n');
        Ok(json)
    }
}

/// `(a, b)` for a non-empty label list, otherwise an empty cell.
pub fn format_labels(labels: &[String]) -> String {
    if labels.is_empty() {
        String::new()
    } else {
        format!("({})", labels.join(", "))
    }
}

/// Truncates `title` to at most `max_width` terminal columns, ellipsis included.
pub fn truncate_title(title: &str, max_width: usize) -> String {
    if title.width() <= max_width {
        return title.to_string();
    }

    let budget = max_width.saturating_sub(ui::ELLIPSIS.len());
    let mut used = 0;
    let mut truncated = String::new();
    for ch in title.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        truncated.push(ch);
    }
    truncated.push_str(ui::ELLIPSIS);
    truncated
}

/// Coarse "about N units ago" wording relative to `now`.
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "less than a minute ago".to_string()
    } else if hours < 1 {
        about(minutes, "minute")
    } else if days < 1 {
        about(hours, "hour")
    } else if days < 30 {
        about(days, "day")
    } else if days < 365 {
        about(days / 30, "month")
    } else {
        about(days / 365, "year")
    }
}

fn about(amount: i64, unit: &str) -> String {
    if amount == 1 {
        format!("about {amount} {unit} ago")
    } else {
        format!("about {amount} {unit}s ago")
    }
}
