/// HTML views for the web entry point
use crate::domain::DisplayRecord;
use crate::errors::UpstreamFailure;
use maud::{html, Markup, DOCTYPE};

/// View model for the APOD page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApodView {
    pub date: String,
    pub explanation: String,
    pub title: String,
    pub image_url: String,
}

impl From<DisplayRecord> for ApodView {
    fn from(record: DisplayRecord) -> Self {
        Self {
            date: record.date,
            explanation: record.explanation,
            title: record.title,
            image_url: record.image_url,
        }
    }
}

/// View model for the error page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub error: String,
}

impl From<&UpstreamFailure> for ErrorView {
    fn from(err: &UpstreamFailure) -> Self {
        Self {
            error: err.describe(),
        }
    }
}

/// Page chosen for `/web/today`. Both variants are served with status 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebPage {
    Apod(ApodView),
    Error(ErrorView),
}

impl From<Result<DisplayRecord, UpstreamFailure>> for WebPage {
    fn from(outcome: Result<DisplayRecord, UpstreamFailure>) -> Self {
        match outcome {
            Ok(record) => WebPage::Apod(record.into()),
            Err(err) => WebPage::Error(ErrorView::from(&err)),
        }
    }
}

impl WebPage {
    pub fn render(&self) -> Markup {
        match self {
            WebPage::Apod(view) => apod_page(view),
            WebPage::Error(view) => error_page(view),
        }
    }
}

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                main { (body) }
                footer {
                    a href="/web/" { "Home" }
                    " | "
                    a href="/swagger" { "API documentation" }
                }
            }
        }
    }
}

/// Landing page
pub fn index_page() -> Markup {
    layout(
        "NASA Astronomy Picture of the Day",
        html! {
            h1 { "NASA Astronomy Picture of the Day" }
            p { "Browse the picture NASA selected for today, or query the JSON API." }
            ul {
                li { a href="/web/today" { "Today's picture" } }
                li { a href="/api/apod" { "/api/apod" } }
            }
        },
    )
}

fn apod_page(view: &ApodView) -> Markup {
    layout(
        &view.title,
        html! {
            h1.title { (view.title) }
            p.date { (view.date) }
            @if view.image_url.is_empty() {
                p class="no-image" { "No image available" }
            } @else {
                img.apod src=(view.image_url) alt=(view.title);
            }
            p.explanation { (view.explanation) }
        },
    )
}

fn error_page(view: &ErrorView) -> Markup {
    layout(
        "Error",
        html! {
            h1 { "Something went wrong" }
            p.error { (view.error) }
        },
    )
}
