//! The sentiment-trend scatter chart.
//!
//! [`Chart`] is a plain model; [`Chart::to_plotly`] turns it into a plotly.js
//! figure (`{"data": [...], "layout": {...}}`) for the page to draw.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Value, json};

use crate::classify::{ClassifiedItem, SentimentLabel};

pub const CHART_TITLE: &str = "Sentiment Trend";
pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "Sentiment Score";
pub const CHART_HEIGHT: u32 = 600;

const PLOTLY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One marker: publish time against score, with the headline as hover text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub time: NaiveDateTime,
    pub score: f64,
    pub title: String,
}

/// All points sharing a label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: SentimentLabel,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub height: u32,
    /// One per label present, in the order labels are first seen.
    pub series: Vec<Series>,
}

impl Chart {
    /// Groups items by label. Labels with no items get no series.
    pub fn from_items(items: &[ClassifiedItem]) -> Self {
        let mut series: Vec<Series> = Vec::new();
        for item in items {
            let point = Point {
                time: item.time_published,
                score: item.sentiment_score,
                title: item.title.clone(),
            };
            match series.iter_mut().find(|s| s.label == item.sentiment_label) {
                Some(s) => s.points.push(point),
                None => series.push(Series {
                    label: item.sentiment_label,
                    points: vec![point],
                }),
            }
        }

        Self {
            title: CHART_TITLE,
            x_title: X_AXIS_TITLE,
            y_title: Y_AXIS_TITLE,
            height: CHART_HEIGHT,
            series,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// The plotly.js figure for this chart.
    pub fn to_plotly(&self) -> Value {
        let data: Vec<Value> = self
            .series
            .iter()
            .map(|s| {
                let x: Vec<String> = s
                    .points
                    .iter()
                    .map(|p| p.time.format(PLOTLY_TIME_FORMAT).to_string())
                    .collect();
                let y: Vec<f64> = s.points.iter().map(|p| p.score).collect();
                let text: Vec<&str> = s.points.iter().map(|p| p.title.as_str()).collect();
                json!({
                    "type": "scatter",
                    "mode": "markers",
                    "name": s.label.as_str(),
                    "x": x,
                    "y": y,
                    "text": text,
                })
            })
            .collect();

        json!({
            "data": data,
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": self.x_title } },
                "yaxis": { "title": { "text": self.y_title } },
                "height": self.height,
            },
        })
    }
}
