//! Word cloud layout and SVG rendering.
//!
//! Words are sized linearly by weight and placed heaviest first along an
//! Archimedean spiral from the canvas centre. A word that collides with
//! everything along the spiral is retried smaller, down to the minimum font
//! size, and dropped if it still does not fit. The layout is deterministic.

use crate::html::escape_html;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt::Write as _;
use topicmatch_core::error::{Result, TopicMatchError};
use topicmatch_core::types::TopicWord;
use tracing::{debug, warn};

/// Average glyph width relative to font size for a sans-serif face.
const GLYPH_WIDTH: f64 = 0.6;
/// Radians advanced per spiral step.
const SPIRAL_STEP: f64 = 0.1;
/// Pixels the spiral radius grows per full turn.
const SPIRAL_PITCH: f64 = 4.0;
const SHRINK: f64 = 0.8;

/// Word cloud settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloud {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_max_font_size")]
    pub max_font_size: f64,
    #[serde(default = "default_min_font_size")]
    pub min_font_size: f64,
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_width() -> u32 { 400 }
fn default_height() -> u32 { 200 }
fn default_max_font_size() -> f64 { 40.0 }
fn default_min_font_size() -> f64 { 4.0 }
fn default_max_words() -> usize { 100 }
fn default_background() -> String { "white".to_string() }
fn default_color() -> String { "#b13f64".to_string() }

impl Default for WordCloud {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            max_font_size: default_max_font_size(),
            min_font_size: default_min_font_size(),
            max_words: default_max_words(),
            background: default_background(),
            color: default_color(),
        }
    }
}

/// A word with its position on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub text: String,
    pub font_size: f64,
    /// Left edge of the bounding box.
    pub x: f64,
    /// Top edge of the bounding box.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlacedWord {
    pub fn overlaps(&self, other: &PlacedWord) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    fn inside(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.width <= width && self.y + self.height <= height
    }
}

impl WordCloud {
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Reject settings the layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(TopicMatchError::invalid_chart(
                "cloud size",
                format!("{}x{} has no area", self.width, self.height),
            ));
        }
        if !self.min_font_size.is_finite() || self.min_font_size <= 0.0 {
            return Err(TopicMatchError::invalid_chart(
                "min_font_size",
                format!("{} must be a positive number", self.min_font_size),
            ));
        }
        if !self.max_font_size.is_finite() || self.max_font_size < self.min_font_size {
            return Err(TopicMatchError::invalid_chart(
                "max_font_size",
                format!(
                    "{} must be a number no smaller than min_font_size ({})",
                    self.max_font_size, self.min_font_size
                ),
            ));
        }
        Ok(())
    }

    /// Lay out weighted words. Non-positive and NaN weights are ignored.
    ///
    /// Settings that fail [`WordCloud::validate`] produce an empty layout.
    pub fn layout(&self, words: &[(String, f64)]) -> Vec<PlacedWord> {
        if let Err(err) = self.validate() {
            warn!(%err, "Skipping word cloud layout");
            return Vec::new();
        }

        let mut ranked: Vec<&(String, f64)> = words
            .iter()
            .filter(|(text, weight)| *weight > 0.0 && !text.trim().is_empty())
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(self.max_words);

        let Some(heaviest) = ranked.first().map(|(_, w)| *w) else {
            return Vec::new();
        };

        let mut placed: Vec<PlacedWord> = Vec::with_capacity(ranked.len());
        for (text, weight) in ranked {
            let mut size = self.font_size(*weight, heaviest);
            loop {
                if let Some(word) = self.find_spot(text, size, &placed) {
                    placed.push(word);
                    break;
                }
                if size <= self.min_font_size {
                    debug!(word = text.as_str(), "Word cloud has no room, dropping word");
                    break;
                }
                size = (size * SHRINK).max(self.min_font_size);
            }
        }
        placed
    }

    /// Lay out a topic's words weighted by their probability.
    pub fn layout_topic(&self, words: &[TopicWord]) -> Vec<PlacedWord> {
        let weighted: Vec<(String, f64)> = words.iter().map(|w| (w.word.clone(), w.value)).collect();
        self.layout(&weighted)
    }

    /// Render placed words as a standalone SVG document.
    pub fn render_svg(&self, placed: &[PlacedWord]) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = write!(
            svg,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            escape_html(&self.background)
        );
        for word in placed {
            // baseline sits at roughly 80% of the em box
            let _ = write!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" font-family="sans-serif" fill="{}">{}</text>"#,
                word.x,
                word.y + word.height * 0.8,
                word.font_size,
                escape_html(&self.color),
                escape_html(&word.text)
            );
        }
        svg.push_str("</svg>");
        svg
    }

    /// Layout and render in one go.
    pub fn to_svg(&self, words: &[TopicWord]) -> String {
        self.render_svg(&self.layout_topic(words))
    }

    fn font_size(&self, weight: f64, heaviest: f64) -> f64 {
        let span = (self.max_font_size - self.min_font_size).max(0.0);
        (self.min_font_size + span * (weight / heaviest))
            .max(self.min_font_size)
            .min(self.max_font_size)
    }

    fn find_spot(&self, text: &str, font_size: f64, placed: &[PlacedWord]) -> Option<PlacedWord> {
        let (canvas_w, canvas_h) = (self.width as f64, self.height as f64);
        let width = GLYPH_WIDTH * font_size * text.chars().count() as f64;
        let height = font_size;
        if width > canvas_w || height > canvas_h {
            return None;
        }

        let (cx, cy) = (canvas_w / 2.0, canvas_h / 2.0);
        let max_radius = (cx * cx + cy * cy).sqrt();
        let mut t: f64 = 0.0;
        loop {
            let r = SPIRAL_PITCH * t / TAU;
            if r > max_radius {
                return None;
            }
            let candidate = PlacedWord {
                text: text.to_string(),
                font_size,
                x: cx + r * t.cos() - width / 2.0,
                y: cy + r * t.sin() - height / 2.0,
                width,
                height,
            };
            if candidate.inside(canvas_w, canvas_h) && !placed.iter().any(|p| p.overlaps(&candidate)) {
                return Some(candidate);
            }
            t += SPIRAL_STEP;
        }
    }
}
