//! Report assembly and artifact output.

use crate::charts::{recommendation_dashboard, topic_chart, topic_label, word_chart};
use crate::figure::Figure;
use crate::html::generate_html;
use crate::palette::ColorScale;
use crate::wordcloud::WordCloud;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use topicmatch_core::analysis::Analysis;
use topicmatch_core::error::Result;
use tracing::info;

/// Styling for a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStyle {
    /// Words shown per topic bar chart.
    #[serde(default = "default_words_in_chart")]
    pub words_in_chart: usize,
    /// Bar colours for the word charts, cycled across topics.
    #[serde(default = "default_word_colors")]
    pub word_colors: Vec<String>,
    /// Word cloud settings. Its colour is replaced by the topic's bar colour.
    #[serde(default)]
    pub cloud: WordCloud,
}

fn default_words_in_chart() -> usize { 10 }

fn default_word_colors() -> Vec<String> {
    ColorScale::dashboard_cycle()
        .iter()
        .map(|s| s.strongest().to_string())
        .collect()
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            words_in_chart: default_words_in_chart(),
            word_colors: default_word_colors(),
            cloud: WordCloud::default(),
        }
    }
}

impl ReportStyle {
    /// Check the word cloud settings before any rendering starts.
    pub fn validate(&self) -> Result<()> {
        self.cloud.validate()
    }

    fn color_for(&self, index: usize) -> &str {
        if self.word_colors.is_empty() {
            return self.cloud.color.as_str();
        }
        &self.word_colors[index % self.word_colors.len()]
    }
}

/// Charts for one of the document's top topics.
#[derive(Debug, Clone)]
pub struct TopicSection {
    pub title: String,
    pub words: Figure,
    pub cloud_svg: String,
}

/// Every visual artifact for one analysed document.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub topics: Figure,
    pub sections: Vec<TopicSection>,
    pub dashboard: Figure,
}

/// Output kinds for [`Report::write_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// One standalone page.
    Html,
    /// Plotly figure JSON per chart.
    Json,
    /// Word clouds as SVG files.
    Svg,
}

impl FromStr for ArtifactFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(ArtifactFormat::Html),
            "json" => Ok(ArtifactFormat::Json),
            "svg" => Ok(ArtifactFormat::Svg),
            other => Err(format!("Unsupported format: {}. Use html, json or svg.", other)),
        }
    }
}

impl Report {
    pub fn build(analysis: &Analysis, style: &ReportStyle) -> Self {
        let sections = analysis
            .profiles
            .iter()
            .enumerate()
            .map(|(i, profile)| {
                let color = style.color_for(i);
                let cloud = style.cloud.clone().with_color(color);
                TopicSection {
                    title: topic_label(profile.score.topic),
                    words: word_chart(&profile.chart_words(style.words_in_chart), color),
                    cloud_svg: cloud.to_svg(&profile.words),
                }
            })
            .collect();

        Self {
            title: format!("Topic analysis: {}", analysis.document),
            topics: topic_chart(&analysis.top_topics),
            sections,
            dashboard: recommendation_dashboard(&analysis.recommendations),
        }
    }

    pub fn to_html(&self) -> Result<String> {
        Ok(generate_html(self)?)
    }

    /// Write the requested artifacts into `dir`, creating it if needed.
    ///
    /// Returns the paths written.
    pub fn write_to(&self, dir: &Path, formats: &[ArtifactFormat]) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::new();

        for format in formats {
            match format {
                ArtifactFormat::Html => {
                    let path = dir.join("report.html");
                    std::fs::write(&path, self.to_html()?)?;
                    written.push(path);
                }
                ArtifactFormat::Json => {
                    let mut figures = vec![("topics.json".to_string(), &self.topics)];
                    for (i, section) in self.sections.iter().enumerate() {
                        figures.push((format!("words-{}.json", i), &section.words));
                    }
                    figures.push(("dashboard.json".to_string(), &self.dashboard));

                    for (name, figure) in figures {
                        let path = dir.join(name);
                        std::fs::write(&path, figure.to_json_pretty()?)?;
                        written.push(path);
                    }
                }
                ArtifactFormat::Svg => {
                    for (i, section) in self.sections.iter().enumerate() {
                        let path = dir.join(format!("cloud-{}.svg", i));
                        std::fs::write(&path, &section.cloud_svg)?;
                        written.push(path);
                    }
                }
            }
        }

        info!(dir = %dir.display(), files = written.len(), "Wrote report artifacts");
        Ok(written)
    }
}

/// Parse a comma-separated format list such as `"html,svg"`.
pub fn parse_formats(list: &str) -> std::result::Result<Vec<ArtifactFormat>, String> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<ArtifactFormat>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_lists() {
        assert_eq!(
            parse_formats("html, SVG").unwrap(),
            vec![ArtifactFormat::Html, ArtifactFormat::Svg]
        );
        assert!(parse_formats("png").is_err());
        assert!(parse_formats("").unwrap().is_empty());
    }

    #[test]
    fn style_validation_covers_the_cloud() {
        assert!(ReportStyle::default().validate().is_ok());
        let style = ReportStyle {
            cloud: WordCloud {
                min_font_size: 50.0,
                ..WordCloud::default()
            },
            ..ReportStyle::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn word_colors_cycle() {
        let style = ReportStyle::default();
        assert_eq!(style.color_for(0), "#b13f64");
        assert_eq!(style.color_for(3), "#b13f64");
        assert_eq!(style.color_for(1), "#e15383");
    }
}
