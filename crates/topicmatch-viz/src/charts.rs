//! Bar charts: top topics, words per topic, and the recommendation dashboard.

use crate::figure::{Axis, BarTrace, Figure, Layout, Margin, Marker, MenuButton, UniformText, UpdateMenu};
use crate::palette::ColorScale;
use topicmatch_core::types::{TopicId, TopicRecommendations, TopicScore, TopicWord};
use topicmatch_core::words::capitalize;

/// Axis label for a topic.
pub fn topic_label(topic: TopicId) -> String {
    format!("Topic {}", topic)
}

/// Supervisor label for a bar axis: first name and the rest on two lines.
pub fn supervisor_label(name: &str) -> String {
    match name.trim().split_once(char::is_whitespace) {
        Some((first, rest)) => format!("{}<br>{}", first, rest.trim_start()),
        None => name.trim().to_string(),
    }
}

/// The document's heaviest topics as horizontal bars, weights in percent.
pub fn topic_chart(top: &[TopicScore]) -> Figure {
    let labels = top.iter().map(|s| s.topic.to_string()).collect();
    let percents = top.iter().map(|s| s.weight * 100.0).collect();
    let shades = top.iter().map(|s| s.topic.index() as f64).collect();

    let trace = BarTrace::horizontal(labels, percents)
        .with_marker(Marker::scaled(shades, ColorScale::redor()))
        .with_text("%{text:.1f}%", "outside")
        .with_cliponaxis(false);

    let mut layout = Layout::sized(800, 300).white();
    layout.showlegend = Some(false);
    layout.uniformtext = Some(UniformText { minsize: 7, mode: "hide" });
    layout.yaxis = Axis {
        kind: Some("category"),
        ..Axis::titled("Topic")
    }
    .ascending_categories()
    .outside_ticks(Some("white"), Some(8));
    layout.xaxis = Axis::titled("Score").outside_ticks(None, None);

    Figure {
        data: vec![trace],
        layout,
    }
}

/// One topic's leading words as horizontal bars in a single colour.
pub fn word_chart(words: &[TopicWord], color: &str) -> Figure {
    let labels = words.iter().map(|w| capitalize(&w.word)).collect();
    let percents = words.iter().map(|w| w.value * 100.0).collect();

    let trace = BarTrace::horizontal(labels, percents)
        .with_marker(Marker::solid(color))
        .with_text("%{text:.2f}%", "auto");

    let mut layout = Layout::sized(500, 260).white();
    layout.autosize = Some(false);
    layout.margin = Some(Margin { l: 20, r: 200, t: 3, b: 20 });
    layout.uniformtext = Some(UniformText { minsize: 7, mode: "show" });
    layout.yaxis = Axis::default()
        .ascending_categories()
        .outside_ticks(Some("white"), Some(8));
    layout.xaxis = Axis {
        showticklabels: Some(false),
        ..Axis::titled("Word Frequency in Topic (%)")
    };

    Figure {
        data: vec![trace],
        layout,
    }
}

/// Ranked supervisors for several topics, switched by a dropdown.
///
/// One trace per topic; the first is visible and each dropdown button shows
/// only its own topic.
pub fn recommendation_dashboard(lists: &[TopicRecommendations]) -> Figure {
    let scales = ColorScale::dashboard_cycle();

    let data: Vec<BarTrace> = lists
        .iter()
        .enumerate()
        .map(|(i, list)| {
            let names = list.rows.iter().map(|r| supervisor_label(&r.name)).collect();
            let percents: Vec<f64> = list.rows.iter().map(|r| r.similarity_pct).collect();
            let trace = BarTrace::horizontal(names, percents.clone())
                .with_name(topic_label(list.topic))
                .with_marker(Marker::scaled(percents, scales[i % scales.len()].clone()))
                .with_text("%{text:.1f}%", "outside")
                .with_cliponaxis(false);
            if i == 0 {
                trace
            } else {
                trace.with_visible(false)
            }
        })
        .collect();

    let mut layout = Layout::sized(680, 400).white();
    layout.xaxis = Axis {
        gridcolor: Some("#ebf0f8".to_string()),
        ..Axis::titled("Similarity Score")
    }
    .outside_ticks(None, None);
    layout.yaxis = Axis::titled("Supervisor").outside_ticks(Some("white"), Some(2));

    if !lists.is_empty() {
        let buttons = lists
            .iter()
            .enumerate()
            .map(|(i, list)| MenuButton::show_only(topic_label(list.topic), i, lists.len()))
            .collect();
        layout.updatemenus.push(UpdateMenu {
            active: 0,
            showactive: true,
            x: -0.1,
            xanchor: "left",
            y: 1.3,
            yanchor: "top",
            buttons,
        });
    }

    Figure { data, layout }
}
