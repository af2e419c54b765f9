//! Figure model — serializes to Plotly's figure JSON.
//!
//! Only the parts of the schema the charts use are modelled. Optional fields
//! are skipped when unset so the renderer applies its own defaults.

use crate::palette::ColorScale;
use serde::Serialize;
use serde_json::json;

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Figure {
    pub data: Vec<BarTrace>,
    pub layout: Layout,
}

impl Figure {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A horizontal bar series.
#[derive(Debug, Clone, Serialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Bar lengths.
    pub x: Vec<f64>,
    /// Category labels.
    pub y: Vec<String>,
    /// Values printed next to the bars.
    pub text: Vec<f64>,
    pub orientation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texttemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliponaxis: Option<bool>,
}

impl BarTrace {
    pub fn horizontal(y: Vec<String>, x: Vec<f64>) -> Self {
        Self {
            kind: "bar",
            name: None,
            text: x.clone(),
            x,
            y,
            orientation: "h",
            visible: None,
            marker: Marker::default(),
            texttemplate: None,
            textposition: None,
            cliponaxis: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Print values with `template`, e.g. `%{text:.1f}%`.
    pub fn with_text(mut self, template: &str, position: &str) -> Self {
        self.texttemplate = Some(template.to_string());
        self.textposition = Some(position.to_string());
        self
    }

    pub fn with_cliponaxis(mut self, clip: bool) -> Self {
        self.cliponaxis = Some(clip);
        self
    }
}

/// Bar colouring.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<ColorScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
}

impl Marker {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            color: Some(MarkerColor::Solid(color.into())),
            ..Self::default()
        }
    }

    /// Colour each bar by value along a scale, without a colour bar.
    pub fn scaled(values: Vec<f64>, scale: ColorScale) -> Self {
        Self {
            color: Some(MarkerColor::Values(values)),
            colorscale: Some(scale),
            showscale: Some(false),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Solid(String),
    Values(Vec<f64>),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniformtext: Option<UniformText>,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
}

impl Layout {
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// White background with light grid lines.
    pub fn white(mut self) -> Self {
        self.plot_bgcolor = Some("white".to_string());
        self.paper_bgcolor = Some("white".to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UniformText {
    pub minsize: u32,
    pub mode: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoryorder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticklen: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Some(AxisTitle { text: text.into() }),
            ..Self::default()
        }
    }

    /// Categories sorted so the largest bar is drawn on top.
    pub fn ascending_categories(mut self) -> Self {
        self.categoryorder = Some("total ascending");
        self
    }

    /// Outside ticks, optionally hidden behind a white stroke.
    pub fn outside_ticks(mut self, color: Option<&str>, len: Option<u32>) -> Self {
        self.ticks = Some("outside");
        self.tickcolor = color.map(str::to_string);
        self.ticklen = len;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

/// A dropdown of buttons that restyle the figure.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateMenu {
    pub active: usize,
    pub showactive: bool,
    pub x: f64,
    pub xanchor: &'static str,
    pub y: f64,
    pub yanchor: &'static str,
    pub buttons: Vec<MenuButton>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuButton {
    pub label: String,
    pub method: &'static str,
    pub args: Vec<serde_json::Value>,
}

impl MenuButton {
    /// A button that shows only the trace at `index` out of `count`.
    pub fn show_only(label: impl Into<String>, index: usize, count: usize) -> Self {
        let visible: Vec<bool> = (0..count).map(|i| i == index).collect();
        Self {
            label: label.into(),
            method: "update",
            args: vec![json!({ "visible": visible })],
        }
    }

    /// The visibility mask this button applies, if it sets one.
    pub fn visibility(&self) -> Option<Vec<bool>> {
        let mask = self.args.first()?.get("visible")?.as_array()?;
        mask.iter().map(serde_json::Value::as_bool).collect()
    }
}
