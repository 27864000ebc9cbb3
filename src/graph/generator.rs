//! SVG latency chart generation.
//!
//! Renders the consolidated hop table as a per-hop latency distribution:
//! one column per hop with a min-max whisker, a median tick, and a mean
//! marker. The SVG is built by hand; no charting dependency needed for
//! this fixed layout.

use crate::parser::schema::ConsolidatedHop;
use crate::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use crate::utils::error::ChartError;
use log::info;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 70.0;
const Y_TICKS: usize = 5;

const WHISKER_COLOR: &str = "#555555";
const MEDIAN_COLOR: &str = "#d95f02";
const MEAN_COLOR: &str = "#1f77b4";

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Latency Distribution per Hop".to_string(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Render the consolidated hop table as an SVG chart
///
/// **Public** - main entry point for chart generation
///
/// # Errors
/// * `ChartError::EmptyHops` - nothing to plot
pub fn render_chart(
    hops: &[ConsolidatedHop],
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    if hops.is_empty() {
        return Err(ChartError::EmptyHops);
    }

    let config = config.cloned().unwrap_or_default();
    let width = config.width as f64;
    let height = config.height as f64;
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = height - MARGIN_BOTTOM;

    let observed_max = hops.iter().map(|h| h.max).fold(0.0, f64::max);
    let y_max = nice_ceiling(observed_max);
    let y_of = |value: f64| baseline - (value / y_max) * plot_height;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(r#"<style>text { font: 12px sans-serif; }</style>"#);
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="22" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        width / 2.0,
        xml_escape(&config.title)
    ));

    render_axes(&mut svg, y_max, width, height, plot_height);

    let slot = plot_width / hops.len() as f64;
    for (index, hop) in hops.iter().enumerate() {
        let x = MARGIN_LEFT + (index as f64 + 0.5) * slot;
        render_hop(&mut svg, hop, x, slot, &y_of, baseline);
    }

    render_legend(&mut svg, width);
    svg.push_str("</svg>");

    info!("chart rendered for {} hops ({} bytes)", hops.len(), svg.len());
    Ok(svg)
}

/// Render axis lines, gridlines, and labels
///
/// **Private** - internal helper for render_chart
fn render_axes(svg: &mut String, y_max: f64, width: f64, height: f64, plot_height: f64) {
    let baseline = height - MARGIN_BOTTOM;

    // Gridlines with tick labels, bottom to top.
    for tick in 0..=Y_TICKS {
        let value = y_max * tick as f64 / Y_TICKS as f64;
        let y = baseline - (tick as f64 / Y_TICKS as f64) * plot_height;
        svg.push_str(&format!(
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#dddddd"/>"##,
            MARGIN_LEFT,
            y,
            width - MARGIN_RIGHT,
            y
        ));
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0,
            format_tick(value)
        ));
    }

    // Axes.
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
        MARGIN_LEFT, MARGIN_TOP, MARGIN_LEFT, baseline
    ));
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black"/>"#,
        MARGIN_LEFT,
        baseline,
        width - MARGIN_RIGHT,
        baseline
    ));

    // Axis titles.
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">Hops</text>"#,
        MARGIN_LEFT + (width - MARGIN_LEFT - MARGIN_RIGHT) / 2.0,
        height - 10.0
    ));
    svg.push_str(&format!(
        r#"<text x="16" y="{:.1}" text-anchor="middle" transform="rotate(-90 16 {:.1})">Latency (ms)</text>"#,
        MARGIN_TOP + plot_height / 2.0,
        MARGIN_TOP + plot_height / 2.0
    ));
}

/// Render one hop column: whisker, median tick, mean marker, label
///
/// **Private** - internal helper for render_chart
fn render_hop(
    svg: &mut String,
    hop: &ConsolidatedHop,
    x: f64,
    slot: f64,
    y_of: &dyn Fn(f64) -> f64,
    baseline: f64,
) {
    let cap = (slot * 0.3).min(12.0);
    let tick = (slot * 0.4).min(16.0);
    let y_min = y_of(hop.min);
    let y_max = y_of(hop.max);
    let y_med = y_of(hop.med);
    let y_avg = y_of(hop.avg);

    // Min-max whisker with end caps.
    svg.push_str(&format!(
        r#"<line x1="{x:.1}" y1="{y_max:.1}" x2="{x:.1}" y2="{y_min:.1}" stroke="{WHISKER_COLOR}" stroke-width="1.5"/>"#
    ));
    for y in [y_min, y_max] {
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{WHISKER_COLOR}" stroke-width="1.5"/>"#,
            x - cap / 2.0,
            x + cap / 2.0,
        ));
    }

    // Median tick and mean marker.
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{y_med:.1}" x2="{:.1}" y2="{y_med:.1}" stroke="{MEDIAN_COLOR}" stroke-width="2.5"/>"#,
        x - tick / 2.0,
        x + tick / 2.0,
    ));
    svg.push_str(&format!(
        r#"<circle cx="{x:.1}" cy="{y_avg:.1}" r="3.5" fill="{MEAN_COLOR}"/>"#
    ));

    // Rotated hop label so a long path stays readable.
    let label_y = baseline + 16.0;
    svg.push_str(&format!(
        r#"<text x="{x:.1}" y="{label_y:.1}" text-anchor="end" transform="rotate(-45 {x:.1} {label_y:.1})">Hop {}</text>"#,
        hop.hop
    ));
}

/// Render the marker legend
///
/// **Private** - internal helper for render_chart
fn render_legend(svg: &mut String, width: f64) {
    let x = width - MARGIN_RIGHT - 170.0;
    let y = MARGIN_TOP - 8.0;

    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{WHISKER_COLOR}" stroke-width="1.5"/>"#,
        x,
        x + 14.0,
    ));
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}">min/max</text>"#,
        x + 18.0,
        y + 4.0
    ));
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{MEDIAN_COLOR}" stroke-width="2.5"/>"#,
        x + 72.0,
        x + 86.0,
    ));
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}">med</text>"#,
        x + 90.0,
        y + 4.0
    ));
    svg.push_str(&format!(
        r#"<circle cx="{:.1}" cy="{y:.1}" r="3.5" fill="{MEAN_COLOR}"/>"#,
        x + 126.0,
    ));
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}">avg</text>"#,
        x + 134.0,
        y + 4.0
    ));
}

/// Round a maximum up to a 1/2/5 step so tick labels come out clean
///
/// **Private** - internal helper for render_chart
fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    for step in [1.0, 2.0, 5.0, 10.0] {
        if value <= step * magnitude {
            return step * magnitude;
        }
    }
    10.0 * magnitude
}

fn format_tick(value: f64) -> String {
    if value >= 10.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::Responder;

    fn sample_hop(number: u32, max: f64) -> ConsolidatedHop {
        ConsolidatedHop {
            hop: number,
            min: max / 3.0,
            max,
            avg: max / 2.0,
            med: max / 2.0,
            hosts: vec![Responder::new("10.0.0.1", "(host1)")],
        }
    }

    #[test]
    fn test_render_chart_empty() {
        assert!(matches!(render_chart(&[], None), Err(ChartError::EmptyHops)));
    }

    #[test]
    fn test_render_chart_basic_structure() {
        let hops = vec![sample_hop(1, 3.0), sample_hop(2, 12.0)];
        let svg = render_chart(&hops, None).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Hop 1"));
        assert!(svg.contains("Hop 2"));
        assert!(svg.contains("Latency (ms)"));
    }

    #[test]
    fn test_render_chart_custom_title_escaped() {
        let hops = vec![sample_hop(1, 5.0)];
        let config = ChartConfig::new().with_title("a <b> & c");
        let svg = render_chart(&hops, Some(&config)).unwrap();
        assert!(svg.contains("a &lt;b&gt; &amp; c"));
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(0.7), 1.0);
        assert_eq!(nice_ceiling(3.2), 5.0);
        assert_eq!(nice_ceiling(12.0), 20.0);
        assert_eq!(nice_ceiling(50.0), 50.0);
        assert_eq!(nice_ceiling(87.0), 100.0);
    }
}
