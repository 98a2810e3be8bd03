use serde::{Deserialize, Serialize};

use crate::core::Sample;

/// Tooltip template listing the five-number summary, one row per value.
pub const BOXPLOT_TOOLTIP_TEMPLATE: &str = concat!(
    "<table class=\"jqplot-highlighter\">",
    "<tr><td>min:</td><td>%s</td></tr>",
    "<tr><td>q1:</td><td>%s</td></tr>",
    "<tr><td>med:</td><td>%s</td></tr>",
    "<tr><td>q3:</td><td>%s</td></tr>",
    "<tr><td>max:</td><td>%s</td></tr>",
    "</table>"
);

/// Which data axes the tooltip reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipAxes {
    X,
    Y,
    Xy,
    Yx,
    Both,
}

/// Highlighter options as supplied by the host; unset fields are `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlighterOptions {
    #[serde(default)]
    pub show: Option<bool>,
    #[serde(default)]
    pub show_marker: Option<bool>,
    #[serde(default)]
    pub tooltip_axes: Option<TooltipAxes>,
    #[serde(default, rename = "yvalues")]
    pub y_values: Option<usize>,
    #[serde(default)]
    pub format_string: Option<String>,
}

/// Highlighter configuration with every field decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedHighlighter {
    pub show: bool,
    pub show_marker: bool,
    pub tooltip_axes: TooltipAxes,
    #[serde(rename = "yvalues")]
    pub y_values: usize,
    pub format_string: Option<String>,
}

impl ResolvedHighlighter {
    /// Generic highlighter behaviour, used for fields a hidden highlighter
    /// leaves unset.
    #[must_use]
    pub fn generic() -> Self {
        Self {
            show: false,
            show_marker: true,
            tooltip_axes: TooltipAxes::Both,
            y_values: 1,
            format_string: None,
        }
    }

    /// Boxplot defaults: no hover marker, y values only, five-row table.
    #[must_use]
    pub fn boxplot() -> Self {
        Self {
            show: true,
            show_marker: false,
            tooltip_axes: TooltipAxes::Y,
            y_values: 5,
            format_string: Some(BOXPLOT_TOOLTIP_TEMPLATE.to_owned()),
        }
    }

    /// Fills the template's `%s` placeholders with the first `y_values`
    /// summary values of `sample`, in min/q1/median/q3/max order.
    ///
    /// Returns `None` when the highlighter is hidden or has no template.
    #[must_use]
    pub fn format_tooltip(&self, sample: &Sample) -> Option<String> {
        if !self.show {
            return None;
        }
        let template = self.format_string.as_deref()?;

        let mut values = sample
            .five_numbers()
            .into_iter()
            .take(self.y_values)
            .map(|value| value.to_string());
        let mut out = String::with_capacity(template.len() + 32);
        let mut pieces = template.split("%s");
        if let Some(head) = pieces.next() {
            out.push_str(head);
        }
        for piece in pieces {
            out.push_str(&values.next().unwrap_or_default());
            out.push_str(piece);
        }
        Some(out)
    }
}

/// Merges caller highlighter options with the boxplot defaults.
///
/// A missing section means the highlighter is shown. A present section
/// without `show` stays hidden. Defaults only fill fields the caller left
/// unset, and only when `show` is set; the caller's options are never
/// mutated.
#[must_use]
pub fn resolve_highlighter(options: Option<&HighlighterOptions>) -> ResolvedHighlighter {
    let Some(caller) = options else {
        return ResolvedHighlighter::boxplot();
    };
    let show = caller.show.unwrap_or(false);
    let fallback = if show {
        ResolvedHighlighter::boxplot()
    } else {
        ResolvedHighlighter::generic()
    };

    ResolvedHighlighter {
        show,
        show_marker: caller.show_marker.unwrap_or(fallback.show_marker),
        tooltip_axes: caller.tooltip_axes.unwrap_or(fallback.tooltip_axes),
        y_values: caller.y_values.unwrap_or(fallback.y_values),
        format_string: caller.format_string.clone().or(fallback.format_string),
    }
}
