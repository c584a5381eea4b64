use yew::prelude::*;

/// One (series name, value) pair under the hovered point.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesValue {
    pub name: String,
    pub value: f64,
}

#[derive(Properties, PartialEq)]
pub struct ChartTooltipProps {
    /// Whether a point is currently hovered.
    pub active: bool,

    /// X-axis category of the hovered point.
    pub label: String,

    /// Values of every series at the hovered point.
    pub series: Vec<SeriesValue>,

    /// Optional label formatter (e.g. weekday names for date categories).
    #[prop_or_default]
    pub format_label: Option<Callback<String, String>>,

    /// Optional per-chart value formatter (currency, units, orders).
    #[prop_or_default]
    pub format_value: Option<Callback<f64, String>>,
}

/// A tooltip shows only while a point is hovered and carries data.
fn visible(active: bool, series: &[SeriesValue]) -> bool {
    active && !series.is_empty()
}

fn resolve_label(label: &str, format: Option<&Callback<String, String>>) -> String {
    match format {
        Some(format) => format.emit(label.to_string()),
        None => label.to_string(),
    }
}

fn resolve_value(value: f64, format: Option<&Callback<f64, String>>) -> String {
    match format {
        Some(format) => format.emit(value),
        None => value.to_string(),
    }
}

/// Shared hover tooltip for the chart widgets.
///
/// Renders nothing while inactive or empty, so the charts can keep it
/// mounted unconditionally.
#[function_component(ChartTooltip)]
pub fn chart_tooltip(props: &ChartTooltipProps) -> Html {
    if !visible(props.active, &props.series) {
        return html! {};
    }

    html! {
        <div class="card bg-neutral text-neutral-content shadow-xl px-3 py-2 text-xs pointer-events-none">
            <p class="font-medium text-secondary mb-1">
                {resolve_label(&props.label, props.format_label.as_ref())}
            </p>
            { for props.series.iter().map(|entry| html! {
                <p class="text-success">
                    {&entry.name}{": "}
                    <span class="font-semibold">
                        {resolve_value(entry.value, props.format_value.as_ref())}
                    </span>
                </p>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::format::{format_currency, weekday_label};

    fn series(value: f64) -> Vec<SeriesValue> {
        vec![SeriesValue {
            name: "Revenue".to_string(),
            value,
        }]
    }

    #[test]
    fn hidden_when_inactive_or_empty() {
        assert!(!visible(false, &series(10.0)));
        assert!(!visible(true, &[]));
        assert!(visible(true, &series(10.0)));
    }

    #[test]
    fn label_passes_through_without_formatter() {
        assert_eq!(resolve_label("2024-01-01", None), "2024-01-01");
    }

    #[test]
    fn label_and_value_formatters_apply() {
        let format_label = Callback::from(|label: String| weekday_label(&label));
        let format_value = Callback::from(format_currency);

        assert_eq!(resolve_label("2024-01-01", Some(&format_label)), "Mon");
        assert_eq!(resolve_value(250.0, Some(&format_value)), "₹250");
        assert_eq!(resolve_value(250.0, None), "250");
    }
}
