use yew::prelude::*;

use crate::api_client::analytics::{OrderPoint, ProductPoint, RevenuePoint};
use crate::common::format::{format_currency, format_orders, format_units, weekday_label};
use crate::common::tooltip::{ChartTooltip, SeriesValue};

// Shared drawing surface. preserveAspectRatio="none" stretches it to the
// card width; the x-axis labels live in a flex row below the SVG.
const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 200.0;
const TOP_MARGIN: f64 = 12.0;

fn slot_width(count: usize) -> f64 {
    VIEW_WIDTH / count as f64
}

/// Horizontal center of slot `index` out of `count` equal slots.
fn slot_center(index: usize, count: usize) -> f64 {
    slot_width(count) * (index as f64 + 0.5)
}

fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Maps a value into the drawable band, leaving headroom at the top.
/// With no positive maximum everything sits on the baseline.
fn y_position(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return VIEW_HEIGHT;
    }
    VIEW_HEIGHT - (value / max) * (VIEW_HEIGHT - TOP_MARGIN)
}

/// `points` attribute for a polyline through every value.
fn polyline_points(values: &[f64]) -> String {
    let max = max_value(values);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            format!(
                "{:.1},{:.1}",
                slot_center(i, values.len()),
                y_position(*v, max)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed polygon for the filled-area variant: the polyline plus the two
/// baseline corners.
fn area_points(values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }
    let first = slot_center(0, values.len());
    let last = slot_center(values.len() - 1, values.len());
    format!(
        "{} {:.1},{:.1} {:.1},{:.1}",
        polyline_points(values),
        last,
        VIEW_HEIGHT,
        first,
        VIEW_HEIGHT
    )
}

fn grid_lines() -> Html {
    html! {
        <g>
            { for [0.25, 0.5, 0.75].into_iter().map(|fraction| {
                let y = format!("{:.1}", VIEW_HEIGHT * fraction);
                html! {
                    <line
                        x1="0"
                        y1={y.clone()}
                        x2={format!("{}", VIEW_WIDTH)}
                        y2={y}
                        stroke="currentColor"
                        stroke-opacity="0.1"
                        stroke-dasharray="3 3"
                    />
                }
            }) }
        </g>
    }
}

/// One transparent full-height rect per slot so hovering anywhere in a
/// point's column activates its tooltip.
fn hover_targets(count: usize, hovered: UseStateHandle<Option<usize>>) -> Html {
    html! {
        <g>
            { for (0..count).map(|index| {
                let hovered = hovered.clone();
                let onmouseenter = Callback::from(move |_: MouseEvent| hovered.set(Some(index)));
                html! {
                    <rect
                        x={format!("{:.1}", slot_width(count) * index as f64)}
                        y="0"
                        width={format!("{:.1}", slot_width(count))}
                        height={format!("{:.1}", VIEW_HEIGHT)}
                        fill="transparent"
                        {onmouseenter}
                    />
                }
            }) }
        </g>
    }
}

fn x_axis_labels(labels: Vec<String>) -> Html {
    html! {
        <div class="flex text-xs text-base-content/60 mt-2">
            { for labels.into_iter().map(|label| html! {
                <span class="flex-1 text-center truncate">{label}</span>
            }) }
        </div>
    }
}

fn empty_chart(message: &'static str) -> Html {
    html! {
        <div class="alert alert-info mt-2">
            <i class="fas fa-info-circle"></i>
            <span>{message}</span>
        </div>
    }
}

/// Tooltip inputs for the hovered slot, or the inactive triple.
fn hover_series<T>(
    hovered: &Option<usize>,
    data: &[T],
    describe: impl Fn(&T) -> (String, SeriesValue),
) -> (bool, String, Vec<SeriesValue>) {
    match hovered {
        Some(index) if *index < data.len() => {
            let (label, series) = describe(&data[*index]);
            (true, label, vec![series])
        }
        _ => (false, String::new(), Vec::new()),
    }
}

#[derive(Properties, PartialEq)]
pub struct RevenueTrendChartProps {
    pub data: Vec<RevenuePoint>,
}

/// Daily revenue as a line with point markers.
#[function_component(RevenueTrendChart)]
pub fn revenue_trend_chart(props: &RevenueTrendChartProps) -> Html {
    let hovered = use_state(|| None::<usize>);

    if props.data.is_empty() {
        return empty_chart("No revenue data yet. Upload a dataset to get started.");
    }

    let values: Vec<f64> = props.data.iter().map(RevenuePoint::amount).collect();
    let max = max_value(&values);

    let (active, label, series) = hover_series(&hovered, &props.data, |point| {
        (
            point.day.clone(),
            SeriesValue {
                name: "Revenue".to_string(),
                value: point.amount(),
            },
        )
    });

    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    html! {
        <div class="relative">
            <div class="absolute top-2 right-2 z-10">
                <ChartTooltip
                    {active}
                    {label}
                    {series}
                    format_label={Callback::from(|label: String| weekday_label(&label))}
                    format_value={Callback::from(format_currency)}
                />
            </div>
            <svg
                viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)}
                preserveAspectRatio="none"
                class="w-full h-64"
                onmouseleave={on_leave}
            >
                { grid_lines() }
                <polyline
                    points={polyline_points(&values)}
                    fill="none"
                    stroke="#22c55e"
                    stroke-width="3"
                />
                { for values.iter().enumerate().map(|(i, value)| html! {
                    <circle
                        cx={format!("{:.1}", slot_center(i, values.len()))}
                        cy={format!("{:.1}", y_position(*value, max))}
                        r={if *hovered == Some(i) { "6" } else { "4" }}
                        fill="#0f172a"
                        stroke="#22c55e"
                        stroke-width="2"
                    />
                }) }
                { hover_targets(values.len(), hovered.clone()) }
            </svg>
            { x_axis_labels(props.data.iter().map(|p| weekday_label(&p.day)).collect()) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopProductsChartProps {
    pub data: Vec<ProductPoint>,
}

/// Units sold per product as vertical bars, in the backend's ranking order.
#[function_component(TopProductsChart)]
pub fn top_products_chart(props: &TopProductsChartProps) -> Html {
    let hovered = use_state(|| None::<usize>);

    if props.data.is_empty() {
        return empty_chart("No product data yet. Upload a dataset to get started.");
    }

    let values: Vec<f64> = props
        .data
        .iter()
        .map(|p| p.unit_count() as f64)
        .collect();
    let max = max_value(&values);
    let bar_width = slot_width(values.len()) * 0.6;

    let (active, label, series) = hover_series(&hovered, &props.data, |point| {
        (
            point.product_name.clone(),
            SeriesValue {
                name: "Units".to_string(),
                value: point.unit_count() as f64,
            },
        )
    });

    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    html! {
        <div class="relative">
            <div class="absolute top-2 right-2 z-10">
                <ChartTooltip
                    {active}
                    {label}
                    {series}
                    format_value={Callback::from(format_units)}
                />
            </div>
            <svg
                viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)}
                preserveAspectRatio="none"
                class="w-full h-64"
                onmouseleave={on_leave}
            >
                { grid_lines() }
                { for values.iter().enumerate().map(|(i, value)| {
                    let top = y_position(*value, max);
                    html! {
                        <rect
                            x={format!("{:.1}", slot_center(i, values.len()) - bar_width / 2.0)}
                            y={format!("{:.1}", top)}
                            width={format!("{:.1}", bar_width)}
                            height={format!("{:.1}", VIEW_HEIGHT - top)}
                            fill={if *hovered == Some(i) { "#7dd3fc" } else { "#38bdf8" }}
                        />
                    }
                }) }
                { hover_targets(values.len(), hovered.clone()) }
            </svg>
            { x_axis_labels(props.data.iter().map(|p| p.product_name.clone()).collect()) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OrderVolumeChartProps {
    pub data: Vec<OrderPoint>,
}

/// Orders per day as a filled area.
#[function_component(OrderVolumeChart)]
pub fn order_volume_chart(props: &OrderVolumeChartProps) -> Html {
    let hovered = use_state(|| None::<usize>);

    if props.data.is_empty() {
        return empty_chart("No order data yet. Upload a dataset to get started.");
    }

    let values: Vec<f64> = props.data.iter().map(|p| p.count() as f64).collect();

    let (active, label, series) = hover_series(&hovered, &props.data, |point| {
        (
            point.day.clone(),
            SeriesValue {
                name: "Orders".to_string(),
                value: point.count() as f64,
            },
        )
    });

    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    html! {
        <div class="relative">
            <div class="absolute top-2 right-2 z-10">
                <ChartTooltip
                    {active}
                    {label}
                    {series}
                    format_label={Callback::from(|label: String| weekday_label(&label))}
                    format_value={Callback::from(format_orders)}
                />
            </div>
            <svg
                viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)}
                preserveAspectRatio="none"
                class="w-full h-64"
                onmouseleave={on_leave}
            >
                { grid_lines() }
                <polygon
                    points={area_points(&values)}
                    fill="#6366f1"
                    fill-opacity="0.35"
                />
                <polyline
                    points={polyline_points(&values)}
                    fill="none"
                    stroke="#6366f1"
                    stroke-width="2"
                />
                { hover_targets(values.len(), hovered.clone()) }
            </svg>
            { x_axis_labels(props.data.iter().map(|p| weekday_label(&p.day)).collect()) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_divide_the_width_evenly() {
        assert_eq!(slot_width(4), 150.0);
        assert_eq!(slot_center(0, 4), 75.0);
        assert_eq!(slot_center(3, 4), 525.0);
    }

    #[test]
    fn y_position_spans_margin_to_baseline() {
        let max = 100.0;

        assert_eq!(y_position(max, max), TOP_MARGIN);
        assert_eq!(y_position(0.0, max), VIEW_HEIGHT);
        assert!(y_position(50.0, max) > TOP_MARGIN);
        assert!(y_position(50.0, max) < VIEW_HEIGHT);
    }

    #[test]
    fn zero_maximum_pins_everything_to_the_baseline() {
        assert_eq!(y_position(0.0, 0.0), VIEW_HEIGHT);
        assert_eq!(y_position(5.0, 0.0), VIEW_HEIGHT);
    }

    #[test]
    fn polyline_emits_one_pair_per_value() {
        let points = polyline_points(&[10.0, 20.0]);
        let pairs: Vec<&str> = points.split(' ').collect();

        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.contains(',')));
    }

    #[test]
    fn area_closes_back_to_the_baseline() {
        let points = area_points(&[10.0, 20.0]);
        let pairs: Vec<&str> = points.split(' ').collect();

        // Two data points plus the two baseline corners.
        assert_eq!(pairs.len(), 4);
        assert!(pairs[2].ends_with(&format!("{:.1}", VIEW_HEIGHT)));
        assert!(pairs[3].ends_with(&format!("{:.1}", VIEW_HEIGHT)));
    }

    #[test]
    fn area_of_nothing_is_empty() {
        assert_eq!(area_points(&[]), "");
    }

    #[test]
    fn hover_series_guards_out_of_range_indices() {
        let data = vec![RevenuePoint {
            day: "2024-01-01".to_string(),
            revenue: "10".to_string(),
        }];
        let describe = |p: &RevenuePoint| {
            (
                p.day.clone(),
                SeriesValue {
                    name: "Revenue".to_string(),
                    value: p.amount(),
                },
            )
        };

        let (active, label, series) = hover_series(&Some(0), &data, describe);
        assert!(active);
        assert_eq!(label, "2024-01-01");
        assert_eq!(series.len(), 1);

        let (active, _, series) = hover_series(&Some(5), &data, describe);
        assert!(!active);
        assert!(series.is_empty());

        let (active, _, _) = hover_series(&None, &data, describe);
        assert!(!active);
    }
}
