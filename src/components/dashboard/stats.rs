use yew::prelude::*;

use crate::api_client::analytics::{OrderPoint, ProductPoint, RevenuePoint};
use crate::common::format::format_currency;

/// The three headline numbers reduced from the fetched sequences.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryTotals {
    pub revenue: f64,
    pub orders: u64,
    pub products: usize,
}

impl SummaryTotals {
    pub fn from_points(
        revenue: &[RevenuePoint],
        products: &[ProductPoint],
        orders: &[OrderPoint],
    ) -> Self {
        Self {
            revenue: revenue.iter().map(RevenuePoint::amount).sum(),
            orders: orders.iter().map(OrderPoint::count).sum(),
            // Distinct products listed, not units moved.
            products: products.len(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub totals: SummaryTotals,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Total Revenue (Current Week)"}</div>
                    <div class="stat-value text-primary">{format_currency(props.totals.revenue)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Orders Processed"}</div>
                    <div class="stat-value">{props.totals.orders}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Unique Products Sold"}</div>
                    <div class="stat-value">{props.totals.products}</div>
                </div>
            </div>
        </div>
    }
}
