use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::chart::{OrderVolumeChart, RevenueTrendChart, TopProductsChart};
use super::stats::{SummaryCards, SummaryTotals};
use crate::api_client::analytics::{self, OrderPoint, ProductPoint, RevenuePoint};
use crate::common::loading::Loading;
use crate::Route;

/// Applies the three fetch results in display order, stopping at the first
/// failure: slices before it keep their data, the rest stay empty. The
/// caller logs the returned error; nothing is surfaced to the user.
fn apply_in_order(
    revenue: Result<Vec<RevenuePoint>, String>,
    products: Result<Vec<ProductPoint>, String>,
    orders: Result<Vec<OrderPoint>, String>,
    set_revenue: impl FnOnce(Vec<RevenuePoint>),
    set_products: impl FnOnce(Vec<ProductPoint>),
    set_orders: impl FnOnce(Vec<OrderPoint>),
) -> Result<(), String> {
    set_revenue(revenue?);
    set_products(products?);
    set_orders(orders?);
    Ok(())
}

/// Analytics page: three summary cards over three chart widgets, fed by
/// three concurrent reads issued once on mount.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let daily_revenue = use_state(|| Vec::<RevenuePoint>::new());
    let top_products = use_state(|| Vec::<ProductPoint>::new());
    let order_count = use_state(|| Vec::<OrderPoint>::new());
    let loading = use_state(|| true);

    {
        let daily_revenue = daily_revenue.clone();
        let top_products = top_products.clone();
        let order_count = order_count.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let (revenue, products, orders) = futures::join!(
                    analytics::daily_revenue(),
                    analytics::top_products(),
                    analytics::order_count(),
                );

                let applied = apply_in_order(
                    revenue,
                    products,
                    orders,
                    |v| daily_revenue.set(v),
                    |v| top_products.set(v),
                    |v| order_count.set(v),
                );
                if let Err(err) = applied {
                    log::error!("Dashboard fetch error: {}", err);
                }

                // Whatever happened above, the page must leave the loading
                // state and render with the slices it has.
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <main class="min-h-screen bg-base-200 flex items-center justify-center">
                <Loading text="Loading dashboard..." />
            </main>
        };
    }

    let totals = SummaryTotals::from_points(&daily_revenue, &top_products, &order_count);

    html! {
        <main class="min-h-screen bg-base-200 px-4 py-10">
            <div class="max-w-6xl mx-auto space-y-8">
                <header class="flex items-center justify-between gap-4">
                    <div>
                        <h1 class="text-4xl font-bold">{"Weekly Sales & Operations Insights"}</h1>
                        <p class="text-sm text-base-content/60 mt-1">
                            {"Sales performance, order trends, and product demand from the latest processed dataset."}
                        </p>
                    </div>
                    <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary", "btn-outline", "shrink-0")}>
                        {"← Upload New Dataset"}
                    </Link<Route>>
                </header>

                <SummaryCards totals={totals} />

                <section class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Revenue Trend by Day"}</h3>
                        <p class="text-sm text-base-content/60">
                            {"Daily revenue generated from the processed order data."}
                        </p>
                        <RevenueTrendChart data={(*daily_revenue).clone()} />
                    </div>
                </section>

                <section class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Top-Selling Products"}</h3>
                        <p class="text-sm text-base-content/60">
                            {"Products ranked by total units sold."}
                        </p>
                        <TopProductsChart data={(*top_products).clone()} />
                    </div>
                </section>

                <section class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Daily Order Volume"}</h3>
                        <p class="text-sm text-base-content/60">
                            {"Orders processed each day across the selected week."}
                        </p>
                        <OrderVolumeChart data={(*order_count).clone()} />
                    </div>
                </section>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revenue_fixture() -> Vec<RevenuePoint> {
        vec![RevenuePoint {
            day: "2024-01-01".to_string(),
            revenue: "100".to_string(),
        }]
    }

    #[test]
    fn all_successes_set_every_slice() {
        let mut revenue = None;
        let mut products = None;
        let mut orders = None;

        let result = apply_in_order(
            Ok(revenue_fixture()),
            Ok(Vec::new()),
            Ok(Vec::new()),
            |v| revenue = Some(v),
            |v| products = Some(v),
            |v| orders = Some(v),
        );

        assert!(result.is_ok());
        assert_eq!(revenue.unwrap().len(), 1);
        assert!(products.is_some());
        assert!(orders.is_some());
    }

    #[test]
    fn a_failure_keeps_earlier_slices_and_skips_the_rest() {
        let mut revenue = None;
        let mut products = None;
        let mut orders = None;

        let result = apply_in_order(
            Ok(revenue_fixture()),
            Err("HTTP error: 500".to_string()),
            Ok(Vec::new()),
            |v| revenue = Some(v),
            |v| products = Some(v),
            |v| orders = Some(v),
        );

        assert_eq!(result, Err("HTTP error: 500".to_string()));
        // The slice fetched before the failure survives...
        assert!(revenue.is_some());
        // ...the failing one and everything after it stay untouched.
        assert!(products.is_none());
        assert!(orders.is_none());
    }

    #[test]
    fn an_early_failure_leaves_everything_empty() {
        let touched = std::cell::Cell::new(0u32);

        let result = apply_in_order(
            Err("Request failed: connection refused".to_string()),
            Ok(Vec::new()),
            Ok(Vec::new()),
            |_| touched.set(touched.get() + 1),
            |_| touched.set(touched.get() + 1),
            |_| touched.set(touched.get() + 1),
        );

        assert!(result.is_err());
        assert_eq!(touched.get(), 0);
    }
}
