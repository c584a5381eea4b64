use chrono::NaiveDate;

/// Short weekday label for a `YYYY-MM-DD` day value ("Mon", "Tue", ...).
///
/// Empty or unparseable input renders as an empty label rather than an
/// error; axis ticks and tooltips degrade silently.
pub fn weekday_label(day: &str) -> String {
    if day.is_empty() {
        return String::new();
    }

    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%a").to_string(),
        Err(_) => String::new(),
    }
}

/// Revenue values are currency-prefixed; whole amounts drop the decimals.
pub fn format_currency(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("₹{}", amount as i64)
    } else {
        format!("₹{:.2}", amount)
    }
}

/// Product chart values are unit-suffixed.
pub fn format_units(value: f64) -> String {
    format!("{} units", value)
}

/// Order chart values are order-suffixed.
pub fn format_orders(value: f64) -> String {
    format!("{} orders", value)
}
