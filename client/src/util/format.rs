//! Display formatting for prices, counts, and delivery estimates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::DeliveryTime;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;

/// `$x.xx`, or `N/A` when the price is unknown.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("${value:.2}"),
        None => "N/A".to_owned(),
    }
}

/// Catalog price text: `$x.xx`, or "Price on request" when unknown.
pub fn format_list_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("${value:.2}"),
        None => "Price on request".to_owned(),
    }
}

/// `"1 item"`, `"3 items"`.
pub fn pluralize(count: i64, noun: &str) -> String {
    if count == 1 { format!("{count} {noun}") } else { format!("{count} {noun}s") }
}

/// Human-readable delivery estimate.
///
/// Text is passed through; minutes scale to minutes, hours, or days.
pub fn format_delivery_time(delivery: Option<&DeliveryTime>) -> String {
    match delivery {
        None => "Not specified".to_owned(),
        Some(DeliveryTime::Text(text)) if text.trim().is_empty() => "Not specified".to_owned(),
        Some(DeliveryTime::Text(text)) => text.clone(),
        Some(DeliveryTime::Minutes(minutes)) => format_minutes(*minutes),
    }
}

fn format_minutes(minutes: i64) -> String {
    if minutes <= 0 {
        return "Not specified".to_owned();
    }
    if minutes < MINUTES_PER_HOUR {
        return format!("{minutes} minutes");
    }
    if minutes < MINUTES_PER_DAY {
        let hours = minutes / MINUTES_PER_HOUR;
        let rest = minutes % MINUTES_PER_HOUR;
        return if rest > 0 { format!("{hours}h {rest}m") } else { format!("{hours} hours") };
    }
    pluralize(minutes / MINUTES_PER_DAY, "day")
}
