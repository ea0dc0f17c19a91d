use crate::core::util::interval_util::SECONDS_PER_HOUR;

/// Relative tolerance used when comparing allocated and observed totals.
pub const RELATIVE_EPSILON: f64 = 1e-6;

pub struct CostUtil;

impl CostUtil {
    #[inline]
    pub fn compute_usage_cost(quantity: f64, unit_price: Option<f64>) -> f64 {
        quantity * unit_price.unwrap_or(0.0)
    }

    /// Share of `amount` proportional to `part / whole`; 0 when `whole` is 0.
    #[inline]
    pub fn proportional_share(amount: f64, part: f64, whole: f64) -> f64 {
        if whole > 0.0 {
            amount * (part / whole)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn cost_per_hour(cost: f64, duration_seconds: f64) -> f64 {
        if duration_seconds > 0.0 {
            cost * SECONDS_PER_HOUR / duration_seconds
        } else {
            0.0
        }
    }

    #[inline]
    pub fn cost_per_unit(cost: f64, quantity: f64) -> f64 {
        if quantity > 0.0 {
            cost / quantity
        } else {
            0.0
        }
    }

    #[inline]
    pub fn percent_of(part: f64, whole: f64) -> f64 {
        if whole > 0.0 {
            part / whole * 100.0
        } else {
            0.0
        }
    }

    /// Allocated / observed as a percentage. Nothing observed counts as complete.
    #[inline]
    pub fn completeness_pct(allocated: f64, observed: f64) -> f64 {
        if observed > 0.0 {
            allocated / observed * 100.0
        } else {
            100.0
        }
    }

    pub fn approx_eq(a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= RELATIVE_EPSILON * scale
    }
}
