pub mod cost_util;
pub mod interval_util;
pub mod stats_util;
