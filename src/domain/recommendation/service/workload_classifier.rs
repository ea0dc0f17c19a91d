use crate::domain::recommendation::dto::UtilizationSummary;
use crate::domain::recommendation::model::{NodeFamily, UtilizationLevel, WorkloadType};

pub const ETL_MIN_ROWS_ADDED: u64 = 10_000_000;
pub const ETL_MAX_TABLES: u32 = 3;
pub const ETL_MAX_CPU_PCT: f64 = 20.0;
pub const AGGREGATION_MIN_TABLES: u32 = 5;
pub const AGGREGATION_MIN_CPU_PCT: f64 = 50.0;
pub const FAMILY_RATIO_THRESHOLD: f64 = 1.5;
pub const LOW_UTILIZATION_PCT: f64 = 20.0;
pub const HIGH_UTILIZATION_PCT: f64 = 80.0;

/// Why a node family was chosen; drives the rationale wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyReason {
    SimpleEtl,
    MemoryRatio,
    ComplexAggregation,
    ComputeRatio,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilySelection {
    pub family: NodeFamily,
    pub reason: FamilyReason,
}

pub fn is_simple_etl(input: &UtilizationSummary) -> bool {
    input.rows_added.is_some_and(|rows| rows > ETL_MIN_ROWS_ADDED)
        && input.num_tables.map_or(true, |n| n <= ETL_MAX_TABLES)
        && input.avg_cpu_pct < ETL_MAX_CPU_PCT
}

pub fn is_complex_aggregation(input: &UtilizationSummary) -> bool {
    input.num_tables.is_some_and(|n| n > AGGREGATION_MIN_TABLES)
        && input.avg_cpu_pct > AGGREGATION_MIN_CPU_PCT
}

pub fn classify_workload(input: &UtilizationSummary) -> WorkloadType {
    if is_simple_etl(input) {
        WorkloadType::SimpleEtl
    } else if is_complex_aggregation(input) {
        WorkloadType::ComplexAggregation
    } else {
        WorkloadType::Mixed
    }
}

/// mem/cpu above the threshold; zero CPU counts as memory-bound.
fn memory_bound(cpu_pct: f64, mem_pct: f64) -> bool {
    if cpu_pct == 0.0 {
        return true;
    }
    mem_pct / cpu_pct > FAMILY_RATIO_THRESHOLD
}

/// cpu/mem above the threshold; zero memory counts as compute-bound when any CPU is used.
fn compute_bound(cpu_pct: f64, mem_pct: f64) -> bool {
    if mem_pct == 0.0 {
        return cpu_pct > 0.0;
    }
    cpu_pct / mem_pct > FAMILY_RATIO_THRESHOLD
}

/// First match wins: E, then F, then D.
pub fn select_node_family(input: &UtilizationSummary) -> FamilySelection {
    let (cpu, mem) = (input.avg_cpu_pct, input.avg_mem_pct);

    if is_simple_etl(input) {
        return FamilySelection { family: NodeFamily::E, reason: FamilyReason::SimpleEtl };
    }
    if memory_bound(cpu, mem) {
        return FamilySelection { family: NodeFamily::E, reason: FamilyReason::MemoryRatio };
    }
    if is_complex_aggregation(input) {
        return FamilySelection { family: NodeFamily::F, reason: FamilyReason::ComplexAggregation };
    }
    if compute_bound(cpu, mem) {
        return FamilySelection { family: NodeFamily::F, reason: FamilyReason::ComputeRatio };
    }
    FamilySelection { family: NodeFamily::D, reason: FamilyReason::Balanced }
}

pub fn utilization_level(input: &UtilizationSummary) -> UtilizationLevel {
    let (cpu, mem) = (input.avg_cpu_pct, input.avg_mem_pct);
    if cpu >= HIGH_UTILIZATION_PCT || mem >= HIGH_UTILIZATION_PCT {
        UtilizationLevel::High
    } else if cpu < LOW_UTILIZATION_PCT || mem < LOW_UTILIZATION_PCT {
        UtilizationLevel::Low
    } else {
        UtilizationLevel::Neutral
    }
}
