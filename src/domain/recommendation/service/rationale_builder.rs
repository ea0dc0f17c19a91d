use crate::domain::recommendation::dto::UtilizationSummary;
use crate::domain::recommendation::model::UtilizationLevel;
use crate::domain::recommendation::service::workload_classifier::{FamilyReason, FamilySelection};

/// Inputs of the rationale that are computed elsewhere in the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct SizingOutcome {
    pub selection: FamilySelection,
    pub level: UtilizationLevel,
    pub vcpus_per_node: u32,
    pub min_workers: u32,
    pub max_workers: u32,
    pub safety_margin_pct: f64,
    pub provisioning_improvement_pct: f64,
}

/// Template-built explanation; the same input always yields the same text.
pub fn build_rationale(input: &UtilizationSummary, outcome: &SizingOutcome) -> String {
    let mut sentences = vec![
        family_sentence(input, &outcome.selection),
        utilization_sentence(input, outcome),
    ];

    if let Some(current) = input.current_max_workers {
        if current > outcome.max_workers {
            sentences.push(format!(
                "Reducing max workers from {} to {} cuts peak provisioning by {:.1}%.",
                current, outcome.max_workers, outcome.provisioning_improvement_pct
            ));
        }
    }

    sentences.join(" ")
}

fn family_sentence(input: &UtilizationSummary, selection: &FamilySelection) -> String {
    let cpu = input.avg_cpu_pct;
    let mem = input.avg_mem_pct;
    let family = selection.family;

    match selection.reason {
        FamilyReason::SimpleEtl => format!(
            "{}-series ({}) nodes fit this simple ETL workload: {} rows added across {} at {:.1}% average CPU.",
            family.as_code(),
            family.label(),
            input.rows_added.unwrap_or_default(),
            tables_phrase(input.num_tables),
            cpu
        ),
        FamilyReason::MemoryRatio => format!(
            "{}-series ({}) nodes are recommended because memory utilization ({:.1}%) outweighs CPU utilization ({:.1}%).",
            family.as_code(),
            family.label(),
            mem,
            cpu
        ),
        FamilyReason::ComplexAggregation => format!(
            "{}-series ({}) nodes fit this aggregation-heavy workload: {} at {:.1}% average CPU.",
            family.as_code(),
            family.label(),
            tables_phrase(input.num_tables),
            cpu
        ),
        FamilyReason::ComputeRatio => format!(
            "{}-series ({}) nodes are recommended because CPU utilization ({:.1}%) outweighs memory utilization ({:.1}%).",
            family.as_code(),
            family.label(),
            cpu,
            mem
        ),
        FamilyReason::Balanced => format!(
            "{}-series ({}) nodes are recommended because CPU ({:.1}%) and memory ({:.1}%) utilization are balanced.",
            family.as_code(),
            family.label(),
            cpu,
            mem
        ),
    }
}

fn utilization_sentence(input: &UtilizationSummary, outcome: &SizingOutcome) -> String {
    let sizing = format!(
        "{}-{} workers of {} vCPUs",
        outcome.min_workers, outcome.max_workers, outcome.vcpus_per_node
    );

    match outcome.level {
        UtilizationLevel::Low => format!(
            "Utilization is low (CPU {:.1}%, memory {:.1}%), so the cluster can shrink to {} with a {:.0}% safety margin.",
            input.avg_cpu_pct, input.avg_mem_pct, sizing, outcome.safety_margin_pct
        ),
        UtilizationLevel::High => format!(
            "Utilization is high (CPU {:.1}%, memory {:.1}%); {} keeps a {:.0}% safety margin above observed demand.",
            input.avg_cpu_pct, input.avg_mem_pct, sizing, outcome.safety_margin_pct
        ),
        UtilizationLevel::Neutral => format!(
            "Utilization is moderate (CPU {:.1}%, memory {:.1}%); {} keeps a {:.0}% safety margin.",
            input.avg_cpu_pct, input.avg_mem_pct, sizing, outcome.safety_margin_pct
        ),
    }
}

fn tables_phrase(num_tables: Option<u32>) -> String {
    match num_tables {
        Some(1) => "1 table".to_string(),
        Some(n) => format!("{n} tables"),
        None => "an unknown number of tables".to_string(),
    }
}
