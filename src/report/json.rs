use crate::types::report::HiringReport;

pub fn to_json(report: &HiringReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
