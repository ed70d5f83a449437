//! Reports module - per-bond hold-to-maturity economics and cash flows.

mod reports_calculator;
mod reports_model;
mod reports_traits;

pub use reports_calculator::{compute_report, compute_reports, project_cash_flows};
pub use reports_model::{BondReport, CashFlowItem, Report};
pub use reports_traits::{CashFlowRepositoryTrait, ReportRepositoryTrait};
