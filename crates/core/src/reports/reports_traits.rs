use crate::errors::Result;

use super::reports_model::{CashFlowItem, Report};

/// Cash-flow projection storage
pub trait CashFlowRepositoryTrait {
    /// Replaces the whole projection. Returns the number of rows written.
    fn replace_cash_flows(&mut self, items: &[CashFlowItem]) -> Result<usize>;
    fn list_cash_flows(&mut self) -> Result<Vec<CashFlowItem>>;
    /// Cash flow of one bond, ordered by date then type.
    fn list_bond_cash_flows(&mut self, bond_id: i64) -> Result<Vec<CashFlowItem>>;
}

/// Report storage
pub trait ReportRepositoryTrait {
    /// Replaces every report. Returns the number of rows written.
    fn replace_reports(&mut self, reports: &[Report]) -> Result<usize>;
    fn get_report(&mut self, bond_id: i64) -> Result<Report>;
    fn list_reports(&mut self) -> Result<Vec<Report>>;
}
