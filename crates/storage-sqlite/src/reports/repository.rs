use bond_recommender_core::reports::{
    CashFlowItem, CashFlowRepositoryTrait, Report, ReportRepositoryTrait,
};
use bond_recommender_core::Result;
use diesel::prelude::*;

use super::model::{CashFlowDB, NewCashFlowDB, ReportDB};
use crate::errors::IntoCore;
use crate::schema::{cash_flows, reports};
use crate::store::SqliteTx;
use crate::utils::chunk_for_sqlite;

fn to_items(rows: Vec<CashFlowDB>) -> Result<Vec<CashFlowItem>> {
    rows.into_iter().map(CashFlowItem::try_from).collect()
}

impl CashFlowRepositoryTrait for SqliteTx {
    fn replace_cash_flows(&mut self, items: &[CashFlowItem]) -> Result<usize> {
        diesel::delete(cash_flows::table)
            .execute(self.conn())
            .into_core()?;

        let rows: Vec<NewCashFlowDB> = items.iter().map(NewCashFlowDB::from).collect();
        let mut written = 0;
        for chunk in chunk_for_sqlite(&rows) {
            written += diesel::insert_into(cash_flows::table)
                .values(chunk)
                .execute(self.conn())
                .into_core()?;
        }
        Ok(written)
    }

    fn list_cash_flows(&mut self) -> Result<Vec<CashFlowItem>> {
        let rows = cash_flows::table
            .order((
                cash_flows::bond_id.asc(),
                cash_flows::date.asc(),
                cash_flows::payment_type.asc(),
            ))
            .select(CashFlowDB::as_select())
            .load(self.conn())
            .into_core()?;
        to_items(rows)
    }

    fn list_bond_cash_flows(&mut self, bond_id: i64) -> Result<Vec<CashFlowItem>> {
        let rows = cash_flows::table
            .filter(cash_flows::bond_id.eq(bond_id))
            .order((cash_flows::date.asc(), cash_flows::payment_type.asc()))
            .select(CashFlowDB::as_select())
            .load(self.conn())
            .into_core()?;
        to_items(rows)
    }
}

impl ReportRepositoryTrait for SqliteTx {
    fn replace_reports(&mut self, reports: &[Report]) -> Result<usize> {
        diesel::delete(reports::table)
            .execute(self.conn())
            .into_core()?;

        let rows: Vec<ReportDB> = reports.iter().map(ReportDB::from).collect();
        let mut written = 0;
        for chunk in chunk_for_sqlite(&rows) {
            written += diesel::insert_into(reports::table)
                .values(chunk)
                .execute(self.conn())
                .into_core()?;
        }
        Ok(written)
    }

    fn get_report(&mut self, bond_id: i64) -> Result<Report> {
        let row = reports::table
            .find(bond_id)
            .select(ReportDB::as_select())
            .first(self.conn())
            .into_core()?;
        Report::try_from(row)
    }

    fn list_reports(&mut self) -> Result<Vec<Report>> {
        let rows = reports::table
            .order(reports::bond_id.asc())
            .select(ReportDB::as_select())
            .load(self.conn())
            .into_core()?;
        rows.into_iter().map(Report::try_from).collect()
    }
}
