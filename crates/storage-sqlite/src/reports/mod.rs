mod model;
mod repository;

pub use model::{CashFlowDB, NewCashFlowDB, ReportDB};
