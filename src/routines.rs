pub mod export_balances_routine;
