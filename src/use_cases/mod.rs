pub mod dto;
pub mod get_payment_summary;
pub mod process_payment;
pub mod purge_payments;
