pub mod health_aware_payment_router;
pub mod health_cache;
