pub mod forwarder;
pub mod health_probe;
pub mod health_status;
pub mod payment;
pub mod payment_processor;
pub mod payment_router;
pub mod processor_selector;
pub mod repository;
