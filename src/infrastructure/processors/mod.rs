pub mod endpoints;
pub mod http_health_probe;
pub mod http_payment_forwarder;
pub mod schema;
