pub const PROCESSED_PAYMENTS_SET_KEY: &str = "processed_payments";
pub const PAYMENT_KEY_PREFIX: &str = "payments";
