use std::error::Error;

use async_trait::async_trait;
use redis::{Client, RedisError, Script};
use time::OffsetDateTime;

use crate::domain::payment::Payment;
use crate::domain::payment_processor::ProcessorId;
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::config::redis::{
	PAYMENT_KEY_PREFIX, PROCESSED_PAYMENTS_SET_KEY,
};

const SUMMARY_SCRIPT: &str = r#"
local ids = redis.call("ZRANGEBYSCORE", KEYS[1], ARGV[1], ARGV[2])
local total_requests = 0
local total_amount = 0.0

for _, id in ipairs(ids) do
    local payment = redis.call("HMGET", ARGV[3] .. ":" .. id, "amount", "processed_by")
    if payment[1] and payment[2] == ARGV[4] then
        total_requests = total_requests + 1
        total_amount = total_amount + tonumber(payment[1])
    end
end

return {tostring(total_requests), tostring(total_amount)}
"#;

const PURGE_SCRIPT: &str = r#"
local ids = redis.call("ZRANGE", KEYS[1], 0, -1)

for _, id in ipairs(ids) do
    redis.call("DEL", ARGV[1] .. ":" .. id)
end

redis.call("DEL", KEYS[1])
return #ids
"#;

fn boxed(e: RedisError) -> Box<dyn Error + Send> {
	Box::new(e)
}

fn payment_key(payment: &Payment) -> String {
	format!("{PAYMENT_KEY_PREFIX}:{}", payment.correlation_id)
}

fn timestamp_millis(ts: OffsetDateTime) -> i64 {
	(ts.unix_timestamp_nanos() / 1_000_000) as i64
}

fn score_bound(ts: Option<OffsetDateTime>, unbounded: &str) -> String {
	ts.map(|ts| timestamp_millis(ts).to_string())
		.unwrap_or_else(|| unbounded.to_string())
}

/// One hash per correlation id, indexed in a sorted set scored by
/// `processed_at` in milliseconds. Saving an id again replaces the record.
#[derive(Clone)]
pub struct RedisPaymentRepository {
	client: Client,
}

impl RedisPaymentRepository {
	pub fn new(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl PaymentRepository for RedisPaymentRepository {
	async fn save(&self, payment: Payment) -> Result<(), Box<dyn Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(boxed)?;

		let payment_key = payment_key(&payment);
		let processed_at = timestamp_millis(payment.processed_at);

		redis::pipe()
			.atomic()
			.hset_multiple(&payment_key, &[
				("amount", payment.amount.to_string()),
				("processed_at", processed_at.to_string()),
				("processed_by", payment.processed_by.to_string()),
			])
			.ignore()
			.zadd(
				PROCESSED_PAYMENTS_SET_KEY,
				payment.correlation_id.to_string(),
				processed_at,
			)
			.ignore()
			.query_async::<()>(&mut con)
			.await
			.map_err(boxed)?;

		Ok(())
	}

	async fn get_summary_by_group(
		&self,
		processor: ProcessorId,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> Result<(usize, f64), Box<dyn Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(boxed)?;

		let response: (String, String) = Script::new(SUMMARY_SCRIPT)
			.key(PROCESSED_PAYMENTS_SET_KEY)
			.arg(score_bound(from, "-inf"))
			.arg(score_bound(to, "+inf"))
			.arg(PAYMENT_KEY_PREFIX)
			.arg(processor.as_str())
			.invoke_async(&mut con)
			.await
			.map_err(boxed)?;

		Ok((
			response.0.parse().unwrap_or_default(),
			response.1.parse().unwrap_or_default(),
		))
	}

	async fn clear(&self) -> Result<(), Box<dyn Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(boxed)?;

		let purged: usize = Script::new(PURGE_SCRIPT)
			.key(PROCESSED_PAYMENTS_SET_KEY)
			.arg(PAYMENT_KEY_PREFIX)
			.invoke_async(&mut con)
			.await
			.map_err(boxed)?;
		log::debug!("Purged {purged} payments");

		Ok(())
	}
}
