use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::payment::Payment;
use crate::domain::payment_processor::ProcessorId;

#[async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
	async fn save(
		&self,
		payment: Payment,
	) -> Result<(), Box<dyn std::error::Error + Send>>;
	/// Number of payments and their total amount handled by `processor`,
	/// optionally restricted to `processed_at` within `[from, to]`.
	async fn get_summary_by_group(
		&self,
		processor: ProcessorId,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> Result<(usize, f64), Box<dyn std::error::Error + Send>>;
	async fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send>>;
}
