use crate::domain::payment_processor::ProcessorId;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::{
	GetPaymentSummaryQuery, PaymentSummaryResult, PaymentsSummaryResponse,
};

fn round_to_cents(amount: f64) -> f64 {
	(amount * 100.0).round() / 100.0
}

#[derive(Clone)]
pub struct GetPaymentSummaryUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> GetPaymentSummaryUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	async fn summarize(
		&self,
		processor: ProcessorId,
		query: &GetPaymentSummaryQuery,
	) -> Result<PaymentSummaryResult, Box<dyn std::error::Error + Send>> {
		let (total_requests, total_amount) = self
			.payment_repo
			.get_summary_by_group(processor, query.from, query.to)
			.await?;

		Ok(PaymentSummaryResult {
			total_requests,
			total_amount: round_to_cents(total_amount),
		})
	}

	pub async fn execute(
		&self,
		query: GetPaymentSummaryQuery,
	) -> Result<PaymentsSummaryResponse, Box<dyn std::error::Error + Send>> {
		Ok(PaymentsSummaryResponse {
			default:  self.summarize(ProcessorId::Primary, &query).await?,
			fallback: self.summarize(ProcessorId::Secondary, &query).await?,
		})
	}
}
