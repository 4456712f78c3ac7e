use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::payment::Payment;
use crate::domain::payment_processor::ProcessorId;
use crate::domain::repository::PaymentRepository;

#[derive(Clone, Default)]
pub struct InMemoryPaymentRepository {
	payments: Arc<RwLock<HashMap<Uuid, Payment>>>,
}

impl InMemoryPaymentRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.payments
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn find(&self, correlation_id: &Uuid) -> Option<Payment> {
		self.payments
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.get(correlation_id)
			.cloned()
	}
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
	async fn save(&self, payment: Payment) -> Result<(), Box<dyn Error + Send>> {
		self.payments
			.write()
			.unwrap_or_else(PoisonError::into_inner)
			.insert(payment.correlation_id, payment);
		Ok(())
	}

	async fn get_summary_by_group(
		&self,
		processor: ProcessorId,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> Result<(usize, f64), Box<dyn Error + Send>> {
		let payments = self.payments.read().unwrap_or_else(PoisonError::into_inner);

		let summary = payments
			.values()
			.filter(|payment| payment.processed_by == processor)
			.filter(|payment| from.is_none_or(|from| payment.processed_at >= from))
			.filter(|payment| to.is_none_or(|to| payment.processed_at <= to))
			.fold((0, 0.0), |(count, total), payment| {
				(count + 1, total + payment.amount)
			});

		Ok(summary)
	}

	async fn clear(&self) -> Result<(), Box<dyn Error + Send>> {
		self.payments
			.write()
			.unwrap_or_else(PoisonError::into_inner)
			.clear();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use time::macros::datetime;

	use super::*;

	fn payment(
		processed_by: ProcessorId,
		amount: f64,
		processed_at: OffsetDateTime,
	) -> Payment {
		Payment {
			correlation_id: Uuid::new_v4(),
			amount,
			processed_by,
			processed_at,
		}
	}

	#[tokio::test]
	async fn test_summary_is_grouped_by_processor() {
		let repository = InMemoryPaymentRepository::new();
		let at = datetime!(2025-07-15 12:00:00 UTC);
		repository
			.save(payment(ProcessorId::Primary, 10.5, at))
			.await
			.unwrap();
		repository
			.save(payment(ProcessorId::Primary, 4.5, at))
			.await
			.unwrap();
		repository
			.save(payment(ProcessorId::Secondary, 1.0, at))
			.await
			.unwrap();

		let primary = repository
			.get_summary_by_group(ProcessorId::Primary, None, None)
			.await
			.unwrap();
		let secondary = repository
			.get_summary_by_group(ProcessorId::Secondary, None, None)
			.await
			.unwrap();

		assert_eq!(primary, (2, 15.0));
		assert_eq!(secondary, (1, 1.0));
	}

	#[tokio::test]
	async fn test_summary_respects_time_window() {
		let repository = InMemoryPaymentRepository::new();
		repository
			.save(payment(
				ProcessorId::Primary,
				1.0,
				datetime!(2025-07-15 11:59:59 UTC),
			))
			.await
			.unwrap();
		repository
			.save(payment(
				ProcessorId::Primary,
				2.0,
				datetime!(2025-07-15 12:00:00 UTC),
			))
			.await
			.unwrap();
		repository
			.save(payment(
				ProcessorId::Primary,
				4.0,
				datetime!(2025-07-15 12:00:01 UTC),
			))
			.await
			.unwrap();

		let summary = repository
			.get_summary_by_group(
				ProcessorId::Primary,
				Some(datetime!(2025-07-15 12:00:00 UTC)),
				Some(datetime!(2025-07-15 12:00:00 UTC)),
			)
			.await
			.unwrap();

		assert_eq!(summary, (1, 2.0));
	}

	#[tokio::test]
	async fn test_save_is_idempotent_per_correlation_id() {
		let repository = InMemoryPaymentRepository::new();
		let record = payment(ProcessorId::Secondary, 3.0, OffsetDateTime::now_utc());

		repository.save(record.clone()).await.unwrap();
		repository.save(record.clone()).await.unwrap();

		assert_eq!(repository.len(), 1);
		assert_eq!(repository.find(&record.correlation_id), Some(record));
	}

	#[tokio::test]
	async fn test_clear_removes_everything() {
		let repository = InMemoryPaymentRepository::new();
		repository
			.save(payment(
				ProcessorId::Primary,
				1.0,
				OffsetDateTime::now_utc(),
			))
			.await
			.unwrap();

		repository.clear().await.unwrap();

		assert!(repository.is_empty());
	}
}
