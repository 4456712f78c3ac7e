use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

/// One scripted answer of the stub: status, body and how long to stall
/// before answering.
#[derive(Debug, Clone)]
pub struct StubResponse {
	status: u16,
	body:   Value,
	delay:  Duration,
}

impl StubResponse {
	pub fn ok() -> Self {
		Self::status(200).with_body(json!({
			"message": "payment processed successfully"
		}))
	}

	pub fn status(status: u16) -> Self {
		Self {
			status,
			body: Value::Null,
			delay: Duration::ZERO,
		}
	}

	pub fn health(failing: bool, min_response_time: u64) -> Self {
		Self::status(200).with_body(json!({
			"failing": failing,
			"minResponseTime": min_response_time
		}))
	}

	pub fn with_body(mut self, body: Value) -> Self {
		self.body = body;
		self
	}

	pub fn delayed(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	async fn respond(self) -> HttpResponse {
		if !self.delay.is_zero() {
			actix_web::rt::time::sleep(self.delay).await;
		}

		let status = StatusCode::from_u16(self.status)
			.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		if self.body.is_null() {
			HttpResponse::build(status).finish()
		} else {
			HttpResponse::build(status).json(self.body)
		}
	}
}

/// Answers from a queue of scripted responses, then keeps repeating the
/// fallback response.
struct Script {
	queued:   Mutex<VecDeque<StubResponse>>,
	fallback: Mutex<StubResponse>,
	hits:     AtomicUsize,
}

impl Script {
	fn new(fallback: StubResponse) -> Self {
		Self {
			queued:   Mutex::new(VecDeque::new()),
			fallback: Mutex::new(fallback),
			hits:     AtomicUsize::new(0),
		}
	}

	fn next(&self) -> StubResponse {
		self.hits.fetch_add(1, Ordering::SeqCst);
		self.queued
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(|| self.fallback.lock().unwrap().clone())
	}
}

struct StubState {
	payments: Script,
	health:   Script,
	received: Mutex<Vec<Value>>,
}

async fn payments(state: web::Data<StubState>, body: web::Bytes) -> HttpResponse {
	let payload = serde_json::from_slice(&body).unwrap_or(Value::Null);
	state.received.lock().unwrap().push(payload);
	state.payments.next().respond().await
}

async fn service_health(state: web::Data<StubState>) -> HttpResponse {
	state.health.next().respond().await
}

/// In-process stand-in for a payment processor, serving `POST /payments` and
/// `GET /payments/service-health` on an ephemeral local port.
pub struct StubProcessor {
	pub url: String,
	state:   web::Data<StubState>,
	handle:  ServerHandle,
}

impl StubProcessor {
	pub async fn start() -> Self {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let port = listener.local_addr().unwrap().port();

		let state = web::Data::new(StubState {
			payments: Script::new(StubResponse::ok()),
			health:   Script::new(StubResponse::health(false, 0)),
			received: Mutex::new(Vec::new()),
		});
		let app_state = state.clone();

		let server = HttpServer::new(move || {
			App::new()
				.app_data(app_state.clone())
				.route("/payments", web::post().to(payments))
				.route("/payments/service-health", web::get().to(service_health))
		})
		.listen(listener)
		.unwrap()
		.workers(2)
		.disable_signals()
		.shutdown_timeout(0)
		.run();

		let handle = server.handle();
		actix_web::rt::spawn(server);

		Self {
			url: format!("http://127.0.0.1:{port}"),
			state,
			handle,
		}
	}

	pub fn script_payments(&self, responses: impl IntoIterator<Item = StubResponse>) {
		self.state
			.payments
			.queued
			.lock()
			.unwrap()
			.extend(responses);
	}

	pub fn respond_payments_with(&self, response: StubResponse) {
		*self.state.payments.fallback.lock().unwrap() = response;
	}

	pub fn respond_health_with(&self, response: StubResponse) {
		*self.state.health.fallback.lock().unwrap() = response;
	}

	pub fn payment_hits(&self) -> usize {
		self.state.payments.hits.load(Ordering::SeqCst)
	}

	pub fn health_hits(&self) -> usize {
		self.state.health.hits.load(Ordering::SeqCst)
	}

	pub fn received_payments(&self) -> Vec<Value> {
		self.state.received.lock().unwrap().clone()
	}

	pub async fn stop(self) {
		self.handle.stop(false).await;
	}
}

pub fn unreachable_url() -> String {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let port = listener.local_addr().unwrap().port();
	drop(listener);
	format!("http://127.0.0.1:{port}")
}
