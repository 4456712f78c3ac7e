use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Debug, Clone, Copy)]
pub enum Misbehaviour {
	DropConnection,
	StallBody(Duration),
}

/// Raw TCP stand-in for a processor that breaks HTTP in ways an actix stub
/// cannot.
pub struct TcpProcessor {
	pub url: String,
	accepts: Arc<AtomicUsize>,
}

impl TcpProcessor {
	pub async fn start(misbehaviour: Misbehaviour) -> Self {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let port = listener.local_addr().unwrap().port();
		let accepts = Arc::new(AtomicUsize::new(0));

		let counter = accepts.clone();
		tokio::spawn(async move {
			while let Ok((mut socket, _)) = listener.accept().await {
				counter.fetch_add(1, Ordering::SeqCst);
				match misbehaviour {
					Misbehaviour::DropConnection => drop(socket),
					Misbehaviour::StallBody(stall) => {
						tokio::spawn(async move {
							let mut request = [0u8; 4096];
							let _ = socket.read(&mut request).await;
							let _ = socket
								.write_all(
									b"HTTP/1.1 200 OK\r\n\
									  Content-Type: application/json\r\n\
									  Content-Length: 46\r\n\r\n",
								)
								.await;
							tokio::time::sleep(stall).await;
							let _ = socket
								.write_all(
									br#"{"message":"payment processed successfully"}  "#,
								)
								.await;
						});
					}
				}
			}
		});

		Self {
			url: format!("http://127.0.0.1:{port}"),
			accepts,
		}
	}

	pub fn accepts(&self) -> usize {
		self.accepts.load(Ordering::SeqCst)
	}
}
