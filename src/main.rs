use std::io;
use std::sync::Arc;

use env_logger::Env;
use log::error;
use rinha_gateway::infrastructure::config::settings::Config;
use rinha_gateway::run;

#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let config = Config::load().map_err(|e| {
		error!("Failed to load configuration: {e}");
		io::Error::other(e)
	})?;

	run(Arc::new(config)).await
}
