use std::path::PathBuf;
use clap::{Parser, Subcommand};
use signal_hook::consts::signal::*;
use signal_hook_tokio::Signals;
use futures::stream::StreamExt;

use coarnotify_core::ext::LoggableError;
#[cfg(feature = "cli")]
use coarnotify_cli as cli;

#[cfg(feature = "serve")]
use coarnotify_routes as routes;


#[derive(Parser)]
/// send, receive and check COAR Notify notifications
struct Args {
	#[clap(subcommand)]
	/// command to run
	command: Mode,

	/// path to config file, leave empty to not use any
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(long)]
	/// public base url of the inbox, overrides config value
	base_url: Option<String>,

	#[arg(long, default_value_t=false)]
	/// run with debug level tracing
	debug: bool,

	#[arg(long)]
	/// force set number of worker threads for async runtime, defaults to number of cores
	threads: Option<usize>,
}

#[derive(Clone, Subcommand)]
enum Mode {
	/// print current or default configuration
	Config,

	#[cfg(feature = "cli")]
	/// work with notification files
	Cli {
		#[clap(subcommand)]
		/// task to run
		command: cli::CliCommand,
	},

	#[cfg(feature = "serve")]
	/// start inbox server
	Serve {
		#[arg(short, long, default_value="127.0.0.1:3000")]
		/// addr to bind and serve onto
		bind: String,
	},
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.compact()
		.with_max_level(if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.init();

	let mut config = coarnotify_core::Config::load(args.config.as_ref());

	if let Some(base_url) = args.base_url.clone() {
		config.server.base_url = base_url;
	}

	if matches!(args.command, Mode::Config) {
		println!("{}", toml::to_string_pretty(&config).expect("failed serializing config"));
		return;
	}

	let mut runtime = tokio::runtime::Builder::new_multi_thread();

	if let Some(threads) = args.threads {
		runtime.worker_threads(threads);
	}

	runtime
		.enable_io()
		.enable_time()
		.thread_name("coarnotify-async-worker")
		.build()
		.expect("failed creating tokio async runtime")
		.block_on(async { init(args, config).await })
}

async fn init(args: Args, config: coarnotify_core::Config) {
	let (tx, rx) = tokio::sync::watch::channel(false);
	let signals = Signals::new([SIGTERM, SIGINT]).expect("failed registering signal handler");
	let handle = signals.handle();
	let signals_task = tokio::spawn(handle_signals(signals, tx));
	#[allow(unused)]
	let stop = CancellationToken(rx);

	match args.command {
		#[cfg(feature = "cli")]
		Mode::Cli { command } => {
			if let Err(e) = cli::run(config, command).await {
				tracing::error!("cli task failed: {e}");
				std::process::exit(1);
			}
		},

		#[cfg(feature = "serve")]
		Mode::Serve { bind } =>
			routes::serve(routes::Inbox::from_config(&config), bind, stop)
				.await.expect("failed serving inbox"),

		Mode::Config => unreachable!(),
	}

	handle.close();
	signals_task.await.expect("failed joining signal handler task");
}

#[derive(Clone)]
struct CancellationToken(tokio::sync::watch::Receiver<bool>);

#[cfg(feature = "serve")]
impl routes::ShutdownToken for CancellationToken {
	fn event(mut self) -> impl std::future::Future<Output = ()> + std::marker::Send {
		async move {
			self.0.changed().await.warn_failed("cancellation token channel closed, stopping...");
		}
	}
}

async fn handle_signals(
	mut signals: signal_hook_tokio::Signals,
	tx: tokio::sync::watch::Sender<bool>,
) {
	while let Some(signal) = signals.next().await {
		match signal {
			SIGTERM | SIGINT => {
				tracing::info!("received stop signal, closing tasks");
				tx.send(true).info_failed("error sending stop signal to tasks")
			},
			_ => unreachable!(),
		}
	}
}
