use super::*;

#[derive(Debug, Parser)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Read JSON feeds in the terminal")]
pub(crate) struct Arguments {
  /// Append logs to this file. Filter them with `RUST_LOG`.
  #[arg(long, value_name = "PATH")]
  log_file: Option<PathBuf>,
  /// Subscription file to read and update.
  #[arg(long, value_name = "PATH")]
  subscriptions: Option<PathBuf>,
}

impl Arguments {
  pub(crate) fn initialize_logging(&self) -> Result {
    let Some(path) = &self.log_file else {
      return Ok(());
    };

    let file = fs::OpenOptions::new()
      .create(true)
      .append(true)
      .open(path)
      .with_context(|| format!("could not open log file {}", path.display()))?;

    tracing_subscriber::fmt()
      .with_env_filter(
        EnvFilter::try_from_default_env()
          .unwrap_or_else(|_| EnvFilter::new("info")),
      )
      .with_ansi(false)
      .with_writer(Mutex::new(file))
      .try_init()
      .map_err(|error| anyhow!(error))
  }

  pub(crate) fn subscriptions_path(&self) -> Result<PathBuf> {
    match &self.subscriptions {
      Some(path) => Ok(path.clone()),
      None => Subscriptions::default_path(),
    }
  }
}
