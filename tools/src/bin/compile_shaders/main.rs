use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use spvc::{Driver, Options};

fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  let filter_layer = EnvFilter::from_env("MAIN_LOG");
  tracing_subscriber::registry()
    .with(filter_layer)
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  // The source root is the directory this executable lives in, resolved once
  // at startup.
  let exe = std::env::current_exe()
    .context("Failed to resolve the path of the running executable")?;
  let source_root = exe.parent()
    .context("Failed to get the directory containing the running executable")?
    .canonicalize()
    .context("Failed to canonicalize the source root directory")?;
  info!("Compiling shader sources under '{}'", source_root.display());

  let driver = Driver::new(Options::from_source_root(source_root));
  let summary = driver.run()?;
  info!("Invoked the shader compiler for {} of {} matched source(s)", summary.invoked, summary.matched);
  Ok(())
}
