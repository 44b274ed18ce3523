use std::env;

use log::{debug, info};

use randmat::MatrixConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = MatrixConfig::from_os_args(env::args_os().skip(1))?;
    debug!("resolved config {config:?}");

    if config.seed.is_none() {
        info!("no seed given, output will not be reproducible");
    }

    randmat::generate_and_write_with(&config)?;
    Ok(())
}
