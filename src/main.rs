use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use spoken_time::app::{self, Shell};
use spoken_time::cli::Cli;
use spoken_time::{ClockTime, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    spoken_time::init_logger(&config.log_level);
    debug!("Running with config: {}", serde_json::to_string(&config)?);

    if cli.is_one_shot() {
        let mut inputs = cli.times.clone();
        if cli.now {
            let now = ClockTime::now();
            info!("Using current local time {}", now);
            inputs.push(now.to_string());
        }

        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        let all_ok =
            app::run_one_shot(&inputs, config.format, &mut stdout.lock(), &mut stderr.lock())?;
        if !all_ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    Shell::new(config).run()
}
