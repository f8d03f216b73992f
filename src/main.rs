use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;
use subnet_calculator::cmd::CommandLine;
use subnet_calculator::config::Config;
use subnet_calculator::logging::init_logging;
use subnet_calculator::run;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cmd = CommandLine::parse_args();
    match start(&cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn start(cmd: &CommandLine) -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");
    log::debug!("Config {:?}", config);

    let report = run(cmd, &config)?;
    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &report)
                .map_err(|e| format!("Error writing report {}: {e}", path.display()))?;
            log::info!("Report written to {}", path.display());
        }
        None => print!("{report}"),
    }
    Ok(())
}
