use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::error;

use chromium_fetch::config::InstallerConfig;
use chromium_fetch::installer::Installer;
use chromium_fetch::platform::Platform;
use chromium_fetch::version::TargetVersion;

#[derive(Parser)]
#[command(name = "chromium-fetch")]
#[command(version, about = "Download the Chromium snapshot matching a package's major version")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve, download and extract the matching Chromium build
    Install(Options),
    /// Print the catalog version and revision that would be installed
    Resolve(Options),
}

#[derive(Args)]
struct Options {
    /// Version whose major component selects the build (e.g. 90.0.0 or 90.0.4430.212)
    #[arg(long, conflicts_with = "manifest")]
    target_version: Option<String>,

    /// npm-style manifest whose `version` field selects the build
    #[arg(long, default_value = "package.json")]
    manifest: PathBuf,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory receiving the extracted browser
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Override the version catalog URL
    #[arg(long)]
    catalog_url: Option<String>,

    /// Override the snapshot CDN base URL
    #[arg(long)]
    cdn_url: Option<String>,
}

impl Options {
    fn target(&self) -> anyhow::Result<TargetVersion> {
        match &self.target_version {
            Some(version) => Ok(version.parse()?),
            None => TargetVersion::from_manifest(&self.manifest)
                .with_context(|| "Pass --target-version or point --manifest at a package.json"),
        }
    }

    fn installer_config(&self) -> anyhow::Result<InstallerConfig> {
        let mut config = match &self.config {
            Some(path) => InstallerConfig::load(path)?,
            None => InstallerConfig::default(),
        };

        if let Some(output_dir) = &self.output_dir {
            config.output_dir = Some(output_dir.clone());
        }
        if let Some(url) = &self.catalog_url {
            config.catalog_url = url.clone();
        }
        if let Some(url) = &self.cdn_url {
            config.cdn_url = url.clone();
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = match chromium_fetch::logging::init(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(run(cli.command)));

    // Pipeline failures are logged by the installer; everything else is logged here
    result.unwrap_or_else(|e| {
        error!("{:#}", e);
        ExitCode::FAILURE
    })
}

async fn run(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Install(options) => {
            let target = options.target()?;
            let installer =
                Installer::from_config(&options.installer_config()?, Platform::detect()?)?;

            match installer.run(&target).await {
                Ok(outcome) => println!("{}", outcome.executable.display()),
                Err(_) => return Ok(ExitCode::FAILURE),
            }
        }
        Command::Resolve(options) => {
            let target = options.target()?;
            let installer =
                Installer::from_config(&options.installer_config()?, Platform::detect()?)?;

            let build = installer.resolve(&target).await?;
            println!("{} {}", build.version, build.revision);
        }
    }

    Ok(ExitCode::SUCCESS)
}
