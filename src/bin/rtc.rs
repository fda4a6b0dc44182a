use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::bail;
    use clap::{Parser, Subcommand};
    use rtc::{
        config::SimulationConfig,
        io::{parse_ron_file, write_ron_file},
        run,
    };
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    #[command(about = "Simulate a projectile and plot its trail as a PPM image", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Run the simulation
        Run {
            /// Path to RON configuration file to use
            #[arg(short, long)]
            config: Option<PathBuf>,
            /// Path where the image should be written (overrides the
            /// configured path)
            #[arg(short, long)]
            output: Option<PathBuf>,
        },
        /// Generate the default RON configuration file
        GenerateConfig {
            /// Path where the file should be written
            #[arg(short, long)]
            output_path: PathBuf,
            /// Overwrite any existing file at the given path
            #[arg(short, long)]
            force_overwrite: bool,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Run { config, output } => {
                let mut config = match config {
                    Some(file_path) => parse_ron_file(file_path)?,
                    None => SimulationConfig::default(),
                };
                if let Some(output) = output {
                    config.output_path = output;
                }
                run::run(&config)?;
                Ok(())
            }
            Command::GenerateConfig {
                output_path,
                force_overwrite,
            } => {
                if !force_overwrite && output_path.exists() {
                    bail!("File {} already exists", output_path.display());
                }
                let config = SimulationConfig::default();
                write_ron_file(&config, output_path)
            }
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
