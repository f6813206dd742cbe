use std::process::ExitCode;

use glowgrid::{
    Generator,
    error::Result,
    input::{self, Command},
};
use tracing::{Level, error, info};

fn run(options: input::Options) -> Result<()> {
    let mut generator = Generator::new(options.config)?;
    let image = generator.generate()?;
    image.save(&options.output)?;
    info!(path = %options.output.display(), "image written");
    Ok(())
}

fn main() -> ExitCode {
    let command = match input::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}\n\n{}", err, input::USAGE);
            return ExitCode::from(2);
        }
    };

    let options = match command {
        Command::Help => {
            println!("{}", input::USAGE);
            return ExitCode::SUCCESS;
        }
        Command::Generate(options) => options,
    };

    tracing_subscriber::fmt()
        .with_max_level(if options.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
