//! Command-line input: turns argv into a generator configuration.
//!
//! Flags follow the `-name value` convention; `--name value` and
//! `-name=value` are accepted too.

use std::path::PathBuf;

use crate::application::GeneratorConfig;
use crate::domain::{Palette, Rgb};
use crate::error::{Error, Result};

pub const USAGE: &str = "\
Usage: glowgrid [flags]

  -output <path>       The output file (default \"output.png\")
  -x <pixels>          The x size of the image (default 800)
  -y <pixels>          The y size of the image (default 800)
  -step <pixels>       The step between each cells (default 60)
  -cells <0-100>       The cell distribution on the grid (default 40)
  -inner <0-100>       The inner circle distribution on a cell (default 80)
  -outer <0-100>       The outer circle distribution on a cell (default 60)
  -palette <colors>    The palette passed as weighted colors
                       (default \"#fa32f3:100,#00a1cd:100,#4b1ff7:30\")
  -background <color>  The background color (default \"#000e12\")
  -seed <u64>          Seed for a reproducible image
  -verbose             Log every generation pass
  -h, -help            Show this message";

/// Parsed command line
#[derive(Clone, Debug)]
pub struct Options {
    pub config: GeneratorConfig,
    pub output: PathBuf,
    pub verbose: bool,
}

/// What the command line asks for
#[derive(Debug)]
pub enum Command {
    Generate(Options),
    Help,
}

fn boolean(flag: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(Error::Usage(format!("invalid boolean value '{}' for -{}", value, flag))),
    }
}

fn number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Usage(format!("invalid value '{}' for -{}", value, flag)))
}

/// Parse arguments, excluding the program name
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = Options {
        config: GeneratorConfig::default(),
        output: PathBuf::from("output.png"),
        verbose: false,
    };

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        let name = arg
            .strip_prefix("--")
            .or_else(|| arg.strip_prefix('-'))
            .ok_or_else(|| Error::Usage(format!("unexpected argument '{}'", arg)))?;

        let (flag, inline) = match name.split_once('=') {
            Some((flag, value)) => (flag, Some(value.to_string())),
            None => (name, None),
        };

        match flag {
            "h" | "help" => return Ok(Command::Help),
            "verbose" | "v" => {
                options.verbose = match &inline {
                    Some(value) => boolean(flag, value)?,
                    None => true,
                };
                continue;
            }
            _ => {}
        }

        let value = match inline {
            Some(value) => value,
            None => args
                .next()
                .ok_or_else(|| Error::Usage(format!("flag needs an argument: -{}", flag)))?,
        };

        let config = &mut options.config;
        match flag {
            "output" => options.output = PathBuf::from(value),
            "x" => config.width = number(flag, &value)?,
            "y" => config.height = number(flag, &value)?,
            "step" => config.step = number(flag, &value)?,
            "cells" => config.distributions.cell = number(flag, &value)?,
            "inner" => config.distributions.inner = number(flag, &value)?,
            "outer" => config.distributions.outer = number(flag, &value)?,
            "palette" => config.palette = Palette::parse(&value)?,
            "background" | "backround" => config.background = Rgb::parse_hex(&value)?,
            "seed" => config.seed = Some(number(flag, &value)?),
            other => return Err(Error::Usage(format!("flag provided but not defined: -{}", other))),
        }
    }

    options.config.validate()?;
    Ok(Command::Generate(options))
}
