//! Zero-dependency argument parser shared by the tm-tools binaries.
//!
//! Both programs take their data on standard input, so the command line
//! only carries options. Options a program does not understand are errors.

use crate::routes::{DEFAULT_UPPER_BOUND, MAX_UPPER_BOUND};
use std::env;

/// Environment variable holding the default report format
pub const FORMAT_ENV_VAR: &str = "TM_TOOLS_FORMAT";

/// Which binary is parsing its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    RoutesByNumber,
    SixDigits,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::RoutesByNumber => "routes-by-number",
            Tool::SixDigits => "six-digits",
        }
    }
}

/// Output format selection for the route report
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OutputFormat {
    /// `key=[route, ...]` lines followed by the missing numbers
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{}'. Valid formats: text, json", s)),
        }
    }
}

/// Parsed command line arguments
#[derive(Debug, Clone)]
pub struct Args {
    pub tool: Tool,
    /// Report format (routes-by-number only)
    pub format: OutputFormat,
    /// Upper end of the missing-number report (routes-by-number only)
    pub upper_bound: u32,
    pub verbose: bool,
    pub quiet: bool,
    pub help: bool,
    pub version: bool,
}

impl Args {
    pub fn new(tool: Tool) -> Self {
        Args {
            tool,
            format: OutputFormat::default(),
            upper_bound: DEFAULT_UPPER_BOUND,
            verbose: false,
            quiet: false,
            help: false,
            version: false,
        }
    }

    /// Parse command line arguments from std::env::args(), with
    /// `TM_TOOLS_FORMAT` as the default format
    pub fn parse(tool: Tool) -> Result<Self, String> {
        let args: Vec<String> = env::args().skip(1).collect();
        let env_format = env::var(FORMAT_ENV_VAR).ok();
        Self::parse_with_env(tool, &args, env_format.as_deref())
    }

    /// Parse command line arguments from a slice, ignoring the environment
    pub fn parse_from(tool: Tool, args: &[String]) -> Result<Self, String> {
        Self::parse_with_env(tool, args, None)
    }

    /// Parse command line arguments from a slice. `env_format` is the value
    /// of `TM_TOOLS_FORMAT`; flags override it.
    pub fn parse_with_env(
        tool: Tool,
        args: &[String],
        env_format: Option<&str>,
    ) -> Result<Self, String> {
        let mut result = Args::new(tool);
        let routes = tool == Tool::RoutesByNumber;

        if routes {
            if let Some(format) = env_format {
                result.format = OutputFormat::from_str(format)
                    .map_err(|e| format!("{} (from {})", e, FORMAT_ENV_VAR))?;
            }
        }

        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            match arg.as_str() {
                "-h" | "--help" => result.help = true,
                "-V" | "--version" => result.version = true,
                "-v" | "--verbose" => result.verbose = true,
                "-q" | "--quiet" => result.quiet = true,

                "--format" if routes => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--format requires a format name".to_string());
                    }
                    result.format = OutputFormat::from_str(&args[i])?;
                }
                "--max" if routes => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--max requires a number".to_string());
                    }
                    result.upper_bound = parse_upper_bound(&args[i])?;
                }

                // Handle --option=value syntax
                _ if routes && arg.starts_with("--format=") => {
                    result.format = OutputFormat::from_str(&arg[9..])?;
                }
                _ if routes && arg.starts_with("--max=") => {
                    result.upper_bound = parse_upper_bound(&arg[6..])?;
                }

                _ if arg.starts_with('-') => {
                    return Err(format!("Unknown option: '{}'", arg));
                }
                _ => {
                    return Err(format!(
                        "Unexpected argument: '{}' ({} reads standard input)",
                        arg,
                        tool.name()
                    ));
                }
            }

            i += 1;
        }

        Ok(result)
    }
}

fn parse_upper_bound(value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(n) if (1..=MAX_UPPER_BOUND).contains(&n) => Ok(n),
        _ => Err(format!(
            "Invalid --max value: '{}' (expected a number from 1 to {})",
            value, MAX_UPPER_BOUND
        )),
    }
}
