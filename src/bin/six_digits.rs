//! six-digits entry point
//!
//! Reads a Travel Mapping `.wpt` file on standard input and writes it back
//! with every coordinate URL at six decimal places.

use tm_tools::cli::args::{Args, Tool};
use tm_tools::version::get_build_info;
use tm_tools::{logging, run_six_digits, EXIT_INPUT_ERROR, EXIT_USAGE_ERROR};

use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::parse(Tool::SixDigits) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'six-digits --help' for usage information.");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }
    if args.version {
        println!("{}", get_build_info(Tool::SixDigits.name()));
        return ExitCode::SUCCESS;
    }

    logging::init(args.verbose, args.quiet);

    let stdin = io::stdin();
    let mut stdout = BufWriter::new(io::stdout().lock());

    match run_six_digits(stdin.lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}

fn print_help() {
    println!(
        r#"six-digits - Normalize .wpt coordinate URLs to six decimal places

USAGE:
    six-digits [OPTIONS] < FILE.wpt > FIXED.wpt

Reads 'LABEL [ALT_LABEL...] URL' lines on standard input, where URL ends in
'?lat=<lat>&lon=<lon>'. Labels are copied unchanged and the URL is rewritten
as http://www.openstreetmap.org/?lat=<lat>&lon=<lon> with six decimals.

OPTIONS:
    -v, --verbose   Log diagnostics to standard error
    -q, --quiet     Only log errors
    -h, --help      Print this help message
    -V, --version   Print version information

ENVIRONMENT:
    TM_TOOLS_LOG    Log filter, e.g. 'debug'
    NO_COLOR        Disable colored log output

EXIT CODES:
    0   All lines rewritten
    1   Malformed input or I/O error (earlier lines are already written)
    2   Invalid arguments"#
    );
}
