//! routes-by-number entry point
//!
//! Reads a Travel Mapping `.list` file on standard input and prints the
//! routes it mentions grouped by route number.

use tm_tools::cli::args::{Args, Tool};
use tm_tools::version::get_build_info;
use tm_tools::{logging, run_routes_by_number, EXIT_INPUT_ERROR, EXIT_USAGE_ERROR};

use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::parse(Tool::RoutesByNumber) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'routes-by-number --help' for usage information.");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }
    if args.version {
        println!("{}", get_build_info(Tool::RoutesByNumber.name()));
        return ExitCode::SUCCESS;
    }

    logging::init(args.verbose, args.quiet);

    let stdin = io::stdin();
    let mut stdout = BufWriter::new(io::stdout().lock());

    match run_routes_by_number(&args, stdin.lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}

fn print_help() {
    println!(
        r#"routes-by-number - Group .list file routes by route number

USAGE:
    routes-by-number [OPTIONS] < FILE.list

Reads 'REGION ROUTE [WAYPOINT...]' records on standard input. Lines whose
first token starts with '#' are comments. Each route is filed under the
number formed by the ASCII digits 0-9 in its name (no digits: 0).
Other Unicode digits are not counted.

OPTIONS:
    --format <FMT>  Report format: text (default), json
    --max <N>       Report missing numbers from 1 to N (default: 999,
                    at most 1000000)
    -v, --verbose   Log diagnostics to standard error
    -q, --quiet     Only log errors
    -h, --help      Print this help message
    -V, --version   Print version information

ENVIRONMENT:
    TM_TOOLS_FORMAT   Default report format
    TM_TOOLS_LOG      Log filter, e.g. 'debug' or 'tm_tools::routes=trace'
    NO_COLOR          Disable colored log output

EXIT CODES:
    0   Report written
    1   Malformed input or I/O error
    2   Invalid arguments

EXAMPLES:
    routes-by-number < user.list
    routes-by-number --format json --max 2000 < user.list > numbers.json"#
    );
}
