//! Sort library demo
//!
//! Generates a list of random 64-bit integers and sorts copies of it with each
//! selected algorithm, reporting the number of comparisons and checking every
//! result.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Write};
use std::process;

use sortkit::{
    args::DemoArgs,
    config::DemoConfig,
    error::{SortContext, SortResult},
    run_demo,
};

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("sortkit: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("debug"));

    let config = parse_config_from_matches(&matches)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let exit_code = run_demo(&config, &mut out)?;
    out.flush().with_context(|| "flushing report".to_string())?;
    Ok(exit_code)
}

/// `RUST_LOG` wins; otherwise warnings only, or debug output with `-d`
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn method_flag(id: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .short_alias(short.to_ascii_uppercase())
        .long(id)
        .help(help)
        .action(ArgAction::SetTrue)
}

fn build_cli() -> Command {
    Command::new("sortkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort random integers with classic sorting algorithms")
        .long_about("Generates a list of random 64-bit integers and sorts a copy of it with each selected algorithm, printing the number of comparisons used and verifying the result.\n\nFor radix sort the count is the number of key evaluations (eight byte passes).")
        .disable_help_flag(true) // -h selects heap sort
        .disable_version_flag(true)

        .arg(Arg::new("items")
            .short('n')
            .short_alias('N')
            .long("items")
            .help("Number of elements to sort [default: 1000]")
            .value_name("N")
            .value_parser(clap::value_parser!(usize)))

        // Sort methods
        .arg(method_flag("insertion", 'i', "Use insertion sort"))
        .arg(method_flag("bubble", 'b', "Use bubble sort"))
        .arg(method_flag("shell", 's', "Use shell sort"))
        .arg(method_flag("quick", 'q', "Use quick sort"))
        .arg(method_flag("merge", 'm', "Use merge sort"))
        .arg(method_flag("heap", 'h', "Use heap sort"))
        .arg(method_flag("radix", 'r', "Use radix sort"))
        .arg(method_flag("all", 'a', "Use every sort method"))

        .arg(Arg::new("debug")
            .short('d')
            .short_alias('D')
            .long("debug")
            .help("Display sort results and other debug information")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("seed")
            .long("seed")
            .help("Seed for the random data (printed in debug output)")
            .value_name("SEED")
            .value_parser(clap::value_parser!(u64)))

        .arg(Arg::new("help")
            .long("help")
            .help("Display this help and exit")
            .action(ArgAction::Help))
        .arg(Arg::new("version")
            .long("version")
            .help("Output version information and exit")
            .action(ArgAction::Version))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &ArgMatches) -> SortResult<DemoConfig> {
    let args = DemoArgs {
        items: matches.get_one::<usize>("items").copied(),
        insertion: matches.get_flag("insertion"),
        bubble: matches.get_flag("bubble"),
        shell: matches.get_flag("shell"),
        quick: matches.get_flag("quick"),
        merge: matches.get_flag("merge"),
        heap: matches.get_flag("heap"),
        radix: matches.get_flag("radix"),
        all: matches.get_flag("all"),
        debug: matches.get_flag("debug"),
        seed: matches.get_one::<u64>("seed").copied(),
    };

    args.into_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortkit::{SortError, SortMethod};

    fn parse(argv: &[&str]) -> SortResult<DemoConfig> {
        let matches = build_cli()
            .try_get_matches_from(argv)
            .expect("Failed to parse test arguments");
        parse_config_from_matches(&matches)
    }

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_parse_basic_config() {
        let config = parse(&["sortkit", "-q", "-m", "-n", "50"]).expect("Failed to parse test config");
        assert_eq!(config.methods, vec![SortMethod::Quick, SortMethod::Merge]);
        assert_eq!(config.num_items, 50);
        assert!(!config.debug);
    }

    #[test]
    fn test_upper_case_aliases() {
        let config = parse(&["sortkit", "-H", "-R", "-N", "8", "-D"]).expect("Failed to parse test config");
        assert_eq!(config.methods, vec![SortMethod::Heap, SortMethod::Radix]);
        assert_eq!(config.num_items, 8);
        assert!(config.debug);
    }

    #[test]
    fn test_combined_short_flags() {
        let config = parse(&["sortkit", "-ibs", "--seed", "99"]).expect("Failed to parse test config");
        assert_eq!(
            config.methods,
            vec![SortMethod::Insertion, SortMethod::Bubble, SortMethod::Shell]
        );
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_no_methods_is_an_error() {
        let result = parse(&["sortkit", "-n", "10"]);
        assert!(matches!(result, Err(SortError::NoMethodSelected)));
    }

    #[test]
    fn test_too_few_items() {
        let result = parse(&["sortkit", "-a", "-n", "1"]);
        assert!(matches!(result, Err(SortError::TooFewItems { count: 1 })));
    }
}
