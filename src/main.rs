use slc::config::runtime::ValidatorPreferences;
use slc::grammar::{loader, profiles, LanguageProfile};
use slc::pipeline::LineValidator;
use slc::logging;
use std::env;

/// Options parsed from the command line
struct CliOptions {
    source_path: String,
    grammar_name: String,
    grammar_file: Option<String>,
    parallel: bool,
    threads: Option<usize>,
    quiet: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            source_path: "code.txt".to_string(),
            grammar_name: "minimal".to_string(),
            grammar_file: None,
            parallel: false,
            threads: None,
            quiet: false,
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help(&args[0]);
        return;
    }

    let options = parse_options(&args[1..]);

    if !options.quiet {
        if let Err(e) = logging::init_global_logging() {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    }

    let profile = match load_selected_profile(&options) {
        Ok(profile) => profile,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    let mut preferences = ValidatorPreferences::default();
    if options.parallel {
        preferences.parallel_validation = true;
    }
    if let Some(threads) = options.threads {
        preferences.worker_threads = threads;
    }

    let validator = LineValidator::with_preferences(profile, preferences);

    match validator.validate_file(&options.source_path) {
        Ok(report) => {
            println!("{}", report.message());
            if !report.is_success() {
                std::process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    }
}

fn load_selected_profile(options: &CliOptions) -> Result<LanguageProfile, String> {
    if let Some(path) = &options.grammar_file {
        return loader::load_profile(path)
            .map_err(|e| format!("Failed to load grammar profile '{}': {}", path, e));
    }

    profiles::by_name(&options.grammar_name)
        .map_err(|e| format!("Failed to select grammar: {}", e))
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut positional_seen = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--grammar" => {
                if i + 1 < args.len() {
                    options.grammar_name = args[i + 1].clone();
                    i += 1;
                } else {
                    eprintln!("Warning: --grammar requires a profile name");
                }
            }
            "--grammar-file" => {
                if i + 1 < args.len() {
                    options.grammar_file = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Warning: --grammar-file requires a path");
                }
            }
            "--parallel" => {
                options.parallel = true;
            }
            "--threads" => {
                if i + 1 < args.len() {
                    if let Ok(threads) = args[i + 1].parse::<usize>() {
                        options.threads = Some(threads.max(1));
                        i += 1;
                    } else {
                        eprintln!(
                            "Warning: Invalid thread count '{}', using default",
                            args[i + 1]
                        );
                        i += 1;
                    }
                } else {
                    eprintln!("Warning: --threads requires a number");
                }
            }
            "--quiet" => {
                options.quiet = true;
            }
            other if other.starts_with("--") => {
                eprintln!("Warning: Unknown option '{}'", other);
            }
            positional => {
                if positional_seen {
                    eprintln!("Warning: Extra argument '{}' ignored", positional);
                } else {
                    options.source_path = positional.to_string();
                    positional_seen = true;
                }
            }
        }
        i += 1;
    }

    options
}

fn print_help(program_name: &str) {
    println!("slc v{}", env!("CARGO_PKG_VERSION"));
    println!("Line-oriented syntax checker for a minimal statement language");
    println!();
    println!("USAGE:");
    println!("    {} [source-file] [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <source-file>    Path to the source file (default: code.txt)");
    println!();
    println!("OPTIONS:");
    println!("    --help               Show this help message");
    println!("    --grammar NAME       Built-in grammar profile: minimal or extended");
    println!("    --grammar-file PATH  Load a grammar profile from a TOML file");
    println!("    --parallel           Validate lines on multiple worker threads");
    println!("    --threads N          Worker thread count for --parallel");
    println!("    --quiet              Suppress log events, print only the verdict");
    println!();
    println!("OUTPUT:");
    println!("    One line on stdout: either the success message or the first");
    println!("    failing line's diagnostic. Exit code 0 on success, 1 otherwise.");
    println!();
    println!("EXAMPLES:");
    println!("    {}                               # Validate code.txt", program_name);
    println!("    {} program.src                   # Validate another file", program_name);
    println!("    {} program.src --grammar extended", program_name);
    println!("    {} big.src --parallel --threads 4", program_name);
}
