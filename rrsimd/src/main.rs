//! # Simulation Driver Binary
//!
//! Command-line entry point: parse configuration, load the workload, run
//! the simulation, emit the trace on stdout and the report after it.

use rrsimd::{RuntimeConfig, SimulationRuntime, TextTraceSink, DEFAULT_HORIZON_TICKS};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use workload::{load_workload, TaskSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
struct CliOptions {
    quantum_ticks: u64,
    dispatch_ticks: u64,
    input: Option<PathBuf>,
    horizon_ticks: u64,
    exit_on_idle: bool,
    report: ReportFormat,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let options = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let specs = read_workload(&options).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let config = RuntimeConfig {
        quantum_ticks: options.quantum_ticks,
        dispatch_ticks: options.dispatch_ticks,
        horizon_ticks: options.horizon_ticks,
        exit_on_idle: options.exit_on_idle,
    };
    let mut runtime = SimulationRuntime::new(config, specs).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    let stdout = io::stdout();
    let mut sink = TextTraceSink::new(stdout.lock());
    let report = runtime.run(&mut sink).unwrap_or_else(|e| {
        eprintln!("Simulation aborted: {}", e);
        process::exit(1);
    });

    if options.verbose {
        for entry in runtime.log().entries() {
            eprintln!("{}", entry);
        }
    }

    println!();
    match options.report {
        ReportFormat::Text => print!("{}", report.render_text()),
        ReportFormat::Json => {
            let json = report.render_json().unwrap_or_else(|e| {
                eprintln!("Failed to render report: {}", e);
                process::exit(1);
            });
            println!("{}", json);
        }
    }
}

fn read_workload(options: &CliOptions) -> Result<Vec<TaskSpec>, String> {
    match &options.input {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
            load_workload(BufReader::new(file)).map_err(|e| e.to_string())
        }
        None => {
            let stdin = io::stdin();
            load_workload(stdin.lock()).map_err(|e| e.to_string())
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut quantum_ticks: Option<u64> = None;
    let mut dispatch_ticks: Option<u64> = None;
    let mut input: Option<PathBuf> = None;
    let mut horizon_ticks = DEFAULT_HORIZON_TICKS;
    let mut exit_on_idle = false;
    let mut report = ReportFormat::Text;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--quantum" | "-q" => {
                i += 1;
                quantum_ticks = Some(parse_ticks(args, i, "--quantum")?);
            }
            "--dispatch" | "-d" => {
                i += 1;
                dispatch_ticks = Some(parse_ticks(args, i, "--dispatch")?);
            }
            "--input" | "-i" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --input".to_string());
                }
                input = Some(PathBuf::from(&args[i]));
            }
            "--horizon" => {
                i += 1;
                horizon_ticks = parse_ticks(args, i, "--horizon")?;
            }
            "--exit-on-idle" => {
                exit_on_idle = true;
            }
            "--report" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --report".to_string());
                }
                report = match args[i].as_str() {
                    "text" => ReportFormat::Text,
                    "json" => ReportFormat::Json,
                    other => return Err(format!("Invalid report format: {}", other)),
                };
            }
            "--verbose" | "-v" => {
                verbose = true;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    let quantum_ticks = quantum_ticks.ok_or("Missing required --quantum".to_string())?;
    let dispatch_ticks = dispatch_ticks.ok_or("Missing required --dispatch".to_string())?;

    Ok(CliOptions {
        quantum_ticks,
        dispatch_ticks,
        input,
        horizon_ticks,
        exit_on_idle,
        report,
        verbose,
    })
}

fn parse_ticks(args: &[String], i: usize, flag: &str) -> Result<u64, String> {
    if i >= args.len() {
        return Err(format!("Missing value for {}", flag));
    }
    args[i]
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, args[i]))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} --quantum <num> --dispatch <num> [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -q, --quantum <TICKS>    Quantum length in ticks (required)");
    eprintln!("  -d, --dispatch <TICKS>   Dispatch length in ticks (required)");
    eprintln!("  -i, --input <FILE>       Workload file (default: stdin)");
    eprintln!("  --horizon <TICKS>        Tick horizon (default: {}, 0 = unbounded)", DEFAULT_HORIZON_TICKS);
    eprintln!("  --exit-on-idle           Stop once all tasks have drained");
    eprintln!("  --report <FORMAT>        Report format: text (default) or json");
    eprintln!("  -v, --verbose            Emit the diagnostic log to stderr");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Workload lines are `<id> <arrival_tick> <cpu_request>`.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --quantum 2 --dispatch 1 --input tasks.txt", program);
    eprintln!("  {} -q 1 -d 3 --horizon 0 --exit-on-idle < tasks.txt", program);
}
