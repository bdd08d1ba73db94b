use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use imgconv::convert;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        let program = args.first().map(String::as_str).unwrap_or("imgconv");
        eprintln!("Usage: {program} <in_file> <out_file>");
        return ExitCode::from(1);
    }

    let in_path = PathBuf::from(&args[1]);
    let out_path = PathBuf::from(&args[2]);

    match convert(&in_path, &out_path) {
        Ok(()) => {
            println!("Successfully converted");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
