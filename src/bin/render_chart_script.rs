use gchart_rs::api::ChartBatchJsonContractV1;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = gchart_rs::telemetry::init_default_tracing();
    let args = parse_args()?;

    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?,
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            raw
        }
    };

    let contract =
        ChartBatchJsonContractV1::from_json_compat_str(&raw).map_err(|err| err.to_string())?;
    let script = contract.render_full().map_err(|err| err.to_string())?;

    match &args.output {
        Some(path) => fs::write(path, script)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{script}").map_err(|err| format!("failed to write stdout: {err}"))
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                parsed.input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                parsed.output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                return Err(
                    "usage: render_chart_script [--input <batch.json>] [--output <script.js>]"
                        .to_owned(),
                );
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    Ok(parsed)
}
