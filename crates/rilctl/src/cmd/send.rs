use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::client::Control;
use crate::cmd::SendArgs;
use crate::exit::{io_error, wire_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_message, OutputFormat};

pub fn run(args: SendArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;
    let token = args.token.unwrap_or_else(fresh_token);

    let mut control = Control::connect(&args.connect.host, args.connect.port)
        .map_err(|err| io_error("connect failed", err))?;

    let response = control
        .roundtrip(args.command, token, &payload)
        .map_err(|err| wire_error("send failed", err))?;

    print_message(&response, format);
    Ok(SUCCESS)
}

fn resolve_payload(args: &SendArgs) -> CliResult<Vec<u8>> {
    if let Some(json) = &args.json {
        serde_json::from_str::<serde_json::Value>(json)
            .map_err(|err| CliError::new(USAGE, format!("--json is not valid JSON: {err}")))?;
        return Ok(json.as_bytes().to_vec());
    }
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Ok(Vec::new())
}

fn fresh_token() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
