use tracing::{info, warn};

use crate::client::Control;
use crate::cmd::EchoArgs;
use crate::exit::{io_error, wire_error, CliError, CliResult, FAILURE, INTERNAL, SUCCESS};
use crate::output::{print_message, OutputFormat};
use crate::schema::{RadioStateReport, CMD_ECHO, STATUS_OK};

pub fn run(args: EchoArgs, format: OutputFormat) -> CliResult<i32> {
    let mut control = Control::connect(&args.connect.host, args.connect.port)
        .map_err(|err| io_error("connect failed", err))?;

    let request = RadioStateReport { state: args.state };
    let payload = request
        .to_bytes()
        .map_err(|err| CliError::new(INTERNAL, format!("payload encoding failed: {err}")))?;

    let response = control
        .roundtrip(CMD_ECHO, args.token, &payload)
        .map_err(|err| wire_error("echo exchange failed", err))?;

    print_message(&response, format);

    // Mismatches are reported, not fatal; the server stays up either way.
    let mut ok = true;
    if response.command != CMD_ECHO {
        warn!(
            expected = CMD_ECHO,
            got = response.command,
            "command mismatch"
        );
        ok = false;
    }
    if response.token != args.token {
        warn!(expected = args.token, got = response.token, "token mismatch");
        ok = false;
    }
    if response.status != STATUS_OK {
        warn!(status = response.status, "responder reported failure");
        ok = false;
    }
    match RadioStateReport::from_bytes(&response.payload) {
        Ok(echoed) if echoed == request => {}
        Ok(echoed) => {
            warn!(
                sent = request.state,
                received = echoed.state,
                "payload mismatch"
            );
            ok = false;
        }
        Err(err) => {
            warn!(%err, "echoed payload does not decode");
            ok = false;
        }
    }

    if ok {
        info!(token = args.token, "echo ok");
        Ok(SUCCESS)
    } else {
        Ok(FAILURE)
    }
}
