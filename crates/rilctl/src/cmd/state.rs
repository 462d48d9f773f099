use tracing::info;

use crate::client::Control;
use crate::cmd::{StateAction, StateArgs};
use crate::exit::{io_error, wire_error, CliError, CliResult, FAILURE, INTERNAL, SUCCESS};
use crate::output::{print_message, OutputFormat};
use crate::schema::{
    RadioStateReport, CMD_GET_RADIO_STATE, CMD_SET_RADIO_STATE, STATUS_OK,
};

pub fn run(args: StateArgs, format: OutputFormat) -> CliResult<i32> {
    let mut control = Control::connect(&args.connect.host, args.connect.port)
        .map_err(|err| io_error("connect failed", err))?;

    match args.action {
        StateAction::Get(get) => {
            let response = control
                .roundtrip(CMD_GET_RADIO_STATE, get.token, b"")
                .map_err(|err| wire_error("get-radio-state failed", err))?;
            print_message(&response, format);

            if response.command != CMD_GET_RADIO_STATE {
                return Err(CliError::new(
                    FAILURE,
                    format!(
                        "unexpected response command {} (expected {CMD_GET_RADIO_STATE})",
                        response.command
                    ),
                ));
            }
            if response.status != STATUS_OK {
                return Ok(FAILURE);
            }

            let report = RadioStateReport::from_bytes(&response.payload).map_err(|err| {
                CliError::new(
                    crate::exit::DATA_INVALID,
                    format!("radio-state payload does not decode: {err}"),
                )
            })?;
            info!(state = report.state, name = %report.state_name(), "radio state");
            Ok(SUCCESS)
        }
        StateAction::Set(set) => {
            let request = RadioStateReport {
                state: set.state.as_u32(),
            };
            let payload = request.to_bytes().map_err(|err| {
                CliError::new(INTERNAL, format!("payload encoding failed: {err}"))
            })?;

            let response = control
                .roundtrip(CMD_SET_RADIO_STATE, set.token, &payload)
                .map_err(|err| wire_error("set-radio-state failed", err))?;
            print_message(&response, format);

            if response.status == STATUS_OK {
                info!(state = request.state, "radio state set");
                Ok(SUCCESS)
            } else {
                Ok(FAILURE)
            }
        }
    }
}
