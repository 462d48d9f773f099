use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use rilctl_wire::Message;
use serde::Serialize;

use crate::schema::command_name;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct MessageOutput<'a> {
    command: u32,
    command_name: &'a str,
    token: u64,
    status: u32,
    payload_size: usize,
    payload: String,
}

pub fn print_message(message: &Message, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = MessageOutput {
                command: message.command,
                command_name: command_name(message.command),
                token: message.token,
                status: message.status,
                payload_size: message.payload.len(),
                payload: payload_preview(message.payload.as_ref()),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["COMMAND", "TOKEN", "STATUS", "SIZE", "PAYLOAD"])
                .add_row(vec![
                    command_name(message.command).to_string(),
                    message.token.to_string(),
                    message.status.to_string(),
                    message.payload.len().to_string(),
                    payload_preview(message.payload.as_ref()),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "command={} ({}) token={} status={} size={} payload={}",
                message.command,
                command_name(message.command),
                message.token,
                message.status,
                message.payload.len(),
                payload_preview(message.payload.as_ref())
            );
        }
        OutputFormat::Raw => {
            print_raw(message.payload.as_ref());
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn payload_preview(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) => text.to_string(),
        Err(_) => format!("<binary {} bytes>", payload.len()),
    }
}
