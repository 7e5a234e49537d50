use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use device_record as devrec;
use device_record::{DecodePolicy, DeviceRecord, DeviceRecordBuilder};

#[derive(Parser, Debug)]
#[command(
    name = "devrec",
    version,
    about = "Inspect and assemble account device records",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a record (or a device list) and print it
    Decode {
        /// JSON file to read
        file: PathBuf,
        /// Require every string key to be present (null is still accepted); with
        /// `--list` this applies to every element
        #[arg(long, action = ArgAction::SetTrue)]
        strict: bool,
        /// The file holds a JSON array of records
        #[arg(long, action = ArgAction::SetTrue)]
        list: bool,
    },
    /// Decode and re-encode, printing the wire form the service expects
    Normalize {
        file: PathBuf,
        #[arg(long, action = ArgAction::SetTrue)]
        list: bool,
    },
    /// Assemble a record from flags and print its encoded form
    Build {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "type")]
        device_type: Option<String>,
        #[arg(long)]
        push_callback: Option<String>,
        #[arg(long)]
        push_public_key: Option<String>,
        #[arg(long)]
        push_auth_key: Option<String>,
        /// Mark the record as the caller's own device
        #[arg(long, action = ArgAction::SetTrue)]
        current: bool,
    },
    /// Print the device flagged as current in a device-list file
    Current { file: PathBuf },
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut out)
}

fn run(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Decode { file, strict, list } => decode_cmd(&file, strict, list, out),
        Commands::Normalize { file, list } => normalize_cmd(&file, list, out),
        Commands::Build {
            id,
            name,
            device_type,
            push_callback,
            push_public_key,
            push_auth_key,
            current,
        } => {
            let mut b = DeviceRecordBuilder::new();
            if let Some(v) = id {
                b.set_id(v);
            }
            if let Some(v) = name {
                b.set_name(v);
            }
            if let Some(v) = device_type {
                b.set_type(v);
            }
            if let Some(v) = push_callback {
                b.set_push_callback(v);
            }
            if let Some(v) = push_public_key {
                b.set_push_public_key(v);
            }
            if let Some(v) = push_auth_key {
                b.set_push_auth_key(v);
            }
            if current {
                b.mark_as_current_device();
            }
            let rec = b.build();
            debug!(?rec, "built device record");
            write_json(out, &rec.encode())
        }
        Commands::Current { file } => {
            let list = devrec::load_device_list_file(&file)?;
            let rec = list
                .current_device()
                .with_context(|| format!("no current device in {}", file.display()))?;
            write_record(out, rec)
        }
    }
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn decode_cmd(file: &Path, strict: bool, list: bool, out: &mut impl Write) -> Result<()> {
    let policy = if strict {
        DecodePolicy::Strict
    } else {
        DecodePolicy::Lenient
    };
    if list {
        let devices = devrec::load_device_list_file_with(file, policy)?;
        info!(devices = devices.len(), ?policy, "decoded device list");
        for rec in &devices {
            write_record(out, rec)?;
        }
    } else {
        let rec = devrec::load_record_file_with(file, policy)?;
        write_record(out, &rec)?;
    }
    Ok(())
}

fn normalize_cmd(file: &Path, list: bool, out: &mut impl Write) -> Result<()> {
    if list {
        let devices = devrec::load_device_list_file(file)?;
        write_json(out, &devices.encode())
    } else {
        let rec = devrec::load_record_file(file)?;
        write_json(out, &rec.encode())
    }
}

fn write_json(out: &mut impl Write, value: &serde_json::Value) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn write_record(out: &mut impl Write, rec: &DeviceRecord) -> Result<()> {
    let show = |v: Option<&str>| v.unwrap_or("-").to_string();
    let current = match rec.is_current_device() {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    };
    writeln!(
        out,
        "id={}\tname={}\ttype={}\tcurrent={}\tpush={}",
        show(rec.id()),
        show(rec.name()),
        show(rec.device_type()),
        current,
        show(rec.push_callback())
    )?;
    Ok(())
}
