//! AMP Inspect - CLI untuk membangun dan membedah envelope
//!
//! Dua mode:
//! - Build: `amp_inspect --type Ping --data hello` -> print wire form hex
//! - Parse: `amp_inspect --raw <hex>` -> print field hasil decode
//!
//! Usage:
//!   cargo run --release --bin amp_inspect -- [OPTIONS]

use amp::protocol::constants::HEADER_SIZE;
use amp::{Message, StateVector};

/// Mode operasi CLI
#[derive(Default)]
struct InspectConfig {
    type_name: Option<String>,
    data: Option<String>,
    raw_hex: Option<String>,
}

fn parse_args() -> InspectConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = InspectConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--type" | "-t" => {
                if i + 1 < args.len() {
                    config.type_name = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    config.data = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--raw" | "-r" => {
                if i + 1 < args.len() {
                    config.raw_hex = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("AMP Inspect - envelope build & parse tool\n");
                println!("Usage: amp_inspect [OPTIONS]\n");
                println!("Options:");
                println!("  -t, --type <NAME>   message type name (e.g. Ping)");
                println!("  -d, --data <TEXT>   payload text");
                println!("  -r, --raw <HEX>     parse a hex-encoded envelope");
                println!("  -h, --help          show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_message(msg: &Message) {
    let header = msg.header();
    println!("  magic:    {:#010x}", header.magic);
    println!("  version:  {}", header.version);
    println!("  type:     {} ({:#010x})", msg.type_name(), msg.type_code());
    println!("  size:     {} bytes", msg.size());
    println!("  hash:     {}", hex::encode(msg.hash()));
    println!("  data:     {:?}", msg.data());
    match msg.id() {
        Ok(id) => println!("  id:       {}", id),
        Err(e) => println!("  id:       <unavailable: {}>", e),
    }
}

fn run(config: InspectConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(hex_input) = config.raw_hex {
        let raw = hex::decode(hex_input.trim())?;
        match Message::from_raw(&raw)? {
            Some(msg) => {
                println!("Decoded envelope ({} bytes):", raw.len());
                print_message(&msg);
                if !msg.header().matches_protocol() {
                    println!("  warning:  magic/version does not match this protocol");
                }
                if !msg.verify() {
                    println!("  warning:  payload hash mismatch");
                }
            }
            None => println!("Empty input - no envelope."),
        }
        return Ok(());
    }

    let type_name = config.type_name.as_deref().unwrap_or("Ping");
    let data = config.data.as_deref().unwrap_or("");

    let msg = Message::from_vector((type_name, data.as_bytes()))?;
    let raw = msg.serialize()?;

    println!(
        "Envelope ({} bytes: {} header + {} payload):",
        raw.len(),
        HEADER_SIZE,
        msg.size()
    );
    print_message(&msg);
    println!("  wire:     {}", hex::encode(&raw));

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = parse_args();

    if let Err(e) = run(config) {
        eprintln!("amp_inspect error: {}", e);
        std::process::exit(1);
    }
}
