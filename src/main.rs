//! chacha-trace CLI
//!
//! Encrypts text with ChaCha20 and prints the internal state of the block
//! function step by step.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use chacha_trace::cipher::chacha20::{ChaCha20, block_transform, serialize_le};

/// ChaCha20 block function explorer
#[derive(Parser)]
#[command(name = "chacha-trace")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// 256-bit key as hex (64 hex digits, separators ignored)
    #[arg(
        long,
        env = "CHACHA_KEY",
        default_value = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
    )]
    key: String,

    /// 96-bit nonce as hex (24 hex digits, separators ignored)
    #[arg(long, env = "CHACHA_NONCE", default_value = "000000000000000001000002")]
    nonce: String,

    /// Initial block counter
    #[arg(long, env = "CHACHA_COUNTER", default_value_t = 1)]
    counter: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text and print the ciphertext as hex
    Encrypt {
        /// UTF-8 plaintext
        #[arg(required = true)]
        text: String,
    },

    /// Decrypt hex ciphertext and print the recovered text
    Decrypt {
        /// Ciphertext as hex
        #[arg(required = true)]
        ciphertext: String,
    },

    /// Print the initial state and the keystream block for the counter
    Block,

    /// Print every intermediate state of the block transform
    Trace {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Decodes hex, ignoring any non-hex characters such as spaces or colons.
fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input.chars().filter(char::is_ascii_hexdigit).collect();

    hex::decode(&digits).with_context(|| format!("invalid hex input: {input:?}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let key = parse_hex(&cli.key).context("failed to parse --key")?;
    let nonce = parse_hex(&cli.nonce).context("failed to parse --nonce")?;
    let cipher = ChaCha20::new(&key, &nonce)?;

    debug!(?cipher, counter = cli.counter, "cipher configured");

    match cli.command {
        Commands::Encrypt { text } => {
            let ciphertext = cipher.apply_keystream(cli.counter, text.as_bytes())?;
            info!(bytes = ciphertext.len(), "encrypted");
            println!("{}", hex::encode(ciphertext));
        }

        Commands::Decrypt { ciphertext } => {
            let data = parse_hex(&ciphertext).context("failed to parse ciphertext")?;
            let plaintext = cipher.apply_keystream(cli.counter, &data)?;
            info!(bytes = plaintext.len(), "decrypted");
            println!("{}", String::from_utf8_lossy(&plaintext));
        }

        Commands::Block => {
            let state = cipher.state(cli.counter);
            let (output, _) = block_transform(&state, false);

            println!("initial state:\n{state}\n");
            println!("output block:\n{output}\n");
            println!("output words:\n{}\n", output.to_hex_words().join(" "));
            println!("keystream:\n{}", hex::encode(serialize_le(&output)));
        }

        Commands::Trace { format } => {
            let state = cipher.state(cli.counter);
            let (_, trace) = block_transform(&state, true);
            info!(steps = trace.len(), "trace captured");

            match format {
                Format::Text => {
                    for (i, step) in trace.iter().enumerate() {
                        println!("{i:>3} {step}");
                    }
                }
                Format::Json => {
                    let json = serde_json::to_string_pretty(&trace)
                        .context("failed to serialize trace")?;
                    println!("{json}");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_hex;

    use chacha_trace::Error;
    use chacha_trace::cipher::chacha20::ChaCha20;

    #[test]
    fn parse_hex_ignores_separators() {
        assert_eq!(parse_hex("00:01 02").unwrap(), vec![0x00, 0x01, 0x02]);
        assert_eq!(parse_hex("DE-ad\nBE ef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn parse_hex_rejects_odd_digit_count() {
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("0:1:2").is_err());
    }

    #[test]
    fn parse_hex_without_digits_is_empty_key() {
        let key = parse_hex("zz -- !!").unwrap();
        assert!(key.is_empty());

        let err = ChaCha20::new(&key, &[0u8; 12]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidKeyLength {
                expected: 32,
                actual: 0
            }
        );
    }
}
