//! Command-line interface for `aes-ecb`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_ecb_core::encoding::bytes_to_text;
use aes_ecb_core::{decrypt, encrypt, from_hex, to_hex, KeySize, MainKey};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-ECB CLI.
#[derive(Parser)]
#[command(
    name = "aes-ecb",
    version,
    author,
    about = "AES-128/192/256 in ECB mode with zero padding"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Where the main key comes from.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeySource {
    /// Key as 32, 48 or 64 hex characters.
    #[arg(long, value_name = "HEX", env = "AES_ECB_KEY", hide_env_values = true)]
    key_hex: Option<String>,
    /// File holding the raw key bytes (16, 24 or 32 bytes).
    #[arg(long, value_name = "FILE")]
    key_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random key and print it as hex.
    Keygen {
        /// Key size in bits: 128, 192 or 256.
        #[arg(long, default_value_t = 128)]
        bits: usize,
        /// Also write the raw key bytes to this file.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Optional RNG seed for reproducible keys.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt text or a file; prints hex unless --output is given.
    Encrypt {
        #[command(flatten)]
        key: KeySource,
        /// Plaintext given inline, encrypted as UTF-8 bytes.
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        text: Option<String>,
        /// Plaintext file.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Write the raw ciphertext here instead of printing hex.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decrypt hex or a file; prints text unless --output is given.
    Decrypt {
        #[command(flatten)]
        key: KeySource,
        /// Ciphertext as a hex string.
        #[arg(
            long,
            value_name = "HEX",
            conflicts_with = "input",
            required_unless_present = "input"
        )]
        hex: Option<String>,
        /// Ciphertext file (multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Write the raw plaintext here instead of printing it.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Print the plaintext as hex rather than text.
        #[arg(long, default_value_t = false)]
        as_hex: bool,
    },
    /// Print every round key of the expanded schedule.
    Expand {
        #[command(flatten)]
        key: KeySource,
    },
    /// Run a local demo: generate a key, encrypt a message, decrypt it back.
    Demo {
        /// Key size in bits: 128, 192 or 256.
        #[arg(long, default_value_t = 128)]
        bits: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Keygen { bits, out, seed } => cmd_keygen(bits, out.as_deref(), seed),
        Commands::Encrypt {
            key,
            text,
            input,
            output,
        } => cmd_encrypt(&key, text, input.as_deref(), output.as_deref()),
        Commands::Decrypt {
            key,
            hex,
            input,
            output,
            as_hex,
        } => cmd_decrypt(
            &key,
            hex.as_deref(),
            input.as_deref(),
            output.as_deref(),
            as_hex,
        ),
        Commands::Expand { key } => cmd_expand(&key),
        Commands::Demo { bits, seed } => cmd_demo(bits, seed),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn cmd_keygen(bits: usize, out: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let size = KeySize::from_bits(bits).context("choose 128, 192 or 256 bits")?;
    let mut rng = seeded_rng(seed);
    let key = MainKey::generate(&mut rng, size);
    if let Some(path) = out {
        write_file(path, key.as_bytes())?;
        log::info!("wrote {size} key to {}", path.display());
    }
    println!("{}", to_hex(key.as_bytes()));
    Ok(())
}

fn cmd_encrypt(
    key: &KeySource,
    text: Option<String>,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let key = load_key(key)?;
    let plaintext = match (text, input) {
        (Some(text), _) => text.into_bytes(),
        (None, Some(path)) => read_file(path)?,
        (None, None) => bail!("provide --text or --input"),
    };
    let ciphertext = encrypt(&plaintext, &key).context("encrypt")?;
    match output {
        Some(path) => write_file(path, &ciphertext),
        None => {
            println!("{}", to_hex(&ciphertext));
            Ok(())
        }
    }
}

fn cmd_decrypt(
    key: &KeySource,
    hex: Option<&str>,
    input: Option<&Path>,
    output: Option<&Path>,
    as_hex: bool,
) -> Result<()> {
    let key = load_key(key)?;
    let ciphertext = match (hex, input) {
        (Some(hex), _) => from_hex(hex.trim()).context("decode ciphertext hex")?,
        (None, Some(path)) => read_file(path)?,
        (None, None) => bail!("provide --hex or --input"),
    };
    let plaintext = decrypt(&ciphertext, &key).context("decrypt")?;
    match output {
        Some(path) => write_file(path, &plaintext),
        None if as_hex => {
            println!("{}", to_hex(&plaintext));
            Ok(())
        }
        None => {
            println!("{}", bytes_to_text(&plaintext));
            Ok(())
        }
    }
}

fn cmd_expand(key: &KeySource) -> Result<()> {
    let key = load_key(key)?;
    let schedule = key.expand();
    println!(
        "{} ({} rounds, {} bytes)",
        key.size(),
        schedule.rounds(),
        schedule.len()
    );
    for (round, round_key) in schedule.iter().enumerate() {
        println!("round {round:2}: {}", to_hex(round_key));
    }
    Ok(())
}

fn cmd_demo(bits: usize, seed: Option<u64>) -> Result<()> {
    let size = KeySize::from_bits(bits).context("choose 128, 192 or 256 bits")?;
    let mut rng = seeded_rng(seed);
    let key = MainKey::generate(&mut rng, size);

    let message = "ECB leaks repeats: ECB leaks repeats!";
    let ciphertext = encrypt(message.as_bytes(), &key)?;
    let decrypted = decrypt(&ciphertext, &key)?;

    println!("demo key: {}", to_hex(key.as_bytes()));
    println!("plaintext: {message}");
    println!("ciphertext: {}", to_hex(&ciphertext));
    println!("decrypted: {}", bytes_to_text(&decrypted));
    if decrypted != message.as_bytes() {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn load_key(source: &KeySource) -> Result<MainKey> {
    let bytes = match (&source.key_hex, &source.key_file) {
        (Some(hex), _) => from_hex(hex.trim()).context("decode key hex")?,
        (None, Some(path)) => read_file(path)?,
        (None, None) => bail!("provide --key-hex, --key-file or AES_ECB_KEY"),
    };
    let key = MainKey::new(&bytes).context("load key")?;
    log::debug!("loaded {} key", key.size());
    Ok(key)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("write {}", path.display()))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_ecb_core::AesError;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_encrypt_with_hex_key() {
        let cli = Cli::try_parse_from([
            "aes-ecb",
            "encrypt",
            "--key-hex",
            "000102030405060708090a0b0c0d0e0f",
            "--text",
            "hello",
        ])
        .unwrap();
        match cli.command {
            Commands::Encrypt { key, text, .. } => {
                assert_eq!(text.as_deref(), Some("hello"));
                assert_eq!(load_key(&key).unwrap().size(), KeySize::Aes128);
            }
            _ => panic!("expected encrypt"),
        }
    }

    #[test]
    fn decrypt_requires_a_source() {
        let res = Cli::try_parse_from([
            "aes-ecb",
            "decrypt",
            "--key-hex",
            "000102030405060708090a0b0c0d0e0f",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn wrong_size_key_is_rejected() {
        let source = KeySource {
            key_hex: Some("0011".into()),
            key_file: None,
        };
        assert!(load_key(&source).is_err());
    }

    #[test]
    fn seeded_keys_are_reproducible() {
        let a = MainKey::generate(&mut seeded_rng(Some(5)), KeySize::Aes256);
        let b = MainKey::generate(&mut seeded_rng(Some(5)), KeySize::Aes256);
        assert_eq!(a, b);
    }

    #[test]
    fn keygen_output_loads_back_through_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aes192.key");
        cmd_keygen(192, Some(&path), Some(11)).unwrap();

        let expected = MainKey::generate(&mut seeded_rng(Some(11)), KeySize::Aes192);
        assert_eq!(fs::read(&path).unwrap(), expected.as_bytes());

        let source = KeySource {
            key_hex: None,
            key_file: Some(path),
        };
        let loaded = load_key(&source).unwrap();
        assert_eq!(loaded.size(), KeySize::Aes192);
        assert_eq!(loaded, expected);
    }

    #[test]
    fn key_file_of_wrong_length_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.key");
        fs::write(&path, [0x5au8; 20]).unwrap();

        let source = KeySource {
            key_hex: None,
            key_file: Some(path),
        };
        let err = load_key(&source).unwrap_err();
        let cause = err.downcast_ref::<AesError>();
        assert!(matches!(cause, Some(AesError::InvalidKeySize { len: 20 })));
    }

    #[test]
    fn missing_key_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let source = KeySource {
            key_hex: None,
            key_file: Some(dir.path().join("absent.key")),
        };
        let err = load_key(&source).unwrap_err();
        assert!(err.to_string().starts_with("read "));
    }

    #[test]
    fn keygen_rejects_unsupported_bits() {
        let err = cmd_keygen(129, None, Some(1)).unwrap_err();
        let cause = err.downcast_ref::<AesError>();
        assert!(matches!(cause, Some(AesError::InvalidKeyBits { bits: 129 })));
    }
}
