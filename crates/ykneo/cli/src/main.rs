//! Command-line interface for the ykneo-bitcoin applet

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};
use ykneo_apdu_transport_pcsc::{PcscConfig, PcscTransport};

mod commands;
mod utils;

use commands::*;

#[derive(Debug, Parser)]
#[command(version, about = "Manage and use the ykneo-bitcoin applet on a YubiKey NEO")]
struct Cli {
    /// Name of the PC/SC reader holding the YubiKey NEO
    #[arg(short, long)]
    reader: String,

    /// Debug level output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Select the applet and show its version and key state
    Info,

    /// Verify the user or admin PIN
    VerifyPin {
        /// Verify the admin PIN instead of the user PIN
        #[arg(long)]
        admin: bool,

        /// PIN (prompted for if omitted)
        #[arg(long)]
        pin: Option<String>,
    },

    /// Change the user or admin PIN
    ChangePin {
        /// Change the admin PIN instead of the user PIN
        #[arg(long)]
        admin: bool,

        /// Current PIN (prompted for if omitted)
        #[arg(long)]
        old_pin: Option<String>,

        /// New PIN (prompted for if omitted)
        #[arg(long)]
        new_pin: Option<String>,
    },

    /// Set how many wrong attempts a PIN allows (requires the admin PIN)
    SetRetryCount {
        /// Number of attempts, 1 to 15
        attempts: u8,

        /// Set the admin PIN counter instead of the user PIN counter
        #[arg(long)]
        admin: bool,

        /// Admin PIN (prompted for if omitted)
        #[arg(long)]
        admin_pin: Option<String>,
    },

    /// Set a new user PIN (requires the admin PIN)
    ResetUserPin {
        /// New user PIN (prompted for if omitted)
        #[arg(long)]
        new_pin: Option<String>,

        /// Admin PIN (prompted for if omitted)
        #[arg(long)]
        admin_pin: Option<String>,
    },

    /// Generate a new master key pair on the device (requires the admin PIN)
    Generate {
        /// Allow the private key to be exported later
        #[arg(long)]
        allow_export: bool,

        /// Return the generated private key
        #[arg(long)]
        return_private: bool,

        /// Generate a testnet key
        #[arg(long)]
        testnet: bool,

        /// Admin PIN (prompted for if omitted)
        #[arg(long)]
        admin_pin: Option<String>,
    },

    /// Import a serialized extended key pair (requires the admin PIN)
    Import {
        /// Serialized extended key pair, as a hex string
        key: String,

        /// Allow the private key to be exported later
        #[arg(long)]
        allow_export: bool,

        /// Admin PIN (prompted for if omitted)
        #[arg(long)]
        admin_pin: Option<String>,
    },

    /// Export the extended public key of the master key pair (requires the admin PIN)
    ExportXpub {
        /// Admin PIN (prompted for if omitted)
        #[arg(long)]
        admin_pin: Option<String>,
    },

    /// Show the public key of a sub key (requires the user PIN)
    PublicKey {
        /// Key path relative to the master key, e.g. 0/7 or 1/4711'
        path: String,

        /// User PIN (prompted for if omitted)
        #[arg(long)]
        pin: Option<String>,
    },

    /// Sign a 32-byte digest with a sub key (requires the user PIN)
    Sign {
        /// Key path relative to the master key, e.g. 0/7 or 1/4711'
        path: String,

        /// Digest to sign, as a hex string
        digest: String,

        /// User PIN (prompted for if omitted)
        #[arg(long)]
        pin: Option<String>,
    },

    /// Show the extended key header (requires the user PIN)
    Header {
        /// User PIN (prompted for if omitted)
        #[arg(long)]
        pin: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    info!("Using reader: {}", cli.reader);
    let transport = PcscTransport::connect(&cli.reader, PcscConfig::default())?;

    match cli.command {
        Commands::Info => info_command(transport)?,
        Commands::VerifyPin { admin, pin } => verify_pin_command(transport, admin, pin)?,
        Commands::ChangePin {
            admin,
            old_pin,
            new_pin,
        } => change_pin_command(transport, admin, old_pin, new_pin)?,
        Commands::SetRetryCount {
            attempts,
            admin,
            admin_pin,
        } => set_retry_count_command(transport, attempts, admin, admin_pin)?,
        Commands::ResetUserPin { new_pin, admin_pin } => {
            reset_user_pin_command(transport, new_pin, admin_pin)?
        }
        Commands::Generate {
            allow_export,
            return_private,
            testnet,
            admin_pin,
        } => generate_command(transport, allow_export, return_private, testnet, admin_pin)?,
        Commands::Import {
            key,
            allow_export,
            admin_pin,
        } => import_command(transport, &key, allow_export, admin_pin)?,
        Commands::ExportXpub { admin_pin } => export_xpub_command(transport, admin_pin)?,
        Commands::PublicKey { path, pin } => public_key_command(transport, &path, pin)?,
        Commands::Sign { path, digest, pin } => sign_command(transport, &path, &digest, pin)?,
        Commands::Header { pin } => header_command(transport, pin)?,
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let directives = std::env::var("RUST_LOG").ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, directives.as_deref()))
        .with_ansi(true)
        .init();
}

/// `RUST_LOG` directives, when present, take precedence over `--verbose`
fn log_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default())
}
