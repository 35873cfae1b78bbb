use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mips32_rs::{assemble, AsmConfig, RegisterPolicy};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble a MIPS subset source file to binary-string lines"
)]
struct Opts {
    /// Input assembly file (one instruction per line)
    #[arg(value_name = "ASMFILE")]
    in_file: std::path::PathBuf,
    /// Trace every intermediate parsing step
    #[arg(short, long)]
    debug: bool,
    /// Register-token policy
    #[arg(long, value_enum, default_value_t = RegisterArg::Either)]
    registers: RegisterArg,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum RegisterArg {
    Symbolic,
    Numeric,
    Either,
}

impl From<RegisterArg> for RegisterPolicy {
    fn from(a: RegisterArg) -> Self {
        match a {
            RegisterArg::Symbolic => RegisterPolicy::Symbolic,
            RegisterArg::Numeric => RegisterPolicy::Numeric,
            RegisterArg::Either => RegisterPolicy::Either,
        }
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let filter = if opts.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let text = std::fs::read_to_string(&opts.in_file)?;
    let cfg = AsmConfig {
        registers: opts.registers.into(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    assemble(text.lines(), &mut out, &cfg)?;
    Ok(())
}
