use std::fs::File;
use std::io::Seek;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use fs2::FileExt;

use crckit::{Kind, ParseKindError};

#[derive(Parser)]
#[command(name = "crc", about = "Compute CRC-4, CRC-8, CRC-16 or CRC-32 of a file", long_about = None)]
struct Cli {
    /// Checksum to compute: crc4, crc8, crc16, crc32 or all
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "crc8")]
    kind: Selection,

    /// File to read
    file: PathBuf,
}

#[derive(Debug, Clone, Copy)]
enum Selection {
    One(Kind),
    All,
}

impl Selection {
    fn kinds(self) -> Vec<Kind> {
        match self {
            Selection::One(kind) => vec![kind],
            Selection::All => Kind::ALL.to_vec(),
        }
    }
}

impl FromStr for Selection {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        s.parse().map(Selection::One)
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,

        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            std::process::exit(0);
        }

        Err(e) => {
            eprintln!("invalid arguments");
            eprint!("{}", e.render());
            eprintln!("{}", Cli::command().render_help());
            std::process::exit(1);
        }
    };

    let mut file = File::open(&cli.file)
        .with_context(|| format!("Failed to open input file: {}", cli.file.display()))?;

    FileExt::try_lock_shared(&file)
        .with_context(|| format!("Failed to lock input file: {}", cli.file.display()))?;

    let result = report(&mut file, &cli.file, cli.kind);
    let _ = FileExt::unlock(&file);

    result
}

fn report(file: &mut File, path: &Path, selection: Selection) -> Result<()> {
    for (i, kind) in selection.kinds().into_iter().enumerate() {
        if i > 0 {
            file.rewind()?;
        }

        let checksum = kind
            .encode(&mut *file)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;

        println!("{}:", kind.name().to_uppercase());
        println!("{checksum}");
    }

    Ok(())
}
