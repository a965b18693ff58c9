//! Command-line interface for xon

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::Read;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use xon::{DecodeOptions, EncodeOptions};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "xon")]
#[command(author, version, about = "Convert between XML and JSON using the XON convention", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert an XML document to JSON
    Decode {
        /// Path to the XML file to convert, or "-" for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Return the root tag's value without the {tag: value} wrapper
        #[arg(short, long)]
        unwrap: bool,

        /// Convert integers, floats and booleans to native JSON types
        #[arg(short, long)]
        coerce: bool,

        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a JSON document to XML
    Encode {
        /// Path to the JSON file to convert, or "-" for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Convert integers, floats and booleans to string representations
        #[arg(short, long)]
        coerce: bool,

        /// Wrap the value in a parent tag with this name
        #[arg(short, long, value_name = "TAG")]
        wrap: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            file,
            unwrap,
            coerce,
            pretty,
            output,
        } => cmd_decode(file, unwrap, coerce, pretty, output),
        Commands::Encode {
            file,
            coerce,
            wrap,
            output,
        } => cmd_encode(file, coerce, wrap, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn read_input(file: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if file.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(fs::read_to_string(file)?)
    }
}

#[cfg(feature = "cli")]
fn write_output(
    output: Option<PathBuf>,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
    } else {
        println!("{}", content);
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_decode(
    file: PathBuf,
    unwrap: bool,
    coerce: bool,
    pretty: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let xml = read_input(&file)?;

    let options = DecodeOptions::new().with_unwrap(unwrap).with_coercion(coerce);
    let value = xon::decode(&xml, &options)?;

    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    write_output(output, &json)
}

#[cfg(feature = "cli")]
fn cmd_encode(
    file: PathBuf,
    coerce: bool,
    wrap: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = read_input(&file)?;

    let value: serde_json::Value = serde_json::from_str(&json)?;
    let mut options = EncodeOptions::new().with_coercion(coerce);
    if let Some(tag) = wrap {
        options = options.with_wrap(tag);
    }
    let xml = xon::encode(&value, &options)?;

    write_output(output, &xml)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
