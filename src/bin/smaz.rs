use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use smaz::{CompressionStats, Decoder, Encoder, Token, TokenReader};

#[derive(Parser, Debug)]
#[command(name = "smaz")]
#[command(about = "Compress short strings with the smaz codebook")]
#[command(version)]
struct Args {
    /// Literal input (text when compressing, hex when decompressing)
    #[arg(conflicts_with = "input")]
    text: Option<String>,

    /// Decompress instead of compress
    #[arg(short, long)]
    decompress: bool,

    /// Input file (use - for stdin, the default)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (use - for stdout, the default)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read or write compressed data as hex text
    #[arg(long)]
    hex: bool,

    /// List the tokens of a compressed input instead of decompressing it
    #[arg(long, conflicts_with = "decompress")]
    inspect: bool,

    /// Show statistics and debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Exit codes
const EXIT_OK: u8 = 0;
const EXIT_MALFORMED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::from(EXIT_OK),
        Err(e) => {
            eprintln!("Error: {}", e);
            match e.downcast_ref::<smaz::Error>() {
                Some(err) if err.is_malformed_input() => ExitCode::from(EXIT_MALFORMED),
                _ => ExitCode::from(EXIT_ERROR),
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let compressed_input = args.decompress || args.inspect;
    let input = read_input(args, compressed_input)?;
    tracing::debug!(bytes = input.len(), compressed = compressed_input, "read input");

    let mut output = open_output(args)?;
    let start = std::time::Instant::now();

    if args.inspect {
        inspect(&input, &mut output)?;
        output.flush()?;
        return Ok(());
    }

    let stats = if args.decompress {
        let mut decompressed = Vec::with_capacity(input.len() * 2);
        let stats = Decoder::default().decompress_into(&input, &mut decompressed)?;
        output.write_all(&decompressed)?;
        stats
    } else {
        let mut compressed = Vec::with_capacity(input.len() / 2 + 2);
        let stats = Encoder::default().compress_into(&input, &mut compressed);
        if args.hex {
            writeln!(output, "{}", hex::encode(&compressed))?;
        } else {
            output.write_all(&compressed)?;
        }
        stats
    };
    output.flush()?;

    if args.verbose {
        print_stats(args.decompress, &stats, start.elapsed());
    }

    Ok(())
}

/// Materialize the input bytes from the literal argument, a file, or stdin
fn read_input(args: &Args, compressed: bool) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(text) = &args.text {
        // A compressed literal can only be given as hex
        return if compressed {
            Ok(decode_hex(text)?)
        } else {
            Ok(text.clone().into_bytes())
        };
    }

    let data = match &args.input {
        Some(path) if path.to_str() != Some("-") => std::fs::read(path)?,
        _ => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            data
        }
    };

    if compressed && args.hex {
        Ok(decode_hex(&String::from_utf8_lossy(&data))?)
    } else {
        Ok(data)
    }
}

fn open_output(args: &Args) -> io::Result<Box<dyn Write>> {
    let output: Box<dyn Write> = match &args.output {
        Some(path) if path.to_str() != Some("-") => Box::new(BufWriter::new(File::create(path)?)),
        _ => Box::new(io::stdout().lock()),
    };
    Ok(output)
}

/// Write one line per token of a compressed stream
fn inspect(input: &[u8], output: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    let codebook = smaz::Codebook::standard();
    let mut reader = TokenReader::new(input);
    let mut count = 0usize;

    for token in reader.by_ref() {
        let (offset, token) = token?;
        match token {
            Token::Code(code) => {
                let pattern = codebook.lookup_pattern(code)?;
                writeln!(
                    output,
                    "{:>8}  code {:>3}  \"{}\"",
                    offset,
                    code,
                    pattern.escape_ascii()
                )?;
            }
            Token::Literal(byte) => {
                writeln!(output, "{:>8}  byte      \"{}\"", offset, [byte].escape_ascii())?;
            }
            Token::Run(bytes) => {
                writeln!(
                    output,
                    "{:>8}  run  {:>3}  \"{}\"",
                    offset,
                    bytes.len(),
                    bytes.escape_ascii()
                )?;
            }
        }
        count += 1;
    }
    writeln!(output, "{:>8}  end       {} tokens", reader.position(), count)?;
    Ok(())
}

fn print_stats(decompress: bool, stats: &CompressionStats, elapsed: std::time::Duration) {
    let (raw, packed) = if decompress {
        (stats.output_bytes, stats.input_bytes)
    } else {
        (stats.input_bytes, stats.output_bytes)
    };

    eprintln!("{} complete:", if decompress { "Decompression" } else { "Compression" });
    eprintln!("  Input bytes:      {}", stats.input_bytes);
    eprintln!("  Output bytes:     {}", stats.output_bytes);
    eprintln!("  Codebook tokens:  {}", stats.code_tokens);
    eprintln!("  Escape tokens:    {}", stats.escape_tokens);
    eprintln!("  Verbatim bytes:   {}", stats.verbatim_bytes);
    if packed > 0 {
        eprintln!("  Ratio:            {:.2}", raw as f64 / packed as f64);
    }
    eprintln!("  Time:             {:.2?}", elapsed);
}

/// Parse hex text, ignoring leading and trailing whitespace
fn decode_hex(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(text.trim())
}
