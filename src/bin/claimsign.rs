use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "claimsign", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an input script into a signature pad and write the committed signature as PNG.
    Sign(SignArgs),
    /// Validate a claim form and print the request that would be sent.
    Submit(SubmitArgs),
}

#[derive(Parser, Debug)]
struct SignArgs {
    /// Input event script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pad config JSON (pen + layout). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also print the committed data URI to stdout.
    #[arg(long, default_value_t = false)]
    print_data_uri: bool,
}

#[derive(Parser, Debug)]
struct SubmitArgs {
    /// Claim values JSON (camelCase keys).
    #[arg(long)]
    form: PathBuf,

    /// Signature input script JSON.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Submit this PDF in upload mode instead of the manual form.
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Pad config JSON (pen + layout).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override today's date for incident-date validation (YYYY-MM-DD).
    #[arg(long)]
    today: Option<chrono::NaiveDate>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Sign(args) => cmd_sign(args),
        Command::Submit(args) => cmd_submit(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<claimsign::PadConfig> {
    match path {
        Some(p) => claimsign::PadConfig::from_path(p)
            .with_context(|| format!("load pad config '{}'", p.display())),
        None => Ok(claimsign::PadConfig::default()),
    }
}

fn cmd_sign(args: SignArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let script = claimsign::EventScript::from_path(&args.script)
        .with_context(|| format!("load script '{}'", args.script.display()))?;

    let mut pad = claimsign::SignaturePad::new(config)?;
    let summary = claimsign::replay(&mut pad, &script)?;
    tracing::info!(?summary, "script replayed");

    let sig = pad
        .value()
        .context("script did not commit a signature (no completed stroke after the last clear)")?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, sig.png_bytes()?)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    if args.print_data_uri {
        println!("{}", sig.as_str());
    }
    eprintln!("wrote {} ({}x{})", args.out.display(), sig.width, sig.height);
    Ok(())
}

fn cmd_submit(args: SubmitArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let values = claimsign::ClaimValues::from_path(&args.form)
        .with_context(|| format!("load claim form '{}'", args.form.display()))?;

    let mut form = claimsign::ClaimForm::new(config)?;
    form.set_today(args.today);
    form.set_values(values);

    if let Some(script_path) = &args.script {
        let script = claimsign::EventScript::from_path(script_path)
            .with_context(|| format!("load script '{}'", script_path.display()))?;
        form.replay_signature(&script)?;
    }

    if let Some(pdf_path) = &args.pdf {
        form.set_mode(claimsign::FormMode::Upload);
        let pdf = claimsign::PdfAttachment::from_path(pdf_path)
            .with_context(|| format!("attach pdf '{}'", pdf_path.display()))?;
        form.attach_pdf(pdf.file_name, claimsign::PDF_CONTENT_TYPE, pdf.bytes)?;
    }

    match form.prepare_submission() {
        Ok(sub) => {
            let out = serde_json::to_string_pretty(&sub.describe()?)?;
            println!("{out}");
            Ok(())
        }
        Err(claimsign::ClaimError::InvalidFields(errors)) => {
            eprintln!("{}", serde_json::to_string_pretty(&errors)?);
            anyhow::bail!("claim form has {} invalid field(s)", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}
