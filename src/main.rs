use anyhow::Result;
use clap::Parser;
use rbh::algorithm;
use rbh::blastinput::RbhArgs;

#[derive(Parser)]
#[command(name = "rbh")]
#[command(version)]
#[command(about = "Reciprocal best hits from BLAST tabular reports (-outfmt \"6 std qlen slen\")", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: RbhArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // -v info, -vv debug, -vvv trace; RUST_LOG wins when set
    let log_level = match cli.args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(log_level);
    }
    builder.format_timestamp(None).format_target(false).init();

    algorithm::run(cli.args)
}
