//! CLI for pep2html - renders every PEP in a directory and optionally installs them

use clap::Parser;
use pep2html::install::{DEFAULT_HOST, DEFAULT_REMOTE_DIR};
use pep2html::{batch, InstallTarget, PepToHtml, RenderOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Remote login name for scp/ssh (only used with --install)
    username: Option<String>,

    /// After generating the HTML, install it on the web host
    #[arg(short, long)]
    install: bool,

    /// Directory containing the pep-*.txt sources
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Host that receives the pages
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Target directory on the host
    #[arg(long, default_value = DEFAULT_REMOTE_DIR)]
    remote_dir: String,

    /// Document that gets no "index" navigation link
    #[arg(long, default_value = "pep-0000")]
    master_index: String,

    /// Stylesheet linked from each page and uploaded with --install
    #[arg(long, default_value = "style.css")]
    stylesheet: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let options = RenderOptions {
        master_index: args.master_index,
        stylesheet: args.stylesheet.clone(),
        ..Default::default()
    };
    let converter = PepToHtml::new(options);

    let sources = match batch::discover(&args.dir) {
        Ok(sources) => sources,
        Err(e) => {
            eprintln!("Error finding PEP sources: {}", e);
            std::process::exit(1);
        }
    };

    let report = batch::convert_all(&converter, &sources, |source, target| {
        println!("{} -> {}", source.display(), target.display());
    });
    for failure in &report.failures {
        eprintln!("Error: {}", failure);
    }

    let mut failed = !report.is_success();

    if args.install {
        let target = InstallTarget {
            host: args.host,
            dir: args.remote_dir,
            username: args.username,
        };
        let stylesheet = args.dir.join(&args.stylesheet);
        if let Err(e) = target.install(&report.written, &stylesheet) {
            eprintln!("Error installing pages: {}", e);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}
