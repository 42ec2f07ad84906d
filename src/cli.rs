use clap::Parser;
use log::{info, LevelFilter};
use std::error::Error;
use std::io::{self, Write};
use string_error::static_err;

use crate::request::{resolve, ComparisonRequest, LocalFilesystem};
use crate::revision::RevisionPair;
use crate::svn::{find_svn, DiffPlan};

const MODES: &str = "\
if no options are provided:
    1. the WC at PATH is compared to the HEAD revision
        * PATH must be a valid SVN WC

if a single revision REV is provided to option -r:
    if PATH exists on local filesystem:
        2. the revision at REV is compared to the WC at PATH
            * PATH must be a valid SVN WC
    if PATH does NOT exist on local filesystem:
        3. the revision at REV is compared to the revision at HEAD
            * PATH must be a fully-qualified SVN URL

if two comma-separated revisions REV1,REV2 are provided to option -r:
    4. the revision at REV1 is compared to the revision at REV2
        * PATH must be a fully-qualified SVN URL";

#[derive(Parser, Debug)]
#[command(version, about, after_help = MODES)]
pub struct Cli {
    /// compare PATH at the specified SVN revision(s)
    #[arg(short, long, value_name = "REV1[,REV2]", allow_negative_numbers = true)]
    pub revision: Option<RevisionPair>,

    /// more log output, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// an SVN working copy or a fully-qualified SVN URL
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl Cli {
    /// The selector, or the not-supplied pair when `-r` was absent.
    pub fn selector(&self) -> RevisionPair {
        self.revision.unwrap_or_default()
    }
}

/// Sets up `env_logger`; `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

pub fn write_report<W: Write>(
    out: &mut W,
    req: &ComparisonRequest,
    plan: &DiffPlan,
) -> io::Result<()> {
    writeln!(out, "mode:  {}", req.mode)?;
    writeln!(out, "left:  {}", req.describe(req.left))?;
    writeln!(out, "right: {}", req.describe(req.right))?;
    writeln!(out, "svn:   {}", plan)
}

pub fn handle_cli(args: Cli) -> Result<(), Box<dyn Error>> {
    if args.path.is_empty() {
        return Err(static_err("PATH must not be empty"));
    }

    let req = resolve(&args.path, &args.selector(), &LocalFilesystem)?;
    info!("{:?} path, {}", req.location, req.mode);

    let plan = DiffPlan::new(find_svn(), &req);
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &req, &plan)?;
    stdout.flush()?;
    Ok(())
}
