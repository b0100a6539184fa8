use avl_vocab::{count_path, count_reader, InsertMode, VocabConfig, VocabError, Vocabulary};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Counts total and unique words in each input file, or in standard input
/// when no file is given.
#[derive(Parser, Debug)]
#[command(name = "vocab", version, about)]
struct Args {
    /// Files to count, each reported separately
    files: Vec<PathBuf>,

    /// Insert into a plain binary search tree without rebalancing
    #[arg(long)]
    unbalanced: bool,

    /// Do not count tokens that contain no letters as a word
    #[arg(long)]
    skip_empty: bool,

    /// Print the tree after each count
    #[arg(long)]
    dump_tree: bool,
}

impl Args {
    fn config(&self) -> VocabConfig {
        let mode = if self.unbalanced {
            InsertMode::Unbalanced
        } else {
            InsertMode::Balanced
        };
        VocabConfig::default()
            .with_mode(mode)
            .with_skip_empty(self.skip_empty)
    }
}

fn report<W: Write>(out: &mut W, vocab: &Vocabulary, dump_tree: bool) -> io::Result<()> {
    writeln!(out, "{}", vocab.count())?;
    if dump_tree {
        write!(out, "{}", vocab.tree())?;
    }
    Ok(())
}

/// Counts every source named in `args`, or `stdin` when there is none.
///
/// Returns false if any source could not be read. Failing sources are
/// reported and skipped.
fn run<R: BufRead, W: Write>(args: &Args, stdin: R, out: &mut W) -> io::Result<bool> {
    let config = args.config();
    log::debug!("running with {:?}", config);

    if args.files.is_empty() {
        return match count_reader(stdin, config) {
            Ok(vocab) => {
                writeln!(out)?;
                report(out, &vocab, args.dump_tree)?;
                Ok(true)
            }
            Err(e) => {
                eprintln!("{}", e);
                Ok(false)
            }
        };
    }

    let mut ok = true;
    for path in &args.files {
        match count_path(path, config) {
            Ok(vocab) => report(out, &vocab, args.dump_tree)?,
            Err(VocabError::NotFound { path, .. }) => {
                log::warn!("skipping missing input {}", path.display());
                writeln!(out, "Could not find file {}", path.display())?;
                ok = false;
            }
            Err(VocabError::Io { path, source }) => {
                eprintln!("Error reading {}: {}", path.display(), source);
                ok = false;
            }
        }
    }
    Ok(ok)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    match run(&args, io::stdin().lock(), &mut stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("vocab: {}", e);
            ExitCode::FAILURE
        }
    }
}
