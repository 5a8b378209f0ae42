use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use walkdir::WalkDir;

/// caseq - generate shape-only case companions for marked enums
#[derive(Parser, Debug)]
#[command(name = "caseq")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Source files or directories to scan for marked enums
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Directory for generated `<stem>_cases.rs` files (default: stdout)
    #[arg(short = 'o', long)]
    pub out_dir: Option<PathBuf>,

    /// Expand input files in parallel
    #[arg(short = 'p', long, action = ArgAction::Set, default_value_t = true)]
    pub parallel: bool,
}

impl Args {
    /// Resolve the path arguments into a sorted list of `.rs` files.
    pub fn collect_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for path in &self.paths {
            if path.is_dir() {
                for entry in WalkDir::new(path) {
                    let entry = entry.map_err(io::Error::other)?;
                    if entry.file_type().is_file()
                        && entry.path().extension().is_some_and(|ext| ext == "rs")
                    {
                        files.push(entry.into_path());
                    }
                }
            } else {
                files.push(path.clone());
            }
        }

        // Deterministic processing order regardless of walk order.
        files.sort();
        files.dedup();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_defaults_on_and_can_be_disabled() {
        let args = Args::try_parse_from(["caseq", "src"]).unwrap();
        assert!(args.parallel);

        let args = Args::try_parse_from(["caseq", "src", "--parallel", "false"]).unwrap();
        assert!(!args.parallel);

        let args = Args::try_parse_from(["caseq", "src", "-p", "true"]).unwrap();
        assert!(args.parallel);
    }
}
