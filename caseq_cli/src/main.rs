//! Standalone host for the CaseEquatable expansion pass.
//!
//! Scans the listed source files for marked enums, runs the same expansion
//! the derive macro performs, and emits the generated companion declarations
//! for a build step to splice in before the main compile. Each marked
//! declaration is expanded independently; a failure in one is reported with
//! its source location and does not stop the others.

mod args;

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{error, info};

use args::Args;

/// Everything produced for one input file.
struct FileReport {
    path: PathBuf,
    /// Rendered companion declarations; `None` when nothing was marked.
    rendered: Option<String>,
    /// Located error messages, one per failed declaration.
    errors: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let files = args.collect_files()?;
    info!("expanding {} source file(s)", files.len());

    #[cfg(feature = "parallel")]
    let reports: Vec<FileReport> = if args.parallel {
        files.par_iter().map(|path| process_file(path)).collect()
    } else {
        files.iter().map(|path| process_file(path)).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let reports: Vec<FileReport> = files.iter().map(|path| process_file(path)).collect();

    let mut failed = false;

    // Inputs with equal stems would write the same output file; refuse to
    // write those instead of silently dropping a companion.
    let mut skip: HashSet<PathBuf> = HashSet::new();
    if args.out_dir.is_some() {
        let with_output: Vec<&Path> = reports
            .iter()
            .filter(|report| report.rendered.is_some())
            .map(|report| report.path.as_path())
            .collect();
        for (name, group) in output_collisions(&with_output) {
            failed = true;
            let inputs =
                group.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ");
            error!("output name `{name}` collides for inputs: {inputs}; none written");
            skip.extend(group);
        }
    }

    for report in &reports {
        for message in &report.errors {
            failed = true;
            error!("{message}");
        }

        let Some(rendered) = &report.rendered else { continue };
        if skip.contains(&report.path) {
            continue;
        }
        match &args.out_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                let out_path = dir.join(output_name(&report.path));
                fs::write(&out_path, rendered)?;
                info!("wrote {}", out_path.display());
            }
            None => {
                println!("// ---- {} ----", report.path.display());
                println!("{rendered}");
            }
        }
    }

    if failed {
        return Err("one or more declarations failed to expand".into());
    }
    Ok(())
}

/// Expand one source file. Bad input never panics; all failures land in the
/// report.
fn process_file(path: &Path) -> FileReport {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            return FileReport {
                path: path.to_path_buf(),
                rendered: None,
                errors: vec![format!("{}: {err}", path.display())],
            };
        }
    };

    let file = match syn::parse_file(&source) {
        Ok(file) => file,
        Err(err) => {
            return FileReport {
                path: path.to_path_buf(),
                rendered: None,
                errors: vec![located(path, err.span(), &err.to_string())],
            };
        }
    };

    let expansion = caseq_expand::source::expand_file(&file);

    let errors = expansion
        .errors
        .iter()
        .map(|err| located(path, err.span(), &err.to_string()))
        .collect();

    let rendered = (!expansion.generated.is_empty()).then(|| render(&expansion.generated));

    FileReport { path: path.to_path_buf(), rendered, errors }
}

/// `file:line:col: message`, the shape build tools expect.
fn located(path: &Path, span: proc_macro2::Span, message: &str) -> String {
    let start = span.start();
    format!("{}:{}:{}: {message}", path.display(), start.line, start.column + 1)
}

/// Render the fragments into one generated-file body.
///
/// Token-stream rendering is unformatted; the output is valid Rust (every
/// fragment was round-tripped through the parser) and is meant for rustfmt
/// or direct consumption by the compiler.
fn render(expansions: &[caseq_expand::source::Expansion]) -> String {
    let mut out = String::from("// Generated by `caseq`. Do not edit by hand.\n");
    for expansion in expansions {
        out.push_str(&format!("\n// Companion declarations for `{}`.\n", expansion.ident));
        out.push_str(&expansion.tokens.to_string());
        out.push('\n');
    }
    out
}

/// `foo.rs` -> `foo_cases.rs`.
fn output_name(input: &Path) -> String {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("expanded");
    format!("{stem}_cases.rs")
}

/// Groups of inputs that would write the same output file.
///
/// Output names derive from the input stem only, so `a/mod.rs` and
/// `b/mod.rs` map to one `mod_cases.rs`.
fn output_collisions(inputs: &[&Path]) -> Vec<(String, Vec<PathBuf>)> {
    let mut by_name: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for input in inputs {
        by_name.entry(output_name(input)).or_default().push(input.to_path_buf());
    }
    by_name.into_iter().filter(|(_, group)| group.len() > 1).collect()
}
