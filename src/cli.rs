//! Command-line driver: arguments, option merging and per-file output.

use anyhow::{Context, Result, bail};
use clap::Parser;
use rayon::prelude::*;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{ConvertOptions, convert_file};

/// CLI arguments for the tsestree binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsestree",
    version,
    about = "Normalize tsz syntax trees into ESTree JSON"
)]
pub struct CliArgs {
    /// Serialized arena documents (`{"arena": ..., "root": n}`).
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Attach the token list to each program.
    #[arg(long)]
    pub tokens: bool,

    /// Attach the comment list to each program.
    #[arg(long)]
    pub comments: bool,

    /// Emit JSX text runs as `JSXText` instead of `Literal`.
    #[arg(long = "jsxTextNode", alias = "jsx-text-node")]
    pub jsx_text_node: bool,

    /// Fail on node kinds outside the ESTree vocabulary.
    #[arg(long)]
    pub strict: bool,

    /// Include the node correspondence maps in the output.
    #[arg(long)]
    pub maps: bool,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Write `<name>.estree.json` files here instead of printing.
    #[arg(long = "outDir", alias = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// JSON file with conversion options; flags switch options on top of it.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    pub fn options(&self) -> Result<ConvertOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?
            }
            None => ConvertOptions::default(),
        };
        options.emit_tokens |= self.tokens;
        options.emit_comments |= self.comments;
        options.use_literal_text_node_for_markup_text |= self.jsx_text_node;
        options.fail_on_unknown_node_kind |= self.strict;
        options.provide_correspondence_maps |= self.maps;
        Ok(options)
    }
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Files written under `--outDir`, in input order.
    pub written: Vec<PathBuf>,
    pub converted: usize,
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Convert every input in parallel, then emit results in input order.
///
/// Per-file failures are collected in the report; only output I/O errors
/// and inputs that would overwrite each other's output abort the run.
pub fn run(args: &CliArgs, stdout: &mut dyn Write) -> Result<RunReport> {
    let options = args.options()?;
    debug!(?options, inputs = args.inputs.len(), "starting run");

    let targets = match &args.out_dir {
        Some(dir) => {
            let targets = output_targets(dir, &args.inputs)?;
            std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
            targets
        }
        None => Vec::new(),
    };

    let rendered: Vec<Result<String>> = args
        .inputs
        .par_iter()
        .map(|path| render(path, &options, args.pretty))
        .collect();

    let mut report = RunReport::default();
    for (i, (path, result)) in args.inputs.iter().zip(rendered).enumerate() {
        let json = match result {
            Ok(json) => json,
            Err(err) => {
                report.failures.push((path.clone(), err));
                continue;
            }
        };
        match targets.get(i) {
            Some(target) => {
                std::fs::write(target, json.as_bytes())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                report.written.push(target.clone());
            }
            None => writeln!(stdout, "{json}").context("failed to write output")?,
        }
        report.converted += 1;
    }
    info!(
        converted = report.converted,
        failed = report.failures.len(),
        "run finished"
    );
    Ok(report)
}

fn render(path: &Path, options: &ConvertOptions, pretty: bool) -> Result<String> {
    let output = convert_file(path, options)?;
    let json = output.to_json().context("failed to serialize program")?;
    let text = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    Ok(text?)
}

/// `dir/input.json` -> `input.estree.json`.
fn output_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    format!("{stem}.estree.json")
}

/// One output path per input under `dir`, rejecting inputs that share a
/// file stem.
fn output_targets(dir: &Path, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<String, &Path> = HashMap::with_capacity(inputs.len());
    let mut targets = Vec::with_capacity(inputs.len());
    for input in inputs {
        let name = output_name(input);
        if let Some(previous) = claimed.insert(name.clone(), input) {
            bail!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.display(),
                dir.join(&name).display()
            );
        }
        targets.push(dir.join(name));
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names_drop_the_extension() {
        assert_eq!(output_name(Path::new("dir/input.json")), "input.estree.json");
        assert_eq!(output_name(Path::new("plain")), "plain.estree.json");
    }

    #[test]
    fn shared_stems_are_rejected() {
        let out = Path::new("out");
        let inputs = [PathBuf::from("a/input.json"), PathBuf::from("b/input.json")];
        let err = output_targets(out, &inputs).unwrap_err().to_string();
        assert!(err.contains("a/input.json"), "{err}");
        assert!(err.contains("b/input.json"), "{err}");
        assert!(err.contains("input.estree.json"), "{err}");

        let distinct = [PathBuf::from("a/one.json"), PathBuf::from("a/two.json")];
        let targets = output_targets(out, &distinct).unwrap();
        assert_eq!(targets, vec![out.join("one.estree.json"), out.join("two.estree.json")]);
    }

    #[test]
    fn flags_map_onto_options() {
        let args = CliArgs::parse_from(["tsestree", "--tokens", "--jsx-text-node", "--strict", "a.json"]);
        let options = args.options().unwrap();
        assert!(options.emit_tokens);
        assert!(options.use_literal_text_node_for_markup_text);
        assert!(options.fail_on_unknown_node_kind);
        assert!(!options.emit_comments);
        assert!(!options.provide_correspondence_maps);
    }

    #[test]
    fn camel_case_flag_spellings() {
        let args = CliArgs::parse_from(["tsestree", "--jsxTextNode", "--outDir", "out", "a.json", "b.json"]);
        assert!(args.jsx_text_node);
        assert_eq!(args.out_dir, Some(PathBuf::from("out")));
        assert_eq!(args.inputs.len(), 2);
    }

    #[test]
    fn inputs_are_required() {
        assert!(CliArgs::try_parse_from(["tsestree"]).is_err());
    }
}
