//! Resolve file paths to registered kinds.
//!
//! Builds a registry from a kind catalog (`--catalog`, then `KINDEX_CATALOG`,
//! then the builtin kinds) and prints one compact JSON object per path, or the
//! registered kinds with `--list`. Set `RUST_LOG=kindex=debug` to see
//! registration events on stderr.

use anyhow::{Context, Result, anyhow, bail};
use kindex::{
    KindInfo, KindRegistry, builtin_kinds, catalog_path_from_env, load_kind_catalog_from_path,
};
use serde_json::json;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args = CliArgs::parse(env::args_os().skip(1))?;
    let registry = build_registry(args.catalog.or_else(catalog_path_from_env))?;

    if args.list {
        let mut infos: Vec<KindInfo> = registry.list().iter().map(|k| k.info().clone()).collect();
        infos.sort_by(|a, b| a.id.cmp(&b.id));
        println!("{}", serde_json::to_string(&infos)?);
    }

    for path in &args.paths {
        let kind = registry.resolve_by_suffix(path);
        let record = json!({
            "path": path,
            "kind": kind.as_ref().map(|k| k.info().id.as_str()),
        });
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}

fn build_registry(catalog: Option<PathBuf>) -> Result<KindRegistry> {
    match catalog {
        Some(path) => load_kind_catalog_from_path(&path)?
            .into_registry()
            .with_context(|| format!("registering kinds from {}", path.display())),
        None => KindRegistry::with_kinds(builtin_kinds()).context("registering builtin kinds"),
    }
}

#[derive(Debug, Default)]
struct CliArgs {
    catalog: Option<PathBuf>,
    list: bool,
    paths: Vec<String>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut parsed = CliArgs::default();

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--catalog" => {
                    if parsed.catalog.is_some() {
                        bail!("--catalog may only be provided once");
                    }
                    parsed.catalog = Some(PathBuf::from(next_value(&mut args, "--catalog")?));
                }
                "--list" => parsed.list = true,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                flag if flag.starts_with("--") => bail!("unknown flag: {flag}"),
                _ => parsed.paths.push(arg),
            }
        }

        if !parsed.list && parsed.paths.is_empty() {
            bail!(usage());
        }
        Ok(parsed)
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: kind-resolve [--catalog PATH] [--list] [PATH...]\n\
Resolves each PATH to the kind whose file suffix matches it most specifically and prints {\"path\",\"kind\"} as compact JSON.\n\
Kinds come from --catalog, then $KINDEX_CATALOG, then the builtin set.\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os_args(raw: &[&str]) -> Vec<OsString> {
        raw.iter().map(OsString::from).collect()
    }

    #[test]
    fn parses_catalog_and_paths() {
        let args =
            CliArgs::parse(os_args(&["--catalog", "kinds.json", "a-dash.json", "b.svg"])).unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("kinds.json")));
        assert!(!args.list);
        assert_eq!(args.paths, vec!["a-dash.json", "b.svg"]);
    }

    #[test]
    fn requires_paths_or_list() {
        assert!(CliArgs::parse(os_args(&[])).is_err());
        assert!(CliArgs::parse(os_args(&["--list"])).unwrap().list);
        assert!(CliArgs::parse(os_args(&["--catalog"])).is_err());
        assert!(CliArgs::parse(os_args(&["--bogus", "x.json"])).is_err());
    }

    #[test]
    fn builtin_registry_resolves_dashboards() {
        let registry = build_registry(None).unwrap();
        let kind = registry.resolve_by_suffix("home-dash.json").unwrap();
        assert_eq!(kind.info().id.as_str(), "dashboard");
    }
}
