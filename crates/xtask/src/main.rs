use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

const USAGE: &str = "Usage: cargo xtask <command>\n\nCommands:\n  verify-deploy [--dist <dir>] [--env-file <file>] [--json]";

/// Variables the site cannot run without
const REQUIRED_ENV: [&str; 3] = [
    "TRIPMATE_API_BASE_URL",
    "TRIPMATE_AUTH_URL",
    "TRIPMATE_AUTH_ANON_KEY",
];

const DEFAULT_DIST: &str = "target/dx/tripmate-web/release/web/public";
const DEFAULT_ENV_FILE: &str = ".env";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("verify-deploy") => verify_deploy(args.collect()),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}\n\n{USAGE}"),
        None => anyhow::bail!(USAGE),
    }
}

#[derive(Debug, PartialEq, Eq)]
struct VerifyOptions {
    dist: PathBuf,
    env_file: PathBuf,
    json: bool,
}

impl VerifyOptions {
    fn parse(args: Vec<String>) -> anyhow::Result<Self> {
        let mut options = Self {
            dist: PathBuf::from(DEFAULT_DIST),
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            json: false,
        };
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dist" => {
                    options.dist = args.next().context("--dist needs a directory")?.into();
                }
                "--env-file" => {
                    options.env_file = args.next().context("--env-file needs a path")?.into();
                }
                "--json" => options.json = true,
                other => anyhow::bail!("Unexpected argument: {other}\n\n{USAGE}"),
            }
        }
        Ok(options)
    }
}

#[derive(Debug, Serialize)]
struct Check {
    name: String,
    ok: bool,
    detail: String,
}

impl Check {
    fn new(name: impl Into<String>, ok: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ok,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    dist: String,
    checks: Vec<Check>,
}

impl Report {
    fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.ok)
    }

    fn missing(&self) -> usize {
        self.checks.iter().filter(|c| !c.ok).count()
    }

    fn render(&self) -> String {
        let mut out = format!("Deploy check for {}\n", self.dist);
        for check in &self.checks {
            let mark = if check.ok { "ok     " } else { "MISSING" };
            out.push_str(&format!("  [{mark}] {:<28} {}\n", check.name, check.detail));
        }
        out
    }
}

fn verify_deploy(args: Vec<String>) -> anyhow::Result<()> {
    let options = VerifyOptions::parse(args)?;

    let env_file = if options.env_file.exists() {
        read_env_file(&options.env_file)?
    } else {
        HashMap::new()
    };

    let mut checks = check_build_output(&options.dist)?;
    checks.extend(check_env(|key| {
        std::env::var(key)
            .ok()
            .or_else(|| env_file.get(key).cloned())
    }));

    let report = Report {
        dist: options.dist.display().to_string(),
        checks,
    };

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        print!("{}", report.render());
    }

    if !report.passed() {
        anyhow::bail!("{} deploy check(s) failed", report.missing());
    }
    println!("Ready to deploy.");
    Ok(())
}

/// `index.html` at the root plus at least one `.wasm` and one `.js`, either
/// in `assets/` or next to the index
fn check_build_output(dist: &Path) -> anyhow::Result<Vec<Check>> {
    if !dist.is_dir() {
        return Ok(vec![Check::new(
            "dist directory",
            false,
            format!("{} does not exist; run `dx build --release` first", dist.display()),
        )]);
    }

    let index = dist.join("index.html");
    let mut files = list_files(dist)?;
    let assets = dist.join("assets");
    if assets.is_dir() {
        files.extend(list_files(&assets)?);
    }

    let find = |ext: &str| {
        files
            .iter()
            .find(|p| p.extension().is_some_and(|e| e == ext))
            .map(|p| p.display().to_string())
    };
    let artifact = |name: &str, ext: &str| match find(ext) {
        Some(path) => Check::new(name, true, path),
        None => Check::new(name, false, format!("no .{ext} file in {} or assets/", dist.display())),
    };

    Ok(vec![
        Check::new(
            "index.html",
            index.is_file(),
            index.display().to_string(),
        ),
        artifact("wasm bundle", "wasm"),
        artifact("js loader", "js"),
    ])
}

fn list_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn check_env(lookup: impl Fn(&str) -> Option<String>) -> Vec<Check> {
    REQUIRED_ENV
        .iter()
        .map(|key| match lookup(key).filter(|v| !v.trim().is_empty()) {
            Some(_) => Check::new(*key, true, "set"),
            None => Check::new(*key, false, "not set in the environment or env file"),
        })
        .collect()
}

/// Variables declared in a dotenv file, without touching the process
/// environment
fn read_env_file(path: &Path) -> anyhow::Result<HashMap<String, String>> {
    dotenvy::from_path_iter(path)
        .with_context(|| format!("opening {}", path.display()))?
        .collect::<Result<HashMap<_, _>, _>>()
        .with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn options_have_defaults_and_overrides() {
        let defaults = VerifyOptions::parse(vec![]).unwrap();
        assert_eq!(defaults.dist, PathBuf::from(DEFAULT_DIST));
        assert_eq!(defaults.env_file, PathBuf::from(".env"));

        let custom =
            VerifyOptions::parse(args(&["--dist", "out", "--env-file", "prod.env", "--json"]))
                .unwrap();
        assert_eq!(custom.dist, PathBuf::from("out"));
        assert_eq!(custom.env_file, PathBuf::from("prod.env"));
        assert!(custom.json);

        assert!(VerifyOptions::parse(args(&["--dist"])).is_err());
        assert!(VerifyOptions::parse(args(&["--force"])).is_err());
    }

    fn env_file(dir: &tempfile::TempDir, contents: &str) -> HashMap<String, String> {
        let path = dir.path().join(".env");
        std::fs::write(&path, contents).unwrap();
        read_env_file(&path).unwrap()
    }

    #[test]
    fn env_file_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let vars = env_file(
            &dir,
            "# deploy\n\
             TRIPMATE_API_BASE_URL=https://n8n.example.com/webhook\n\
             export TRIPMATE_AUTH_URL=\"https://abc.supabase.co\"\n\
             TRIPMATE_AUTH_ANON_KEY='anon'\n\
             \n",
        );
        assert_eq!(vars.len(), 3);
        assert_eq!(vars["TRIPMATE_API_BASE_URL"], "https://n8n.example.com/webhook");
        assert_eq!(vars["TRIPMATE_AUTH_URL"], "https://abc.supabase.co");
        assert_eq!(vars["TRIPMATE_AUTH_ANON_KEY"], "anon");
    }

    #[test]
    fn blank_values_count_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let vars = env_file(&dir, "TRIPMATE_API_BASE_URL=x\nTRIPMATE_AUTH_URL=\n");
        let checks = check_env(|k| vars.get(k).cloned());
        let ok: Vec<bool> = checks.iter().map(|c| c.ok).collect();
        assert_eq!(ok, vec![true, false, false]);
    }

    #[test]
    fn placeholder_comment_is_not_a_value() {
        let dir = tempfile::tempdir().unwrap();
        let vars = env_file(
            &dir,
            "TRIPMATE_API_BASE_URL=https://n8n.example.com/webhook\n\
             TRIPMATE_AUTH_URL=https://abc.supabase.co\n\
             TRIPMATE_AUTH_ANON_KEY= # fill me in\n",
        );

        let checks = check_env(|k| vars.get(k).cloned());
        let ok: Vec<bool> = checks.iter().map(|c| c.ok).collect();
        assert_eq!(ok, vec![true, true, false]);
    }

    #[test]
    fn malformed_env_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "TRIPMATE_AUTH_URL=https://abc.supabase.co\nnot a line\n").unwrap();
        assert!(read_env_file(&path).is_err());
    }

    #[test]
    fn build_output_in_assets_passes() {
        let tmp = tempfile::tempdir().unwrap();
        let dist = tmp.path();
        std::fs::write(dist.join("index.html"), "<html></html>").unwrap();
        std::fs::create_dir_all(dist.join("assets")).unwrap();
        std::fs::write(dist.join("assets/tripmate_web_bg.wasm"), [0u8, 97, 115, 109]).unwrap();
        std::fs::write(dist.join("assets/tripmate_web.js"), "export {}").unwrap();

        let checks = check_build_output(dist).unwrap();
        assert!(checks.iter().all(|c| c.ok), "{checks:?}");
    }

    #[test]
    fn missing_bundle_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let dist = tmp.path();
        std::fs::write(dist.join("index.html"), "<html></html>").unwrap();
        std::fs::write(dist.join("app.js"), "export {}").unwrap();

        let report = Report {
            dist: dist.display().to_string(),
            checks: check_build_output(dist).unwrap(),
        };
        assert!(!report.passed());
        assert_eq!(report.missing(), 1);
        assert!(report.render().contains("[MISSING] wasm bundle"));
    }

    #[test]
    fn missing_dist_is_a_single_failure() {
        let checks = check_build_output(Path::new("/nonexistent/tripmate/dist")).unwrap();
        assert_eq!(checks.len(), 1);
        assert!(!checks[0].ok);
    }
}
