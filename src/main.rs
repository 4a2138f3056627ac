//! Doxtract CLI entry point

use std::fs;
use std::process::ExitCode;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use doxtract::{Cli, Declaration, DocDb, DocExtractor, DoxtractError, OutputFormat};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> doxtract::Result<String> {
    let cli = Cli::parse_args();

    // 1. Check manifest exists
    if !cli.manifest.exists() {
        return Err(DoxtractError::FileNotFound {
            path: cli.manifest.display().to_string(),
        });
    }

    // 2. Load declarations
    let manifest = fs::read_to_string(&cli.manifest)?;
    let decls: Vec<Declaration> =
        serde_json::from_str(&manifest).map_err(|e| DoxtractError::InvalidManifest {
            message: e.to_string(),
        })?;

    if cli.verbose {
        eprintln!("Loaded {} declarations from {}", decls.len(), cli.manifest.display());
    }

    // 3. Load the fallback database, if given
    let db = match &cli.db {
        Some(path) => {
            if !path.exists() {
                return Err(DoxtractError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            let db = DocDb::from_json(&fs::read_to_string(path)?)?;
            if cli.verbose {
                eprintln!("Loaded doc database with {} keys from {}", db.len(), path.display());
            }
            db
        }
        None => DocDb::new(),
    };

    // 4. Extract, keeping manifest order
    let mut extractor = DocExtractor::new(db);
    let docs: Vec<String> = decls.iter().map(|d| extractor.extract(d)).collect();

    if cli.verbose {
        let documented = docs.iter().filter(|d| d.as_str() != "\"\"").count();
        eprintln!("Documented {}/{} declarations", documented, docs.len());
    }

    // 5. Render in the requested format
    let output = match cli.format {
        OutputFormat::Lines => docs.join("\n"),
        OutputFormat::Json => {
            let records: Vec<_> = decls
                .iter()
                .zip(&docs)
                .map(|(d, doc)| {
                    json!({
                        "parent": d.parent,
                        "name": d.name,
                        "doc": doc,
                    })
                })
                .collect();
            // Alternate formatting on Value pretty-prints.
            format!("{:#}", serde_json::Value::Array(records))
        }
    };

    Ok(output)
}
