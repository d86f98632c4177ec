use anyhow::{Result, anyhow};
use std::env;
use std::path::PathBuf;

use crate::stories::Scenario;

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub scenarios: Vec<Scenario>, // -s/--scenario
    pub manifest: Option<PathBuf>, // -m/--manifest
    pub json_output: bool,         // --json
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        Self::parse_from(&args[1..])
    }

    /// Parse from a slice of arguments (for testing)
    pub fn parse_from(args: &[String]) -> Result<Self> {
        let mut result = CliArgs {
            scenarios: Scenario::ALL.to_vec(),
            manifest: None,
            json_output: false,
        };

        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            match arg.as_str() {
                "-s" | "--scenario" => {
                    i += 1;
                    if i >= args.len() {
                        return Err(anyhow!("{arg} requires a value"));
                    }
                    result.scenarios = match args[i].as_str() {
                        "all" => Scenario::ALL.to_vec(),
                        name => vec![
                            Scenario::parse(name)
                                .ok_or_else(|| anyhow!("Unknown scenario: {name}"))?,
                        ],
                    };
                }
                "-m" | "--manifest" => {
                    i += 1;
                    if i >= args.len() {
                        return Err(anyhow!("{arg} requires a value"));
                    }
                    result.manifest = Some(PathBuf::from(&args[i]));
                }
                "--json" => {
                    result.json_output = true;
                }
                unknown => {
                    return Err(anyhow!("Unknown argument: {unknown}"));
                }
            }

            i += 1;
        }

        Ok(result)
    }
}
