use anyhow::{Context, Result};
use colored::*;

use annex::{Manifest, Node};

mod args;
mod stories;

use args::CliArgs;

fn main() -> Result<()> {
    annex::logging::init_logging();
    let args = CliArgs::parse()?;

    if let Some(path) = &args.manifest {
        let manifest = Manifest::load(path)
            .with_context(|| format!("Failed to load manifest {}", path.display()))?;
        let node = stories::render_manifest(&manifest)?;
        print_story(&format!("Manifest {}", path.display()), &node, args.json_output)?;
        return Ok(());
    }

    for scenario in &args.scenarios {
        let node = scenario.render()?;
        print_story(scenario.title(), &node, args.json_output)?;
    }

    Ok(())
}

fn print_story(title: &str, node: &Node, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(node)?);
        return Ok(());
    }
    println!("{} {}", "●".cyan().bold(), title.bold());
    println!("{}", node.to_markup());
    Ok(())
}
