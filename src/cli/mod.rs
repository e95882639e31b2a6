pub mod logging;
pub mod types;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::Parser;

use crate::config;
use crate::toc::{build_tree, render_toc, tree_from_nodes, Heading, HeadingNode, TocTemplate, TocTree};
use crate::utils::error::{BoxResult, RustocError};

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    if let Err(e) = render_command(&cli) {
        log::error!("Failed to render table of contents: {}", e);
        std::process::exit(1);
    }
}

fn render_command(cli: &types::Cli) -> BoxResult<()> {
    let raw = read_input(cli.input.as_deref())?;
    let tree = parse_tree(&raw, cli.flat)?;
    log::debug!("Parsed heading tree with {} entries", tree.len());

    let template = resolve_template(cli.template.as_deref())?;
    let markup = render_toc(&tree, &template);
    write_output(cli.output.as_deref(), &markup)
}

fn read_input(path: Option<&Path>) -> BoxResult<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            Ok(fs::read_to_string(path).map_err(RustocError::Io)?)
        }
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn parse_tree(raw: &str, flat: bool) -> BoxResult<TocTree> {
    if flat {
        let headings: Vec<Heading> =
            serde_json::from_str(raw).map_err(|e| RustocError::Input(e.to_string()))?;
        Ok(build_tree(&headings))
    } else {
        let nodes: Vec<HeadingNode> =
            serde_json::from_str(raw).map_err(|e| RustocError::Input(e.to_string()))?;
        Ok(tree_from_nodes(&nodes))
    }
}

fn resolve_template(path: Option<&Path>) -> BoxResult<TocTemplate> {
    match path {
        Some(path) => config::load_template(path),
        None => match config::find_default_template_file(".") {
            Some(path) => config::load_template(path),
            None => {
                log::debug!("No template configuration found, using defaults");
                Ok(TocTemplate::default())
            }
        },
    }
}

fn write_output(path: Option<&Path>, markup: &str) -> BoxResult<()> {
    match path {
        Some(path) => Ok(fs::write(path, markup).map_err(RustocError::Io)?),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(markup.as_bytes())?;
            stdout.write_all(b"\n")?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::number_for;

    #[test]
    fn test_parse_tree_nested_json() {
        let json = r#"[
            {"id": "intro", "title": "Intro", "children": [
                {"id": "scope", "title": "Scope"}
            ]},
            {"id": "body", "title": "Body"}
        ]"#;

        let tree = parse_tree(json, false).unwrap();
        assert_eq!(tree.len(), 3);

        let top = tree.item(tree.root()).children();
        assert_eq!(tree.item(top[0]).id, "intro");
        let nested = tree.item(top[0]).children();
        assert_eq!(number_for(&tree, nested[0]).label(), "1.1");
    }

    #[test]
    fn test_parse_tree_flat_json() {
        let json = r#"[
            {"level": 1, "id": "a", "title": "A"},
            {"level": 2, "id": "a1", "title": "A1"}
        ]"#;

        let tree = parse_tree(json, true).unwrap();
        assert_eq!(tree.len(), 2);
        let top = tree.item(tree.root()).children();
        assert!(tree.has_children(top[0]));
    }

    #[test]
    fn test_parse_tree_rejects_malformed_json() {
        let result = parse_tree("not json", false);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().starts_with("Input error"));
    }

    #[test]
    fn test_parse_tree_missing_fields_default_to_empty() {
        let tree = parse_tree(r#"[{"title": "No Anchor"}]"#, false).unwrap();
        let top = tree.item(tree.root()).children();
        assert_eq!(tree.item(top[0]).id, "");
        assert_eq!(tree.item(top[0]).title, "No Anchor");
    }
}
