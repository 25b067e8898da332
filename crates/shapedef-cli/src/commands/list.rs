// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! List the icons and toolbars in definition files.

use miette::Result;
use shapedef_core::definition::Definitions;
use shapedef_core::model::{StereotypeIcon, Toolbar};
use tracing::{instrument, warn};

use super::discovery::{current_dir, resolve_definition_files};
use super::parse_file;

/// List the definitions under `paths`, one block per file.
///
/// Files that fail to parse are reported and skipped.
#[instrument(skip_all, fields(paths = ?paths))]
pub fn list(paths: &[String]) -> Result<()> {
    let root = current_dir()?;
    let files = resolve_definition_files(paths, &root)?;
    if files.is_empty() {
        warn!("No definition files found");
        return Ok(());
    }

    let mut failed = 0;
    for file in &files {
        match parse_file(file) {
            Ok(definitions) => {
                println!("{file}:");
                print!("{}", render_definitions(&definitions));
            }
            Err(err) => {
                warn!(path = %file, "Skipping definition file");
                eprintln!("{err:?}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        miette::bail!("{failed} of {} definition files failed to parse", files.len());
    }
    Ok(())
}

/// Renders the listing for one file: icons first, then toolbars, each in
/// source order and indented by two spaces.
pub fn render_definitions(definitions: &Definitions) -> String {
    let icons = definitions.icons.iter().map(describe_icon);
    let toolbars = definitions.toolbars.iter().map(describe_toolbar);
    icons
        .chain(toolbars)
        .map(|line| format!("  {line}\n"))
        .collect()
}

fn describe_icon(icon: &StereotypeIcon) -> String {
    format!(
        "icon {} \"{}\" [{} commands]",
        icon.id,
        icon.title,
        icon.icon_shape.len()
    )
}

fn describe_toolbar(toolbar: &Toolbar) -> String {
    format!(
        "toolbar {} priority {} [{} tools]",
        toolbar.id,
        toolbar.priority,
        toolbar.tool_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapedef_core::definition::parse_definitions;

    #[test]
    fn test_render_definitions() {
        let definitions = parse_definitions(
            "list.def",
            r#"
toolbar Main {
    id: main
    priority: -2
    tools {
        tool { title: "Class"; element: class }
        separator
        tool { title: "Note"; element: annotation }
    }
}

icon Db {
    id: db
    title: "Database"
    shape {
        rect { x: 0; y: 0; width: 10; height: 10 }
        close
    }
}
"#,
        )
        .unwrap();

        assert_eq!(
            render_definitions(&definitions),
            "  icon db \"Database\" [2 commands]\n  toolbar main priority -2 [2 tools]\n"
        );
    }

    #[test]
    fn test_render_empty_file() {
        let definitions = parse_definitions("empty.def", "// nothing here\n").unwrap();
        assert_eq!(render_definitions(&definitions), "");
    }

    #[test]
    fn test_icon_without_title() {
        let definitions = parse_definitions("t.def", "icon Foo { id: foo }").unwrap();
        assert_eq!(
            describe_icon(&definitions.icons[0]),
            "icon foo \"\" [0 commands]"
        );
    }
}
