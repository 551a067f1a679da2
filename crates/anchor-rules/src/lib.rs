pub mod config;
pub mod context;
pub mod debugging;
pub mod directories;
pub mod features;
pub mod logging;
pub mod overview;
pub mod prohibited;
pub mod tools;

pub use context::RulesContext;
pub use tools::{ToolTarget, RULES_TOOLS};

use std::collections::BTreeMap;

use anchor_core::{Pack, Stack, StackSpec};
use anchor_files::{FileWriter, FilesError};
use tracing::{debug, info};

/// Render the canonical rules body shared by every tool variant.
pub fn render_rules(ctx: &RulesContext) -> String {
    let mut body = String::new();
    overview::append_section(&mut body, ctx);
    directories::append_section(&mut body, ctx);
    logging::append_section(&mut body);
    features::append_section(&mut body);
    debugging::append_section(&mut body);
    prohibited::append_section(&mut body);
    config::append_section(&mut body);
    body
}

/// Generate all AI rules files for a project.
///
/// Renders one canonical body, derives each tool's variant, and writes it
/// at the tool's fixed path through `writer`. Returns tool id → written
/// path. Writes are best-effort: a failing write propagates and files
/// already written stay on disk.
pub fn generate(
    stack: &Stack,
    spec: &StackSpec,
    packs: &[Pack],
    writer: &FileWriter,
) -> Result<BTreeMap<&'static str, String>, FilesError> {
    let ctx = RulesContext::new(stack, spec, packs);
    let body = render_rules(&ctx);

    let mut rules_files = BTreeMap::new();
    for tool in RULES_TOOLS {
        let content = tool.customize(&body);
        writer.write_file(tool.path, &content)?;
        rules_files.insert(tool.id, tool.path.to_string());
        debug!("rules file generated for {} at {}", tool.id, tool.path);
    }

    info!("AI rules generated for {}", ctx.app_name);
    Ok(rules_files)
}

/// Append a pack's rules section to every rules file already on disk.
///
/// Returns `Ok(false)` without writing when the pack carries no rules
/// content. Files missing under the writer's base directory are skipped,
/// not created. Callers must ensure exclusive access to the project tree;
/// the read-modify-write here is not coordinated.
pub fn append_pack_rules(
    pack: &Pack,
    stack_type: &str,
    writer: &FileWriter,
) -> Result<bool, FilesError> {
    if !pack.has_rules() {
        debug!("pack {} has no rules content", pack.name);
        return Ok(false);
    }

    debug!("appending {} rules for {} project", pack.name, stack_type);
    let section = format_pack_section(pack);
    for tool in RULES_TOOLS {
        if writer.exists(tool.path) {
            let existing = writer.read_file(tool.path)?;
            writer.write_file(tool.path, &format!("{existing}\n{section}"))?;
        }
    }

    info!("pack rules appended for {}", pack.name);
    Ok(true)
}

fn format_pack_section(pack: &Pack) -> String {
    format!(
        "\n---\n\n## {} ({})\n\n{}\n",
        pack.display_name,
        pack.name,
        pack.rules_content.as_deref().unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_core::{BuiltinFeatures, SpecInput};

    fn test_stack() -> Stack {
        Stack {
            name: "nextjs".into(),
            display_name: "Next.js".into(),
            version: "2025.1".into(),
            directory_structure: vec![
                "src/app/".into(),
                "src/components/".into(),
                "src/lib/core/".into(),
                "src/lib/db/".into(),
            ],
            builtin_features: BuiltinFeatures {
                logging: true,
                config_management: true,
            },
        }
    }

    fn test_spec() -> StackSpec {
        StackSpec::new(SpecInput {
            app_name: "my-app".into(),
            app_type: "nextjs".into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn body_contains_every_section_in_order() {
        let ctx = RulesContext::new(&test_stack(), &test_spec(), &[]);
        let body = render_rules(&ctx);

        let headings = [
            "# Project Rules - my-app",
            "## Project Overview",
            "## Directory Structure",
            "## Logging Standards",
            "## Adding New Features",
            "## Debug Guide",
            "## Prohibited Actions",
            "## Configuration Management",
        ];
        let mut last = 0;
        for heading in headings {
            let pos = body[last..]
                .find(heading)
                .unwrap_or_else(|| panic!("missing or out of order: {heading}"));
            last += pos;
        }
    }

    #[test]
    fn body_partitions_directories() {
        let ctx = RulesContext::new(&test_stack(), &test_spec(), &[]);
        let body = render_rules(&ctx);
        assert!(body.contains("- `src/app/`"));
        assert!(body.contains("- `src/lib/core/`"));
        // Protected dirs are listed after the protected heading, not before.
        let protected_at = body.find("### Protected Directories").unwrap();
        assert!(body.find("- `src/lib/core/`").unwrap() > protected_at);
        assert!(body.find("- `src/app/`").unwrap() < protected_at);
    }

    #[test]
    fn pack_section_format() {
        let pack = Pack {
            name: "database-postgres".into(),
            display_name: "PostgreSQL Database".into(),
            rules_content: Some("Always use the query builder.".into()),
        };
        let section = format_pack_section(&pack);
        assert!(section.starts_with("\n---\n\n## PostgreSQL Database (database-postgres)\n"));
        assert!(section.contains("Always use the query builder."));
    }
}
