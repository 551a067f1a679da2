/// A target AI tool and where its rules file lives.
#[derive(Debug, Clone, Copy)]
pub struct ToolTarget {
    pub id: &'static str,
    /// Output path relative to the project root.
    pub path: &'static str,
    header: Option<&'static str>,
}

impl ToolTarget {
    /// Derive this tool's variant of the canonical rules body.
    pub fn customize(&self, body: &str) -> String {
        match self.header {
            Some(header) => format!("{header}{body}"),
            None => body.to_string(),
        }
    }
}

// Cursor expects MDC front-matter.
const CURSOR_HEADER: &str = r#"---
description: Project rules and conventions for AI assistance
globs: ["**/*"]
---

"#;

const CLAUDE_HEADER: &str = "# CLAUDE.md - Project Instructions\n\n\
This file contains instructions for Claude Code when working on this project.\n\n";

const COPILOT_HEADER: &str = "# GitHub Copilot Instructions\n\n\
These instructions guide GitHub Copilot when generating code for this project.\n\n";

/// Every supported tool, in the order rules files are written.
pub const RULES_TOOLS: &[ToolTarget] = &[
    ToolTarget {
        id: "cursor",
        path: ".cursor/rules/anchor-stack.mdc",
        header: Some(CURSOR_HEADER),
    },
    ToolTarget {
        id: "claude",
        path: "CLAUDE.md",
        header: Some(CLAUDE_HEADER),
    },
    ToolTarget {
        id: "windsurf",
        path: ".windsurfrules",
        header: None,
    },
    ToolTarget {
        id: "copilot",
        path: ".github/copilot-instructions.md",
        header: Some(COPILOT_HEADER),
    },
    ToolTarget {
        id: "common",
        path: "docs/PROJECT_RULES.md",
        header: None,
    },
];
