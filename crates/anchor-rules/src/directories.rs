use crate::context::RulesContext;

/// Append the modifiable/protected directory listings.
pub fn append_section(out: &mut String, ctx: &RulesContext) {
    let (modifiable, protected) = ctx.partition_directories();

    out.push_str("## Directory Structure\n\n");
    out.push_str("### Modifiable Directories\n");
    out.push_str("These directories can be freely modified:\n");
    out.push_str(&bullet_list(&modifiable));
    out.push_str("\n\n");

    out.push_str("### Protected Directories\n");
    out.push_str("These directories contain framework code. Do not modify directly:\n");
    if protected.is_empty() {
        out.push_str("- None");
    } else {
        out.push_str(&bullet_list(&protected));
    }
    out.push_str("\n\n");
}

fn bullet_list(directories: &[&str]) -> String {
    if directories.is_empty() {
        return "- (none)".to_string();
    }
    directories
        .iter()
        .map(|d| format!("- `{d}`"))
        .collect::<Vec<_>>()
        .join("\n")
}
