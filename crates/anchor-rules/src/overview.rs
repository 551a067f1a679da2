use crate::context::RulesContext;

/// Append the title and project overview block.
pub fn append_section(out: &mut String, ctx: &RulesContext) {
    out.push_str(&format!("# Project Rules - {}\n\n", ctx.app_name));
    out.push_str("## Project Overview\n");
    out.push_str(&format!("- **Project Name**: {}\n", ctx.app_name));
    out.push_str(&format!("- **Stack**: {}\n", ctx.stack_id));
    let packs = if ctx.packs.is_empty() {
        "None".to_string()
    } else {
        ctx.packs.join(", ")
    };
    out.push_str(&format!("- **Installed Packs**: {packs}\n\n"));
}
