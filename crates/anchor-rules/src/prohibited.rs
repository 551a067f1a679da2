/// Append the list of prohibited actions.
pub fn append_section(out: &mut String) {
    out.push_str("## Prohibited Actions\n");
    out.push_str(
        "- ❌ Do NOT delete or modify `anchor.config.json`\n\
         - ❌ Do NOT modify files in `src/lib/core/`\n\
         - ❌ Do NOT use console.log/print instead of logger\n\
         - ❌ Do NOT write database queries directly in components\n\
         - ❌ Do NOT hardcode configuration values\n\
         - ❌ Do NOT skip error handling in API endpoints\n\n",
    );
}
