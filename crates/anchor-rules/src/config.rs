/// Append the configuration management note.
pub fn append_section(out: &mut String) {
    out.push_str("## Configuration Management\n\n");
    out.push_str(
        "All configuration should go through the config system:\n\
         - Environment variables in `.env` / `.env.local`\n\
         - Do NOT hardcode secrets or URLs\n\
         - Use typed config objects\n\n",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_section_content() {
        let mut out = String::new();
        append_section(&mut out);
        assert!(out.contains("## Configuration Management"));
        assert!(out.contains("`.env` / `.env.local`"));
    }
}
