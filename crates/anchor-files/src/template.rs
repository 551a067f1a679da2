use std::collections::BTreeMap;

/// Substitutes `{{key}}` placeholders in template text.
///
/// Placeholders without a matching variable are left intact so a template
/// can be rendered in several passes.
#[derive(Debug, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, template: &str, vars: &BTreeMap<String, String>) -> String {
        let mut out = template.to_string();
        for (key, value) in vars {
            out = out.replace(&format!("{{{{{key}}}}}"), value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_placeholders() {
        let renderer = TemplateRenderer::new();
        let out = renderer.render(
            "# {{app_name}} ({{stack_id}})",
            &vars(&[("app_name", "my-app"), ("stack_id", "nextjs@2025.1")]),
        );
        assert_eq!(out, "# my-app (nextjs@2025.1)");
    }

    #[test]
    fn repeated_placeholder_replaced_everywhere() {
        let renderer = TemplateRenderer::new();
        let out = renderer.render("{{name}} and {{name}}", &vars(&[("name", "a")]));
        assert_eq!(out, "a and a");
    }

    #[test]
    fn unknown_placeholders_left_intact() {
        let renderer = TemplateRenderer::new();
        let out = renderer.render("{{known}} {{unknown}}", &vars(&[("known", "x")]));
        assert_eq!(out, "x {{unknown}}");
    }
}
