/// Append the conventions for adding routes, endpoints, and components.
pub fn append_section(out: &mut String) {
    out.push_str("## Adding New Features\n\n");
    out.push_str(
        "### Adding a New Page/Route\n\
         1. Create file in the appropriate route directory\n\
         2. Follow existing naming conventions\n\
         3. Use shared components from `src/components/`\n\
         4. Add appropriate logging\n\n",
    );
    out.push_str(
        "### Adding a New API Endpoint\n\
         1. Create route handler in the API directory\n\
         2. Use the standard API handler wrapper\n\
         3. Add request/response logging\n\
         4. Handle errors with standard error types\n\n",
    );
    out.push_str(
        "### Adding a New Component\n\
         1. Create in `src/components/`\n\
         2. Use TypeScript types\n\
         3. Follow existing component patterns\n\n",
    );
}
