/// Append the debugging checklist.
pub fn append_section(out: &mut String) {
    out.push_str("## Debug Guide\n\n");
    out.push_str(
        "When encountering issues, provide:\n\
         1. **Full error logs** (from logger output, not console)\n\
         2. **Request parameters** that triggered the error\n\
         3. **Environment** (development/production)\n\
         4. **Recent code changes** related to the error\n\n",
    );
}
