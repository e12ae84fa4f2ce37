/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Supports an optional default value via `{{ env.VAR | default("fallback") }}`.
/// When a default is provided and the variable is unset, the default is used
/// instead of returning an error.
///
/// Expansion happens on the raw config text before deserialization, so config
/// structs use plain String/SecretString. Lines starting with `#` (TOML
/// comments) are passed through unchanged.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        // Skip expansion for comment lines
        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        output.push_str(&expand_line(line)?);
    }

    // Preserve trailing newline if present
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

/// Expand every placeholder on a single line
fn expand_line(line: &str) -> Result<String, String> {
    let mut result = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            // Unterminated braces are left as-is for TOML to complain about
            break;
        };

        result.push_str(&rest[..start]);
        result.push_str(&resolve(rest[start + 2..start + 2 + len].trim())?);
        rest = &rest[start + 2 + len + 2..];
    }

    result.push_str(rest);
    Ok(result)
}

/// Resolve the interior of one `{{ ... }}` placeholder
fn resolve(placeholder: &str) -> Result<String, String> {
    let (key, default) = match placeholder.split_once('|') {
        Some((key, filter)) => (key.trim(), Some(parse_default(filter.trim())?)),
        None => (placeholder, None),
    };

    let Some(var) = key.strip_prefix("env.") else {
        return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
    };

    match std::env::var(var) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or_else(|| format!("environment variable not found: `{var}`")),
    }
}

/// Parse a `default("fallback")` filter
fn parse_default(filter: &str) -> Result<String, String> {
    filter
        .strip_prefix("default(\"")
        .and_then(|inner| inner.strip_suffix("\")"))
        .map(str::to_owned)
        .ok_or_else(|| format!("unsupported placeholder filter: `{filter}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_placeholders() {
        let input = "key = \"value\"";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn single_env_var() {
        temp_env::with_var("PRISM_TEST_VAR", Some("hello"), || {
            let result = expand_env("key = \"{{ env.PRISM_TEST_VAR }}\"").unwrap();
            assert_eq!(result, "key = \"hello\"");
        });
    }

    #[test]
    fn multiple_env_vars_on_separate_lines() {
        let vars = [("PRISM_FOO", Some("foo")), ("PRISM_BAR", Some("bar"))];
        temp_env::with_vars(vars, || {
            let result = expand_env("a = \"{{ env.PRISM_FOO }}\"\nb = \"{{ env.PRISM_BAR }}\"").unwrap();
            assert_eq!(result, "a = \"foo\"\nb = \"bar\"");
        });
    }

    #[test]
    fn two_placeholders_on_one_line() {
        let vars = [("PRISM_FOO", Some("foo")), ("PRISM_BAR", Some("bar"))];
        temp_env::with_vars(vars, || {
            let result = expand_env("pair = \"{{ env.PRISM_FOO }}:{{ env.PRISM_BAR }}\"").unwrap();
            assert_eq!(result, "pair = \"foo:bar\"");
        });
    }

    #[test]
    fn missing_env_var() {
        temp_env::with_var_unset("PRISM_MISSING_VAR", || {
            let err = expand_env("key = \"{{ env.PRISM_MISSING_VAR }}\"").unwrap_err();
            assert!(err.contains("PRISM_MISSING_VAR"));
        });
    }

    #[test]
    fn unsupported_scope() {
        let err = expand_env("key = \"{{ foo.BAR }}\"").unwrap_err();
        assert!(err.contains("only variables scoped with 'env.'"));
    }

    #[test]
    fn commented_lines_skip_expansion() {
        temp_env::with_var_unset("PRISM_MISSING_VAR", || {
            let input = "# key = \"{{ env.PRISM_MISSING_VAR }}\"";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }

    #[test]
    fn default_used_when_var_missing() {
        temp_env::with_var_unset("PRISM_OPTIONAL_VAR", || {
            let result = expand_env("key = \"{{ env.PRISM_OPTIONAL_VAR | default(\"fallback\") }}\"").unwrap();
            assert_eq!(result, "key = \"fallback\"");
        });
    }

    #[test]
    fn default_not_used_when_var_present() {
        temp_env::with_var("PRISM_OPTIONAL_VAR", Some("actual"), || {
            let result = expand_env("key = \"{{ env.PRISM_OPTIONAL_VAR | default(\"fallback\") }}\"").unwrap();
            assert_eq!(result, "key = \"actual\"");
        });
    }

    #[test]
    fn unknown_filter_errors() {
        let err = expand_env("key = \"{{ env.X | upper() }}\"").unwrap_err();
        assert!(err.contains("unsupported placeholder filter"));
    }
}
