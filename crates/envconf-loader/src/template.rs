//! Variable rendering for templated settings files
//!
//! Templated files (`*.yml.tmpl`) may reference process environment
//! variables as `${NAME}`; references are substituted before the text is
//! parsed as YAML. `$${NAME}` escapes to the literal `${NAME}`. An
//! undefined variable is a fatal render error — templates never render
//! partially.

use crate::{Error, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(\$)?\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("variable pattern is valid")
});

/// Render `${NAME}` references from process environment variables.
pub fn render(text: &str, path: &Path) -> Result<String> {
    render_with(text, path, |name| std::env::var(name).ok())
}

/// Render `${NAME}` references through an arbitrary lookup.
///
/// `lookup` returning `None` for a referenced name produces
/// [`Error::UndefinedVariable`].
pub fn render_with<F>(text: &str, path: &Path, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for captures in VAR_PATTERN.captures_iter(text) {
        let matched = captures.get(0).expect("group 0 always matches");
        output.push_str(&text[last..matched.start()]);

        let name = &captures[2];
        if captures.get(1).is_some() {
            // Escaped: $${NAME} renders as the literal ${NAME}.
            output.push_str("${");
            output.push_str(name);
            output.push('}');
        } else {
            match lookup(name) {
                Some(value) => output.push_str(&value),
                None => {
                    return Err(Error::UndefinedVariable {
                        path: path.to_path_buf(),
                        name: name.to_string(),
                    });
                }
            }
        }
        last = matched.end();
    }

    output.push_str(&text[last..]);
    Ok(output)
}
