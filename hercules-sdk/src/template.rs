//! Prompt template rendering
//!
//! Templates are fixed strings with named `{{placeholder}}` substitution
//! points, stored as static data next to each flow. Rendering is a pure
//! function: every occurrence of a bound placeholder is replaced by the
//! stringified field value. For input that passed validation this never
//! fails.

/// Render a template by substituting each named placeholder
///
/// # Arguments
/// * `template` - Fixed template text with `{{name}}` substitution points
/// * `bindings` - (placeholder name, stringified value) pairs
pub fn render(template: &str, bindings: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (name, value) in bindings {
        let placeholder = format!("{{{{{}}}}}", name);
        rendered = rendered.replace(&placeholder, value);
    }
    rendered
}

/// Names of the `{{...}}` substitution points in a template, in order
///
/// Used by tests to check that a flow binds every placeholder its
/// template references.
pub fn placeholder_names(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                names.push(&after[..end]);
                rest = &after[end + 2..];
            }
            None => break,
        }
    }
    names
}
