use crate::error::{ClientError, ClientResult};
use crate::logging::log_trace;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Prompt text with `{name}` placeholders
///
/// `{{` and `}}` render as literal braces.
///
/// ```rust
/// use client_wrappers::PromptTemplate;
///
/// let template = PromptTemplate::new("Translate {text} from {source} to {target}");
/// let prompt = template.render(&[
///     ("text", "Hello"),
///     ("source", "English"),
///     ("target", "French"),
/// ])?;
/// assert_eq!(prompt, "Translate Hello from English to French");
/// # Ok::<(), client_wrappers::ClientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
    variables: Vec<String>,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut variables: Vec<String> = Vec::new();
        for name in PLACEHOLDER
            .captures_iter(&text)
            .filter_map(|caps| caps.get(1))
        {
            let name = name.as_str();
            if !variables.iter().any(|v| v == name) {
                variables.push(name.to_string());
            }
        }
        Self { text, variables }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Placeholder names in order of first appearance.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Substitute every placeholder. Extra variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TemplateVariableMissing`] naming the first
    /// placeholder without a value.
    pub fn render(&self, vars: &[(&str, &str)]) -> ClientResult<String> {
        let values: HashMap<&str, &str> = vars.iter().copied().collect();

        if let Some(missing) = self
            .variables
            .iter()
            .find(|name| !values.contains_key(name.as_str()))
        {
            return Err(ClientError::template_variable_missing(missing.as_str()));
        }

        let rendered = PLACEHOLDER.replace_all(&self.text, |caps: &Captures<'_>| {
            match caps.get(1) {
                Some(name) => values.get(name.as_str()).copied().unwrap_or_default(),
                None if &caps[0] == "{{" => "{",
                None => "}",
            }
        });

        log_trace!(
            variables = self.variables.len(),
            rendered_chars = rendered.len(),
            "Prompt template rendered"
        );

        Ok(rendered.into_owned())
    }
}
