// Unit Tests for prompt templates
//
// UNIT UNDER TEST: PromptTemplate
//
// BUSINESS RESPONSIBILITY:
//   - Finds `{name}` placeholders in prompt text
//   - Substitutes values and reports the first missing one by name
//
// TEST COVERAGE:
//   - Placeholder discovery order and de-duplication
//   - Rendering with complete, extra and missing variables

use crate::error::ClientError;
use crate::llm::PromptTemplate;

#[cfg(test)]
mod prompt_template_tests {
    use super::*;

    const TRANSLATE: &str = "Translate {text} from {source} to {target}";

    #[test]
    fn test_variables_in_order_of_appearance() {
        // Arrange & Act
        let template = PromptTemplate::new(TRANSLATE);

        // Assert
        assert_eq!(template.variables(), ["text", "source", "target"]);
    }

    #[test]
    fn test_repeated_placeholder_listed_once() {
        // Arrange & Act
        let template = PromptTemplate::new("{name} says hi, {name}!");

        // Assert
        assert_eq!(template.variables(), ["name"]);
    }

    #[test]
    fn test_template_formatting() {
        // Arrange
        let template = PromptTemplate::new(TRANSLATE);

        // Act
        let rendered = template
            .render(&[("text", "Hello"), ("source", "English"), ("target", "French")])
            .expect("all variables provided");

        // Assert
        assert_eq!(rendered, "Translate Hello from English to French");
    }

    #[test]
    fn test_template_with_missing_variable() {
        // Arrange
        let template = PromptTemplate::new(TRANSLATE);

        // Act
        let result = template.render(&[("text", "Hello"), ("source", "English")]);

        // Assert
        match result {
            Err(ClientError::TemplateVariableMissing { name }) => assert_eq!(name, "target"),
            other => panic!("expected missing variable error, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_variables_are_ignored() {
        // Arrange
        let template = PromptTemplate::new("Hello {who}");

        // Act
        let rendered = template
            .render(&[("who", "world"), ("unused", "x")])
            .expect("renders");

        // Assert
        assert_eq!(rendered, "Hello world");
    }

    #[test]
    fn test_text_without_placeholders_renders_unchanged() {
        // Arrange
        let template = PromptTemplate::new("Write a haiku about programming");

        // Act & Assert
        assert!(template.variables().is_empty());
        assert_eq!(
            template.render(&[]).expect("renders"),
            "Write a haiku about programming"
        );
    }

    #[test]
    fn test_non_identifier_braces_are_left_alone() {
        // Arrange
        let template = PromptTemplate::new(r#"Return JSON like {"a": 1} for {item}"#);

        // Act
        let rendered = template.render(&[("item", "apples")]).expect("renders");

        // Assert
        assert_eq!(template.variables(), ["item"]);
        assert_eq!(rendered, r#"Return JSON like {"a": 1} for apples"#);
    }

    #[test]
    fn test_doubled_braces_render_as_literals() {
        // Test verifies `{{`/`}}` escape braces instead of naming a variable

        // Arrange
        let template = PromptTemplate::new("Use {{name}} literally, then {x}");

        // Act
        let rendered = template.render(&[("x", "X")]).expect("renders");

        // Assert
        assert_eq!(template.variables(), ["x"]);
        assert_eq!(rendered, "Use {name} literally, then X");
    }

    #[test]
    fn test_escaped_braces_around_placeholder() {
        // Arrange
        let template = PromptTemplate::new("JSON: {{\"item\": \"{item}\"}} and {{{item}}}");

        // Act
        let rendered = template.render(&[("item", "apples")]).expect("renders");

        // Assert
        assert_eq!(rendered, "JSON: {\"item\": \"apples\"} and {apples}");
    }
}
