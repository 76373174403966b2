//! Prompt templates for creating and reviewing components.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Serialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    fn user(content: impl Into<String>) -> Self {
        PromptMessage {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Prompt asking for a new design-system compliant React component.
pub fn create_component_prompt(name: &str, description: &str) -> String {
    format!(
        "Create a new React component that follows the design system.\n\n\
         Component name: {name}\n\
         Description: {description}\n\n\
         Requirements:\n\
         1. Use TypeScript\n\
         2. Style only with approved design tokens\n\
         3. Consider accessibility\n\
         4. Include a Storybook story\n\
         5. Include tests where appropriate\n\n\
         Files:\n\
         - {name}.tsx (implementation)\n\
         - {name}.css (styles)\n\
         - {name}.stories.tsx (Storybook)\n\
         - {name}.test.tsx (tests, if needed)\n\
         - index.ts (re-exports)"
    )
}

/// Conversation seed for a component code review.
pub fn review_component_prompt(name: &str) -> Vec<PromptMessage> {
    vec![
        PromptMessage::user(format!("Please review the code of component '{}'.", name)),
        PromptMessage::user("Review it from the following angles:"),
        PromptMessage::user(
            "1. Design system compliance\n\
             2. Accessibility\n\
             3. Performance\n\
             4. Readability and maintainability\n\
             5. TypeScript type safety",
        ),
        PromptMessage {
            role: Role::Assistant,
            content: "Understood. I will review the component from these angles. \
                      Please share the component code."
                .to_string(),
        },
    ]
}
