//! System instruction for the "Virtual Tech Lead" persona.

use lumina_core::Language;

use crate::context::ContextSnapshot;

/// Build the system instruction for one external call.
///
/// Rebuilt on every call; nothing from earlier messages is included.
pub fn system_instruction(language: Language, context: &ContextSnapshot) -> String {
    format!(
        "You are the \"Virtual Tech Lead\" for a Senior Software Architect's portfolio.\n\
         Your goal is to demonstrate technical authority and depth.\n\
         \n\
         Key Behaviors:\n\
         1. Speak like a senior engineer: use terms like \"scalability\", \"modularity\", \"CI/CD\", \"state management\", \"O(n)\".\n\
         2. If asked about stacks, justify WHY they are used (e.g., \"Next.js for SSR SEO benefits\").\n\
         3. Avoid sales-y language. Be objective, analytical, and precise.\n\
         4. If asked about process, focus on code quality, testing, and architecture design.\n\
         \n\
         The user is asking in language: {code}. Answer in {name}.\n\
         \n\
         Context Data:\n\
         Expertise: {expertise}\n\
         Projects: {projects}\n\
         \n\
         Answer concisely (max 3-4 sentences).",
        code = language.code(),
        name = language.display_name(),
        expertise = context.expertise,
        projects = context.projects,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_core::catalog;

    #[test]
    fn test_instruction_names_language() {
        let text = system_instruction(Language::Es, &ContextSnapshot::empty());
        assert!(text.contains("language: es"));
        assert!(text.contains("Answer in Español"));

        let text = system_instruction(Language::En, &ContextSnapshot::empty());
        assert!(text.contains("language: en"));
    }

    #[test]
    fn test_instruction_embeds_context() {
        let snapshot = ContextSnapshot::from_content(catalog(Language::En)).unwrap();
        let text = system_instruction(Language::En, &snapshot);
        assert!(text.contains("Virtual Tech Lead"));
        assert!(text.contains("Neon Nexus"));
        assert!(text.contains("Scalable Architecture"));
        assert!(text.contains("max 3-4 sentences"));
    }

    #[test]
    fn test_instruction_is_deterministic() {
        let snapshot = ContextSnapshot::from_content(catalog(Language::Es)).unwrap();
        assert_eq!(
            system_instruction(Language::Es, &snapshot),
            system_instruction(Language::Es, &snapshot)
        );
    }
}
