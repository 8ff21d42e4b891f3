//! Agent definitions for the generation pipeline.
//!
//! Each agent is a (role, goal, backstory) triple rendered into a system
//! prompt, paired with a task prompt that carries the stage's output
//! contract. The pipeline binds the researcher's output to the writer's
//! input explicitly.

/// Researcher agent: collects topical findings.
pub mod researcher;
/// Writer agent: formats findings into the final document.
pub mod writer;

/// A (role, goal, backstory) triple describing one agent persona.
#[derive(Debug, Clone)]
pub struct AgentProfile {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

impl AgentProfile {
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
        }
    }

    /// Render the persona as a system prompt.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are {}. {}\nYour personal goal is: {}",
            self.role,
            self.backstory.trim(),
            self.goal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_carries_all_three_parts() {
        let profile = AgentProfile::new(
            "Test Role",
            "Do the test thing",
            "A persona with history.",
        );

        let prompt = profile.system_prompt();
        assert!(prompt.starts_with("You are Test Role."));
        assert!(prompt.contains("A persona with history."));
        assert!(prompt.ends_with("Your personal goal is: Do the test thing"));
    }

    #[test]
    fn test_system_prompt_trims_backstory_whitespace() {
        let profile = AgentProfile::new("R", "G", "\n   padded backstory   \n");
        assert!(profile.system_prompt().contains("R. padded backstory\n"));
    }
}
