//! Writer agent: turns research findings into a publishable document.

use crate::agents::AgentProfile;
use crate::pipeline::ResearchFindings;
use crate::types::GenerationContext;

pub fn profile() -> AgentProfile {
    AgentProfile::new(
        "Technical Blog Post Writer",
        "Craft engaging and informative blog posts in Markdown format.",
        "You are an expert technical writer skilled at transforming complex \
         information into easily understandable and well-structured engaging \
         blog content using Markdown.",
    )
}

/// Render the writing task: the frontmatter contract plus the research to
/// draw from.
///
/// The prompt forbids code fences; `document::GeneratedDocument::finalize`
/// enforces that and the `publishedAt` value deterministically afterwards.
pub fn task_prompt(ctx: &GenerationContext, findings: &ResearchFindings) -> String {
    format!(
        r#"Based on the research provided below, write a compelling and informative blog post about {topic} in plain Markdown format. The blog post should be attractive and engaging to readers.

Research findings:
{findings}

The blog post MUST start with the following frontmatter (using single quotes for string values) and MUST NOT be enclosed in any code blocks (do not use ```).

---
title: '(A catchy title based on the research)'
status: 'published'
author:
  name: '{author_name}'
  picture: '{author_picture_url}'
slug: '(A URL-friendly version of the title)'
description: '(A brief summary of the blog post)'
coverImage: '{cover_image_url}'
category: '(A relevant category for the topic)'
publishedAt: '{current_date_iso}'
---

The main content of the blog post must follow immediately after the closing '---' of the frontmatter, without any leading or trailing '```' or any other extra formatting that would treat it as a code block. The output must be directly usable as a .md file.

Use the research findings to fill in the title, slug, description, category, and other relevant fields. The 'publishedAt' field must contain exactly {current_date_iso}. Strictly do not use any code blocks or delimiters in the output."#,
        topic = ctx.topic,
        findings = findings.as_str(),
        author_name = ctx.author_name,
        author_picture_url = ctx.author_picture_url,
        cover_image_url = ctx.cover_image_url,
        current_date_iso = ctx.current_date_iso,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> GenerationContext {
        GenerationContext {
            topic: "quantum computing".to_string(),
            author_name: "Jane Doe".to_string(),
            author_picture_url: "https://x/jane.jpg".to_string(),
            cover_image_url: "https://x/cover.jpg".to_string(),
            current_year: 2026,
            current_date_iso: "2026-08-07T09:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_profile_is_topic_independent() {
        let profile = profile();
        assert_eq!(profile.role, "Technical Blog Post Writer");
        assert!(profile.backstory.contains("technical writer"));
    }

    #[test]
    fn test_task_prompt_embeds_findings_and_seeds() {
        let findings = ResearchFindings::new("- qubit counts doubled\n- error rates fell");
        let prompt = task_prompt(&test_context(), &findings);

        assert!(prompt.contains("- qubit counts doubled"));
        assert!(prompt.contains("name: 'Jane Doe'"));
        assert!(prompt.contains("picture: 'https://x/jane.jpg'"));
        assert!(prompt.contains("coverImage: 'https://x/cover.jpg'"));
        assert!(prompt.contains("publishedAt: '2026-08-07T09:00:00.000Z'"));
    }

    #[test]
    fn test_task_prompt_states_the_format_contract() {
        let findings = ResearchFindings::new("- one finding");
        let prompt = task_prompt(&test_context(), &findings);

        assert!(prompt.contains("MUST NOT be enclosed in any code blocks"));
        assert!(prompt.contains("status: 'published'"));
        assert!(prompt.contains("directly usable as a .md file"));
    }
}
