//! Researcher agent: uncovers current developments about a topic.

use crate::agents::AgentProfile;
use crate::types::GenerationContext;

pub fn profile(topic: &str) -> AgentProfile {
    AgentProfile::new(
        format!("{} Software Engineer Researcher", topic),
        format!("Uncover cutting-edge developments in {}", topic),
        format!(
            "You're a cutting-edge research virtuoso with an uncanny talent for \
             unearthing breakthrough discoveries in {topic}. Renowned in digital \
             circles for your exceptional ability to distill complex information \
             into engaging, shareable content that captivates readers from the \
             first sentence. Your blog posts consistently trend because you blend \
             authoritative expertise with an approachable voice that transforms \
             industry insights into must-read digital experiences. When readers \
             need the definitive take on {topic}, your research-backed \
             perspectives are what they share, cite, and trust.",
            topic = topic
        ),
    )
}

/// Render the research task: a bounded investigation brief with a
/// 10-bullet output contract.
pub fn task_prompt(ctx: &GenerationContext) -> String {
    format!(
        "Conduct a comprehensive investigation into {topic}, focusing specifically on:\n\
         1. The latest breakthroughs and innovations since {year}\n\
         2. Major trends reshaping this field in {year}\n\
         3. Surprising statistics or data points that challenge conventional wisdom\n\
         4. Expert predictions for future developments\n\
         5. Practical applications or real-world impact stories\n\
         \n\
         Prioritize high-credibility sources and emerging research that hasn't yet \
         reached mainstream awareness. Look beyond obvious information to uncover \
         unique insights that would genuinely interest and surprise readers.\n\
         \n\
         Consider contrasting perspectives and identify any significant debates or \
         controversies among experts in this domain during {year}.\n\
         \n\
         Ensure all findings are timely and relevant as of {year}, with particular \
         emphasis on developments within the last 6 months.\n\
         \n\
         Respond with exactly one bullet-point list of the 10 most relevant \
         findings about {topic}.",
        topic = ctx.topic,
        year = ctx.current_year,
    )
}
