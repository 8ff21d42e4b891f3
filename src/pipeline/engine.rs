//! Pipeline runner composing the research and writing stages.

use crate::agents::{researcher, writer};
use crate::document::GeneratedDocument;
use crate::llm::LLMClient;
use crate::pipeline::findings::ResearchFindings;
use crate::types::{GenerationContext, Result};
use uuid::Uuid;

/// Research stage: one templated completion producing the findings list.
pub struct ResearchStage;

impl ResearchStage {
    pub async fn run(llm: &dyn LLMClient, ctx: &GenerationContext) -> Result<ResearchFindings> {
        let profile = researcher::profile(&ctx.topic);
        let output = llm
            .generate_with_system(&profile.system_prompt(), &researcher::task_prompt(ctx))
            .await?;

        Ok(ResearchFindings::new(output))
    }
}

/// Writing stage: formats the findings into the finalized document.
pub struct WritingStage;

impl WritingStage {
    pub async fn run(
        llm: &dyn LLMClient,
        ctx: &GenerationContext,
        findings: &ResearchFindings,
    ) -> Result<GeneratedDocument> {
        let profile = writer::profile();
        let raw = llm
            .generate_with_system(&profile.system_prompt(), &writer::task_prompt(ctx, findings))
            .await?;

        GeneratedDocument::finalize(&raw, &ctx.current_date_iso)
    }
}

/// Ordered composition of the two stages for a single run.
pub struct Pipeline {
    llm: Box<dyn LLMClient>,
}

impl Pipeline {
    pub fn new(llm: Box<dyn LLMClient>) -> Self {
        Self { llm }
    }

    /// Run research, then writing, and return the finalized document.
    ///
    /// The writing stage strictly depends on the research output; there is
    /// no way to retrieve step-1-only output when the second stage fails.
    pub async fn run(&self, ctx: &GenerationContext) -> Result<GeneratedDocument> {
        let run_id = Uuid::new_v4();
        tracing::info!(
            %run_id,
            topic = %ctx.topic,
            model = self.llm.model_name(),
            "starting generation pipeline"
        );

        let findings = ResearchStage::run(self.llm.as_ref(), ctx).await?;
        tracing::info!(
            %run_id,
            findings = findings.bullets().len(),
            "research stage complete"
        );

        let document = WritingStage::run(self.llm.as_ref(), ctx, &findings).await?;
        tracing::info!(%run_id, bytes = document.as_str().len(), "writing stage complete");

        Ok(document)
    }
}
