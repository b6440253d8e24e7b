//! Report generation seam
//!
//! The generation collaborator turns a [`ReportRequest`] into a lazy,
//! consumer-driven stream of text chunks. Streams are not restartable.

use crate::error::ReportError;
use crate::request::ReportRequest;
use futures::stream::{self, BoxStream, StreamExt};

/// One increment of generated text
pub type ReportChunk = Result<String, ReportError>;

/// Boxed chunk stream returned by generators
pub type ReportStream = BoxStream<'static, ReportChunk>;

/// Produces report text for an assembled request
///
/// Implementations own their provider handle; nothing here is global.
pub trait ReportGenerator: Send + Sync {
    /// Start generating; chunks are produced as the stream is polled
    fn generate(&self, request: ReportRequest) -> ReportStream;
}

/// Offline generator that streams a plain-text brief of the request
///
/// Useful for dry runs: it echoes the parameters section by section
/// without contacting any provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct BriefingGenerator;

impl BriefingGenerator {
    fn sections(request: &ReportRequest) -> Vec<String> {
        let mut sections = vec![
            format!("Base Report Tier: {}\n", request.tier()),
            format!("Target Region/Country: {}\n", request.region()),
            format!("Industry for Analysis: {}\n", request.industry()),
        ];

        if request.has_partner_profile() {
            sections.push(format!(
                "Ideal Foreign Partner Profile:\n- Company Size: {}\n- Key Technologies/Capabilities: {}\n- Company's Target Markets: {}\n",
                request.company_size(),
                request.key_technologies().join(", "),
                request.target_markets().join(", "),
            ));
        }

        if !request.selected_options().is_empty() {
            let titles: Vec<&str> = request
                .selected_options()
                .iter()
                .map(|o| o.title())
                .collect();
            sections.push(format!("Add-on Modules: {}\n", titles.join(", ")));
        }

        sections.push(format!(
            "Commissioned by: {} ({}, {})\n",
            request.user_name(),
            request.user_department(),
            request.user_country()
        ));
        sections.push(format!("Objective: {}\n", request.custom_objective()));
        sections
    }
}

impl ReportGenerator for BriefingGenerator {
    fn generate(&self, request: ReportRequest) -> ReportStream {
        stream::iter(Self::sections(&request).into_iter().map(Ok)).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ReportOption, Tier};
    use crate::request::ReportDraft;
    use futures::TryStreamExt;

    fn request(key_technologies: Vec<String>) -> ReportRequest {
        ReportRequest::try_from(ReportDraft {
            user_name: "Jane Doe".into(),
            region: "Cebu, Philippines".into(),
            industry: "Renewable Energy".into(),
            tier: Some(Tier::PartnershipBlueprint),
            company_size: "Any".into(),
            key_technologies,
            target_markets: vec!["ASEAN".into()],
            selected_options: vec![ReportOption::Talent],
            ..ReportDraft::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn briefing_streams_tier_region_and_industry_first() {
        let chunks: Vec<String> = BriefingGenerator
            .generate(request(Vec::new()))
            .try_collect()
            .await
            .unwrap();

        assert_eq!(chunks[0], "Base Report Tier: Tier 1: Partnership Blueprint\n");
        assert_eq!(chunks[1], "Target Region/Country: Cebu, Philippines\n");
        assert_eq!(chunks[2], "Industry for Analysis: Renewable Energy\n");
        assert!(!chunks.iter().any(|c| c.contains("Partner Profile")));
    }

    #[tokio::test]
    async fn briefing_includes_partner_profile_when_technologies_present() {
        let text: String = BriefingGenerator
            .generate(request(vec!["Solar PV".into(), "Storage".into()]))
            .try_collect::<Vec<_>>()
            .await
            .unwrap()
            .concat();

        assert!(text.contains("Key Technologies/Capabilities: Solar PV, Storage"));
        assert!(text.contains("Company's Target Markets: ASEAN"));
        assert!(text.contains("Talent Pool Analysis"));
    }
}
