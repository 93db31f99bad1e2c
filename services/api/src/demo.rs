use crate::infra::{demo_rounds, InMemoryInsightRepository, InMemoryRoundSource, DEMO_GOLFER};
use clap::Args;
use round_insights::config::AppConfig;
use round_insights::error::AppError;
use round_insights::insights::{
    InsightConfig, InsightEngine, InsightOutcome, InsightRequest, InsightServiceError,
    InsightView, RoundInsightService, UserId, VariantSelection, ViewerTier,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct PreviewArgs {
    /// JSON file containing an insight request (facts, strokes_gained, context, seed)
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Override the variant offset carried in the request seed
    #[arg(long)]
    pub(crate) offset: Option<u32>,
    /// Pin every message to one phrasing index instead of rotating
    #[arg(long)]
    pub(crate) variant: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Show only what a free-tier viewer receives
    #[arg(long)]
    pub(crate) free: bool,
    /// Regenerate the most recent round to show phrasing rotation
    #[arg(long)]
    pub(crate) regenerate: bool,
}

pub(crate) fn run_preview(args: PreviewArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = std::fs::read_to_string(&args.file)?;
    let outcome = preview_request(&raw, args.offset, args.variant, config.insights)?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

pub(crate) fn preview_request(
    raw: &str,
    offset: Option<u32>,
    variant: Option<usize>,
    config: InsightConfig,
) -> Result<InsightOutcome, AppError> {
    let mut request: InsightRequest = serde_json::from_str(raw)?;
    if let Some(offset) = offset {
        request.seed.variant_offset = offset;
    }
    if let Some(index) = variant {
        request.selection = VariantSelection::Fixed { index };
    }
    Ok(InsightEngine::new(config).generate(&request))
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { free, regenerate } = args;
    let config = AppConfig::load()?;
    let tier = if free {
        ViewerTier::Free
    } else {
        ViewerTier::Premium
    };

    println!("Round insights demo ({tier:?} viewer)");
    let (views, regenerated) = demo_views(config.insights, tier, regenerate)?;
    for view in &views {
        render_view(view);
    }
    if let Some(view) = regenerated {
        println!("\nRegenerated phrasing for {}", view.round_id.0);
        render_view(&view);
    }

    Ok(())
}

/// Views for every seeded round in order, plus the regenerated latest round when asked.
pub(crate) fn demo_views(
    config: InsightConfig,
    tier: ViewerTier,
    regenerate: bool,
) -> Result<(Vec<InsightView>, Option<InsightView>), AppError> {
    let rounds = Arc::new(InMemoryRoundSource::with_rounds(demo_rounds()));
    let service = RoundInsightService::new(
        Arc::new(InMemoryInsightRepository::default()),
        Arc::clone(&rounds),
        config,
    );
    let golfer = UserId(DEMO_GOLFER.to_string());

    let round_ids = rounds
        .round_ids(&golfer)
        .map_err(InsightServiceError::from)?;
    let views = round_ids
        .iter()
        .map(|round_id| service.insights(&golfer, round_id, tier))
        .collect::<Result<Vec<_>, _>>()?;

    let regenerated = match round_ids.last() {
        Some(latest) if regenerate => Some(service.regenerate(&golfer, latest, tier)?),
        _ => None,
    };

    Ok((views, regenerated))
}

fn render_view(view: &InsightView) {
    let phase = if view.onboarding {
        "onboarding"
    } else {
        "established"
    };
    println!(
        "\n{} [{}] showing {} of {} messages (variant offset {})",
        view.round_id.0, phase, view.visible_count, view.total_count, view.variant_offset
    );
    for message in &view.messages {
        println!(
            "  - {} {:<8} {}",
            message.outcome,
            message.level.label(),
            message.text
        );
    }
}
