//! Output renderers for replay frames and thumb geometry.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::anyhow;
use serde::Serialize;
use vitrine_carousel::{CarouselLayout, CarouselView, Slot, ThumbGeometry};

use crate::cli::{CliError, CliResult, OutputFormat};
use crate::script::{Frame, FrameOutcome};

pub(crate) fn render_frames(
    out: &mut dyn Write,
    frames: &[Frame],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, frames),
        OutputFormat::Table => {
            write_line(out, &format!("{:>4} {:<12} {:>5} OUTCOME", "STEP", "EVENT", "INDEX"))?;
            for frame in frames {
                write_line(
                    out,
                    &format!(
                        "{:>4} {:<12} {:>5} {}",
                        frame.step,
                        frame.event,
                        frame.index,
                        describe_outcome(&frame.outcome)
                    ),
                )?;
            }
            Ok(())
        }
    }
}

pub(crate) fn render_thumb(
    out: &mut dyn Write,
    thumb: &ThumbGeometry,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, thumb),
        OutputFormat::Table => write_line(out, &format_thumb(thumb)),
    }
}

fn describe_outcome(outcome: &FrameOutcome) -> String {
    match outcome {
        FrameOutcome::Unchanged => "unchanged".to_string(),
        FrameOutcome::Preview { preview } => format!(
            "preview thumb={}{}",
            format_thumb(&preview.thumb),
            if preview.animated { "" } else { " (no transition)" }
        ),
        FrameOutcome::Render { view } => describe_view(view),
        FrameOutcome::Rejected { error } => format!("rejected: {error}"),
    }
}

fn describe_view(view: &CarouselView) -> String {
    let mut text = String::from("render [");
    for (position, slot) in view.slots.iter().enumerate() {
        if position > 0 {
            text.push_str(" | ");
        }
        text.push_str(&describe_slot(slot));
    }
    let layout = match view.layout {
        CarouselLayout::Wide => "wide",
        CarouselLayout::Compact => "compact",
    };
    let _ = write!(
        text,
        "] prev={} next={} layout={layout} thumb={}",
        if view.previous.disabled { "off" } else { "on" },
        if view.next.disabled { "off" } else { "on" },
        format_thumb(&view.scrollbar.thumb)
    );
    text
}

fn describe_slot(slot: &Slot) -> String {
    let src = slot
        .image
        .as_ref()
        .map_or("-", |image| image.src.as_str());
    if slot.visible {
        src.to_string()
    } else {
        format!("({src})")
    }
}

fn format_thumb(thumb: &ThumbGeometry) -> String {
    format!(
        "{:.2}%@{:.2}%",
        thumb.width_percent, thumb.left_percent
    )
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    write_line(out, &text)
}

fn write_line(out: &mut dyn Write, line: &str) -> CliResult<()> {
    writeln!(out, "{line}").map_err(|err| CliError::failure(anyhow!("failed to write output: {err}")))
}
