//! Interaction scripts and their replay through the carousel controller.
//!
//! # Design
//! - A script is plain JSON so gesture bugs can be captured and replayed.
//! - Replay produces one frame per event, including no-op events, so the
//!   output lines up with the script.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use vitrine_carousel::{
    CarouselConfig, CarouselController, CarouselResult, CarouselView, ThumbPreview, TrackGeometry,
    Update, Viewport,
};

/// Track used when a script does not describe one.
pub const DEFAULT_TRACK: TrackGeometry = TrackGeometry::new(0.0, 100.0);

const fn default_track() -> TrackGeometry {
    DEFAULT_TRACK
}

/// Scripted carousel session.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Images loaded before the first event.
    #[serde(default)]
    pub images: Option<Vec<String>>,
    /// Initial configuration.
    #[serde(default)]
    pub config: CarouselConfig,
    /// Initial viewport.
    #[serde(default)]
    pub viewport: Option<Viewport>,
    /// Scrollbar track used for clicks and drags.
    #[serde(default = "default_track")]
    pub track: TrackGeometry,
    /// Events to replay in order.
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parse and validate a JSON script.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON does not match the script format or the
    /// embedded configuration is invalid.
    pub fn parse(raw: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(raw).context("invalid replay script")?;
        script
            .config
            .validate()
            .context("invalid script configuration")?;
        for (index, event) in script.events.iter().enumerate() {
            if let ScriptEvent::Configure { config } = event {
                config
                    .validate()
                    .with_context(|| format!("invalid configuration in event {index}"))?;
            }
        }
        Ok(script)
    }
}

/// One host interaction.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Next control clicked.
    Next,
    /// Previous control clicked.
    Previous,
    /// Track clicked at `x`.
    Click {
        /// Pointer position.
        x: f64,
    },
    /// Pointer pressed on the thumb.
    DragStart,
    /// Pointer moved to `x` while held.
    DragMove {
        /// Pointer position.
        x: f64,
    },
    /// Pointer released.
    DragEnd,
    /// Gesture interrupted.
    DragCancel,
    /// Viewport resized.
    Resize {
        /// Width in CSS pixels.
        width: u32,
        /// Height in CSS pixels.
        height: u32,
    },
    /// Image list replaced.
    Load {
        /// New images.
        images: Vec<String>,
    },
    /// Serialized image attribute changed.
    Attribute {
        /// Raw attribute value.
        raw: String,
    },
    /// Configuration replaced.
    Configure {
        /// New configuration.
        config: CarouselConfig,
    },
}

impl ScriptEvent {
    /// Short label used in output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Click { .. } => "click",
            Self::DragStart => "drag_start",
            Self::DragMove { .. } => "drag_move",
            Self::DragEnd => "drag_end",
            Self::DragCancel => "drag_cancel",
            Self::Resize { .. } => "resize",
            Self::Load { .. } => "load",
            Self::Attribute { .. } => "attribute",
            Self::Configure { .. } => "configure",
        }
    }
}

/// Result of one replayed step.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FrameOutcome {
    /// Nothing to redraw.
    Unchanged,
    /// Thumb-only update.
    Preview {
        /// Preview payload.
        preview: ThumbPreview,
    },
    /// Full render.
    Render {
        /// Rendered view.
        view: CarouselView,
    },
    /// Input rejected at the boundary; state kept.
    Rejected {
        /// Error description.
        error: String,
    },
}

impl From<Update> for FrameOutcome {
    fn from(update: Update) -> Self {
        match update {
            Update::Unchanged => Self::Unchanged,
            Update::Preview(preview) => Self::Preview { preview },
            Update::Render(view) => Self::Render { view },
        }
    }
}

impl From<CarouselResult<Update>> for FrameOutcome {
    fn from(result: CarouselResult<Update>) -> Self {
        match result {
            Ok(update) => update.into(),
            Err(err) => Self::Rejected {
                error: err.to_string(),
            },
        }
    }
}

/// One replayed step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    /// Zero-based step number; step 0 is the initial setup.
    pub step: usize,
    /// Event label.
    pub event: &'static str,
    /// Controller index after the step.
    pub index: usize,
    /// What the host would redraw.
    #[serde(flatten)]
    pub outcome: FrameOutcome,
}

/// Replay `script` and collect one frame per step.
#[must_use]
pub fn replay(script: &Script) -> Vec<Frame> {
    let mut controller =
        CarouselController::with_prefetcher(script.config.clone(), |src: &str| {
            info!(%src, "prefetch requested");
        });

    if let Some(viewport) = script.viewport {
        controller.set_viewport(viewport);
    }
    let initial = script
        .images
        .clone()
        .map_or(Update::Unchanged, |images| controller.load_images(images));

    let mut frames = Vec::with_capacity(script.events.len() + 1);
    frames.push(Frame {
        step: 0,
        event: "initial",
        index: controller.current_index(),
        outcome: initial.into(),
    });

    for (offset, event) in script.events.iter().enumerate() {
        let outcome = apply(&mut controller, event, script.track);
        frames.push(Frame {
            step: offset + 1,
            event: event.label(),
            index: controller.current_index(),
            outcome,
        });
    }
    frames
}

fn apply<P: vitrine_carousel::Prefetch>(
    controller: &mut CarouselController<P>,
    event: &ScriptEvent,
    track: TrackGeometry,
) -> FrameOutcome {
    let update: CarouselResult<Update> = match event {
        ScriptEvent::Next => Ok(controller.next()),
        ScriptEvent::Previous => Ok(controller.previous()),
        ScriptEvent::Click { x } => Ok(controller.click_track(*x, track)),
        ScriptEvent::DragStart => Ok(controller.begin_drag()),
        ScriptEvent::DragMove { x } => Ok(controller.drag_to(*x, track)),
        ScriptEvent::DragEnd => Ok(controller.end_drag()),
        ScriptEvent::DragCancel => Ok(controller.cancel_drag()),
        ScriptEvent::Resize { width, height } => Ok(controller.set_viewport(Viewport {
            width: *width,
            height: *height,
        })),
        ScriptEvent::Load { images } => Ok(controller.load_images(images.clone())),
        ScriptEvent::Attribute { raw } => controller.apply_images_attribute(raw),
        ScriptEvent::Configure { config } => controller.configure(config.clone()),
    };
    update.into()
}
