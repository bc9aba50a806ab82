// File: crates/graphic-core/src/redraw.rs
// Summary: Resize-driven redraw orchestration with last-writer-wins container updates.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scene::Scene;

/// A graphic that can lay itself out at any width. Must be pure: same width, same scene.
pub trait Graphic {
    fn draw(&self, width: f64) -> Result<Scene>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedrawPolicy {
    /// Redraw on every resize event.
    #[default]
    Immediate,
    /// Keep only the latest width and redraw once on `settle`.
    Coalesce,
}

/// Proof that a redraw was started; carries its generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedrawTicket {
    generation: u64,
}

/// The page element a graphic is drawn into. Only the most recently started redraw may write it.
#[derive(Debug, Default)]
pub struct Container {
    generation: u64,
    width: Option<f64>,
    scene: Option<Scene>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> RedrawTicket {
        self.generation += 1;
        RedrawTicket { generation: self.generation }
    }

    /// Replace the content wholesale. Returns `false` (and drops `scene`) when a newer redraw has started.
    pub fn commit(&mut self, ticket: RedrawTicket, width: f64, scene: Scene) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "dropping stale redraw (generation {} < {})",
                ticket.generation, self.generation
            );
            return false;
        }
        self.width = Some(width);
        self.scene = Some(scene);
        true
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Feeds load/resize events to a graphic and keeps its container current.
pub struct ResizeDriver<'g, G: Graphic + ?Sized> {
    graphic: &'g G,
    policy: RedrawPolicy,
    container: Container,
    pending: Option<f64>,
    redraws: usize,
}

impl<'g, G: Graphic + ?Sized> ResizeDriver<'g, G> {
    pub fn new(graphic: &'g G, policy: RedrawPolicy) -> Self {
        Self { graphic, policy, container: Container::new(), pending: None, redraws: 0 }
    }

    /// Initial draw; always immediate.
    pub fn load(&mut self, width: f64) -> Result<()> {
        self.pending = None;
        self.redraw(width)
    }

    /// Returns whether a redraw ran for this event.
    pub fn on_resize(&mut self, width: f64) -> Result<bool> {
        match self.policy {
            RedrawPolicy::Immediate => {
                self.redraw(width)?;
                Ok(true)
            }
            RedrawPolicy::Coalesce => {
                if let Some(prev) = self.pending.replace(width) {
                    debug!("coalesced resize {} -> {}", prev, width);
                }
                Ok(false)
            }
        }
    }

    /// Flush a coalesced resize, if any.
    pub fn settle(&mut self) -> Result<bool> {
        match self.pending.take() {
            Some(width) => {
                self.redraw(width)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// On error the previous content stays in place.
    fn redraw(&mut self, width: f64) -> Result<()> {
        let ticket = self.container.begin();
        let scene = self.graphic.draw(width)?;
        self.container.commit(ticket, width, scene);
        self.redraws += 1;
        Ok(())
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn redraws(&self) -> usize {
        self.redraws
    }
}
