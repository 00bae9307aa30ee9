//! A team-building session tying roster, customization and canvas together
//!
//! Every mutation that changes what the card looks like triggers one render
//! of the current state. Renders take `&mut self`, so they never overlap.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::composition::{render_team, Canvas, RenderReport};
use crate::image_cache::ImageCache;
use crate::models::{Customization, CustomizationChange, CustomizationError, TeamEntry};
use crate::output::{export_filename, CanvasExporter, OutputError};
use crate::repository::{PokemonRepository, RepositoryError};
use crate::roster::{Roster, RosterError};

/// Error from a session operation. State is unchanged when one is returned.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Customization(#[from] CustomizationError),
    #[error("export failed: {0}")]
    Output(#[from] OutputError),
}

pub struct TeamSession {
    repository: Arc<dyn PokemonRepository>,
    roster: Roster,
    customization: Customization,
    canvas: Canvas,
    last_report: RenderReport,
}

impl TeamSession {
    pub fn new(
        repository: Arc<dyn PokemonRepository>,
        cache: ImageCache,
        customization: Customization,
        canvas: Canvas,
    ) -> Self {
        Self {
            repository,
            roster: Roster::new(cache),
            customization,
            canvas,
            last_report: RenderReport::default(),
        }
    }

    /// Look `key` up and append it to the team, then re-render.
    ///
    /// A full team or an entry already present by name or id is rejected
    /// before the repository is contacted.
    pub async fn add_member(&mut self, key: &str) -> Result<TeamEntry, SessionError> {
        if self.roster.is_full() {
            return Err(RosterError::Full.into());
        }
        if self.roster.contains(key.trim()) {
            return Err(RosterError::Duplicate(key.trim().to_string()).into());
        }

        let entry = self.repository.fetch_by_name_or_id(key).await?;
        // The lookup may resolve an id to a name already on the team
        self.roster.add(entry.clone())?;
        self.render().await;
        Ok(entry)
    }

    /// Remove the entry at `index`, then re-render.
    pub async fn remove_member(&mut self, index: usize) -> Result<TeamEntry, SessionError> {
        let removed = self.roster.remove_at(index)?;
        self.render().await;
        Ok(removed)
    }

    /// Apply one customization change and re-render if it affects the output.
    ///
    /// Returns whether a render happened.
    pub async fn customize(&mut self, change: CustomizationChange) -> Result<bool, SessionError> {
        let redraw = self.customization.apply(change)?;
        if redraw {
            self.render().await;
        }
        Ok(redraw)
    }

    /// Render the current state onto the canvas.
    pub async fn render(&mut self) -> &RenderReport {
        self.last_report = render_team(&mut self.canvas, &self.roster, &self.customization).await;
        for warning in &self.last_report.warnings {
            tracing::debug!("render warning: {}", warning);
        }
        &self.last_report
    }

    /// Export the canvas as it was last rendered.
    pub fn export(&self, exporter: &dyn CanvasExporter) -> Result<PathBuf, SessionError> {
        let filename = export_filename(self.customization.label());
        Ok(exporter.export_png(&self.canvas, &filename)?)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn customization(&self) -> &Customization {
        &self.customization
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn last_report(&self) -> &RenderReport {
        &self.last_report
    }
}

impl std::fmt::Debug for TeamSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamSession")
            .field("roster", &self.roster)
            .field("customization", &self.customization)
            .field("canvas", &(self.canvas.width(), self.canvas.height()))
            .finish()
    }
}
