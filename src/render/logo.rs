//! Logo images embedded at the center of a code.

use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::Path;

/// A decoded logo image and the name it was loaded under.
#[derive(Debug, Clone)]
pub struct LogoAsset {
    name: String,
    image: DynamicImage,
}

impl LogoAsset {
    /// Wraps an already decoded image.
    pub fn new(name: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Decodes a logo from a raster image file.
    ///
    /// Any format the `image` crate can decode is accepted; dimensions are
    /// not checked.
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Failed to load logo: {}", path.display()))?;

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());

        tracing::debug!(
            "Loaded logo {} ({}x{})",
            name,
            image.width(),
            image.height()
        );
        Ok(Self::new(name, image))
    }

    /// File name shown to the user.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The decoded image.
    #[must_use]
    pub const fn image(&self) -> &DynamicImage {
        &self.image
    }
}
