use anyhow::{anyhow, Context, Result};
use ignore::Walk;
use std::path::{Path, PathBuf};

/// Name of the ORCID badge image, relative to the assets directory
pub const ORCID_BADGE: &str = "orcid.png";

/// Display width of the ORCID badge
pub const ORCID_BADGE_WIDTH: u32 = 16;

/// Directory (relative to the output directory) that assets are copied into
pub const STATIC_DIR: &str = "static";

/// An image that has already been located on disk and assigned a URL in the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Where the image lives on disk
    pub path: PathBuf,
    /// URL the image is referenced by from the generated pages
    pub src: String,
    /// Display width
    pub width: u32,
}

impl ImageAsset {
    /// Find the asset whose path relative to `assets_dir` is exactly `relative_path`
    pub fn resolve<P: AsRef<Path>>(
        assets_dir: &Path,
        relative_path: P,
        width: u32,
    ) -> Result<ImageAsset> {
        let relative_path = relative_path.as_ref();

        if !assets_dir.is_dir() {
            return Err(anyhow!(
                "Assets path {} isn't a directory!",
                assets_dir.display()
            ));
        }

        for entry in Walk::new(assets_dir) {
            let entry = entry.with_context(|| "Failed to walk assets directory")?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(assets_dir).with_context(|| {
                format!(
                    "Failed to remove root {} from path {}",
                    assets_dir.display(),
                    path.display()
                )
            })?;
            if relative == relative_path {
                let src = Path::new(STATIC_DIR)
                    .join(relative)
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().to_string())
                    .collect::<Vec<String>>()
                    .join("/");
                log::debug!("resolved asset {} to {src}", path.display());

                return Ok(ImageAsset {
                    path: path.to_path_buf(),
                    src,
                    width,
                });
            }
        }

        Err(anyhow!(
            "Failed to find asset {} in {}",
            relative_path.display(),
            assets_dir.display()
        ))
    }

    /// Resolve the ORCID badge at its fixed name and width
    pub fn orcid_badge(assets_dir: &Path) -> Result<ImageAsset> {
        ImageAsset::resolve(assets_dir, ORCID_BADGE, ORCID_BADGE_WIDTH)
    }

    /// The same asset as referenced from a page written to `page_path` (relative to the output
    /// directory), stepping up one level per directory the page is nested in
    pub fn relative_to_page(&self, page_path: &Path) -> ImageAsset {
        let depth = page_path
            .parent()
            .map(|parent| parent.components().count())
            .unwrap_or_default();

        ImageAsset {
            src: format!("{}{}", "../".repeat(depth), self.src),
            ..self.clone()
        }
    }

    /// Where the asset has to be copied to for `src` to resolve from pages in `output_dir`
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        self.src
            .split('/')
            .fold(output_dir.to_path_buf(), |path, segment| path.join(segment))
    }
}
