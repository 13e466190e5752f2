use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use exif::{In, Reader, Tag, Value};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Scan a directory for image files, sorted by file name. `shuffle`
/// randomizes the order once; it stays fixed for the carousel's lifetime.
pub fn collect_image_paths(dir: &Path, shuffle: bool) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            if IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                paths.push(path);
            }
        }
    }

    if paths.is_empty() {
        bail!("no image files found in {}", dir.display());
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if shuffle {
        paths.shuffle(&mut rand::rng());
    }
    Ok(paths)
}

fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Value::Short(values) = &field.value {
                    if let Some(&value) = values.first() {
                        return value;
                    }
                }
            }
            1
        }
        Err(e) => {
            // Non-critical: draw the image unrotated.
            warn!("could not read EXIF data for {}: {}", path.display(), e);
            1
        }
    }
}

/// Load an image file into a texture, baking the JPEG EXIF orientation into
/// the pixel data. Orientations involving mirroring are ignored.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only reliably present in JPEG containers.
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(path, &bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| anyhow!("failed to decode {}: {}", path.display(), e))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
            debug!("applied 180 deg rotation to {}", path.display());
        }
        6 => {
            image.rotate_cw();
            debug!("applied 90 deg CW rotation to {}", path.display());
        }
        8 => {
            image.rotate_ccw();
            debug!("applied 90 deg CCW rotation to {}", path.display());
        }
        _ => {}
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", path.display(), e))
}
