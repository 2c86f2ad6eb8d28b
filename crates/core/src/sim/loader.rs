//! Program image loading and machine bring-up.
//!
//! A program is a directory holding a raw instruction image and, optionally,
//! a raw data image. Both are flat little-endian byte dumps with no header.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::core::Cpu;
use crate::mem::Memory;

/// File name of the instruction image inside a program directory.
pub const INSTRUCTION_IMAGE: &str = "instruction_mem.bin";

/// File name of the optional data image inside a program directory.
pub const DATA_IMAGE: &str = "data_mem.bin";

/// Reads the image pair from a program directory.
///
/// The instruction image is required; the data image is optional and
/// `None` when absent.
///
/// # Errors
///
/// Returns an error if the instruction image cannot be read, or if the data
/// image exists but cannot be read.
pub fn load_images(image_dir: &Path) -> io::Result<(Vec<u8>, Option<Vec<u8>>)> {
    let text = fs::read(image_dir.join(INSTRUCTION_IMAGE))?;
    let data = read_optional(&image_dir.join(DATA_IMAGE))?;
    Ok((text, data))
}

/// Builds a [`Cpu`] with the images under `image_dir` loaded into memory.
///
/// The instruction image lands at `config.start_pc` and the data image, if
/// present, at `config.data_base`. A missing data image is not an error.
///
/// # Errors
///
/// Returns an error if the instruction image cannot be read, or if an image
/// does not fit inside `config.mem_limit`.
pub fn boot(config: &Config, image_dir: &Path) -> io::Result<Cpu> {
    let (text, data) = load_images(image_dir)?;

    let mut mem = match config.mem_limit {
        Some(limit) => Memory::bounded(limit),
        None => Memory::new(),
    };

    mem.load_image(config.start_pc, &text)
        .map_err(|fault| io::Error::new(io::ErrorKind::InvalidData, fault))?;
    info!(
        base = config.start_pc,
        bytes = text.len(),
        "loaded instruction image"
    );

    if let Some(data) = data {
        mem.load_image(config.data_base, &data)
            .map_err(|fault| io::Error::new(io::ErrorKind::InvalidData, fault))?;
        info!(
            base = config.data_base,
            bytes = data.len(),
            "loaded data image"
        );
    }

    Ok(Cpu::new(mem, config.start_pc))
}

fn read_optional(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
