use std::{env, fs, io::Write, path::Path};

use image::{
    ExtendedColorType,
    codecs::ico::{IcoEncoder, IcoFrame},
    imageops::FilterType,
};

// Same set the app writes for dropped images.
const EXE_ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

fn main() -> std::io::Result<()> {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let input_png = "assets/app.png";

    let img = image::open(input_png).expect("Failed to open icon PNG");

    // Window icon: raw RGBA prefixed with LE width/height, read back via include_bytes!
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    let mut file = fs::File::create(Path::new(&out_dir).join("app_icon.rgba"))?;
    file.write_all(&w.to_le_bytes())?;
    file.write_all(&h.to_le_bytes())?;
    file.write_all(rgba.as_raw())?;

    // Executable icon, generated from the same PNG
    let frames: Vec<_> = EXE_ICON_SIZES
        .iter()
        .map(|&size| {
            let entry = img.resize_exact(size, size, FilterType::Lanczos3).into_rgba8();
            IcoFrame::as_png(entry.as_raw(), size, size, ExtendedColorType::Rgba8)
                .expect("Failed to encode icon frame")
        })
        .collect();
    let ico_path = Path::new(&out_dir).join("app.ico");
    IcoEncoder::new(fs::File::create(&ico_path)?)
        .encode_images(&frames)
        .expect("Failed to write app.ico");

    #[cfg(windows)]
    {
        winresource::WindowsResource::new()
            .set_icon(&ico_path.to_string_lossy())
            .compile()?;
    }

    println!("cargo:rerun-if-changed={}", input_png);

    Ok(())
}
