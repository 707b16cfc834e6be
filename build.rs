// Build script that mirrors the static site (page, stylesheet, wasm pkg) into `dist/`.
use std::path::Path;
use std::{fs, io};

fn main() {
    println!("cargo:rerun-if-changed=static");

    if let Err(err) = refresh(Path::new("static"), Path::new("dist")) {
        println!("cargo:warning=could not copy static/ to dist/: {err}");
    }
}

fn refresh(static_dir: &Path, out_dir: &Path) -> io::Result<()> {
    if out_dir.exists() {
        fs::remove_dir_all(out_dir)?;
    }
    fs::create_dir_all(out_dir)?;
    if static_dir.exists() {
        copy_dir(static_dir, out_dir)?;
    }
    Ok(())
}

fn copy_dir(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if path.is_dir() {
            copy_dir(&path, &dst_path)?;
        } else {
            fs::copy(&path, &dst_path)?;
        }
    }
    Ok(())
}
