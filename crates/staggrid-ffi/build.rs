use std::env;
use std::path::PathBuf;

/// Regenerate `include/staggrid.h` from the exported functions and enums.
///
/// Header generation failures are reported as build warnings so that the
/// library itself still builds where cbindgen cannot parse the crate.
fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let crate_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());
    let header = crate_dir.join("include").join("staggrid.h");

    let generated = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))
        .map_err(|e| e.to_string())
        .and_then(|config| {
            cbindgen::Builder::new()
                .with_crate(&crate_dir)
                .with_config(config)
                .generate()
                .map_err(|e| e.to_string())
        });

    match generated {
        Ok(bindings) => {
            if let Some(dir) = header.parent() {
                if let Err(e) = std::fs::create_dir_all(dir) {
                    println!("cargo:warning=cannot create {}: {e}", dir.display());
                    return;
                }
            }
            bindings.write_to_file(&header);
        }
        Err(e) => println!("cargo:warning=staggrid.h not generated: {e}"),
    }
}
