//! Test aports tree utilities

use std::path::Path;

/// Writes an APKBUILD at `root/<repo>/<name>/APKBUILD`.
pub fn write_apkbuild(root: &Path, repo: &str, name: &str, contents: &str) {
    let dir = root.join(repo).join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("APKBUILD"), contents).unwrap();
}

/// A minimal APKBUILD carrying the given maintainer.
pub fn apkbuild(maintainer: &str, name: &str, version: &str) -> String {
    format!(
        "# Maintainer: {maintainer}\npkgname={name}\npkgver={version}\npkgrel=0\npkgdesc=\"test package\"\n"
    )
}
