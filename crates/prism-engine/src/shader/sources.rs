use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Vertex shader entry point expected in the vertex source.
pub const VERTEX_ENTRY: &str = "vs_main";

/// Fragment shader entry point expected in the fragment source.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// WGSL sources for one vertex/fragment shader pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub label: String,
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Reads `<dir>/<name>.vert.wgsl` and `<dir>/<name>.frag.wgsl`.
    pub fn load(dir: impl AsRef<Path>, name: &str) -> Result<Self> {
        let (vert_path, frag_path) = Self::paths(dir.as_ref(), name);

        let vertex = read_source(&vert_path)?;
        let fragment = read_source(&frag_path)?;

        anyhow::ensure!(
            vertex.contains(VERTEX_ENTRY),
            "{} does not define `{VERTEX_ENTRY}`",
            vert_path.display()
        );
        anyhow::ensure!(
            fragment.contains(FRAGMENT_ENTRY),
            "{} does not define `{FRAGMENT_ENTRY}`",
            frag_path.display()
        );

        log::debug!(
            "loaded shader `{name}` from {} and {}",
            vert_path.display(),
            frag_path.display()
        );

        Ok(Self {
            label: name.to_string(),
            vertex,
            fragment,
        })
    }

    fn paths(dir: &Path, name: &str) -> (PathBuf, PathBuf) {
        (
            dir.join(format!("{name}.vert.wgsl")),
            dir.join(format!("{name}.frag.wgsl")),
        )
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read shader source {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("prism-shader-{tag}-{}", std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn loads_both_stages() {
        let tmp = TempDir::new("ok");
        std::fs::write(tmp.0.join("basic.vert.wgsl"), "@vertex fn vs_main() {}").unwrap();
        std::fs::write(tmp.0.join("basic.frag.wgsl"), "@fragment fn fs_main() {}").unwrap();

        let src = ShaderSources::load(&tmp.0, "basic").unwrap();
        assert_eq!(src.label, "basic");
        assert!(src.vertex.contains("vs_main"));
        assert!(src.fragment.contains("fs_main"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let tmp = TempDir::new("missing");
        std::fs::write(tmp.0.join("basic.vert.wgsl"), "@vertex fn vs_main() {}").unwrap();

        let err = ShaderSources::load(&tmp.0, "basic").unwrap_err();
        assert!(format!("{err:#}").contains("basic.frag.wgsl"));
    }

    #[test]
    fn missing_entry_point_is_rejected() {
        let tmp = TempDir::new("entry");
        std::fs::write(tmp.0.join("basic.vert.wgsl"), "@vertex fn main() {}").unwrap();
        std::fs::write(tmp.0.join("basic.frag.wgsl"), "@fragment fn fs_main() {}").unwrap();

        let err = ShaderSources::load(&tmp.0, "basic").unwrap_err();
        assert!(err.to_string().contains("vs_main"));
    }

    #[test]
    fn repository_shaders_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../shaders");
        let src = ShaderSources::load(dir, "basic-render").unwrap();
        assert!(src.vertex.contains("Transforms"));
    }
}
