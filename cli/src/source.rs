//! Where a command takes its tree from: a bundled scene or a serialized IR file.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use qd3::scenes::Scene;
use qd3_core::Sel;

/// Bundled scenes selectable with `--scene`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneArg {
    /// A red-stroked square inside an `<svg>`.
    Rect,
    /// The static frame of a multi-line chart.
    MultiLine,
}

impl From<SceneArg> for Scene {
    fn from(arg: SceneArg) -> Self {
        match arg {
            SceneArg::Rect => Self::Rect,
            SceneArg::MultiLine => Self::MultiLine,
        }
    }
}

/// Tree source shared by every command.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Bundled scene to build.
    #[arg(short, long, value_enum, default_value = "rect", conflicts_with = "file")]
    scene: SceneArg,

    /// JSON file holding a serialized selection tree.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

/// A loaded tree, remembering which bundled scene produced it.
#[derive(Debug)]
pub struct Source {
    pub scene: Option<Scene>,
    pub tree: Sel,
}

impl SourceArgs {
    pub fn load(&self) -> Result<Source> {
        let Some(path) = &self.file else {
            let scene = Scene::from(self.scene);
            tracing::debug!(%scene, "building bundled scene");
            return Ok(Source {
                scene: Some(scene),
                tree: scene.build().freeze(),
            });
        };

        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let tree: Sel = serde_json::from_str(&content)
            .wrap_err_with(|| format!("{} is not a serialized selection tree", path.display()))?;
        tracing::debug!(path = %path.display(), nodes = tree.node_count(), "loaded tree");
        Ok(Source { scene: None, tree })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_args_map_to_bundled_scenes() {
        assert_eq!(Scene::from(SceneArg::Rect), Scene::Rect);
        assert_eq!(Scene::from(SceneArg::MultiLine), Scene::MultiLine);
        assert_eq!(
            SceneArg::MultiLine
                .to_possible_value()
                .expect("visible value")
                .get_name(),
            Scene::MultiLine.name()
        );
    }

    #[test]
    fn default_source_is_the_rect_scene() {
        let args = SourceArgs {
            scene: SceneArg::Rect,
            file: None,
        };
        let source = args.load().expect("bundled scene");
        assert_eq!(source.scene, Some(Scene::Rect));
        assert_eq!(source.tree, qd3::scenes::rect().freeze());
    }
}
