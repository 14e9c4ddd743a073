//! Human-facing renderings of a trained tree.
//!
//! - [`text`]: indented tree for the terminal
//! - [`dot`]: Graphviz DOT for the whole tree and for one prediction path
//!
//! Output file names follow the conventions below; writing is left to the
//! caller.

pub mod dot;
pub mod text;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

pub use dot::{prediction_path_to_dot, tree_to_dot};
pub use text::render_tree;

/// Directory (relative to the output root) for whole-tree DOT files.
pub const TREE_DIR: &str = "decision_tree";
/// Directory (relative to the output root) for prediction-path DOT files.
pub const PREDICTION_DIR: &str = "prediction_paths";

/// `<out>/decision_tree/<dataset stem>_decisionTree.dot`
pub fn tree_dot_path(out_dir: &Path, dataset: &Path) -> PathBuf {
    let stem = dataset
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    out_dir.join(TREE_DIR).join(format!("{stem}_decisionTree.dot"))
}

/// `<out>/prediction_paths/prediction_<YYYYMMDD_HHMMSS>.dot`
pub fn prediction_dot_path(out_dir: &Path, at: NaiveDateTime) -> PathBuf {
    out_dir
        .join(PREDICTION_DIR)
        .join(format!("prediction_{}.dot", at.format("%Y%m%d_%H%M%S")))
}

/// Shell commands that turn `dot_path` into an image.
pub fn graphviz_hints(dot_path: &Path) -> Vec<String> {
    let png = dot_path.with_extension("png");
    let svg = dot_path.with_extension("svg");
    vec![
        format!("dot -Tpng -Gdpi=300 {} -o {}", dot_path.display(), png.display()),
        format!(
            "dot -Tpng -Gdpi=300 -Gscale=2 {} -o {}",
            dot_path.display(),
            png.display()
        ),
        format!("dot -Tsvg {} -o {}", dot_path.display(), svg.display()),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn tree_path_uses_dataset_stem() {
        let path = tree_dot_path(Path::new("out"), Path::new("data/weather.csv"));
        assert_eq!(path, Path::new("out/decision_tree/weather_decisionTree.dot"));
    }

    #[test]
    fn prediction_path_is_timestamped() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 1))
            .unwrap();
        let path = prediction_dot_path(Path::new("."), at);
        assert_eq!(path, Path::new("./prediction_paths/prediction_20240309_070501.dot"));
    }

    #[test]
    fn hints_point_at_image_files() {
        let hints = graphviz_hints(Path::new("t/tree.dot"));
        assert_eq!(hints[0], "dot -Tpng -Gdpi=300 t/tree.dot -o t/tree.png");
        assert!(hints[2].ends_with("t/tree.svg"));
    }
}
