// Progress bar for reading the input file, drawn on stderr via indicatif.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy)]
pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    // If enabled=false, no bars are created.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    // Create a bar sized to the file, labelled with its file name.
    pub fn new_file_bar(&self, path: &Path) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let bar = ProgressBar::with_draw_target(Some(size), ProgressDrawTarget::stderr());
        bar.set_style(progress_style());
        bar.set_prefix(basename(path));
        Some(bar)
    }
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:20} {bytes:>10}/{total_bytes:<10} [{bar:40}] {percent:>3}%")
        .map(|s| s.progress_chars("█ "))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

fn basename(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_manager_makes_no_bar() {
        assert!(ProgressManager::new(false).new_file_bar(Path::new("x.csv")).is_none());
    }

    #[test]
    fn bar_is_labelled_with_file_name() {
        let bar = ProgressManager::new(true)
            .new_file_bar(Path::new("some/dir/segments.csv"))
            .expect("bar");
        assert_eq!(bar.prefix(), "segments.csv");
        assert_eq!(bar.length(), Some(0));
    }
}
