//! 文件浏览器状态
//!
//! 管理当前目录、目录条目以及文件类型过滤

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct BrowserState {
    pub current_dir: PathBuf,
    pub entries: Vec<PathBuf>,
    pub selected_index: usize,
    /// 显示所有文件，而不仅是配置的扩展名
    pub show_all: bool,
}

impl BrowserState {
    pub fn new(current_dir: PathBuf) -> Self {
        Self {
            current_dir,
            entries: Vec::new(),
            selected_index: 0,
            show_all: false,
        }
    }

    /// Whether a file passes the extension filter. Directories are handled
    /// by the caller.
    pub fn accepts(&self, path: &Path, extensions: &[String]) -> bool {
        if self.show_all {
            return true;
        }
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if !self.entries.is_empty() && self.selected_index < self.entries.len() - 1 {
            self.selected_index += 1;
        }
    }

    pub fn selected(&self) -> Option<&PathBuf> {
        self.entries.get(self.selected_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec!["txt".to_string(), "csv".to_string()]
    }

    #[test]
    fn test_accepts_configured_extensions() {
        let state = BrowserState::new(PathBuf::from("."));
        assert!(state.accepts(Path::new("data.txt"), &exts()));
        assert!(state.accepts(Path::new("DATA.CSV"), &exts()));
        assert!(!state.accepts(Path::new("image.png"), &exts()));
        assert!(!state.accepts(Path::new("README"), &exts()));
    }

    #[test]
    fn test_show_all_accepts_everything() {
        let mut state = BrowserState::new(PathBuf::from("."));
        state.show_all = true;
        assert!(state.accepts(Path::new("image.png"), &exts()));
        assert!(state.accepts(Path::new("README"), &exts()));
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = BrowserState::new(PathBuf::from("."));
        state.move_down();
        assert_eq!(state.selected_index, 0);

        state.entries = vec![PathBuf::from("a"), PathBuf::from("b")];
        state.move_down();
        state.move_down();
        assert_eq!(state.selected_index, 1);
        state.move_up();
        state.move_up();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected(), Some(&PathBuf::from("a")));
    }
}
