//! 详情页图片状态
//!
//! - `Gallery`: 主图选择，缩略图最多展示 3 张
//! - `ImageSource`: 图片加载失败时只回退一次，不会循环重试

use crate::{DEFAULT_IMAGE, PLACEHOLDER_IMAGE};

/// 缩略图最多展示的数量
pub const MAX_THUMBNAILS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    images: Vec<String>,
    selected: usize,
}

impl Gallery {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// 当前主图；没有图片时为 None，交给 `ImageSource` 的回退处理
    pub fn main_image(&self) -> Option<&str> {
        self.images.get(self.selected).map(String::as_str)
    }

    /// 只有一张以上图片时才展示缩略图
    pub fn thumbnails(&self) -> Vec<&str> {
        if self.images.len() <= 1 {
            return Vec::new();
        }
        self.images
            .iter()
            .take(MAX_THUMBNAILS)
            .map(|s| {
                if s.trim().is_empty() {
                    PLACEHOLDER_IMAGE
                } else {
                    s.as_str()
                }
            })
            .collect()
    }

    /// 为 false 时页面显示 "No additional images available"
    pub fn has_thumbnails(&self) -> bool {
        self.images.len() > 1
    }

    /// 选择缩略图；超出展示范围的下标被忽略，返回是否生效
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.thumbnails().len() {
            self.selected = index;
            true
        } else {
            false
        }
    }
}

/// 一个 `<img>` 的 src 状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    src: String,
    fell_back: bool,
}

impl ImageSource {
    pub fn new(src: Option<&str>) -> Self {
        Self {
            src: src.unwrap_or_default().to_string(),
            fell_back: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// 处理 onerror：第一次切到本地图片，之后不再变化。返回 src 是否改变
    pub fn on_error(&mut self) -> bool {
        if self.fell_back {
            return false;
        }
        self.fell_back = true;
        self.src = DEFAULT_IMAGE.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://img/{}.png", i)).collect()
    }

    #[test]
    fn test_main_image_defaults_to_first() {
        let g = Gallery::new(images(2));
        assert_eq!(g.main_image(), Some("https://img/0.png"));
        assert_eq!(Gallery::new(vec![]).main_image(), None);
    }

    #[test]
    fn test_thumbnails_bounded_to_three() {
        let mut g = Gallery::new(images(5));
        assert_eq!(g.thumbnails().len(), 3);
        assert!(g.select(2));
        assert_eq!(g.main_image(), Some("https://img/2.png"));
        assert!(!g.select(3));
        assert_eq!(g.selected(), 2);
    }

    #[test]
    fn test_single_image_has_no_thumbnails() {
        let mut g = Gallery::new(images(1));
        assert!(g.thumbnails().is_empty());
        assert!(!g.has_thumbnails());
        assert!(!g.select(0));

        assert!(!Gallery::new(vec![]).has_thumbnails());
        assert!(Gallery::new(images(2)).has_thumbnails());
    }

    #[test]
    fn test_image_falls_back_once() {
        let mut src = ImageSource::new(Some("https://broken"));
        assert!(src.on_error());
        assert_eq!(src.src(), DEFAULT_IMAGE);
        assert!(!src.on_error());
        assert_eq!(src.src(), DEFAULT_IMAGE);
    }
}
