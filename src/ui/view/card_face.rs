//! 卡片显示内容
//!
//! 实现控制器的 [`View`] 接口，记录下一帧要画出的内容

use crate::controller::View;

pub const EMPTY_TITLE: &str = "还没有卡片";
pub const EMPTY_HINT: &str = "新建一张卡片开始学习";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CardFace {
    #[default]
    Empty,
    Card {
        front: String,
        back: String,
        flipped: bool,
    },
}

impl CardFace {
    /// 当前朝上的一面
    pub fn visible_text(&self) -> (&str, &str) {
        match self {
            CardFace::Empty => (EMPTY_TITLE, EMPTY_HINT),
            CardFace::Card {
                front,
                flipped: false,
                ..
            } => ("正面", front.as_str()),
            CardFace::Card {
                back,
                flipped: true,
                ..
            } => ("背面", back.as_str()),
        }
    }

    pub fn is_flipped(&self) -> bool {
        matches!(self, CardFace::Card { flipped: true, .. })
    }
}

impl View for CardFace {
    fn render_empty(&mut self) {
        *self = CardFace::Empty;
    }

    fn render_card(&mut self, front: &str, back: &str, flipped: bool) {
        *self = CardFace::Card {
            front: front.to_string(),
            back: back.to_string(),
            flipped,
        };
    }
}
