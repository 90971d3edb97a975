//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use ratatui::layout::Rect;

use super::actions::Action;
use super::view::CardFace;
use crate::controller::DeckController;
use crate::storage::Store;

/// 应用状态
pub struct App<S> {
    pub controller: DeckController<S, CardFace>,
    pub mode: AppMode,
    pub form: CardForm,
    pub message: Option<String>,
    pub new_card_key: char,
    /// 上一帧中可点击的区域
    pub hit_areas: Vec<(Rect, Action)>,
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Studying,
    CreatingCard,
}

/// 输入字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Front,
    Back,
}

/// 新建卡片表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    pub front: String,
    pub back: String,
    pub field: InputField,
}

impl Default for CardForm {
    fn default() -> Self {
        Self {
            front: String::new(),
            back: String::new(),
            field: InputField::Front,
        }
    }
}

impl CardForm {
    pub fn active_buffer(&mut self) -> &mut String {
        match self.field {
            InputField::Front => &mut self.front,
            InputField::Back => &mut self.back,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl<S: Store> App<S> {
    /// 创建新的应用实例并加载卡组
    pub fn new(store: S, new_card_key: char) -> Self {
        let mut controller = DeckController::new(store, CardFace::default());
        controller.initialize();
        Self {
            controller,
            mode: AppMode::Studying,
            form: CardForm::default(),
            message: None,
            new_card_key,
            hit_areas: Vec::new(),
        }
    }

    /// 当前位置，如 "2 / 5"
    pub fn position_label(&self) -> String {
        let deck = self.controller.deck();
        if deck.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.controller.cursor().current + 1, deck.len())
        }
    }
}
