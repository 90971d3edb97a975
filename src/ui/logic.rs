//! 业务逻辑处理 (Update/Dispatch)
//!
//! 学习操作直接转交给卡组控制器，表单输入在这里处理

use super::actions::Action;
use super::state::{App, AppMode, InputField};
use crate::storage::Store;

impl<S: Store> App<S> {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::NextCard => {
                self.message = None;
                self.controller.next();
            }
            Action::PreviousCard => {
                self.message = None;
                self.controller.previous();
            }
            Action::Flip => {
                self.message = None;
                self.controller.toggle_flip();
            }
            Action::DeleteCard => {
                self.message = self
                    .controller
                    .delete_current()
                    .map(|_| "卡片已删除".to_string());
            }
            Action::StartNewCard => self.start_new_card(),

            Action::Cancel => self.cancel(),
            Action::Submit => self.submit(),

            Action::SwitchField => {
                if self.mode == AppMode::CreatingCard {
                    self.form.field = match self.form.field {
                        InputField::Front => InputField::Back,
                        InputField::Back => InputField::Front,
                    };
                }
            }
            Action::Input(c) => {
                if self.mode == AppMode::CreatingCard {
                    self.form.active_buffer().push(c);
                }
            }
            Action::DeleteChar => {
                if self.mode == AppMode::CreatingCard {
                    self.form.active_buffer().pop();
                }
            }
        }
        false
    }

    // ============ 新建卡片 ============

    /// 打开新建卡片表单
    pub fn start_new_card(&mut self) {
        self.mode = AppMode::CreatingCard;
        self.form.clear();
        self.message = None;
    }

    /// 正面输入完成后跳到背面，背面输入完成后提交
    pub fn submit(&mut self) {
        if self.mode != AppMode::CreatingCard {
            return;
        }
        match self.form.field {
            InputField::Front => self.form.field = InputField::Back,
            InputField::Back => self.confirm_new_card(),
        }
    }

    /// 提交表单；空白输入不会添加卡片，但表单照样关闭
    pub fn confirm_new_card(&mut self) {
        let added = self.controller.create(&self.form.front, &self.form.back);
        self.form.clear();
        self.mode = AppMode::Studying;
        self.message = added.then(|| "卡片已添加".to_string());
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Studying;
        self.form.clear();
        self.message = None;
    }
}
