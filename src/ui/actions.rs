//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    // 学习
    NextCard,
    PreviousCard,
    Flip,
    DeleteCard,
    StartNewCard,

    // 表单
    Cancel,      // Esc
    Submit,      // Enter
    SwitchField, // Tab / Shift-Tab
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
