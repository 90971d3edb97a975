//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体，持有卡组控制器和表单状态
//! - View (view/): 将状态映射为终端画面，并实现控制器的渲染接口
//! - Intent (actions.rs): 按键和鼠标点击转化为语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_event;
pub use state::App;
pub use view::render;
