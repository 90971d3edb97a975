//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod card_face;
pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::actions::Action;
use super::state::{App, AppMode, InputField};
use crate::storage::Store;
pub use card_face::CardFace;
use components::{render_button, render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 底部按钮：标签和对应的操作
const BUTTONS: [(&str, Action); 5] = [
    ("◀ 上一张", Action::PreviousCard),
    ("翻面", Action::Flip),
    ("下一张 ▶", Action::NextCard),
    ("+ 新建", Action::StartNewCard),
    ("删除", Action::DeleteCard),
];

/// 渲染 UI
pub fn render<S: Store>(frame: &mut Frame, app: &mut App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(7),    // 卡片
            Constraint::Length(3), // 按钮
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_card(frame, app, chunks[1]);
    let buttons = render_buttons(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    // 记录可点击区域，供鼠标事件使用
    app.hit_areas = std::iter::once((chunks[1], Action::Flip))
        .chain(buttons)
        .collect();

    if app.mode == AppMode::CreatingCard {
        render_new_card_dialog(frame, app);
    }
}

fn render_title<S: Store>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "🗂 闪卡",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(app.position_label(), Style::default().fg(Color::Gray)),
    ]);
    let widget = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_card<S: Store>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let face = app.controller.view();
    let (label, text) = face.visible_text();

    let (border_color, text_style) = match face {
        CardFace::Empty => (Color::DarkGray, Style::default().fg(Color::Gray)),
        _ if face.is_flipped() => (
            Color::Green,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        _ => (
            Color::Yellow,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    };

    // 垂直居中
    let inner_height = area.height.saturating_sub(2);
    let padding = inner_height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::raw("")).collect();
    lines.push(Line::styled(text.to_string(), text_style));

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(label.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(card, area);
}

fn render_buttons<S: Store>(
    frame: &mut Frame,
    app: &App<S>,
    area: Rect,
) -> Vec<(Rect, Action)> {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, BUTTONS.len() as u32); BUTTONS.len()])
        .split(area);

    let has_cards = !app.controller.deck().is_empty();
    BUTTONS
        .iter()
        .zip(cells.iter())
        .map(|((label, action), cell)| {
            let enabled = has_cards || *action == Action::StartNewCard;
            render_button(frame, *cell, label, enabled);
            (*cell, *action)
        })
        .collect()
}

fn render_help<S: Store>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let help_text = match app.mode {
        AppMode::Studying => format!(
            "[Space] 翻面  [←/→] 切换  [{}] 新建  [Del] 删除  [q] 退出",
            app.new_card_key
        ),
        AppMode::CreatingCard => match app.form.field {
            InputField::Front => "输入正面后按 [Enter] 继续  [Tab] 切换  [Esc] 取消".to_string(),
            InputField::Back => "输入背面后按 [Enter] 完成  [Tab] 切换  [Esc] 取消".to_string(),
        },
    };

    let text = match app.message.as_deref() {
        Some(message) => format!("{}  |  {}", help_text, message),
        None => help_text,
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_new_card_dialog<S: Store>(frame: &mut Frame, app: &App<S>) {
    let area = centered_rect(60, 50, frame.area());
    let inner = render_dialog_framework(frame, area, "新建卡片");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(1),
        ])
        .split(inner);

    render_input_widget(
        frame,
        chunks[0],
        "正面",
        &app.form.front,
        app.form.field == InputField::Front,
        Color::Yellow,
    );
    render_input_widget(
        frame,
        chunks[1],
        "背面",
        &app.form.back,
        app.form.field == InputField::Back,
        Color::Yellow,
    );

    let hint = match app.form.field {
        InputField::Front => "输入问题后按 Enter 继续",
        InputField::Back => "输入答案后按 Enter 保存",
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::Gray)),
        chunks[2],
    );
}
