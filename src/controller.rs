//! 卡组控制器
//!
//! 持有卡组、当前位置和翻面状态，所有状态变更都经过这里。
//! 每次变更后通过 [`View`] 重新渲染，增删卡片后立即通过 [`Store`] 保存。

use tracing::{debug, info, warn};

use crate::models::{Card, Deck, seed_cards};
use crate::storage::Store;

/// 渲染接口
pub trait View {
    /// 空卡组占位
    fn render_empty(&mut self);

    /// 显示卡片，`flipped` 为真时显示背面
    fn render_card(&mut self, front: &str, back: &str, flipped: bool);
}

/// 当前位置与翻面状态（不持久化）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub current: usize,
    pub flipped: bool,
}

pub struct DeckController<S, V> {
    deck: Deck,
    cursor: Cursor,
    store: S,
    view: V,
}

impl<S: Store, V: View> DeckController<S, V> {
    pub fn new(store: S, view: V) -> Self {
        Self {
            deck: Deck::new(),
            cursor: Cursor::default(),
            store,
            view,
        }
    }

    /// 加载卡组并渲染第一张卡
    pub fn initialize(&mut self) {
        match self.store.load() {
            Some(cards) => {
                let (deck, repaired) = Deck::from_cards(cards);
                self.deck = deck;
                if repaired > 0 {
                    warn!(repaired, "reassigned duplicate card ids");
                    self.persist();
                }
                info!(cards = self.deck.len(), "deck loaded");
            }
            None => {
                self.deck = Deck::from_cards(seed_cards()).0;
                info!("no saved deck, using seed cards");
            }
        }
        self.cursor = Cursor::default();
        self.render();
    }

    pub fn next(&mut self) {
        let len = self.deck.len();
        if len == 0 {
            return;
        }
        self.cursor.current = (self.cursor.current + 1) % len;
        self.cursor.flipped = false;
        self.render();
    }

    pub fn previous(&mut self) {
        let len = self.deck.len();
        if len == 0 {
            return;
        }
        self.cursor.current = (self.cursor.current + len - 1) % len;
        self.cursor.flipped = false;
        self.render();
    }

    pub fn toggle_flip(&mut self) {
        if self.deck.is_empty() {
            return;
        }
        self.cursor.flipped = !self.cursor.flipped;
        self.render();
    }

    /// 新建卡片并切换到它；正反面去空白后任一为空则什么都不做
    ///
    /// 返回是否真的添加了卡片
    pub fn create(&mut self, front: &str, back: &str) -> bool {
        let front = front.trim();
        let back = back.trim();
        if front.is_empty() || back.is_empty() {
            debug!("ignored card with blank side");
            return false;
        }

        let id = self.deck.push(front.to_string(), back.to_string());
        debug!(%id, "card created");
        self.persist();
        self.cursor.current = self.deck.len() - 1;
        self.cursor.flipped = false;
        self.render();
        true
    }

    /// 删除当前卡片；删除最后一张时回到第一张
    pub fn delete_current(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            return None;
        }

        let removed = self.deck.remove(self.cursor.current)?;
        debug!(id = %removed.id, "card deleted");

        if self.deck.is_empty() {
            self.cursor = Cursor::default();
        } else {
            self.cursor.current %= self.deck.len();
            self.cursor.flipped = false;
        }
        self.persist();
        self.render();
        Some(removed)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[allow(dead_code)]
    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.cursor.current)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    // 保存失败只记录日志，不影响内存中的卡组
    fn persist(&mut self) {
        if let Err(e) = self.store.save(self.deck.cards()) {
            warn!(error = %e, "failed to persist deck");
        }
    }

    fn render(&mut self) {
        match self.deck.get(self.cursor.current) {
            Some(card) => self
                .view
                .render_card(&card.front, &card.back, self.cursor.flipped),
            None => self.view.render_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoreError;

    #[derive(Default)]
    struct MemoryStore {
        saved: Option<Vec<Card>>,
        raw_corrupt: bool,
        fail_saves: bool,
        saves: usize,
    }

    impl Store for MemoryStore {
        fn load(&self) -> Option<Vec<Card>> {
            if self.raw_corrupt {
                return None;
            }
            self.saved.clone()
        }

        fn save(&mut self, cards: &[Card]) -> Result<(), StoreError> {
            self.saves += 1;
            if self.fail_saves {
                let err = serde_json::from_str::<Vec<Card>>("x").unwrap_err();
                return Err(StoreError::Serialize(err));
            }
            self.saved = Some(cards.to_vec());
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Rendered {
        Empty,
        Card(String, String, bool),
    }

    #[derive(Default)]
    struct RecordingView {
        frames: Vec<Rendered>,
    }

    impl RecordingView {
        fn last(&self) -> Option<&Rendered> {
            self.frames.last()
        }
    }

    impl View for RecordingView {
        fn render_empty(&mut self) {
            self.frames.push(Rendered::Empty);
        }

        fn render_card(&mut self, front: &str, back: &str, flipped: bool) {
            self.frames
                .push(Rendered::Card(front.to_string(), back.to_string(), flipped));
        }
    }

    fn controller_with(cards: Vec<Card>) -> DeckController<MemoryStore, RecordingView> {
        let store = MemoryStore {
            saved: Some(cards),
            ..Default::default()
        };
        let mut controller = DeckController::new(store, RecordingView::default());
        controller.initialize();
        controller
    }

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(format!("id-{i}"), format!("front {i}"), format!("back {i}")))
            .collect()
    }

    #[test]
    fn test_initialize_without_saved_deck_uses_seed() {
        let mut controller = DeckController::new(MemoryStore::default(), RecordingView::default());
        controller.initialize();

        assert_eq!(controller.deck().cards(), seed_cards().as_slice());
        assert_eq!(controller.cursor(), Cursor::default());
        assert_eq!(
            controller.view().last(),
            Some(&Rendered::Card(
                "What is JavaScript?".to_string(),
                "A language for the web. Also chaos with curly braces.".to_string(),
                false
            ))
        );
        // 种子卡组在首次修改前不写入存储
        assert_eq!(controller.store().saves, 0);
    }

    #[test]
    fn test_initialize_with_corrupt_data_uses_seed() {
        let store = MemoryStore {
            saved: Some(cards(2)),
            raw_corrupt: true,
            ..Default::default()
        };
        let mut controller = DeckController::new(store, RecordingView::default());
        controller.initialize();
        assert_eq!(controller.deck().cards(), seed_cards().as_slice());
    }

    #[test]
    fn test_initialize_with_saved_empty_deck() {
        let controller = controller_with(Vec::new());
        assert!(controller.deck().is_empty());
        assert_eq!(controller.view().last(), Some(&Rendered::Empty));
    }

    #[test]
    fn test_initialize_repairs_duplicate_ids_and_persists() {
        let dup = vec![Card::new("1", "a", "1"), Card::new("1", "b", "2")];
        let controller = controller_with(dup);

        let saved = controller.store().saved.clone().unwrap();
        assert_eq!(controller.store().saves, 1);
        assert_eq!(saved.len(), 2);
        assert_ne!(saved[0].id, saved[1].id);
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        for n in 1..=5 {
            let mut controller = controller_with(cards(n));
            controller.next();
            let start = controller.cursor().current;
            for _ in 0..n {
                controller.next();
            }
            assert_eq!(controller.cursor().current, start);
        }
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut controller = controller_with(cards(3));
        controller.previous();
        assert_eq!(controller.cursor().current, 2);
        assert_eq!(
            controller.view().last(),
            Some(&Rendered::Card("front 2".to_string(), "back 2".to_string(), false))
        );
        controller.previous();
        assert_eq!(controller.cursor().current, 1);
    }

    #[test]
    fn test_toggle_flip_is_its_own_inverse() {
        let mut controller = controller_with(cards(2));
        controller.toggle_flip();
        assert!(controller.cursor().flipped);
        assert_eq!(
            controller.view().last(),
            Some(&Rendered::Card("front 0".to_string(), "back 0".to_string(), true))
        );
        controller.toggle_flip();
        assert!(!controller.cursor().flipped);
        assert_eq!(controller.store().saves, 0);
    }

    #[test]
    fn test_navigation_and_mutation_reset_flip() {
        let mut controller = controller_with(cards(3));

        controller.toggle_flip();
        controller.next();
        assert!(!controller.cursor().flipped);

        controller.toggle_flip();
        controller.previous();
        assert!(!controller.cursor().flipped);

        controller.toggle_flip();
        controller.create("Q", "A");
        assert!(!controller.cursor().flipped);

        controller.toggle_flip();
        controller.delete_current();
        assert!(!controller.cursor().flipped);
    }

    #[test]
    fn test_operations_on_empty_deck_are_noops() {
        let mut controller = controller_with(Vec::new());
        let frames = controller.view().frames.len();

        controller.next();
        controller.previous();
        controller.toggle_flip();
        assert!(controller.delete_current().is_none());

        assert_eq!(controller.cursor(), Cursor::default());
        assert_eq!(controller.view().frames.len(), frames);
        assert_eq!(controller.store().saves, 0);
    }

    #[test]
    fn test_create_rejects_blank_sides() {
        let mut controller = controller_with(cards(2));
        let before = controller.deck().clone();

        assert!(!controller.create("", "x"));
        assert!(!controller.create("x", ""));
        assert!(!controller.create("  ", "  "));
        assert!(!controller.create("\t\n", "x"));

        assert_eq!(controller.deck(), &before);
        assert_eq!(controller.store().saves, 0);
    }

    #[test]
    fn test_create_appends_and_selects_new_card() {
        let mut controller = controller_with(cards(3));
        controller.next();
        controller.toggle_flip();

        assert!(controller.create("  Q ", " A  "));

        assert_eq!(controller.deck().len(), 4);
        let card = controller.deck().get(3).unwrap();
        assert_eq!((card.front.as_str(), card.back.as_str()), ("Q", "A"));
        assert_eq!(controller.cursor(), Cursor { current: 3, flipped: false });
        assert_eq!(
            controller.store().saved.as_deref(),
            Some(controller.deck().cards())
        );
        assert_eq!(
            controller.view().last(),
            Some(&Rendered::Card("Q".to_string(), "A".to_string(), false))
        );
    }

    #[test]
    fn test_create_on_empty_deck() {
        let mut controller = controller_with(Vec::new());
        assert!(controller.create("Q", "A"));
        assert_eq!(controller.cursor().current, 0);
        assert_eq!(controller.deck().len(), 1);
    }

    #[test]
    fn test_create_ids_are_unique() {
        let mut controller = controller_with(Vec::new());
        for i in 0..50 {
            controller.create(&format!("Q{i}"), "A");
        }
        let mut ids: Vec<&str> = controller.deck().cards().iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_delete_only_card_renders_empty() {
        let mut controller = controller_with(cards(1));
        let removed = controller.delete_current().unwrap();

        assert_eq!(removed.id, "id-0");
        assert!(controller.deck().is_empty());
        assert_eq!(controller.cursor(), Cursor::default());
        assert_eq!(controller.view().last(), Some(&Rendered::Empty));
        assert_eq!(controller.store().saved, Some(Vec::new()));
    }

    #[test]
    fn test_delete_middle_moves_to_following_card() {
        let mut controller = controller_with(cards(3));
        controller.next();
        controller.delete_current();

        assert_eq!(controller.cursor().current, 1);
        assert_eq!(controller.current_card().unwrap().id, "id-2");
        assert_eq!(controller.store().saved.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_last_wraps_to_first() {
        let mut controller = controller_with(cards(4));
        controller.previous();
        assert_eq!(controller.cursor().current, 3);

        controller.delete_current();
        assert_eq!(controller.cursor().current, 0);
        assert_eq!(controller.current_card().unwrap().id, "id-0");
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let store = MemoryStore {
            saved: Some(cards(1)),
            fail_saves: true,
            ..Default::default()
        };
        let mut controller = DeckController::new(store, RecordingView::default());
        controller.initialize();

        assert!(controller.create("Q", "A"));
        assert_eq!(controller.deck().len(), 2);
        controller.delete_current();
        assert_eq!(controller.deck().len(), 1);
        assert_eq!(controller.store().saves, 2);
    }
}
