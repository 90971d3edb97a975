use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// 闪卡
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(id: impl Into<String>, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
        }
    }
}

/// 默认卡组（没有存档或存档损坏时使用）
pub fn seed_cards() -> Vec<Card> {
    vec![
        Card::new(
            "seed-1",
            "What is JavaScript?",
            "A language for the web. Also chaos with curly braces.",
        ),
        Card::new("seed-2", "localStorage?", "Browser key-value storage for strings."),
        Card::new(
            "seed-3",
            "What is DOM?",
            "Document Object Model: your HTML as objects you can manipulate.",
        ),
    ]
}

/// 卡组：插入顺序即学习顺序，id 不重复
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// 从存档构建卡组，重复的 id 会被重新分配
    ///
    /// 返回卡组以及被重新分配 id 的卡片数量
    pub fn from_cards(cards: Vec<Card>) -> (Self, usize) {
        let mut deck = Self::new();
        let mut repaired = 0;
        for mut card in cards {
            if deck.contains_id(&card.id) {
                card.id = deck.fresh_id();
                repaired += 1;
            }
            deck.cards.push(card);
        }
        (deck, repaired)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// 生成一个当前卡组中不存在的 id
    pub fn fresh_id(&self) -> String {
        let taken: HashSet<&str> = self.cards.iter().map(|c| c.id.as_str()).collect();
        loop {
            let id = Uuid::new_v4().to_string();
            if !taken.contains(id.as_str()) {
                return id;
            }
        }
    }

    /// 追加新卡片，返回其 id
    pub fn push(&mut self, front: String, back: String) -> String {
        let id = self.fresh_id();
        self.cards.push(Card::new(id.clone(), front, back));
        id
    }

    /// 删除指定位置的卡片
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }
}
