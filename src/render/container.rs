use maud::{html, Markup};

/// A page region holding rendered cards, in insertion order.
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    cards: Vec<Markup>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cards(&self) -> &[Markup] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn append(&mut self, card: Markup) {
        self.cards.push(card);
    }

    pub fn to_markup(&self) -> Markup {
        html! {
            div class="row" id=(self.id) {
                @for card in &self.cards {
                    (card)
                }
            }
        }
    }
}
