use crate::config::FILTER_STAGGER_MS;

const TRANSITION: &str = "transition: opacity 0.3s ease, transform 0.3s ease;";

const ALL: &str = "all";

/// Selected filter. `All` is the wildcard control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Tag(String),
}

impl Category {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Category::All
        } else {
            Category::Tag(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::All => ALL,
            Category::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, card_tag: &str) -> bool {
        match self {
            Category::All => true,
            Category::Tag(tag) => tag == card_tag,
        }
    }
}

/// Where a card is in its show/hide transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPhase {
    Shown,
    /// Back in layout at its start pose; becomes `Shown` on the next step so
    /// the fade-in has a starting point.
    Entering,
    /// Faded out but still occupying layout until the filter settles.
    Leaving,
    Hidden,
}

impl CardPhase {
    #[cfg(test)]
    pub fn is_visible(self) -> bool {
        matches!(self, CardPhase::Shown | CardPhase::Entering)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    active: Category,
    tags: Vec<String>,
    phases: Vec<CardPhase>,
    generation: u64,
}

impl FilterState {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        let phases = vec![CardPhase::Shown; tags.len()];
        Self {
            active: Category::All,
            tags,
            phases,
            generation: 0,
        }
    }

    pub fn active(&self) -> &Category {
        &self.active
    }

    pub fn phase(&self, index: usize) -> CardPhase {
        self.phases.get(index).copied().unwrap_or(CardPhase::Hidden)
    }

    /// Bumped on every selection so observers can tell selections apart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_leaving(&self) -> bool {
        self.phases.contains(&CardPhase::Leaving)
    }

    pub fn has_entering(&self) -> bool {
        self.phases.contains(&CardPhase::Entering)
    }

    #[cfg(test)]
    pub fn visible_count(&self) -> usize {
        self.phases.iter().filter(|phase| phase.is_visible()).count()
    }

    pub fn select(&mut self, category: Category) {
        for (tag, phase) in self.tags.iter().zip(self.phases.iter_mut()) {
            *phase = match (category.matches(tag), *phase) {
                (true, CardPhase::Shown) => CardPhase::Shown,
                // Still laid out at opacity 0, so it can fade straight back.
                (true, CardPhase::Leaving) => CardPhase::Shown,
                (true, _) => CardPhase::Entering,
                (false, CardPhase::Shown | CardPhase::Entering) => CardPhase::Leaving,
                (false, phase) => phase,
            };
        }
        self.active = category;
        self.generation += 1;
    }

    /// Starts the fade-in of cards that re-entered layout. Returns whether any
    /// card moved.
    pub fn enter(&mut self) -> bool {
        let mut moved = false;
        for phase in self.phases.iter_mut().filter(|phase| **phase == CardPhase::Entering) {
            *phase = CardPhase::Shown;
            moved = true;
        }
        moved
    }

    /// Drops faded-out cards from layout. Returns whether any card moved.
    pub fn settle(&mut self) -> bool {
        let mut moved = false;
        for phase in self.phases.iter_mut().filter(|phase| **phase == CardPhase::Leaving) {
            *phase = CardPhase::Hidden;
            moved = true;
        }
        moved
    }
}

/// Inline style for a card in `phase` at list position `index`.
pub fn card_style(phase: CardPhase, index: usize) -> String {
    match phase {
        CardPhase::Shown => format!(
            "display: flex; opacity: 1; transform: translateY(0); {TRANSITION} transition-delay: {}ms;",
            index as u32 * FILTER_STAGGER_MS
        ),
        CardPhase::Entering | CardPhase::Leaving => {
            format!("display: flex; opacity: 0; transform: translateY(20px); {TRANSITION} transition-delay: 0ms;")
        }
        CardPhase::Hidden => "display: none; opacity: 0; transform: translateY(20px);".to_string(),
    }
}
